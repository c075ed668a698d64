//! Shared helpers for the scanner

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use crate::output::BULLETIN_ITEM;

use super::config::SiblingOrder;

/// How the walker treats one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// A symlinked directory that is not followed
    Skip,
}

/// Classify a directory entry.
///
/// Symlinks are judged by their target. A dangling link still names
/// something in the directory, so it counts as a file. When following links,
/// a target that exists but cannot be resolved (a link loop, a denied
/// lookup) is handed to the walker as a directory, whose failed listing is
/// then counted as a skipped subtree.
pub fn classify_entry(entry: &DirEntry, follow_links: bool) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;

    if file_type.is_dir() {
        return Ok(EntryKind::Directory);
    }

    if file_type.is_symlink() {
        return Ok(match fs::metadata(entry.path()) {
            Ok(target) if target.is_dir() => {
                if follow_links {
                    EntryKind::Directory
                } else {
                    EntryKind::Skip
                }
            }
            Ok(_) => EntryKind::File,
            Err(e) if e.kind() == io::ErrorKind::NotFound => EntryKind::File,
            Err(_) if follow_links => EntryKind::Directory,
            Err(_) => EntryKind::File,
        });
    }

    Ok(EntryKind::File)
}

/// Build the line recorded for a file: its base name, `[*]`-prefixed in
/// bulletin mode.
pub fn record_name(path: &Path, bulletin: bool) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    if bulletin {
        format!("{}{}", BULLETIN_ITEM, name)
    } else {
        name
    }
}

/// Apply the sibling order to a batch of paths from one directory.
pub fn order_siblings(paths: &mut [PathBuf], order: SiblingOrder) {
    if order == SiblingOrder::Name {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
}
