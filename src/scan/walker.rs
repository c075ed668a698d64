//! Scanner - depth-first traversal that records file names

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScanError};

use super::config::ScanRequest;
use super::results::{ResultList, ScanReport};
use super::utils::{EntryKind, classify_entry, order_siblings, record_name};

/// Direct children of one directory, split by kind.
#[derive(Debug, Default)]
struct DirListing {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

/// Traversal engine for one `ScanRequest`.
///
/// Files of a directory are recorded before its subdirectories are visited.
/// Only a failure to list the root is fatal; everything below the root that
/// cannot be read is counted in the `ScanReport` and left out.
pub struct Scanner {
    request: ScanRequest,
}

impl Scanner {
    pub fn new(request: ScanRequest) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &ScanRequest {
        &self.request
    }

    /// Scan into a fresh result list.
    pub fn scan(&self) -> Result<(ResultList, ScanReport)> {
        let mut list = ResultList::new();
        let report = self.scan_into(&mut list)?;
        Ok((list, report))
    }

    /// Scan, appending names to `list`. Existing entries are kept.
    pub fn scan_into(&self, list: &mut ResultList) -> Result<ScanReport> {
        let root = self.request.root();
        debug!(root = %root.display(), "starting scan");

        let mut report = ScanReport::default();
        let listing = self
            .read_listing(root, &mut report)
            .map_err(|source| ScanError::RootTraversal {
                path: root.to_path_buf(),
                source,
            })?;
        self.visit(listing, list, &mut report);

        debug!(
            recorded = report.recorded,
            skipped_files = report.skipped_files,
            skipped_dirs = report.skipped_dirs,
            "scan finished"
        );
        Ok(report)
    }

    fn walk_dir(&self, path: &Path, list: &mut ResultList, report: &mut ScanReport) {
        match self.read_listing(path, report) {
            Ok(listing) => self.visit(listing, list, report),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable directory");
                report.skipped_dirs += 1;
            }
        }
    }

    fn visit(&self, listing: DirListing, list: &mut ResultList, report: &mut ScanReport) {
        for file in &listing.files {
            list.push(record_name(file, self.request.bulletin));
            report.recorded += 1;
        }

        for dir in &listing.dirs {
            self.walk_dir(dir, list, report);
        }
    }

    /// List one directory. Only the `read_dir` call itself can fail; a bad
    /// entry is skipped and counted.
    fn read_listing(&self, path: &Path, report: &mut ScanReport) -> io::Result<DirListing> {
        let mut listing = DirListing::default();

        for entry in fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!(dir = %path.display(), error = %e, "skipping unreadable entry");
                    report.skipped_files += 1;
                    continue;
                }
            };

            match classify_entry(&entry, self.request.follow_links) {
                Ok(EntryKind::File) => listing.files.push(entry.path()),
                Ok(EntryKind::Directory) => listing.dirs.push(entry.path()),
                Ok(EntryKind::Skip) => {
                    debug!(path = %entry.path().display(), "not following symlinked directory");
                    report.skipped_dirs += 1;
                }
                Err(e) => {
                    debug!(path = %entry.path().display(), error = %e, "skipping entry of unknown type");
                    report.skipped_files += 1;
                }
            }
        }

        order_siblings(&mut listing.files, self.request.order);
        order_siblings(&mut listing.dirs, self.request.order);
        Ok(listing)
    }
}
