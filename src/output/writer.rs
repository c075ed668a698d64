//! Persisting an output document

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, ScanError};
use crate::scan::ResultList;

use super::bulletin::{LINE_ENDING, OutputDocument};

/// How the destination file is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and write in place. A failure can leave a partial file.
    #[default]
    Direct,
    /// Write to a temporary file next to the destination, then rename it
    /// over the destination.
    Atomic,
}

/// What was written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub lines: usize,
    pub bytes: u64,
}

/// Write `doc` to `destination`, creating or overwriting it.
pub fn write_document(doc: &OutputDocument, destination: &Path, mode: WriteMode) -> Result<WriteReport> {
    debug!(destination = %destination.display(), ?mode, lines = doc.len(), "writing results");

    let written = match mode {
        WriteMode::Direct => write_direct(doc, destination),
        WriteMode::Atomic => write_atomic(doc, destination),
    };
    let bytes = written.map_err(|source| ScanError::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    info!(destination = %destination.display(), lines = doc.len(), bytes, "results written");
    Ok(WriteReport {
        lines: doc.len(),
        bytes,
    })
}

/// Wrap `list` as requested and write it to `destination`.
pub fn write_results(
    list: ResultList,
    bulletin: bool,
    destination: &Path,
    mode: WriteMode,
) -> Result<WriteReport> {
    let doc = OutputDocument::new(list, bulletin);
    write_document(&doc, destination, mode)
}

fn write_direct(doc: &OutputDocument, destination: &Path) -> io::Result<u64> {
    let mut out = BufWriter::new(File::create(destination)?);
    let bytes = write_lines(doc, &mut out)?;
    out.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    Ok(bytes)
}

fn write_atomic(doc: &OutputDocument, destination: &Path) -> io::Result<u64> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    let bytes = {
        let mut out = BufWriter::new(tmp.as_file_mut());
        let bytes = write_lines(doc, &mut out)?;
        out.flush()?;
        bytes
    };
    tmp.as_file().sync_all()?;
    tmp.persist(destination).map_err(|e| e.error)?;
    Ok(bytes)
}

fn write_lines<W: Write>(doc: &OutputDocument, out: &mut W) -> io::Result<u64> {
    let mut bytes = 0u64;
    for line in doc.lines() {
        out.write_all(line.as_bytes())?;
        out.write_all(LINE_ENDING.as_bytes())?;
        bytes += (line.len() + LINE_ENDING.len()) as u64;
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn list(names: &[&str]) -> ResultList {
        ResultList::from(names.iter().map(|n| n.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");

        let report = write_results(list(&["a.txt", "b.txt"]), false, &dest, WriteMode::Direct).unwrap();
        let content = fs::read_to_string(&dest).unwrap();
        assert_eq!(content, format!("a.txt{0}b.txt{0}", LINE_ENDING));
        assert_eq!(report.lines, 2);
        assert_eq!(report.bytes, content.len() as u64);
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");
        fs::write(&dest, "a much longer previous content that must disappear\n").unwrap();

        write_results(list(&["x"]), false, &dest, WriteMode::Direct).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), format!("x{}", LINE_ENDING));
    }

    #[test]
    fn test_write_bulletin_wrapping() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");

        write_results(list(&["[*]a.txt"]), true, &dest, WriteMode::Direct).unwrap();
        let content = fs::read_to_string(&dest).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, ["[list]", "[*]a.txt", "[/list]"]);
    }

    #[test]
    fn test_atomic_write_replaces_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");
        fs::write(&dest, "old\n").unwrap();

        write_results(list(&["new"]), false, &dest, WriteMode::Atomic).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), format!("new{}", LINE_ENDING));

        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "temporary file should be renamed away");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing").join("out.txt");

        for mode in [WriteMode::Direct, WriteMode::Atomic] {
            let err = write_results(list(&["a"]), false, &dest, mode).unwrap_err();
            match err {
                ScanError::Write { path, .. } => assert_eq!(path, dest),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_write_to_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = write_results(list(&["a"]), false, dir.path(), WriteMode::Direct).unwrap_err();
        assert!(matches!(err, ScanError::Write { .. }));
    }
}
