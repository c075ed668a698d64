//! Accumulated scan results

use std::slice;

/// Ordered list of recorded names, in visitation order.
///
/// The list is passed to the walker as an explicit accumulator. The walker
/// only appends; resetting it between scans is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultList(Vec<String>);

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn push(&mut self, name: String) {
        self.0.push(name);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the list, yielding its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ResultList {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What happened during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Names appended to the result list
    pub recorded: usize,
    /// Entries that could not be read or classified
    pub skipped_files: usize,
    /// Subdirectories whose subtree was left out
    pub skipped_dirs: usize,
}

impl ScanReport {
    pub fn skipped(&self) -> usize {
        self.skipped_files + self.skipped_dirs
    }
}
