//! Configuration types for a scan

use std::path::{Path, PathBuf};

/// Order in which the entries of one directory are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SiblingOrder {
    /// Keep whatever order the filesystem returns entries in.
    #[default]
    Filesystem,
    /// Sort direct files and direct subdirectories by name.
    Name,
}

/// Immutable input to one scan.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub root: PathBuf,
    /// Prefix every recorded name with `[*]`
    pub bulletin: bool,
    pub order: SiblingOrder,
    /// Descend into symlinked directories. There is no cycle detection; a
    /// link loop ends when the OS refuses to resolve the path.
    pub follow_links: bool,
}

impl ScanRequest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            bulletin: false,
            order: SiblingOrder::default(),
            follow_links: true,
        }
    }

    pub fn with_bulletin(mut self, bulletin: bool) -> Self {
        self.bulletin = bulletin;
        self
    }

    pub fn with_order(mut self, order: SiblingOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
