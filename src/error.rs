//! Fatal error types for a scan
//!
//! Only errors that abort a scan live here. Per-entry failures during
//! traversal are absorbed by the walker and only show up as skip counts.

use std::io;
use std::path::PathBuf;

/// A fatal error that aborts the current scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// No root directory was supplied.
    #[error("no folder selected: a root directory to scan is required")]
    MissingRoot,

    /// No destination file was supplied.
    #[error("no output file selected: a destination path is required")]
    MissingDestination,

    /// The traversal root itself could not be listed.
    #[error("cannot scan '{}': {}", path.display(), source)]
    RootTraversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("cannot write '{}': {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The background scan thread panicked before reporting a result.
    #[error("scan worker terminated unexpectedly")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    /// Configuration errors are detected before the scan touches the filesystem.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingRoot | Self::MissingDestination)
    }

    /// Diagnostic detail shown next to the message, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::RootTraversal { source, .. } | Self::Write { source, .. } => {
                Some(format!("{:?}: {}", source.kind(), source))
            }
            _ => None,
        }
    }
}
