//! Scan job description and validation

use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};
use crate::output::WriteMode;
use crate::scan::ScanRequest;

/// Everything needed for one scan-and-write run.
#[derive(Debug, Clone)]
pub struct ScanJob {
    pub request: ScanRequest,
    pub destination: PathBuf,
    pub write_mode: WriteMode,
}

impl ScanJob {
    pub fn new(request: ScanRequest, destination: impl Into<PathBuf>) -> Self {
        Self {
            request,
            destination: destination.into(),
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Reject jobs with a blank root or destination. Does not touch the filesystem.
    pub fn validate(&self) -> Result<()> {
        if is_blank(self.request.root()) {
            return Err(ScanError::MissingRoot);
        }
        if is_blank(&self.destination) {
            return Err(ScanError::MissingDestination);
        }
        Ok(())
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_job() {
        let job = ScanJob::new(ScanRequest::new("/does/not/matter"), "out.txt");
        assert!(job.validate().is_ok());
        assert_eq!(job.write_mode, WriteMode::Direct);
    }

    #[test]
    fn test_blank_root_rejected() {
        for root in ["", "   ", "\t\n"] {
            let job = ScanJob::new(ScanRequest::new(root), "out.txt");
            assert!(matches!(job.validate(), Err(ScanError::MissingRoot)));
        }
    }

    #[test]
    fn test_blank_destination_rejected() {
        let job = ScanJob::new(ScanRequest::new("."), " ");
        assert!(matches!(job.validate(), Err(ScanError::MissingDestination)));
    }

    #[test]
    fn test_root_checked_before_destination() {
        let job = ScanJob::new(ScanRequest::new(""), "");
        assert!(matches!(job.validate(), Err(ScanError::MissingRoot)));
    }
}
