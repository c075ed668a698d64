//! Running a scan off the calling thread

use std::thread::{self, JoinHandle};

use tracing::error;

use crate::error::{Result, ScanError};

use super::job::ScanJob;
use super::lister::{ScanSummary, run_scan};

/// Completion handle for a scan running on its own thread.
pub struct ScanHandle {
    handle: JoinHandle<Result<ScanSummary>>,
}

impl ScanHandle {
    /// Whether the scan has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the scan finishes and return its outcome.
    pub fn wait(self) -> Result<ScanSummary> {
        self.handle.join().unwrap_or_else(|_| {
            error!("scan worker panicked");
            Err(ScanError::WorkerPanicked)
        })
    }
}

/// Start `job` on a dedicated thread. The scan itself stays sequential.
pub fn spawn_scan(job: ScanJob) -> ScanHandle {
    ScanHandle {
        handle: thread::spawn(move || run_scan(&job)),
    }
}
