//! Lister - scan, then write

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::output::{OutputDocument, write_document};
use crate::scan::{ResultList, Scanner};

use super::job::ScanJob;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub root: PathBuf,
    pub destination: PathBuf,
    pub bulletin: bool,
    /// Files recorded by the traversal
    pub entries: usize,
    /// Lines in the output file, including `[list]` wrapper lines
    pub lines_written: usize,
    pub bytes_written: u64,
    pub skipped_files: usize,
    pub skipped_dirs: usize,
    pub elapsed_ms: u64,
}

/// Runs scan jobs against one reusable result list.
///
/// `run` takes `&mut self`, so a list is never shared by two scans at once.
#[derive(Debug, Default)]
pub struct Lister {
    list: ResultList,
}

impl Lister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results of the last successful run. Empty after a failure.
    pub fn results(&self) -> &ResultList {
        &self.list
    }

    pub fn run(&mut self, job: &ScanJob) -> Result<ScanSummary> {
        self.list.clear();
        job.validate()?;

        let started = Instant::now();
        let request = &job.request;
        info!(root = %request.root().display(), bulletin = request.bulletin, "scanning");

        let report = Scanner::new(request.clone()).scan_into(&mut self.list)?;
        if report.skipped() > 0 {
            warn!(
                skipped_files = report.skipped_files,
                skipped_dirs = report.skipped_dirs,
                "some entries could not be read and were left out"
            );
        }

        let doc = OutputDocument::new(self.list.clone(), request.bulletin);
        let written = match write_document(&doc, &job.destination, job.write_mode) {
            Ok(w) => w,
            Err(e) => {
                self.list.clear();
                return Err(e);
            }
        };

        Ok(ScanSummary {
            root: request.root.clone(),
            destination: job.destination.clone(),
            bulletin: request.bulletin,
            entries: report.recorded,
            lines_written: written.lines,
            bytes_written: written.bytes,
            skipped_files: report.skipped_files,
            skipped_dirs: report.skipped_dirs,
            elapsed_ms: saturating_millis(started.elapsed()),
        })
    }
}

/// Whole milliseconds in `elapsed`, clamped to `u64::MAX`.
fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Run one job with a fresh `Lister`.
pub fn run_scan(job: &ScanJob) -> Result<ScanSummary> {
    Lister::new().run(job)
}
