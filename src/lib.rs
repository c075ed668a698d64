//! Filelister - list every file under a directory into a text file

pub mod error;
pub mod logging;
pub mod output;
pub mod run;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, ScanError};
pub use output::{OutputDocument, WriteMode, WriteReport, write_document, write_results};
pub use run::{Lister, ScanHandle, ScanJob, ScanSummary, run_scan, spawn_scan};
pub use scan::{ResultList, ScanReport, ScanRequest, Scanner, SiblingOrder};
