//! Scan orchestration
//!
//! Validates a `ScanJob`, runs the traversal, and hands the results to the
//! writer. `Lister` owns the reusable result list; `spawn_scan` runs a job
//! off the calling thread and reports back through a `ScanHandle`.

mod background;
mod job;
mod lister;

pub use background::{ScanHandle, spawn_scan};
pub use job::ScanJob;
pub use lister::{Lister, ScanSummary, run_scan};
