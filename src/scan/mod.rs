//! Recursive directory scanning
//!
//! This module walks a directory tree depth-first and records the base name of
//! every file it can reach:
//!
//! - `Scanner`: the traversal engine, appending into an explicit `ResultList`
//! - `ScanRequest`: immutable input describing one scan
//! - `ScanReport`: how many entries were recorded and how many were skipped
//!
//! Within a directory, all direct files are recorded before any subdirectory
//! is descended into. Failures below the root never abort the scan.

mod config;
mod results;
mod utils;
mod walker;

pub use config::{ScanRequest, SiblingOrder};
pub use results::{ResultList, ScanReport};
pub use utils::{EntryKind, classify_entry, record_name};
pub use walker::Scanner;
