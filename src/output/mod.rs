//! Result writing and user-facing reporting
//!
//! # Module Structure
//!
//! - `bulletin` - Optional `[list]` markup and rendering of the output document
//! - `writer` - Persisting a document to the destination file
//! - `status` - Completion and failure messages on the console
//! - `json` - JSON summary output

mod bulletin;
mod json;
mod status;
mod writer;

pub use bulletin::{BULLETIN_ITEM, LINE_ENDING, LIST_CLOSE, LIST_OPEN, OutputDocument};
pub use json::print_summary_json;
pub use status::{print_completion, print_failure, write_completion, write_failure};
pub use writer::{WriteMode, WriteReport, write_document, write_results};
