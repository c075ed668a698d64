//! JSON output formatting

use std::io;

use crate::run::ScanSummary;

/// Print the scan summary as pretty-printed JSON to stdout.
pub fn print_summary_json(summary: &ScanSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
