//! CLI entry point for filelister

use std::ffi::OsString;
use std::io::IsTerminal;
use std::process;

use clap::{Parser, ValueEnum};
use filelister::logging::init_tracing;
use filelister::output::{print_completion, print_failure, print_summary_json};
use filelister::{ScanJob, ScanRequest, SiblingOrder, WriteMode, run_scan};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            is_terminal
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filelister")]
#[command(about = "Write the name of every file under a directory to a text file")]
#[command(version)]
struct Args {
    /// Directory to scan
    root: OsString,

    /// File to write the names to (overwritten if it exists)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: OsString,

    /// Format the list as bulletin board code ([list], [*]name, [/list])
    #[arg(short = 'b', long = "bulletin")]
    bulletin: bool,

    /// Sort entries of each directory by name instead of filesystem order
    #[arg(long = "sort")]
    sort: bool,

    /// Do not descend into symlinked directories
    #[arg(long = "no-follow-links")]
    no_follow_links: bool,

    /// Write to a temporary file and rename it over the output file
    #[arg(long = "atomic")]
    atomic: bool,

    /// Print a JSON summary instead of the completion message
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug). FILELISTER_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let request = ScanRequest::new(args.root)
        .with_bulletin(args.bulletin)
        .with_order(if args.sort {
            SiblingOrder::Name
        } else {
            SiblingOrder::Filesystem
        })
        .with_follow_links(!args.no_follow_links);

    let write_mode = if args.atomic {
        WriteMode::Atomic
    } else {
        WriteMode::Direct
    };
    let job = ScanJob::new(request, args.output).with_write_mode(write_mode);

    let summary = match run_scan(&job) {
        Ok(summary) => summary,
        Err(e) => {
            let use_color = should_use_color(args.color, std::io::stderr().is_terminal());
            if print_failure(&e, use_color).is_err() {
                eprintln!("filelister: error: {}", e);
            }
            process::exit(if e.is_config_error() { 2 } else { 1 });
        }
    };

    let reported = if args.json {
        print_summary_json(&summary)
    } else {
        print_completion(&summary, should_use_color(args.color, std::io::stdout().is_terminal()))
    };

    if let Err(e) = reported {
        eprintln!("filelister: error writing output: {}", e);
        process::exit(1);
    }
}
