//! Completion and failure messages

use std::io;
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::ScanError;
use crate::run::ScanSummary;

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print the "scan complete" message to stdout.
pub fn print_completion(summary: &ScanSummary, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    write_completion(&mut stdout, summary)
}

/// Print a fatal error with its diagnostic detail to stderr.
pub fn print_failure(err: &ScanError, use_color: bool) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    write_failure(&mut stderr, err)
}

pub fn write_completion<W: WriteColor>(out: &mut W, summary: &ScanSummary) -> io::Result<()> {
    let mut green = ColorSpec::new();
    green.set_fg(Some(Color::Green)).set_bold(true);

    out.set_color(&green)?;
    write!(out, "Scan complete")?;
    out.reset()?;

    let elapsed = Duration::from_millis(summary.elapsed_ms);
    writeln!(
        out,
        ": {} {} written to {} ({})",
        summary.entries,
        if summary.entries == 1 { "entry" } else { "entries" },
        summary.destination.display(),
        humantime::format_duration(elapsed)
    )?;

    let skipped = summary.skipped_files + summary.skipped_dirs;
    if skipped > 0 {
        let mut yellow = ColorSpec::new();
        yellow.set_fg(Some(Color::Yellow));
        out.set_color(&yellow)?;
        writeln!(
            out,
            "  skipped {} unreadable {} and {} {}",
            summary.skipped_files,
            if summary.skipped_files == 1 { "entry" } else { "entries" },
            summary.skipped_dirs,
            if summary.skipped_dirs == 1 { "directory" } else { "directories" },
        )?;
        out.reset()?;
    }

    Ok(())
}

pub fn write_failure<W: WriteColor>(out: &mut W, err: &ScanError) -> io::Result<()> {
    let mut red = ColorSpec::new();
    red.set_fg(Some(Color::Red)).set_bold(true);

    write!(out, "filelister: ")?;
    out.set_color(&red)?;
    write!(out, "error")?;
    out.reset()?;
    writeln!(out, ": {}", err)?;

    if let Some(detail) = err.detail() {
        writeln!(out, "  caused by: {}", detail)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use termcolor::NoColor;

    fn summary(entries: usize, skipped_dirs: usize) -> ScanSummary {
        ScanSummary {
            root: PathBuf::from("root"),
            destination: PathBuf::from("out.txt"),
            bulletin: false,
            entries,
            lines_written: entries,
            bytes_written: 0,
            skipped_files: 0,
            skipped_dirs,
            elapsed_ms: 1500,
        }
    }

    fn render<F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>>(f: F) -> String {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_completion_message() {
        let text = render(|out| write_completion(out, &summary(3, 0)));
        assert_eq!(text, "Scan complete: 3 entries written to out.txt (1s 500ms)\n");
    }

    #[test]
    fn test_completion_mentions_skips() {
        let text = render(|out| write_completion(out, &summary(1, 2)));
        assert!(text.contains("1 entry written"), "{}", text);
        assert!(text.contains("0 unreadable entries and 2 directories"), "{}", text);
    }

    #[test]
    fn test_failure_message_with_detail() {
        let err = ScanError::RootTraversal {
            path: PathBuf::from("gone"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such dir"),
        };
        let text = render(|out| write_failure(out, &err));
        assert!(text.starts_with("filelister: error: cannot scan 'gone'"), "{}", text);
        assert!(text.contains("caused by: NotFound: no such dir"), "{}", text);
    }

    #[test]
    fn test_failure_message_without_detail() {
        let text = render(|out| write_failure(out, &ScanError::MissingDestination));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("no output file selected"));
    }
}
