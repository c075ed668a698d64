//! Bulletin board list markup and document rendering

use crate::scan::ResultList;

/// Prefix for every entry in bulletin mode.
pub const BULLETIN_ITEM: &str = "[*]";
/// First line of a bulletin document.
pub const LIST_OPEN: &str = "[list]";
/// Last line of a bulletin document.
pub const LIST_CLOSE: &str = "[/list]";

/// Line terminator of the output file.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// The lines that end up in the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    lines: Vec<String>,
}

impl OutputDocument {
    /// Take ownership of the results, wrapping them in `[list]`/`[/list]`
    /// when `bulletin` is set.
    pub fn new(list: ResultList, bulletin: bool) -> Self {
        let mut lines = list.into_lines();
        if bulletin {
            lines.insert(0, LIST_OPEN.to_string());
            lines.push(LIST_CLOSE.to_string());
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render as text. Every line, including the last, ends with `LINE_ENDING`.
    pub fn render(&self) -> String {
        let capacity = self
            .lines
            .iter()
            .map(|l| l.len() + LINE_ENDING.len())
            .sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push_str(LINE_ENDING);
        }
        out
    }
}
