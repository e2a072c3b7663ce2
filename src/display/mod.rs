//! Newest-first rendering of raw log text.
//!
//! Lines are ordered by position only: the last line of the input is the
//! newest. Long logs keep the newest and oldest lines around an ellipsis.

use std::fmt;

/// Logs with more lines than this are windowed.
pub const DISPLAY_LINE_LIMIT: usize = 100;
/// Lines kept from the newest end of a windowed log.
pub const NEWEST_LINES: usize = 50;
/// Lines kept from the oldest end of a windowed log.
pub const OLDEST_LINES: usize = 50;
/// Standalone line inserted where a windowed log drops its middle.
pub const ELLIPSIS: &str = "...";

/// Format a log string for display.
/// - Newest lines appear first
/// - If more than 100 lines, shows: 50 newest + "..." + 50 oldest
pub fn build_log_for_display(raw: Option<&str>) -> String {
    DisplayLog::build(raw).render()
}

/// The lines of a log as they will be shown, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLog<'a> {
    lines: Vec<&'a str>,
    truncated: bool,
    total_lines: usize,
}

impl<'a> DisplayLog<'a> {
    pub fn build(raw: Option<&'a str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        let mut lines = split_lines(raw);

        // drop trailing empty lines left by final newlines
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        lines.reverse();
        let total_lines = lines.len();

        if total_lines > DISPLAY_LINE_LIMIT {
            let mut windowed = Vec::with_capacity(NEWEST_LINES + 1 + OLDEST_LINES);
            windowed.extend_from_slice(&lines[..NEWEST_LINES]);
            windowed.push(ELLIPSIS);
            windowed.extend_from_slice(&lines[total_lines - OLDEST_LINES..]);
            return Self {
                lines: windowed,
                truncated: true,
                total_lines,
            };
        }

        Self {
            lines,
            truncated: false,
            total_lines,
        }
    }

    /// Displayed lines, including the ellipsis when truncated.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Line count of the input after trailing empty lines are dropped.
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Number of input lines hidden behind the ellipsis.
    pub fn omitted_lines(&self) -> usize {
        if self.truncated {
            self.total_lines - NEWEST_LINES - OLDEST_LINES
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DisplayLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Split on `\n`, treating `\r\n` as a single line break.
///
/// A `\r` is only part of a line break when a `\n` follows it, so the final
/// piece keeps any trailing `\r`.
fn split_lines(raw: &str) -> Vec<&str> {
    let pieces: Vec<&str> = raw.split('\n').collect();
    let last = pieces.len() - 1;
    pieces
        .iter()
        .enumerate()
        .map(|(i, &piece)| match piece.strip_suffix('\r') {
            Some(stripped) if i < last => stripped,
            _ => piece,
        })
        .collect()
}
