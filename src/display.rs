//! Display utilities for rendering the distribution table.
//!
//! # Items
//!
//! - [`RowView`] - anything that can show a full set of rows
//! - [`deliver`] - apply one delivered load outcome to a view
//! - [`TextTable`] - plain-text table written to any `io::Write`
//! - [`truncate`] - shorten cells with an ellipsis, char-aware
//! - [`count_line`] - row count summary for `db --info`

use std::io::{self, Write};

use tracing::warn;

use crate::error::Result;
use crate::loader::LoadOutcome;
use crate::record::Record;

/// Column headers, in display order
pub const HEADERS: [&str; 4] = ["ID", "Distribution", "Creator", "Year"];

/// Column widths in characters
pub const WIDTHS: [usize; 4] = [4, 26, 24, 4];

/// A surface that shows rows of distributions.
pub trait RowView {
    /// Replace everything currently displayed with `records`.
    fn render_rows(&mut self, records: &[Record]);
}

/// Hand a delivered outcome to `view`. Failures render as an empty table.
pub fn deliver<V: RowView + ?Sized>(outcome: &LoadOutcome, view: &mut V) {
    view.render_rows(outcome.records());
}

/// Truncate a string to a maximum length, adding "..." if truncated.
///
/// Counts chars rather than bytes. For `max_len < 3`, truncates without
/// ellipsis since there's no room for "...".
///
/// # Examples
///
/// ```
/// use linux_distros::display::truncate;
///
/// assert_eq!(truncate("Debian", 10), "Debian");
/// assert_eq!(truncate("Red Hat Enterprise Linux", 10), "Red Hat...");
/// ```
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len < 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

/// Print a simple section header with dashes.
pub fn print_section(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.chars().count().max(30)));
}

/// Summarize a row count. A failed count is never shown as zero.
pub fn count_line(count: &Result<i64>) -> String {
    match count {
        Ok(n) => format!("Stored distributions: {n}"),
        Err(e) => format!("Stored distributions: unknown ({e})"),
    }
}

/// Format one table line from four cells.
fn format_line(cells: [&str; 4]) -> String {
    let [id, title, author, year] = cells;
    format!(
        "{:>w0$}  {:<w1$}  {:<w2$}  {:>w3$}",
        truncate(id, WIDTHS[0]),
        truncate(title, WIDTHS[1]),
        truncate(author, WIDTHS[2]),
        truncate(year, WIDTHS[3]),
        w0 = WIDTHS[0],
        w1 = WIDTHS[1],
        w2 = WIDTHS[2],
        w3 = WIDTHS[3],
    )
    .trim_end()
    .to_string()
}

/// Plain-text table view.
pub struct TextTable<W: Write> {
    out: W,
}

impl<W: Write> TextTable<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_rows(&mut self, records: &[Record]) -> io::Result<()> {
        writeln!(self.out, "{}", format_line(HEADERS))?;
        let rule_len = WIDTHS.iter().sum::<usize>() + 2 * (WIDTHS.len() - 1);
        writeln!(self.out, "{}", "-".repeat(rule_len))?;

        if records.is_empty() {
            writeln!(self.out, "(no distributions)")?;
        }

        for record in records {
            let id = record.id.to_string();
            let year = record.year.to_string();
            writeln!(
                self.out,
                "{}",
                format_line([&id, &record.title, &record.author, &year])
            )?;
        }

        self.out.flush()
    }
}

impl<W: Write> RowView for TextTable<W> {
    fn render_rows(&mut self, records: &[Record]) {
        if let Err(e) = self.write_rows(records) {
            warn!("failed to write table: {e}");
        }
    }
}
