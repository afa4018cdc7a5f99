//! Table rendering utilities for CLI outputs.

use super::formatting::{display_width, pad_right, truncate};
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

/// Remove ANSI escape sequences.
pub fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Cells may contain ANSI colors; width is computed on the visible text.
    /// Plain cells wider than their column are truncated.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push_str("  ");
        }
        out = out.trim_end().to_string();
        out.push('\n');

        let rule_width: usize = self.columns.iter().map(|c| c.width + 2).sum();
        out.push_str(&"─".repeat(rule_width.saturating_sub(2)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let visible = strip_ansi(cell);

                let rendered = if visible == cell && display_width(cell) > col.width {
                    truncate(cell, col.width)
                } else {
                    cell.to_string()
                };

                let pad = col.width.saturating_sub(display_width(&strip_ansi(&rendered)));
                line.push_str(&rendered);
                line.push_str(&" ".repeat(pad));
                line.push_str("  ");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_cells_are_aligned_on_visible_width() {
        let mut t = Table::new(vec![Column::new("a", 5), Column::new("b", 3)]);
        t.add_row(vec!["\x1b[32mok\x1b[0m".into(), "x".into()]);
        let out = t.render();
        let last = out.lines().last().unwrap();
        assert_eq!(strip_ansi(last), "ok     x");
    }

    #[test]
    fn long_plain_cells_are_truncated() {
        let mut t = Table::new(vec![Column::new("text", 8)]);
        t.add_row(vec!["Crypto crash incoming".into()]);
        let out = t.render();
        let last = out.lines().last().unwrap();
        assert!(display_width(last) <= 8);
        assert!(last.ends_with('…'));
    }
}
