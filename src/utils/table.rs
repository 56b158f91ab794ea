//! Table rendering utilities for CLI outputs.
//!
//! Column widths grow to fit the widest cell; ANSI color codes inside cells
//! do not count towards the width.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("static ANSI pattern"));

/// Printable width of `s`, ignoring color escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(ANSI_RE.replace_all(s, "").as_ref())
}

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: visible_width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers.iter().map(|h| Column::new(h)).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    fn cell(out: &mut String, text: &str, width: usize) {
        out.push_str(text);
        out.push_str(&" ".repeat(width.saturating_sub(visible_width(text)) + 2));
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            Self::cell(&mut out, &col.header, col.width);
        }
        out = out.trim_end().to_string();
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 2).sum();
        out.push_str(&"─".repeat(total.saturating_sub(2)));
        out.push('\n');

        for row in &self.rows {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let text = row.get(i).map(String::as_str).unwrap_or("");
                Self::cell(&mut line, text, col.width);
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}
