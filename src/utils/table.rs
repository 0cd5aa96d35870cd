//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
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

    /// Column set sized to fit the headers and every row of `rows`.
    pub fn fitted(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let width = rows
                    .iter()
                    .map(|r| r[i].width())
                    .chain(std::iter::once(h.width()))
                    .max()
                    .unwrap_or(0);
                Column {
                    header: h.to_string(),
                    width,
                }
            })
            .collect();

        Self { columns, rows }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

// format! width counts chars, not terminal cells; pad on display width so
// wide glyphs in task names keep columns aligned.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
