//! Aligned text-table rendering for dashboard views.
//!
//! Pure formatting: column widths are recomputed on every call from the
//! headers and rows given, nothing is cached between calls.

use serde::Deserialize;

const DEFAULT_PADDING: usize = 1;
const DEFAULT_COL_SEP: &str = "|";
const DEFAULT_BORDER_CHAR: char = '-';

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableStyle {
    /// Spaces on each side of a cell value.
    pub padding: usize,
    pub col_sep: String,
    pub border_char: char,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            padding: DEFAULT_PADDING,
            col_sep: DEFAULT_COL_SEP.to_string(),
            border_char: DEFAULT_BORDER_CHAR,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    style: TableStyle,
}

impl TableFormatter {
    pub fn new(style: TableStyle) -> Self {
        TableFormatter { style }
    }

    /// Render headers plus rows as an aligned block.
    ///
    /// Each column is as wide as the widest of its header and every cell in
    /// that column. Rows shorter than the header list are padded with empty
    /// cells; an empty row set renders the header and rule lines only.
    pub fn format(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let widths = self.column_widths(headers, rows);

        let mut out = String::new();
        out.push_str(&self.render_rule(&widths));
        out.push('\n');
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        out.push_str(&self.render_row(&header_cells, &widths));
        out.push('\n');
        out.push_str(&self.render_rule(&widths));
        out.push('\n');
        for row in rows {
            out.push_str(&self.render_row(row, &widths));
            out.push('\n');
        }
        out.push_str(&self.render_rule(&widths));
        out
    }

    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i >= widths.len() {
                    break;
                }
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn render_row(&self, cells: &[String], widths: &[usize]) -> String {
        let pad = " ".repeat(self.style.padding);
        let empty = String::new();
        let rendered: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).unwrap_or(&empty);
                let fill = w.saturating_sub(cell.chars().count());
                format!("{}{}{}{}", pad, cell, " ".repeat(fill), pad)
            })
            .collect();
        format!(
            "{sep}{}{sep}",
            rendered.join(&self.style.col_sep),
            sep = self.style.col_sep
        )
    }

    fn render_rule(&self, widths: &[usize]) -> String {
        let total: usize = widths.iter().map(|w| w + self.style.padding * 2).sum::<usize>()
            + self.style.col_sep.chars().count() * (widths.len() + 1);
        self.style
            .border_char
            .to_string()
            .repeat(total.max(widths.len()))
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max && max > 3 {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}
