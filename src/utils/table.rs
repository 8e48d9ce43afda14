//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths sized to the widest cell, display-width aware.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (i, header) in self.headers.iter().enumerate() {
            out.push_str(&pad(header, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for (i, _) in self.headers.iter().enumerate() {
            out.push_str(&"-".repeat(widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, width) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, *width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(current)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_line_up_on_widest_cell() {
        let mut t = Table::new(vec!["Hub", "Worker"]);
        t.add_row(vec!["Jakkur_mnow".into(), "Amit".into()]);
        t.add_row(vec!["Begur Mnow".into(), "R".into()]);

        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Hub         Worker"));
        assert!(lines[2].starts_with("Jakkur_mnow Amit"));
        assert!(lines[3].starts_with("Begur Mnow  R"));
    }
}
