//! Tabular file codec: turns a spreadsheet export (.csv/.xlsx/.xls) into a
//! sequence of generic header->value rows. Nothing downstream reads a file
//! directly; everything consumes `RawRow` through the field resolver.

mod csv;
mod xlsx;

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// A single spreadsheet cell. Numeric cells are kept as numbers because
/// Excel date serials only survive the trip as floats.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Render the cell as display text. Whole numbers drop the `.0`.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
        }
    }
}

/// One row of the uploaded sheet: ordered header -> cell pairs, with the
/// original header spelling preserved.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: Vec<(String, Cell)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, header: impl Into<String>, value: Cell) {
        self.cells.push((header.into(), value));
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(h, _)| h.as_str())
    }

    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, c)| c)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, c)| c.is_empty())
    }
}

/// Read the first sheet of a tabular file into rows, dispatching on the
/// file extension. Blank rows are skipped.
pub fn read_rows(path: &Path) -> AppResult<Vec<RawRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => csv::read(path),
        "xlsx" | "xls" => xlsx::read(path),
        other => Err(AppError::UnsupportedFormat(other.to_string())),
    }
}
