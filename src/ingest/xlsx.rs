//! Excel reader via calamine. Only the first worksheet is read; the hub
//! platforms put their data there and nothing else matters.

use super::{Cell, RawRow};
use crate::errors::{AppError, AppResult};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

pub(super) fn read(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::Ingest(e.to_string()))?;

    let sheet_names = workbook.sheet_names();
    let Some(sheet_name) = sheet_names.first().cloned() else {
        return Err(AppError::Ingest("workbook has no sheets".to_string()));
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::Ingest(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Ok(Vec::new());
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for data_row in sheet_rows {
        let mut row = RawRow::new();

        for (idx, cell) in data_row.iter().enumerate() {
            let Some(header) = headers.get(idx) else {
                continue;
            };
            row.push(header.clone(), convert(cell));
        }

        if !row.is_blank() {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Numeric cells stay numeric so date serials can be recognized downstream.
fn convert(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(trimmed.to_string())
            }
        }
        other => {
            let text = other.to_string();
            if text.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(text.trim().to_string())
            }
        }
    }
}
