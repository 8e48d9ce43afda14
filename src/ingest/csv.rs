//! CSV reader: headers from the first record, values kept as text.
//! The temporal normalizer deals with numeric-looking strings later.

use super::{Cell, RawRow};
use crate::errors::{AppError, AppResult};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

pub(super) fn read(path: &Path) -> AppResult<Vec<RawRow>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Ingest(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::Ingest(e.to_string()))?;
        let mut row = RawRow::new();

        for (idx, value) in record.iter().enumerate() {
            let Some(header) = headers.get(idx) else {
                continue;
            };
            let trimmed = value.trim();
            let cell = if trimmed.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(trimmed.to_string())
            };
            row.push(header.clone(), cell);
        }

        if !row.is_blank() {
            rows.push(row);
        }
    }

    Ok(rows)
}
