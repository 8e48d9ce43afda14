// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use model::AttendanceExport;

use crate::errors::AppResult;
use crate::models::aggregate::AggregateRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

/// Write aggregated attendance records to disk in the requested format.
pub fn write_records(
    records: &[AggregateRecord],
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    let flat: Vec<AttendanceExport> = records.iter().map(AttendanceExport::from_record).collect();

    match format {
        ExportFormat::Csv => json_csv::export_csv(&flat, path),
        ExportFormat::Json => json_csv::export_json(&flat, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(&flat, path),
    }
}
