// src/export/model.rs

use crate::models::aggregate::AggregateRecord;
use serde::Serialize;

/// Flat attendance row for export.
#[derive(Serialize, Clone, Debug)]
pub struct AttendanceExport {
    #[serde(rename = "Hub")]
    pub hub: String,
    #[serde(rename = "Worker")]
    pub worker: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "CheckIn")]
    pub check_in: String,
    #[serde(rename = "CheckOut")]
    pub check_out: String,
    #[serde(rename = "WorkingTime")]
    pub working_time: String,
}

impl AttendanceExport {
    pub fn from_record(rec: &AggregateRecord) -> Self {
        Self {
            hub: rec.hub.clone(),
            worker: rec.worker.clone(),
            date: rec.date.clone(),
            check_in: rec.check_in_display(),
            check_out: rec.check_out_display(),
            working_time: rec.work_time(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Hub", "Worker", "Date", "CheckIn", "CheckOut", "WorkingTime"]
}

pub(crate) fn record_to_row(e: &AttendanceExport) -> Vec<String> {
    vec![
        e.hub.clone(),
        e.worker.clone(),
        e.date.clone(),
        e.check_in.clone(),
        e.check_out.clone(),
        e.working_time.clone(),
    ]
}
