//! One worker-day row after aggregation: earliest check-in, latest
//! check-out, worked-hours rendering.

use crate::core::temporal::{diff_hours, hours_to_hhmm};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRecord {
    pub hub: String,
    pub worker: String,
    /// Display form of the work date (readable if parsed, raw otherwise).
    pub date: String,
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
}

impl AggregateRecord {
    /// Fractional worked hours, None when either endpoint is missing.
    pub fn worked_hours(&self) -> Option<f64> {
        match (self.check_in, self.check_out) {
            (Some(a), Some(b)) => Some(diff_hours(a, b)),
            _ => None,
        }
    }

    /// `HH:MM` working time, or "NA" when it cannot be computed.
    pub fn work_time(&self) -> String {
        match self.worked_hours() {
            Some(h) => hours_to_hhmm(h),
            None => "NA".to_string(),
        }
    }

    pub fn check_in_display(&self) -> String {
        self.check_in
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    pub fn check_out_display(&self) -> String {
        self.check_out
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    /// Case-insensitive substring match over hub, worker, date and the
    /// time columns, used by the attendance `--filter` option.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.hub.to_lowercase().contains(&q)
            || self.worker.to_lowercase().contains(&q)
            || self.date.to_lowercase().contains(&q)
            || self.check_in_display().contains(&q)
            || self.check_out_display().contains(&q)
    }
}
