//! Attendance aggregation: raw check-in rows collapse to one record per
//! worker per day, keeping the earliest check-in and latest check-out.

use crate::core::fields::{best_field, best_field_text, norm_key};
use crate::core::temporal::{day_key, format_readable, parse_when};
use crate::ingest::RawRow;
use crate::models::aggregate::AggregateRecord;
use std::collections::{HashMap, HashSet};

pub const HUB_KEYS: &[&str] = &["hub name", "hub", "store", "hubcode"];

pub const NAME_KEYS: &[&str] = &[
    "worker name",
    "worker",
    "rider name",
    "rider",
    "name",
    "worker code",
    "worker id",
    "employee",
];

pub const CODE_KEYS: &[&str] = &["worker code", "workerid", "worker id", "code", "id"];

pub const DATE_KEYS: &[&str] = &["work date", "workdate", "date", "shift date"];

pub const IN_KEYS: &[&str] = &[
    "check-in",
    "check in",
    "check-in time",
    "check in time",
    "checkin",
    "checkin time",
    "login",
    "login time",
    "start time",
    "clock in",
    "first check in",
];

pub const OUT_KEYS: &[&str] = &[
    "check-out",
    "check out",
    "check-out time",
    "check out time",
    "checkout",
    "checkout time",
    "logout",
    "logout time",
    "end time",
    "clock out",
    "last check out",
];

/// Collapse raw rows into per-worker-per-day records.
///
/// Rows whose hub is missing or not in `allowed_hubs` are dropped
/// silently, as are rows with no worker name and no identifying code.
/// Output order follows first appearance in the input.
pub fn aggregate(rows: &[RawRow], allowed_hubs: &[String]) -> Vec<AggregateRecord> {
    let allowed: HashSet<String> = allowed_hubs.iter().map(|h| norm_key(h)).collect();

    let mut order: Vec<String> = Vec::new();
    let mut map: HashMap<String, AggregateRecord> = HashMap::new();

    for row in rows {
        let Some(hub) = best_field_text(row, HUB_KEYS) else {
            continue;
        };
        if !allowed.contains(&norm_key(&hub)) {
            continue;
        }

        let identity = match best_field_text(row, NAME_KEYS) {
            Some(name) => name,
            None => match best_field_text(row, CODE_KEYS) {
                Some(code) => code,
                None => continue,
            },
        };

        let date_cell = best_field(row, DATE_KEYS);
        let parsed_date = date_cell.and_then(parse_when);
        let (display_date, date_only) = match parsed_date {
            Some(dt) => (format_readable(dt), day_key(dt)),
            None => {
                // Unparseable dates still group, just on their raw text.
                let raw = date_cell
                    .map(|c| c.as_text().trim().to_string())
                    .unwrap_or_default();
                (raw.clone(), raw)
            }
        };

        let key = format!("{identity}~~{date_only}").to_lowercase();
        let check_in = best_field(row, IN_KEYS).and_then(parse_when);
        let check_out = best_field(row, OUT_KEYS).and_then(parse_when);

        match map.get_mut(&key) {
            None => {
                order.push(key.clone());
                map.insert(
                    key,
                    AggregateRecord {
                        hub,
                        worker: identity,
                        date: display_date,
                        check_in,
                        check_out,
                    },
                );
            }
            Some(rec) => {
                if let Some(new_in) = check_in
                    && rec.check_in.is_none_or(|cur| new_in < cur)
                {
                    rec.check_in = Some(new_in);
                }
                if let Some(new_out) = check_out
                    && rec.check_out.is_none_or(|cur| new_out > cur)
                {
                    rec.check_out = Some(new_out);
                }
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| map.remove(&key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Cell;

    fn hubs() -> Vec<String> {
        vec!["Kalyan Nagar_mnow".into(), "Jakkur_mnow".into()]
    }

    fn row(hub: &str, worker: &str, date: &str, check_in: &str, check_out: &str) -> RawRow {
        let mut r = RawRow::new();
        r.push("Hub Name", Cell::Text(hub.into()));
        r.push("Worker Name", Cell::Text(worker.into()));
        r.push("Work Date", Cell::Text(date.into()));
        r.push("Check-In Time", Cell::Text(check_in.into()));
        r.push("Check-Out Time", Cell::Text(check_out.into()));
        r
    }

    #[test]
    fn single_row_aggregates_to_one_record() {
        let rows = vec![row("Kalyan Nagar_mnow", "Amit", "25-11-2025", "09:00", "17:30")];
        let out = aggregate(&rows, &hubs());

        assert_eq!(out.len(), 1);
        let rec = &out[0];
        assert_eq!(rec.hub, "Kalyan Nagar_mnow");
        assert_eq!(rec.worker, "Amit");
        assert_eq!(rec.date, "25-11-2025");
        assert_eq!(rec.worked_hours(), Some(8.5));
        assert_eq!(rec.work_time(), "08:30");
    }

    #[test]
    fn bare_lowercase_headers_are_enough() {
        let mut r = RawRow::new();
        r.push("hub", Cell::Text("Kalyan Nagar_mnow".into()));
        r.push("name", Cell::Text("Amit".into()));
        r.push("date", Cell::Text("25-11-2025".into()));
        r.push("checkin", Cell::Text("09:00".into()));
        r.push("checkout", Cell::Text("17:30".into()));

        let out = aggregate(&[r], &hubs());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].worker, "Amit");
        assert_eq!(out[0].worked_hours(), Some(8.5));
        assert_eq!(out[0].work_time(), "08:30");
    }

    #[test]
    fn duplicates_keep_min_in_and_max_out() {
        let rows = vec![
            row("Jakkur_mnow", "Ravi", "25-11-2025", "10:00", "14:00"),
            row("Jakkur_mnow", "Ravi", "25-11-2025", "08:30", "12:00"),
            row("Jakkur_mnow", "Ravi", "25-11-2025", "11:00", "18:45"),
        ];
        let out = aggregate(&rows, &hubs());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].check_in_display(), "08:30:00");
        assert_eq!(out[0].check_out_display(), "18:45:00");
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut rows = vec![
            row("Jakkur_mnow", "Ravi", "25-11-2025", "09:00", "17:00"),
            row("Jakkur_mnow", "Ravi", "25-11-2025", "08:00", "18:00"),
            row("Kalyan Nagar_mnow", "Amit", "25-11-2025", "10:00", "19:00"),
        ];
        let forward = aggregate(&rows, &hubs());
        rows.reverse();
        let backward = aggregate(&rows, &hubs());

        let key = |r: &AggregateRecord| (r.worker.clone(), r.date.clone());
        let mut f: Vec<_> = forward.iter().map(|r| (key(r), r.check_in, r.check_out)).collect();
        let mut b: Vec<_> = backward.iter().map(|r| (key(r), r.check_in, r.check_out)).collect();
        f.sort();
        b.sort();
        assert_eq!(f, b);
    }

    #[test]
    fn split_endpoint_rows_merge_the_same_either_way() {
        let only_in = row("Jakkur_mnow", "Ravi", "25-11-2025", "09:00", "");
        let only_out = row("Jakkur_mnow", "Ravi", "25-11-2025", "", "17:30");

        let forward = aggregate(&[only_in.clone(), only_out.clone()], &hubs());
        let backward = aggregate(&[only_out, only_in], &hubs());

        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0], backward[0]);
        assert_eq!(forward[0].worked_hours(), Some(8.5));
    }

    #[test]
    fn disallowed_hubs_are_dropped() {
        let rows = vec![
            row("Somewhere Else", "Amit", "25-11-2025", "09:00", "17:00"),
            row("Jakkur_mnow", "Ravi", "25-11-2025", "09:00", "17:00"),
        ];
        let out = aggregate(&rows, &hubs());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].worker, "Ravi");
    }

    #[test]
    fn hub_match_tolerates_case_and_separators() {
        let rows = vec![row("kalyan nagar mnow", "Amit", "25-11-2025", "09:00", "17:00")];
        assert_eq!(aggregate(&rows, &hubs()).len(), 1);
    }

    #[test]
    fn worker_code_is_identity_fallback() {
        let mut r = RawRow::new();
        r.push("Hub", Cell::Text("Jakkur_mnow".into()));
        r.push("Worker Code", Cell::Text("WK-042".into()));
        r.push("Date", Cell::Text("25-11-2025".into()));
        r.push("Check In", Cell::Text("09:00".into()));
        r.push("Check Out", Cell::Text("17:00".into()));

        let out = aggregate(&[r], &hubs());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].worker, "WK-042");
    }

    #[test]
    fn rows_without_identity_are_dropped() {
        let mut r = RawRow::new();
        r.push("Hub", Cell::Text("Jakkur_mnow".into()));
        r.push("Date", Cell::Text("25-11-2025".into()));
        assert!(aggregate(&[r], &hubs()).is_empty());
    }

    #[test]
    fn unparseable_dates_group_on_raw_text() {
        let rows = vec![
            row("Jakkur_mnow", "Ravi", "week 48", "09:00", "12:00"),
            row("Jakkur_mnow", "Ravi", "week 48", "08:00", "17:00"),
        ];
        let out = aggregate(&rows, &hubs());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, "week 48");
        assert_eq!(out[0].check_in_display(), "08:00:00");
    }

    #[test]
    fn same_worker_different_days_stay_separate() {
        let rows = vec![
            row("Jakkur_mnow", "Ravi", "25-11-2025", "09:00", "17:00"),
            row("Jakkur_mnow", "Ravi", "26-11-2025", "09:00", "17:00"),
        ];
        assert_eq!(aggregate(&rows, &hubs()).len(), 2);
    }
}
