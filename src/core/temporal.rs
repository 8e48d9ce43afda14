//! Timestamp normalization across the formats seen in the uploads:
//! Excel date serials, day-first locale strings, dotted time separators
//! and bare times, all reduced to a timezone-free `NaiveDateTime`.
//!
//! Time-only values are anchored at 1970-01-01 so that two of them can be
//! subtracted without a date ever entering the picture.

use crate::ingest::Cell;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

const SECS_PER_DAY: f64 = 86_400.0;

/// Anchor date for time-only values.
fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

/// Excel day 0 (the 1899-12-30 convention, leap-year bug included).
fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn time_dot_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.(\d{1,2})\b").unwrap())
}

fn dayfirst_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})").unwrap())
}

fn time_only_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d{1,2}):(\d{2})(?::(\d{2}))?\s*(am|pm)?").unwrap())
}

/// Interpret a spreadsheet date serial.
///
/// Serials with |value| < 1 are pure time-of-day fractions and get anchored
/// at the reference day; anything else counts whole days from the Excel
/// epoch plus the fractional day as seconds.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }

    if serial.abs() < 1.0 {
        let secs = (serial * SECS_PER_DAY).round() as i64;
        return reference_day()
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(Duration::seconds(secs));
    }

    let days = serial.floor();
    let frac_secs = ((serial - days) * SECS_PER_DAY).round() as i64;
    excel_epoch()
        .checked_add_signed(Duration::days(days as i64))?
        .checked_add_signed(Duration::seconds(frac_secs))
}

/// Convert a raw cell to an instant, or None if nothing parses.
///
/// Tried in order: numeric (Excel serial), generic date-time text after
/// normalization, bare time-of-day. First success wins.
pub fn parse_when(value: &Cell) -> Option<NaiveDateTime> {
    match value {
        Cell::Empty => None,
        Cell::Number(n) => excel_serial_to_datetime(*n),
        Cell::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            // Numeric-looking strings are serials first.
            if let Ok(n) = trimmed.parse::<f64>()
                && let Some(dt) = excel_serial_to_datetime(n)
            {
                return Some(dt);
            }
            parse_text(trimmed)
        }
    }
}

fn parse_text(input: &str) -> Option<NaiveDateTime> {
    // "15.09" -> "15:09" (dot used as time separator).
    let v = time_dot_re().replace_all(input, ":$1").into_owned();

    // "25-11-2025" / "25/11/25" -> "2025-11-25" before generic parsing.
    let v = dayfirst_re()
        .replace(&v, |caps: &regex::Captures| {
            let d = &caps[1];
            let m = &caps[2];
            let mut y = caps[3].to_string();
            if y.len() == 2 {
                y = format!("20{y}");
            }
            format!("{y}-{m:0>2}-{d:0>2}")
        })
        .into_owned();

    // Every slash or dash date arrives here already rewritten to Y-M-D.
    const DT_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in DT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&v, fmt) {
            return Some(dt);
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(&v, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    parse_time_only(&v)
}

/// "H:MM", "H:MM:SS", "3:05 PM" anywhere in the string, anchored at the
/// reference day with 12-hour conversion applied.
fn parse_time_only(v: &str) -> Option<NaiveDateTime> {
    let caps = time_only_re().captures(v)?;

    let mut hh: u32 = caps[1].parse().ok()?;
    let mm: u32 = caps[2].parse().ok()?;
    let ss: u32 = caps.get(3).map_or(0, |m| m.as_str().parse().unwrap_or(0));

    if let Some(ampm) = caps.get(4) {
        match ampm.as_str().to_ascii_lowercase().as_str() {
            "pm" if hh < 12 => hh += 12,
            "am" if hh == 12 => hh = 0,
            _ => {}
        }
    }

    reference_day().and_hms_opt(hh, mm, ss)
}

/// Fractional hours between two instants. A negative span gets 24 hours
/// added: overnight shifts check out "before" they check in, and bad-data
/// inversions are deliberately absorbed the same way.
pub fn diff_hours(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    let mut secs = (b - a).num_seconds() as f64;
    if secs < 0.0 {
        secs += 24.0 * 3600.0;
    }
    secs / 3600.0
}

/// Render fractional hours as zero-padded `HH:MM` (rounded to the minute).
pub fn hours_to_hhmm(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Render `DD-MM-YYYY`, appending ` HH:MM:SS` only when the time-of-day
/// is not midnight.
pub fn format_readable(dt: NaiveDateTime) -> String {
    if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 {
        dt.format("%d-%m-%Y").to_string()
    } else {
        dt.format("%d-%m-%Y %H:%M:%S").to_string()
    }
}

/// The day-only `DD-MM-YYYY` form used for grouping keys.
pub fn day_key(dt: NaiveDateTime) -> String {
    dt.format("%d-%m-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn text(s: &str) -> Cell {
        Cell::Text(s.into())
    }

    #[test]
    fn serial_with_half_day_fraction_lands_at_noon() {
        let dt = parse_when(&Cell::Number(45600.5)).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 11, 4).unwrap());
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 0, 0));
    }

    #[test]
    fn pure_time_fraction_anchors_at_reference_day() {
        let dt = parse_when(&Cell::Number(0.5)).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!((dt.hour(), dt.minute()), (12, 0));
    }

    #[test]
    fn numeric_string_is_treated_as_serial() {
        let dt = parse_when(&text("0.25")).unwrap();
        assert_eq!((dt.hour(), dt.minute()), (6, 0));
    }

    #[test]
    fn dayfirst_with_dotted_time_parses() {
        let dt = parse_when(&text("25-11-2025 15.09")).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 11, 25).unwrap());
        assert_eq!((dt.hour(), dt.minute()), (15, 9));
    }

    #[test]
    fn two_digit_years_are_twothousands() {
        let dt = parse_when(&text("5/3/25")).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
    }

    #[test]
    fn slash_dates_are_day_first() {
        let dt = parse_when(&text("3/5/2025")).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 5, 3).unwrap());
    }

    #[test]
    fn iso_datetime_passes_through_untouched() {
        let dt = parse_when(&text("2025-11-25 15:09:22")).unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (15, 9, 22));
    }

    #[test]
    fn bare_time_and_am_pm_rules() {
        let dt = parse_when(&text("15:09")).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!((dt.hour(), dt.minute()), (15, 9));

        let pm = parse_when(&text("3:05 PM")).unwrap();
        assert_eq!((pm.hour(), pm.minute()), (15, 5));

        let noon = parse_when(&text("12:30 pm")).unwrap();
        assert_eq!(noon.hour(), 12);

        let midnight = parse_when(&text("12:10 AM")).unwrap();
        assert_eq!(midnight.hour(), 0);
    }

    #[test]
    fn empty_and_garbage_return_none() {
        assert!(parse_when(&text("   ")).is_none());
        assert!(parse_when(&text("not a date")).is_none());
        assert!(parse_when(&Cell::Empty).is_none());
    }

    #[test]
    fn overnight_duration_wraps_forward() {
        let day = reference_day();
        let check_in = day.and_hms_opt(22, 0, 0).unwrap();
        let check_out = day.and_hms_opt(6, 0, 0).unwrap();
        assert_eq!(diff_hours(check_in, check_out), 8.0);
    }

    #[test]
    fn same_day_duration_is_plain_subtraction() {
        let day = reference_day();
        let a = day.and_hms_opt(9, 0, 0).unwrap();
        let b = day.and_hms_opt(17, 30, 0).unwrap();
        assert_eq!(diff_hours(a, b), 8.5);
    }

    #[test]
    fn hhmm_rendering_is_zero_padded() {
        assert_eq!(hours_to_hhmm(8.5), "08:30");
        assert_eq!(hours_to_hhmm(0.0), "00:00");
        assert_eq!(hours_to_hhmm(10.999), "11:00");
    }

    #[test]
    fn readable_date_hides_midnight() {
        let d = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        assert_eq!(format_readable(d.and_hms_opt(0, 0, 0).unwrap()), "25-11-2025");
        assert_eq!(
            format_readable(d.and_hms_opt(15, 9, 0).unwrap()),
            "25-11-2025 15:09:00"
        );
    }
}
