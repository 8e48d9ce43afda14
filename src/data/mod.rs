//! Planning data baked in from the projection sheet: daily per-store
//! volumes and the cumulative hour-of-day percentage table.

use crate::models::projection::{HourFractionRow, ProjectionEntry};
use chrono::{NaiveDate, Weekday};

macro_rules! entry {
    ($day:literal, $date:literal, $total:literal, [$(($store:literal, $vol:literal)),+ $(,)?]) => {
        ProjectionEntry {
            day: $day,
            date: $date,
            stores: &[$(($store, $vol)),+],
            total: $total,
        }
    };
}

/// Daily projected volumes, ascending by date.
pub static PROJECTIONS: &[ProjectionEntry] = &[
    entry!("Wednesday", "10/1/2025", 6702, [
        ("Kalyan Nagar_mnow", 720),
        ("Basaveshwar Nagar_mnow", 644),
        ("Jakkur_mnow", 573),
        ("Begur_mnow", 1090),
        ("Thyagaraja Nagar_mnow", 539),
        ("Brookfield_mnow", 1440),
        ("JP nagar_mnow", 770),
        ("Sarjapur Road_mnow", 926),
    ]),
    entry!("Thursday", "10/2/2025", 7680, [
        ("Kalyan Nagar_mnow", 825),
        ("Basaveshwar Nagar_mnow", 738),
        ("Jakkur_mnow", 657),
        ("Begur_mnow", 1249),
        ("Thyagaraja Nagar_mnow", 617),
        ("Brookfield_mnow", 1650),
        ("JP nagar_mnow", 882),
        ("Sarjapur Road_mnow", 1062),
    ]),
    entry!("Friday", "10/3/2025", 5688, [
        ("Kalyan Nagar_mnow", 611),
        ("Basaveshwar Nagar_mnow", 547),
        ("Jakkur_mnow", 486),
        ("Begur_mnow", 925),
        ("Thyagaraja Nagar_mnow", 457),
        ("Brookfield_mnow", 1222),
        ("JP nagar_mnow", 654),
        ("Sarjapur Road_mnow", 786),
    ]),
    entry!("Saturday", "10/4/2025", 5284, [
        ("Kalyan Nagar_mnow", 568),
        ("Basaveshwar Nagar_mnow", 508),
        ("Jakkur_mnow", 452),
        ("Begur_mnow", 860),
        ("Thyagaraja Nagar_mnow", 424),
        ("Brookfield_mnow", 1135),
        ("JP nagar_mnow", 607),
        ("Sarjapur Road_mnow", 731),
    ]),
    entry!("Sunday", "10/5/2025", 5362, [
        ("Kalyan Nagar_mnow", 576),
        ("Basaveshwar Nagar_mnow", 516),
        ("Jakkur_mnow", 459),
        ("Begur_mnow", 872),
        ("Thyagaraja Nagar_mnow", 431),
        ("Brookfield_mnow", 1152),
        ("JP nagar_mnow", 616),
        ("Sarjapur Road_mnow", 741),
    ]),
    entry!("Monday", "10/6/2025", 2803, [
        ("Kalyan Nagar_mnow", 301),
        ("Basaveshwar Nagar_mnow", 269),
        ("Jakkur_mnow", 240),
        ("Begur_mnow", 456),
        ("Thyagaraja Nagar_mnow", 225),
        ("Brookfield_mnow", 602),
        ("JP nagar_mnow", 322),
        ("Sarjapur Road_mnow", 388),
    ]),
    entry!("Tuesday", "10/7/2025", 3951, [
        ("Kalyan Nagar_mnow", 424),
        ("Basaveshwar Nagar_mnow", 380),
        ("Jakkur_mnow", 338),
        ("Begur_mnow", 642),
        ("Thyagaraja Nagar_mnow", 318),
        ("Brookfield_mnow", 849),
        ("JP nagar_mnow", 454),
        ("Sarjapur Road_mnow", 546),
    ]),
    entry!("Sunday", "11/23/2025", 4037, [
        ("Kalyan Nagar_mnow", 516),
        ("Basaveshwar Nagar_mnow", 338),
        ("Jakkur_mnow", 345),
        ("Begur_mnow", 593),
        ("Thyagaraja Nagar_mnow", 403),
        ("Brookfield_mnow", 875),
        ("JP nagar_mnow", 474),
        ("Sarjapur Road_mnow", 493),
    ]),
    entry!("Monday", "11/24/2025", 3197, [
        ("Kalyan Nagar_mnow", 411),
        ("Basaveshwar Nagar_mnow", 270),
        ("Jakkur_mnow", 275),
        ("Begur_mnow", 472),
        ("Thyagaraja Nagar_mnow", 302),
        ("Brookfield_mnow", 697),
        ("JP nagar_mnow", 377),
        ("Sarjapur Road_mnow", 393),
    ]),
    entry!("Tuesday", "11/25/2025", 3553, [
        ("Kalyan Nagar_mnow", 457),
        ("Basaveshwar Nagar_mnow", 300),
        ("Jakkur_mnow", 305),
        ("Begur_mnow", 525),
        ("Thyagaraja Nagar_mnow", 334),
        ("Brookfield_mnow", 776),
        ("JP nagar_mnow", 420),
        ("Sarjapur Road_mnow", 436),
    ]),
    entry!("Wednesday", "11/26/2025", 5262, [
        ("Kalyan Nagar_mnow", 668),
        ("Basaveshwar Nagar_mnow", 438),
        ("Jakkur_mnow", 446),
        ("Begur_mnow", 768),
        ("Thyagaraja Nagar_mnow", 556),
        ("Brookfield_mnow", 1134),
        ("JP nagar_mnow", 614),
        ("Sarjapur Road_mnow", 638),
    ]),
    entry!("Thursday", "11/27/2025", 5103, [
        ("Kalyan Nagar_mnow", 645),
        ("Basaveshwar Nagar_mnow", 423),
        ("Jakkur_mnow", 432),
        ("Begur_mnow", 741),
        ("Thyagaraja Nagar_mnow", 558),
        ("Brookfield_mnow", 1095),
        ("JP nagar_mnow", 593),
        ("Sarjapur Road_mnow", 616),
    ]),
    entry!("Friday", "11/28/2025", 6309, [
        ("Kalyan Nagar_mnow", 797),
        ("Basaveshwar Nagar_mnow", 523),
        ("Jakkur_mnow", 532),
        ("Begur_mnow", 916),
        ("Thyagaraja Nagar_mnow", 696),
        ("Brookfield_mnow", 1352),
        ("JP nagar_mnow", 732),
        ("Sarjapur Road_mnow", 761),
    ]),
    entry!("Saturday", "11/29/2025", 6003, [
        ("Kalyan Nagar_mnow", 760),
        ("Basaveshwar Nagar_mnow", 498),
        ("Jakkur_mnow", 507),
        ("Begur_mnow", 872),
        ("Thyagaraja Nagar_mnow", 656),
        ("Brookfield_mnow", 1288),
        ("JP nagar_mnow", 697),
        ("Sarjapur Road_mnow", 725),
    ]),
    entry!("Sunday", "11/30/2025", 5679, [
        ("Kalyan Nagar_mnow", 716),
        ("Basaveshwar Nagar_mnow", 469),
        ("Jakkur_mnow", 478),
        ("Begur_mnow", 822),
        ("Thyagaraja Nagar_mnow", 639),
        ("Brookfield_mnow", 1214),
        ("JP nagar_mnow", 657),
        ("Sarjapur Road_mnow", 684),
    ]),
    entry!("Monday", "12/15/2025", 3333, [
        ("Kalyan Nagar_mnow", 533),
        ("Basaveshwar Nagar_mnow", 352),
        ("Jakkur_mnow", 344),
        ("Begur_mnow", 557),
        ("Thyagaraja Nagar_mnow", 384),
        ("Brookfield_mnow", 923),
        ("JP nagar_mnow", 450),
        ("Sarjapur Road_mnow", 456),
    ]),
    entry!("Tuesday", "12/16/2025", 3522, [
        ("Kalyan Nagar_mnow", 558),
        ("Basaveshwar Nagar_mnow", 402),
        ("Jakkur_mnow", 365),
        ("Begur_mnow", 560),
        ("Thyagaraja Nagar_mnow", 423),
        ("Brookfield_mnow", 980),
        ("JP nagar_mnow", 485),
        ("Sarjapur Road_mnow", 460),
    ]),
    entry!("Wednesday", "12/17/2025", 3735, [
        ("Kalyan Nagar_mnow", 561),
        ("Basaveshwar Nagar_mnow", 409),
        ("Jakkur_mnow", 341),
        ("Begur_mnow", 575),
        ("Thyagaraja Nagar_mnow", 494),
        ("Brookfield_mnow", 1127),
        ("JP nagar_mnow", 537),
        ("Sarjapur Road_mnow", 495),
    ]),
    entry!("Thursday", "12/18/2025", 3760, [
        ("Kalyan Nagar_mnow", 586),
        ("Basaveshwar Nagar_mnow", 406),
        ("Jakkur_mnow", 382),
        ("Begur_mnow", 594),
        ("Thyagaraja Nagar_mnow", 486),
        ("Brookfield_mnow", 1083),
        ("JP nagar_mnow", 515),
        ("Sarjapur Road_mnow", 508),
    ]),
    entry!("Friday", "12/19/2025", 4162, [
        ("Kalyan Nagar_mnow", 659),
        ("Basaveshwar Nagar_mnow", 425),
        ("Jakkur_mnow", 400),
        ("Begur_mnow", 655),
        ("Thyagaraja Nagar_mnow", 488),
        ("Brookfield_mnow", 1127),
        ("JP nagar_mnow", 575),
        ("Sarjapur Road_mnow", 554),
    ]),
];

/// Cumulative share of daily volume by hour bucket, per weekday
/// (Sunday first). Buckets run 6-7 AM through 10-11 PM.
pub static HOUR_FRACTIONS: &[HourFractionRow] = &[
    HourFractionRow { label: "6-7",   by_day: [0.57, 1.20, 1.54, 1.32, 1.23, 1.38, 1.11] },
    HourFractionRow { label: "7-8",   by_day: [1.68, 3.74, 4.57, 4.25, 3.97, 4.15, 3.82] },
    HourFractionRow { label: "8-9",   by_day: [4.57, 7.95, 9.25, 9.21, 8.73, 9.50, 7.85] },
    HourFractionRow { label: "9-10",  by_day: [10.43, 13.90, 14.93, 15.05, 15.06, 15.84, 14.16] },
    HourFractionRow { label: "10-11", by_day: [17.34, 20.67, 22.29, 22.70, 21.93, 23.18, 20.56] },
    HourFractionRow { label: "11-12", by_day: [25.73, 28.04, 28.46, 30.44, 29.58, 30.51, 27.06] },
    HourFractionRow { label: "12-1",  by_day: [33.96, 34.83, 35.31, 37.17, 36.61, 38.49, 35.71] },
    HourFractionRow { label: "1-2",   by_day: [41.19, 41.21, 41.77, 43.08, 42.81, 45.37, 43.99] },
    HourFractionRow { label: "2-3",   by_day: [48.65, 47.49, 47.20, 49.37, 49.47, 51.46, 51.40] },
    HourFractionRow { label: "3-4",   by_day: [55.32, 53.73, 52.63, 55.65, 55.35, 57.36, 58.81] },
    HourFractionRow { label: "4-5",   by_day: [63.10, 60.98, 59.14, 62.75, 61.85, 63.59, 65.81] },
    HourFractionRow { label: "5-6",   by_day: [70.83, 68.44, 65.51, 69.75, 68.56, 70.56, 73.29] },
    HourFractionRow { label: "6-7",   by_day: [78.05, 74.83, 72.41, 76.88, 75.70, 77.49, 79.93] },
    HourFractionRow { label: "7-8",   by_day: [85.12, 82.15, 80.19, 84.34, 83.52, 84.78, 86.40] },
    HourFractionRow { label: "8-9",   by_day: [91.00, 89.41, 87.49, 90.93, 90.41, 90.91, 91.35] },
    HourFractionRow { label: "9-10",  by_day: [96.99, 95.42, 94.73, 96.04, 96.24, 96.24, 96.18] },
    HourFractionRow { label: "10-11", by_day: [100.01, 99.99, 100.00, 99.96, 100.02, 100.01, 99.99] },
];

fn entry_date(entry: &ProjectionEntry) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(entry.date, "%m/%d/%Y").ok()
}

/// Projection entry for a date: exact match, else the latest entry on or
/// before the date, else the last entry in the table.
pub fn entry_for(date: NaiveDate) -> &'static ProjectionEntry {
    let wanted = date.format("%-m/%-d/%Y").to_string();
    if let Some(exact) = PROJECTIONS.iter().find(|e| e.date == wanted) {
        return exact;
    }

    PROJECTIONS
        .iter()
        .filter(|e| entry_date(e).is_some_and(|d| d <= date))
        .next_back()
        .unwrap_or(&PROJECTIONS[PROJECTIONS.len() - 1])
}

/// Look up the cumulative fraction for a weekday and 24h hour. Hours
/// outside the 6-22 window clamp to the nearest bucket.
pub fn hour_fraction(weekday: Weekday, hour: u32) -> (&'static str, f64) {
    let idx = (hour as i64 - 6).clamp(0, HOUR_FRACTIONS.len() as i64 - 1) as usize;
    let row = &HOUR_FRACTIONS[idx];
    let day_idx = weekday.num_days_from_sunday() as usize;
    (row.label, row.by_day[day_idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn exact_date_lookup() {
        let d = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        let entry = entry_for(d);
        assert_eq!(entry.date, "11/25/2025");
        assert_eq!(entry.store_volume("Kalyan Nagar_mnow"), Some(457));
        assert_eq!(entry.total, 3553);
    }

    #[test]
    fn missing_date_falls_back_to_latest_on_or_before() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(entry_for(d).date, "11/30/2025");
    }

    #[test]
    fn date_before_table_uses_last_entry() {
        let d = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(entry_for(d).date, "12/19/2025");
    }

    #[test]
    fn hour_fraction_by_weekday() {
        let (label, pct) = hour_fraction(Weekday::Sun, 11);
        assert_eq!(label, "11-12");
        assert_eq!(pct, 25.73);

        let (label, pct) = hour_fraction(Weekday::Tue, 11);
        assert_eq!(label, "11-12");
        assert_eq!(pct, 28.46);
    }

    #[test]
    fn out_of_window_hours_clamp() {
        assert_eq!(hour_fraction(Weekday::Mon, 2).0, "6-7");
        assert_eq!(hour_fraction(Weekday::Mon, 23).1, 99.99);
    }
}
