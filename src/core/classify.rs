//! Order classification: per-store tallies of delivered, attempted and
//! cancelled orders, with deep-pain detection on breach duration.

use crate::core::fields::{best_field, best_field_text, norm_key};
use crate::core::temporal::{format_readable, parse_when};
use crate::ingest::RawRow;
use crate::models::orders::{DeepPainOrder, OrderTallies, StoreTally};

pub const STORE_KEYS: &[&str] = &["store name", "store", "hub name", "hub"];

pub const STATUS_KEYS: &[&str] = &["order status", "status", "delivery status"];

pub const BREACH_KEYS: &[&str] = &["breached", "breach", "sla breached"];

pub const BREACH_MIN_KEYS: &[&str] = &[
    "breached duration in min",
    "breached duration",
    "breach duration",
    "breach minutes",
];

pub const ORDER_NO_KEYS: &[&str] = &["order no", "order number", "order id", "orderno"];

pub const ORDER_DATE_KEYS: &[&str] = &["order date", "orderdate", "date"];

/// Breach duration assumed when the column is missing or blank.
const DEFAULT_BREACH_MINUTES: f64 = 5.0;

/// Breach duration above which a delivered order counts as deep pain.
const DEEP_PAIN_THRESHOLD_MINUTES: f64 = 15.0;

/// Tally orders per store. Stores not in `stores` are dropped; every
/// configured store gets a row even with zero orders, in list order.
pub fn classify(rows: &[RawRow], stores: &[String]) -> OrderTallies {
    let mut tallies = OrderTallies {
        stores: stores
            .iter()
            .map(|s| StoreTally {
                store: s.clone(),
                ..StoreTally::default()
            })
            .collect(),
        deep_pain_orders: Vec::new(),
    };

    for row in rows {
        let Some(store_raw) = best_field_text(row, STORE_KEYS) else {
            continue;
        };
        let store_norm = norm_key(&store_raw);
        let Some(idx) = stores.iter().position(|s| norm_key(s) == store_norm) else {
            continue;
        };

        let status = best_field_text(row, STATUS_KEYS)
            .map(|s| s.to_lowercase())
            .unwrap_or_default();
        let breached = best_field_text(row, BREACH_KEYS)
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|| "no".to_string());
        let breach_minutes = best_field_text(row, BREACH_MIN_KEYS)
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(DEFAULT_BREACH_MINUTES);

        let tally = &mut tallies.stores[idx];
        tally.total += 1;

        if status == "delivered" {
            tally.delivered += 1;
            if breached == "yes" && breach_minutes > DEEP_PAIN_THRESHOLD_MINUTES {
                tally.deep_pain += 1;
                tallies.deep_pain_orders.push(deep_pain_detail(row, &store_raw));
            }
        } else if status == "attempted" {
            tally.attempted += 1;
        } else if status.contains("cancel") {
            tally.cancelled += 1;
        }
    }

    tallies
}

fn deep_pain_detail(row: &RawRow, store: &str) -> DeepPainOrder {
    // Order dates arrive as Excel serials as often as text.
    let order_date = best_field(row, ORDER_DATE_KEYS)
        .map(|cell| match parse_when(cell) {
            Some(dt) => format_readable(dt),
            None => cell.as_text().trim().to_string(),
        })
        .unwrap_or_default();

    DeepPainOrder {
        order_no: best_field_text(row, ORDER_NO_KEYS).unwrap_or_default(),
        order_date,
        store: store.to_string(),
        breached: best_field_text(row, BREACH_KEYS).unwrap_or_default(),
        breached_duration: best_field_text(row, BREACH_MIN_KEYS).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Cell;

    fn stores() -> Vec<String> {
        vec!["Kalyan Nagar_mnow".into(), "Jakkur_mnow".into()]
    }

    fn order(store: &str, status: &str, breached: &str, minutes: &str) -> RawRow {
        let mut r = RawRow::new();
        r.push("Store Name", Cell::Text(store.into()));
        r.push("Order Status", Cell::Text(status.into()));
        r.push("Breached", Cell::Text(breached.into()));
        r.push("Breached Duration (In Min)", Cell::Text(minutes.into()));
        r.push("Order No", Cell::Text("ORD-1".into()));
        r.push("Order Date", Cell::Number(45986.0));
        r
    }

    #[test]
    fn statuses_bucket_into_the_right_tallies() {
        let rows = vec![
            order("Kalyan Nagar_mnow", "Delivered", "no", ""),
            order("Kalyan Nagar_mnow", "Attempted", "no", ""),
            order("Kalyan Nagar_mnow", "Cancelled by customer", "no", ""),
            order("Kalyan Nagar_mnow", "CANCELLED", "no", ""),
        ];
        let tallies = classify(&rows, &stores());

        let kalyan = &tallies.stores[0];
        assert_eq!(kalyan.total, 4);
        assert_eq!(kalyan.delivered, 1);
        assert_eq!(kalyan.attempted, 1);
        assert_eq!(kalyan.cancelled, 2);
        assert_eq!(kalyan.deep_pain, 0);
    }

    #[test]
    fn deep_pain_needs_delivered_yes_and_over_fifteen_minutes() {
        let rows = vec![
            order("Jakkur_mnow", "Delivered", "yes", "20"),
            order("Jakkur_mnow", "Delivered", "yes", "15"),
            order("Jakkur_mnow", "Delivered", "no", "40"),
            order("Jakkur_mnow", "Cancelled", "yes", "40"),
        ];
        let tallies = classify(&rows, &stores());

        assert_eq!(tallies.stores[1].deep_pain, 1);
        assert_eq!(tallies.deep_pain_orders.len(), 1);
        let dp = &tallies.deep_pain_orders[0];
        assert_eq!(dp.order_no, "ORD-1");
        assert_eq!(dp.store, "Jakkur_mnow");
        assert_eq!(dp.breached_duration, "20");
    }

    #[test]
    fn missing_breach_duration_defaults_below_threshold() {
        let rows = vec![order("Jakkur_mnow", "Delivered", "yes", "")];
        let tallies = classify(&rows, &stores());
        assert_eq!(tallies.stores[1].delivered, 1);
        assert_eq!(tallies.stores[1].deep_pain, 0);
    }

    #[test]
    fn unknown_stores_are_dropped_and_configured_ones_zero_filled() {
        let rows = vec![order("Elsewhere_mnow", "Delivered", "no", "")];
        let tallies = classify(&rows, &stores());

        assert_eq!(tallies.stores.len(), 2);
        assert!(tallies.stores.iter().all(|t| t.total == 0));
        assert_eq!(tallies.stores[0].store, "Kalyan Nagar_mnow");
    }

    #[test]
    fn totals_row_sums_all_stores() {
        let rows = vec![
            order("Kalyan Nagar_mnow", "Delivered", "no", ""),
            order("Jakkur_mnow", "Delivered", "yes", "30"),
        ];
        let tallies = classify(&rows, &stores());
        let total = tallies.totals();
        assert_eq!(total.total, 2);
        assert_eq!(total.delivered, 2);
        assert_eq!(total.deep_pain, 1);
    }
}
