//! Derived metrics: scale projections to the elapsed hour, compare with
//! actual tallies, and correct the deep-pain figure for volume overshoot.

use crate::models::metrics::{MetricsReport, MetricsTotals, StoreMetrics};
use crate::models::orders::OrderTallies;
use crate::models::projection::ProjectionEntry;
use chrono::Weekday;

use crate::data::hour_fraction;

pub const BUFFER_FACTOR: f64 = 1.15;

/// Scale a full-day volume down to the elapsed-hour percentage and pad it
/// by the buffer factor. Both figures round to whole orders.
pub fn scale_projection(full_day: u64, percent: f64) -> (u64, u64) {
    let projected = (full_day as f64 * percent / 100.0).round() as u64;
    let buffered = (projected as f64 * BUFFER_FACTOR).round() as u64;
    (projected, buffered)
}

/// Build the merged per-store report for one projection day, scaled to
/// the given weekday and 24h hour.
pub fn derive_report(
    entry: &ProjectionEntry,
    weekday: Weekday,
    hour: u32,
    tallies: &OrderTallies,
) -> MetricsReport {
    let (label, percent) = hour_fraction(weekday, hour);

    let rows: Vec<StoreMetrics> = tallies
        .stores
        .iter()
        .map(|tally| {
            let full_day = entry.store_volume(&tally.store).unwrap_or(0);
            let (projected, buffered) = scale_projection(full_day, percent);

            let total = tally.total;
            let cancelled_pct = if total > 0 {
                (tally.cancelled + tally.attempted) as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            let deep_pain_pct = if tally.delivered > 0 {
                tally.deep_pain as f64 / tally.delivered as f64 * 100.0
            } else {
                0.0
            };
            let attainment_pct = if projected > 0 {
                total as f64 / projected as f64 * 100.0
            } else {
                0.0
            };

            let deep_pain_order_count = total as f64 * deep_pain_pct / 100.0;
            let additional_orders = total.saturating_sub(buffered);
            let corrected_deep_pain = deep_pain_order_count - additional_orders as f64;
            let actual_deep_pain_pct = if total > 0 {
                (corrected_deep_pain / total as f64 * 100.0).max(0.0)
            } else {
                0.0
            };

            StoreMetrics {
                store: tally.store.clone(),
                full_day_projection: full_day,
                projected,
                buffered,
                total_orders: total,
                delivered: tally.delivered,
                attempted: tally.attempted,
                cancelled: tally.cancelled,
                deep_pain: tally.deep_pain,
                cancelled_pct,
                deep_pain_pct,
                attainment_pct,
                deep_pain_order_count,
                additional_orders,
                corrected_deep_pain,
                actual_deep_pain_pct,
            }
        })
        .collect();

    let totals = derive_totals(&rows);

    MetricsReport {
        hour_label: label.to_string(),
        hour_percent: percent,
        rows,
        totals,
    }
}

/// Counts are summed; percentage columns are the arithmetic mean of the
/// per-store percentages, matching how the planning sheet totals them.
fn derive_totals(rows: &[StoreMetrics]) -> MetricsTotals {
    let mut totals = MetricsTotals::default();
    if rows.is_empty() {
        return totals;
    }

    for row in rows {
        totals.full_day_projection += row.full_day_projection;
        totals.projected += row.projected;
        totals.buffered += row.buffered;
        totals.total_orders += row.total_orders;
        totals.delivered += row.delivered;
        totals.attempted += row.attempted;
        totals.cancelled += row.cancelled;
        totals.deep_pain += row.deep_pain;
        totals.cancelled_pct += row.cancelled_pct;
        totals.deep_pain_pct += row.deep_pain_pct;
        totals.attainment_pct += row.attainment_pct;
        totals.deep_pain_order_count += row.deep_pain_order_count;
        totals.additional_orders += row.additional_orders;
        totals.corrected_deep_pain += row.corrected_deep_pain;
        totals.actual_deep_pain_pct += row.actual_deep_pain_pct;
    }

    let n = rows.len() as f64;
    totals.cancelled_pct /= n;
    totals.deep_pain_pct /= n;
    totals.attainment_pct /= n;
    totals.actual_deep_pain_pct /= n;

    totals
}
