//! Derived per-store metrics: projections against actuals, attainment,
//! deep-pain correction.

/// One store's derived row in the merged report.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreMetrics {
    pub store: String,
    pub full_day_projection: u64,
    /// Projection scaled to the elapsed share of the day.
    pub projected: u64,
    /// Projected orders with the 15% operational buffer applied.
    pub buffered: u64,
    pub total_orders: u64,
    pub delivered: u64,
    pub attempted: u64,
    pub cancelled: u64,
    pub deep_pain: u64,
    pub cancelled_pct: f64,
    pub deep_pain_pct: f64,
    pub attainment_pct: f64,
    pub deep_pain_order_count: f64,
    pub additional_orders: u64,
    pub corrected_deep_pain: f64,
    pub actual_deep_pain_pct: f64,
}

/// Footer row: sums for counts, arithmetic means for the percentages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTotals {
    pub full_day_projection: u64,
    pub projected: u64,
    pub buffered: u64,
    pub total_orders: u64,
    pub delivered: u64,
    pub attempted: u64,
    pub cancelled: u64,
    pub deep_pain: u64,
    pub cancelled_pct: f64,
    pub deep_pain_pct: f64,
    pub attainment_pct: f64,
    pub deep_pain_order_count: f64,
    pub additional_orders: u64,
    pub corrected_deep_pain: f64,
    pub actual_deep_pain_pct: f64,
}

#[derive(Debug, Clone)]
pub struct MetricsReport {
    /// Label of the hour bucket the projections were scaled to ("11-12").
    pub hour_label: String,
    /// Share of the daily volume expected by that hour, in percent.
    pub hour_percent: f64,
    pub rows: Vec<StoreMetrics>,
    pub totals: MetricsTotals,
}
