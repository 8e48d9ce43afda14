//! Per-store order tallies and the deep-pain detail rows that back the
//! order report.

/// Counts for one store, in the order the caller's store list dictates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreTally {
    pub store: String,
    pub total: u64,
    pub delivered: u64,
    pub attempted: u64,
    pub cancelled: u64,
    pub deep_pain: u64,
}

/// A single delivered order that breached for more than fifteen minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepPainOrder {
    pub order_no: String,
    pub order_date: String,
    pub store: String,
    pub breached: String,
    pub breached_duration: String,
}

/// Classification output: one tally per configured store plus the
/// deep-pain details collected along the way.
#[derive(Debug, Clone, Default)]
pub struct OrderTallies {
    pub stores: Vec<StoreTally>,
    pub deep_pain_orders: Vec<DeepPainOrder>,
}

impl OrderTallies {
    pub fn totals(&self) -> StoreTally {
        let mut sum = StoreTally {
            store: "Total".to_string(),
            ..StoreTally::default()
        };
        for t in &self.stores {
            sum.total += t.total;
            sum.delivered += t.delivered;
            sum.attempted += t.attempted;
            sum.cancelled += t.cancelled;
            sum.deep_pain += t.deep_pain;
        }
        sum
    }
}
