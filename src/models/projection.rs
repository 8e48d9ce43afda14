//! Static projection tables: daily per-store volumes and the cumulative
//! hour-of-day fractions.

/// Projected order volume for one calendar day.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEntry {
    pub day: &'static str,
    /// `M/D/YYYY`, the format the planning sheet uses.
    pub date: &'static str,
    pub stores: &'static [(&'static str, u64)],
    pub total: u64,
}

impl ProjectionEntry {
    pub fn store_volume(&self, store: &str) -> Option<u64> {
        self.stores
            .iter()
            .find(|(name, _)| *name == store)
            .map(|(_, v)| *v)
    }
}

/// Cumulative percentage of daily volume reached by the end of one hour
/// bucket, per weekday. Index 0 is Sunday.
#[derive(Debug, Clone, Copy)]
pub struct HourFractionRow {
    pub label: &'static str,
    pub by_day: [f64; 7],
}
