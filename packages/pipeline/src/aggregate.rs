//! Aggregator: reduces the visible set into the per-year chart series.

use std::collections::BTreeMap;

use boston_shootings_models::{IncidentRecord, YearCount};

/// Counts incidents per calendar year, emitted ascending by numeric year.
///
/// The ordering is load-bearing for the bar chart: grouping over the
/// numeric year (not insertion order, not string order) keeps repeated
/// runs comparable. Counts across all buckets sum to `visible.len()`.
#[must_use]
pub fn by_year(visible: &[&IncidentRecord]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for record in visible {
        *counts.entry(record.year).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(year, count)| YearCount {
            year: year.to_string(),
            count,
        })
        .collect()
}
