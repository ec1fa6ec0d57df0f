//! Filter engine: evaluates a [`FilterSpec`] against the record store.
//!
//! A record is included iff it passes every active predicate (logical AND
//! across fields). A field predicate is inactive when its spec value is
//! the default: empty year set, empty string, or `false`. All string
//! comparisons are exact — no case normalization, no partial matching.

use boston_shootings_models::{FilterSpec, IncidentRecord};

/// Returns the subset of `records` passing `spec`, in input order.
///
/// The year set is the one multi-select field: a record passes it when the
/// set is empty or contains the record's stringified year (OR within the
/// set, AND against the other fields). The single-select fields each
/// require exact equality when non-empty.
#[must_use]
pub fn visible<'a>(records: &'a [IncidentRecord], spec: &FilterSpec) -> Vec<&'a IncidentRecord> {
    records
        .iter()
        .filter(|record| matches(record, spec))
        .collect()
}

fn matches(record: &IncidentRecord, spec: &FilterSpec) -> bool {
    if !spec.years.is_empty() && !spec.years.contains(&record.year.to_string()) {
        return false;
    }
    if !spec.district.is_empty() && record.district != spec.district {
        return false;
    }
    if !spec.neighborhood.is_empty() && record.neighborhood != spec.neighborhood {
        return false;
    }
    if !spec.shooting_type.is_empty() && record.shooting_type != spec.shooting_type {
        return false;
    }
    if !spec.victim_gender.is_empty() && record.victim_gender != spec.victim_gender {
        return false;
    }
    if !spec.victim_race.is_empty() && record.victim_race != spec.victim_race {
        return false;
    }
    if spec.multi_victim_only && !record.multi_victim {
        return false;
    }
    true
}

/// Returns the distinct years present in `records`, stringified and sorted
/// descending numerically. This is the option list the filter sidebar
/// renders as year checkboxes.
#[must_use]
pub fn year_options(records: &[IncidentRecord]) -> Vec<String> {
    let mut years: Vec<i32> = records.iter().map(|record| record.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years.into_iter().map(|year| year.to_string()).collect()
}
