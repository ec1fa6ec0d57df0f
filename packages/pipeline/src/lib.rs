#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Pure derivation functions over the in-memory record store.
//!
//! Data flows one direction: record store → [`filter`] → ([`paginate`] |
//! [`aggregate`]) → presentation. Every function here is deterministic,
//! order-preserving, and free of side effects; the session crate owns all
//! state and re-invokes these on every read.

pub mod aggregate;
pub mod filter;
pub mod paginate;

#[cfg(test)]
pub(crate) mod fixtures {
    use boston_shootings_models::IncidentRecord;
    use chrono::{TimeZone as _, Utc};

    /// Builds a minimal record; tests override the fields they exercise.
    pub fn record(id: i64, year: i32, shooting_type: &str) -> IncidentRecord {
        IncidentRecord {
            id,
            incident_number: format!("I-{id}"),
            occurred_at: Utc.with_ymd_and_hms(year, 6, 15, 22, 0, 0).unwrap(),
            year,
            month: 6,
            quarter: 2,
            day_of_week: "Sunday".to_string(),
            hour_of_day: 22,
            district: String::new(),
            neighborhood: String::new(),
            shooting_type: shooting_type.to_string(),
            victim_gender: String::new(),
            victim_race: String::new(),
            victim_ethnicity: String::new(),
            multi_victim: false,
            primary_incident: true,
        }
    }
}
