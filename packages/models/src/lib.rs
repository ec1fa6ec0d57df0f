#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Shared data types for the Boston shootings dashboard core.
//!
//! Defines the canonical incident record produced by the record source,
//! the filter specification committed by the filter sidebar, and the
//! view-state enum shared between the session and the presentation layer.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Records shown per page in the card and table views.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A single shooting incident, mapped from one row of the Boston
/// Person_Shot feature layer.
///
/// The record store holds these immutably for the lifetime of a session:
/// populated wholesale by one fetch, never mutated in place. `year`,
/// `month`, `quarter`, `day_of_week`, and `hour_of_day` are supplied by
/// the feed independently of `occurred_at` and are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Unique row ID (`OBJECTID`). Unique across the store per session.
    pub id: i64,
    /// Human-facing incident number. Not guaranteed unique.
    pub incident_number: String,
    /// When the shooting occurred.
    pub occurred_at: DateTime<Utc>,
    /// Calendar year, as supplied by the feed.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar quarter (1-4).
    pub quarter: u8,
    /// Day-of-week name (e.g. "Monday").
    pub day_of_week: String,
    /// Hour of day (0-23).
    pub hour_of_day: u8,
    /// Police district code. May be empty.
    pub district: String,
    /// Neighborhood name. May be empty.
    pub neighborhood: String,
    /// "Fatal" or "Non-Fatal".
    pub shooting_type: String,
    /// Victim gender.
    pub victim_gender: String,
    /// Victim race.
    pub victim_race: String,
    /// Victim ethnicity (NIBRS coding).
    pub victim_ethnicity: String,
    /// Whether the incident had multiple victims.
    pub multi_victim: bool,
    /// Whether this row is the primary record for the incident.
    pub primary_incident: bool,
}

/// The committed filter criteria.
///
/// The default value is the identity filter: every field unrestricted,
/// matching every record. A field predicate is active only when its value
/// differs from the default (non-empty set, non-empty string, or `true`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Selected years, stringified. Empty means unrestricted, not
    /// match-nothing. The one multi-select field: OR within the set.
    pub years: BTreeSet<String>,
    /// Exact district match when non-empty.
    pub district: String,
    /// Exact neighborhood match when non-empty.
    pub neighborhood: String,
    /// Exact shooting-type match when non-empty.
    pub shooting_type: String,
    /// Exact victim-gender match when non-empty.
    pub victim_gender: String,
    /// Exact victim-race match when non-empty.
    pub victim_race: String,
    /// When true, only multi-victim incidents pass. False is
    /// unrestricted, not "single-victim only".
    pub multi_victim_only: bool,
}

impl FilterSpec {
    /// Creates the identity filter (every field unrestricted).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            years: BTreeSet::new(),
            district: String::new(),
            neighborhood: String::new(),
            shooting_type: String::new(),
            victim_gender: String::new(),
            victim_race: String::new(),
            multi_victim_only: false,
        }
    }

    /// Returns `true` when every field is at its default, i.e. the spec
    /// matches every record.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.years.is_empty()
            && self.district.is_empty()
            && self.neighborhood.is_empty()
            && self.shooting_type.is_empty()
            && self.victim_gender.is_empty()
            && self.victim_race.is_empty()
            && !self.multi_victim_only
    }
}

/// How the visible set is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ViewMode {
    /// Card grid, paginated.
    #[default]
    Card,
    /// Table rows, paginated.
    Table,
    /// Year-bucketed bar chart over the whole visible set (unpaginated).
    Graph,
}

/// One bar of the per-year chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCount {
    /// Calendar year, stringified for chart labels.
    pub year: String,
    /// Incidents in that year within the visible set.
    pub count: u64,
}
