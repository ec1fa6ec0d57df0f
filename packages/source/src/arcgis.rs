//! Boston Person_Shot `ArcGIS` feature-layer source.
//!
//! One GET against the `FeatureServer` query endpoint returns the full
//! table as `{ "features": [ { "attributes": {...} } ] }`. A single
//! mapping pass converts the service's raw attribute keys into
//! [`IncidentRecord`]s, then sorts newest-first so the dashboard leads
//! with the most recent incidents.

use async_trait::async_trait;
use boston_shootings_models::IncidentRecord;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{RecordSource, SourceError};

/// Query endpoint for the Person_Shot view layer.
const QUERY_URL: &str = "https://services.arcgis.com/sFnw0xNflSi8J0uh/arcgis/rest/services/Person_Shot_Tbl_view/FeatureServer/0/query";

/// Boston Police Department shooting records via `ArcGIS`.
pub struct PersonShotSource;

impl PersonShotSource {
    /// Creates a new Boston shooting record source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PersonShotSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level query response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

/// `ArcGIS` wraps each row in `{ "attributes": {...}, "geometry": {...} }`;
/// this layer is a plain table, so only the attributes matter.
#[derive(Debug, Deserialize)]
struct Feature {
    attributes: RawAttributes,
}

/// Raw row attributes under the service's own key names. String fields
/// are nullable in the feed; `None` maps to an empty string so the filter
/// convention (empty = never matches a specific value) applies naturally.
#[derive(Debug, Deserialize)]
struct RawAttributes {
    #[serde(rename = "OBJECTID")]
    object_id: i64,
    #[serde(rename = "Incident_Num", default)]
    incident_num: Option<String>,
    #[serde(rename = "Shooting_Date", default)]
    shooting_date: Option<i64>,
    #[serde(rename = "District", default)]
    district: Option<String>,
    #[serde(rename = "Shooting_Type_V2", default)]
    shooting_type: Option<String>,
    #[serde(rename = "Victim_Gender", default)]
    victim_gender: Option<String>,
    #[serde(rename = "Victim_Race", default)]
    victim_race: Option<String>,
    #[serde(rename = "Victim_Ethnicity_NIBRS", default)]
    victim_ethnicity: Option<String>,
    #[serde(rename = "Multi_Victim", default)]
    multi_victim: Option<i64>,
    #[serde(rename = "IsPrimaryIncident", default)]
    is_primary_incident: Option<i64>,
    #[serde(rename = "HOUR_OF_DAY", default)]
    hour_of_day: Option<u8>,
    #[serde(rename = "DAY_OF_WEEK", default)]
    day_of_week: Option<String>,
    #[serde(rename = "YEAR", default)]
    year: Option<i32>,
    #[serde(rename = "QUARTER", default)]
    quarter: Option<u8>,
    #[serde(rename = "MONTH", default)]
    month: Option<u32>,
    #[serde(rename = "NEIGHBORHOOD", default)]
    neighborhood: Option<String>,
}

impl From<RawAttributes> for IncidentRecord {
    fn from(raw: RawAttributes) -> Self {
        let occurred_at = raw
            .shooting_date
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        Self {
            id: raw.object_id,
            incident_number: raw.incident_num.unwrap_or_default(),
            occurred_at,
            year: raw.year.unwrap_or_default(),
            month: raw.month.unwrap_or_default(),
            quarter: raw.quarter.unwrap_or_default(),
            day_of_week: raw.day_of_week.unwrap_or_default(),
            hour_of_day: raw.hour_of_day.unwrap_or_default(),
            district: raw.district.unwrap_or_default(),
            neighborhood: raw.neighborhood.unwrap_or_default(),
            shooting_type: raw.shooting_type.unwrap_or_default(),
            victim_gender: raw.victim_gender.unwrap_or_default(),
            victim_race: raw.victim_race.unwrap_or_default(),
            victim_ethnicity: raw.victim_ethnicity.unwrap_or_default(),
            multi_victim: raw.multi_victim.unwrap_or_default() == 1,
            primary_incident: raw.is_primary_incident.unwrap_or_default() == 1,
        }
    }
}

/// Maps a decoded query response into records, newest first.
fn map_response(response: QueryResponse) -> Vec<IncidentRecord> {
    let mut records: Vec<IncidentRecord> = response
        .features
        .into_iter()
        .map(|feature| feature.attributes.into())
        .collect();
    // The feed arrives oldest-first; the dashboard shows most recent first.
    records.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    records
}

#[async_trait]
impl RecordSource for PersonShotSource {
    fn id(&self) -> &'static str {
        "boston_arcgis"
    }

    fn name(&self) -> &'static str {
        "Boston Police Department (Person_Shot)"
    }

    async fn fetch(&self) -> Result<Vec<IncidentRecord>, SourceError> {
        let url = format!("{QUERY_URL}?where=1%3D1&outFields=*&outSR=4326&f=json");

        log::info!("{}: fetching record set", self.name());
        let response = reqwest::Client::new().get(&url).send().await?;
        let body: QueryResponse = response.json().await?;

        let records = map_response(body);
        log::info!("{}: fetched {} records", self.name(), records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "features": [
            {
                "attributes": {
                    "OBJECTID": 1,
                    "Incident_Num": "I2021-00042",
                    "Shooting_Date": 1622851200000,
                    "District": "B2",
                    "Shooting_Type_V2": "Non-Fatal",
                    "Victim_Gender": "Male",
                    "Victim_Race": "Black or African American",
                    "Victim_Ethnicity_NIBRS": "Not Hispanic or Latino",
                    "Multi_Victim": 0,
                    "IsPrimaryIncident": 1,
                    "HOUR_OF_DAY": 22,
                    "DAY_OF_WEEK": "Saturday",
                    "YEAR": 2021,
                    "QUARTER": 2,
                    "MONTH": 6,
                    "NEIGHBORHOOD": "Roxbury"
                }
            },
            {
                "attributes": {
                    "OBJECTID": 2,
                    "Incident_Num": "I2022-00007",
                    "Shooting_Date": 1643673600000,
                    "District": null,
                    "Shooting_Type_V2": "Fatal",
                    "Victim_Gender": "Female",
                    "Victim_Race": "White",
                    "Victim_Ethnicity_NIBRS": null,
                    "Multi_Victim": 1,
                    "IsPrimaryIncident": 1,
                    "HOUR_OF_DAY": 3,
                    "DAY_OF_WEEK": "Tuesday",
                    "YEAR": 2022,
                    "QUARTER": 1,
                    "MONTH": 2,
                    "NEIGHBORHOOD": "Dorchester"
                }
            }
        ]
    }"#;

    #[test]
    fn maps_raw_attributes_field_for_field() {
        let response: QueryResponse = serde_json::from_str(SAMPLE).unwrap();
        let records = map_response(response);
        assert_eq!(records.len(), 2);

        let newest = &records[0];
        assert_eq!(newest.id, 2);
        assert_eq!(newest.incident_number, "I2022-00007");
        assert_eq!(newest.year, 2022);
        assert_eq!(newest.shooting_type, "Fatal");
        assert_eq!(newest.neighborhood, "Dorchester");
        assert!(newest.multi_victim);
        assert!(newest.primary_incident);

        let oldest = &records[1];
        assert_eq!(oldest.district, "B2");
        assert_eq!(oldest.hour_of_day, 22);
        assert_eq!(oldest.day_of_week, "Saturday");
        assert!(!oldest.multi_victim);
    }

    #[test]
    fn null_strings_map_to_empty() {
        let response: QueryResponse = serde_json::from_str(SAMPLE).unwrap();
        let records = map_response(response);
        let fatal = records.iter().find(|r| r.id == 2).unwrap();
        assert_eq!(fatal.district, "");
        assert_eq!(fatal.victim_ethnicity, "");
    }

    #[test]
    fn records_sort_newest_first() {
        let response: QueryResponse = serde_json::from_str(SAMPLE).unwrap();
        let records = map_response(response);
        assert!(records[0].occurred_at > records[1].occurred_at);
    }

    #[test]
    fn epoch_millis_map_to_utc_datetime() {
        let response: QueryResponse = serde_json::from_str(SAMPLE).unwrap();
        let records = map_response(response);
        let oldest = records.iter().find(|r| r.id == 1).unwrap();
        assert_eq!(oldest.occurred_at.to_string(), "2021-06-05 00:00:00 UTC");
    }

    #[test]
    fn empty_feature_list_decodes_to_no_records() {
        let response: QueryResponse = serde_json::from_str(r#"{"features": []}"#).unwrap();
        assert!(map_response(response).is_empty());
    }
}
