#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Boston neighborhood boundary names.
//!
//! The filter sidebar's map lets a user click a neighborhood polygon to
//! stage that name as the neighborhood filter value. The dashboard core
//! only consumes the *names*; polygon geometry stays in the presentation
//! layer. This crate fetches the boundary layer as `GeoJSON` and extracts
//! the deduplicated name list.

use thiserror::Error;

/// Query endpoint for the neighborhood boundary layer.
const BOUNDARY_URL: &str = "https://gis.bostonplans.org/hosting/rest/services/Hosted/Boston_Neighborhood_Boundaries/FeatureServer/1/query";

/// Errors that can occur while fetching boundary data.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response was well-formed JSON but not the expected shape.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

/// Fetches the neighborhood boundary layer and returns the region names,
/// deduplicated and sorted.
///
/// # Errors
///
/// Returns [`BoundaryError`] if the request fails or the response lacks a
/// `features` array.
pub async fn fetch_region_names(client: &reqwest::Client) -> Result<Vec<String>, BoundaryError> {
    let url = format!("{BOUNDARY_URL}?where=1%3D1&outFields=name&outSR=4326&f=geojson");

    log::info!("Fetching neighborhood boundary names");
    let response = client.get(&url).send().await?;
    let body: serde_json::Value = response.json().await?;

    let names = region_names(&body)?;
    log::info!("Fetched {} neighborhood names", names.len());
    Ok(names)
}

/// Extracts `features[].properties.name` from a `GeoJSON` feature
/// collection, deduplicated and sorted. Features without a name are
/// skipped.
///
/// # Errors
///
/// Returns [`BoundaryError::Conversion`] if there is no `features` array.
pub fn region_names(body: &serde_json::Value) -> Result<Vec<String>, BoundaryError> {
    let features = body
        .get("features")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| BoundaryError::Conversion {
            message: "No features array in boundary response".to_string(),
        })?;

    let mut names: Vec<String> = features
        .iter()
        .filter_map(|feature| {
            feature
                .get("properties")
                .and_then(|props| props.get("name"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}
