#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Record source trait and the Boston Person_Shot fetcher.
//!
//! A record source knows how to fetch one point-in-time snapshot of
//! incident rows and map them into the canonical [`IncidentRecord`]
//! shape. The session crate consumes sources as trait objects so tests
//! can substitute fixtures for the live ArcGIS endpoint.

pub mod arcgis;

use async_trait::async_trait;
use boston_shootings_models::IncidentRecord;

/// Errors that can occur while fetching or decoding a record set.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A provider of shooting incident records.
///
/// Implementations fetch the full record set in one shot; the session
/// replaces its store wholesale with the result. There is no incremental
/// update path.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Returns a unique identifier for this source (e.g., `"boston_arcgis"`).
    fn id(&self) -> &str;

    /// Returns the human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetches and maps the complete record set.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the request or decoding fails. Callers
    /// that cannot surface errors (the session) log and keep their
    /// previous store.
    async fn fetch(&self) -> Result<Vec<IncidentRecord>, SourceError>;
}
