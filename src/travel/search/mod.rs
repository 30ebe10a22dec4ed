//! Flight search abstraction.
//!
//! The selector must not assume anything about provider ordering beyond
//! "caller-supplied"; ranking is re-derived by the scoring module. Candidate
//! options are ephemeral: generated fresh per search, never persisted.

pub mod mock;
pub mod skyscanner;

pub use mock::MockFlightSearch;
pub use skyscanner::SkyscannerSearch;

use crate::travel::TravelPreferences;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A candidate reposition/deadhead flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOption {
    pub airline: String,
    pub flight_number: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub price: f64,
    pub class_of_service: String,
    /// Assigned by the scoring pass; absent on raw provider results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Errors from flight search providers.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Provider returned an error response (4xx, 5xx).
    #[error("Provider error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Provider response doesn't match the expected format.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider configuration error (e.g., missing API key).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Unified interface for flight search providers.
///
/// Object-safe and used as `Arc<dyn FlightSearch>`; async because the
/// production backing is a third-party HTTP API.
#[async_trait]
pub trait FlightSearch: Send + Sync {
    /// Search candidate flights between two airports on a date.
    ///
    /// Returns options in provider order; callers re-rank.
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
        preferences: &TravelPreferences,
    ) -> Result<Vec<FlightOption>, SearchError>;
}
