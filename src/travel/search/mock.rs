//! Deterministic in-process flight search.
//!
//! Returns the same three candidates for any route, anchored to the
//! requested date, so pipeline behaviour is reproducible in development and
//! tests.

use super::{FlightOption, FlightSearch, SearchError};
use crate::travel::TravelPreferences;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Mock search provider with fixed candidates.
#[derive(Debug, Default)]
pub struct MockFlightSearch;

impl MockFlightSearch {
    pub fn new() -> Self {
        Self
    }
}

fn at_hour(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
    date.and_time(time).and_utc()
}

#[async_trait]
impl FlightSearch for MockFlightSearch {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
        _preferences: &TravelPreferences,
    ) -> Result<Vec<FlightOption>, SearchError> {
        tracing::debug!(origin, destination, %date, "mock flight search");

        Ok(vec![
            FlightOption {
                airline: "Delta".to_string(),
                flight_number: "DL456".to_string(),
                departure_time: at_hour(date, 12),
                arrival_time: at_hour(date, 17),
                price: 1100.0,
                class_of_service: "Business".to_string(),
                score: None,
            },
            FlightOption {
                airline: "United".to_string(),
                flight_number: "UA789".to_string(),
                departure_time: at_hour(date, 14),
                arrival_time: at_hour(date, 18),
                price: 1050.0,
                class_of_service: "Business".to_string(),
                score: None,
            },
            FlightOption {
                airline: "American".to_string(),
                flight_number: "AA123".to_string(),
                departure_time: at_hour(date, 9),
                arrival_time: at_hour(date, 15),
                price: 950.0,
                class_of_service: "Economy".to_string(),
                score: None,
            },
        ])
    }
}
