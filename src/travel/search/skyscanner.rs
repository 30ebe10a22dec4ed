//! Skyscanner browse-quotes search provider.
//!
//! Production backing for the flight search trait. Quotes are day-granular
//! (carrier, price, outbound date), so departure and arrival both carry the
//! quoted date; the rest-legality filter treats such options conservatively.

use super::{FlightOption, FlightSearch, SearchError};
use crate::config::TravelConfig;
use crate::travel::TravelPreferences;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Skyscanner browse-quotes client.
pub struct SkyscannerSearch {
    host: String,
    api_key: String,
    client: Client,
}

impl SkyscannerSearch {
    /// Build a client from travel config; the API key is read from the
    /// environment variable the config names, never from the file itself.
    pub fn from_config(config: &TravelConfig) -> Result<Self, SearchError> {
        let api_key = std::env::var(&config.search_api_key_env).map_err(|_| {
            SearchError::Configuration(format!(
                "search API key not set in ${}",
                config.search_api_key_env
            ))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| SearchError::Configuration(e.to_string()))?;

        Ok(Self {
            host: config.search_api_host.clone(),
            api_key,
            client,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BrowseQuotesResponse {
    #[serde(default)]
    quotes: Vec<Quote>,
    #[serde(default)]
    carriers: Vec<Carrier>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Quote {
    quote_id: u64,
    #[serde(default)]
    min_price: f64,
    outbound_leg: OutboundLeg,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OutboundLeg {
    #[serde(default)]
    carrier_ids: Vec<u64>,
    departure_date: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Carrier {
    carrier_id: u64,
    name: String,
}

fn parse_leg_date(raw: &str) -> Result<DateTime<Utc>, SearchError> {
    // Quotes report "2026-09-01T00:00:00" without an offset.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.and_utc())
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        })
        .map_err(|e| SearchError::InvalidResponse(format!("bad departure date '{}': {}", raw, e)))
}

#[async_trait]
impl FlightSearch for SkyscannerSearch {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
        _preferences: &TravelPreferences,
    ) -> Result<Vec<FlightOption>, SearchError> {
        let url = format!(
            "https://{}/apiservices/browsequotes/v1.0/US/USD/en-US/{}/{}/{}",
            self.host, origin, destination, date
        );

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: BrowseQuotesResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let carriers: HashMap<u64, &str> = body
            .carriers
            .iter()
            .map(|c| (c.carrier_id, c.name.as_str()))
            .collect();

        let mut options = Vec::with_capacity(body.quotes.len());
        for quote in &body.quotes {
            let airline = quote
                .outbound_leg
                .carrier_ids
                .first()
                .and_then(|id| carriers.get(id).copied())
                .unwrap_or("Unknown")
                .to_string();
            let departure = parse_leg_date(&quote.outbound_leg.departure_date)?;

            options.push(FlightOption {
                airline,
                flight_number: format!("Q{}", quote.quote_id),
                departure_time: departure,
                arrival_time: departure,
                price: quote.min_price,
                class_of_service: "Economy".to_string(),
                score: None,
            });
        }

        tracing::debug!(origin, destination, %date, count = options.len(), "skyscanner search");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quote_payload() {
        let raw = r#"{
            "Quotes": [
                {
                    "QuoteId": 1,
                    "MinPrice": 420.0,
                    "Direct": true,
                    "OutboundLeg": {
                        "CarrierIds": [851],
                        "OriginId": 81727,
                        "DestinationId": 79235,
                        "DepartureDate": "2026-09-01T00:00:00"
                    }
                }
            ],
            "Carriers": [{"CarrierId": 851, "Name": "Alaska Airlines"}]
        }"#;

        let body: BrowseQuotesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.quotes.len(), 1);
        assert_eq!(body.quotes[0].min_price, 420.0);
        assert_eq!(body.carriers[0].name, "Alaska Airlines");
    }

    #[test]
    fn parses_leg_dates_with_and_without_time() {
        assert_eq!(
            parse_leg_date("2026-09-01T00:00:00").unwrap().to_rfc3339(),
            "2026-09-01T00:00:00+00:00"
        );
        assert_eq!(
            parse_leg_date("2026-09-01").unwrap().to_rfc3339(),
            "2026-09-01T00:00:00+00:00"
        );
        assert!(parse_leg_date("next tuesday").is_err());
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let config = TravelConfig {
            search_api_key_env: "IROPS_TEST_MISSING_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            SkyscannerSearch::from_config(&config),
            Err(SearchError::Configuration(_))
        ));
    }
}
