//! Request and response types for the HTTP API.

use crate::context::{FlightContext, LogEntry, TravelContext};
use crate::engine::Resolution;
use crate::travel::TravelOutcome;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One disruption resolution request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisruptionRequest {
    pub flight_id: String,
    pub aircraft_type: String,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub delay_minutes: i64,
    /// Fuel unit price per airport code
    #[serde(default)]
    pub fuel_prices: HashMap<String, f64>,
    #[serde(default)]
    pub reported_fault: String,
}

impl From<DisruptionRequest> for FlightContext {
    fn from(request: DisruptionRequest) -> Self {
        let mut context = FlightContext::new(
            request.flight_id,
            request.aircraft_type,
            request.origin,
            request.destination,
            request.delay_minutes,
        );
        context.fuel_prices = request.fuel_prices;
        context.reported_fault = request.reported_fault;
        context
    }
}

/// Resolution response: the three decisions, the final decision, and the
/// evaluation log.
#[derive(Debug, Clone, Serialize)]
pub struct DisruptionResponse {
    #[serde(flatten)]
    pub resolution: Resolution,
    pub log: Vec<LogEntry>,
}

/// One crew repositioning request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TravelRequest {
    pub crew_id: String,
    pub name: String,
    pub base: String,
    pub gateway: String,
    pub travel_type: String,
    pub duty_start_time: String,
    #[serde(default)]
    pub preferred_airlines: Vec<String>,
    #[serde(default)]
    pub seat_preference: String,
    #[serde(default)]
    pub class_of_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_on_airport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_report_gap_minutes: Option<i64>,
    /// Estimated cost of the originally planned deadhead, used as the
    /// rebooking price-ceiling base
    #[serde(default = "default_deadhead_price")]
    pub original_deadhead_price: f64,
}

fn default_deadhead_price() -> f64 {
    1000.0
}

impl From<&TravelRequest> for TravelContext {
    fn from(request: &TravelRequest) -> Self {
        let mut context = TravelContext::new(
            request.crew_id.clone(),
            request.name.clone(),
            request.base.clone(),
            request.gateway.clone(),
            request.travel_type.clone(),
            request.duty_start_time.clone(),
        );
        context.preferred_airlines = request.preferred_airlines.clone();
        context.seat_preference = request.seat_preference.clone();
        context.class_of_service = request.class_of_service.clone();
        context.schedule.sign_on_airport = request.sign_on_airport.clone();
        context.max_report_gap_minutes = request.max_report_gap_minutes;
        context
    }
}

/// Travel evaluation response.
#[derive(Debug, Clone, Serialize)]
pub struct TravelResponse {
    #[serde(flatten)]
    pub outcome: TravelOutcome,
    pub log: Vec<LogEntry>,
}

/// API error response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

/// Error details. Diagnostic messages only; internal state never leaks here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub r#type: String,
}

impl ApiError {
    pub fn bad_request(message: &str) -> (StatusCode, Self) {
        (
            StatusCode::BAD_REQUEST,
            Self {
                error: ApiErrorBody {
                    message: message.to_string(),
                    r#type: "invalid_request_error".to_string(),
                },
            },
        )
    }

    pub fn upstream(message: &str) -> (StatusCode, Self) {
        (
            StatusCode::BAD_GATEWAY,
            Self {
                error: ApiErrorBody {
                    message: message.to_string(),
                    r#type: "upstream_error".to_string(),
                },
            },
        )
    }

    pub fn internal(message: &str) -> (StatusCode, Self) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Self {
                error: ApiErrorBody {
                    message: message.to_string(),
                    r#type: "internal_error".to_string(),
                },
            },
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.r#type.as_str() {
            "invalid_request_error" => StatusCode::BAD_REQUEST,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}
