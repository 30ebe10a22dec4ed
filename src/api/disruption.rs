//! Disruption resolution endpoint handler.

use crate::api::{ApiError, AppState, DisruptionRequest, DisruptionResponse};
use crate::context::FlightContext;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

/// POST /v1/disruptions/resolve - Run the multi-agent engine over one
/// disrupted flight.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DisruptionRequest>,
) -> Result<Json<DisruptionResponse>, ApiError> {
    if request.flight_id.trim().is_empty() {
        return Err(ApiError::bad_request("flight_id must not be empty").1);
    }
    if request.aircraft_type.trim().is_empty() {
        return Err(ApiError::bad_request("aircraft_type must not be empty").1);
    }

    info!(
        flight_id = %request.flight_id,
        aircraft_type = %request.aircraft_type,
        "disruption resolution request"
    );

    let mut context = FlightContext::from(request);
    let resolution = state.engine.resolve(&mut context).map_err(|e| {
        tracing::error!(error = %e, flight_id = %context.flight_id, "resolution failed");
        ApiError::internal("disruption resolution failed").1
    })?;

    Ok(Json(DisruptionResponse {
        resolution,
        log: context.log_entries().to_vec(),
    }))
}
