//! Crew travel evaluation endpoint handler.

use crate::api::{ApiError, AppState, TravelRequest, TravelResponse};
use crate::context::TravelContext;
use crate::travel::TravelError;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

/// POST /v1/travel/evaluate - Run the repositioning pipeline for one crew
/// member. Ineligible requests return 200 with a rejection decision; only
/// collaborator failures surface as errors.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TravelRequest>,
) -> Result<Json<TravelResponse>, ApiError> {
    if request.crew_id.trim().is_empty() {
        return Err(ApiError::bad_request("crew_id must not be empty").1);
    }

    info!(
        crew_id = %request.crew_id,
        travel_type = %request.travel_type,
        "travel evaluation request"
    );

    let mut context = TravelContext::from(&request);
    let outcome = state
        .travel
        .process(&mut context, request.original_deadhead_price)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, crew_id = %context.crew_id, "travel pipeline failed");
            match e {
                TravelError::Search(_) => ApiError::upstream("flight search failed").1,
                TravelError::Booking(_) => ApiError::upstream("booking failed").1,
                TravelError::Audit(_) => ApiError::internal("travel evaluation failed").1,
            }
        })?;

    Ok(Json(TravelResponse {
        outcome,
        log: context.log_entries().to_vec(),
    }))
}
