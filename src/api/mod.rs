//! HTTP front end.
//!
//! Thin boundary over the engine and the travel pipeline. Input problems the
//! core models as rejection decisions pass through with 200; only external
//! collaborator failures and internal faults map to error envelopes.
//!
//! ## Endpoints
//!
//! - `POST /v1/disruptions/resolve` - run the multi-agent disruption engine
//! - `POST /v1/travel/evaluate` - run the crew repositioning pipeline
//! - `GET /health` - liveness and uptime

mod disruption;
mod health;
mod travel;
pub mod types;

pub use types::*;

use crate::config::IropsConfig;
use crate::engine::DisruptionEngine;
use crate::travel::TravelPipeline;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::limit::RequestBodyLimitLayer;

/// Maximum request body size (1 MB). Requests here are small structured
/// documents, not payload uploads.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub config: Arc<IropsConfig>,
    pub engine: DisruptionEngine,
    pub travel: TravelPipeline,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Arc<IropsConfig>, engine: DisruptionEngine, travel: TravelPipeline) -> Self {
        Self {
            config,
            engine,
            travel,
            start_time: Instant::now(),
        }
    }
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/disruptions/resolve", post(disruption::handle))
        .route("/v1/travel/evaluate", post(travel::handle))
        .route("/health", get(health::handle))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .with_state(state)
}
