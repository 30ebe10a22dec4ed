//! Crew repositioning pipeline.
//!
//! A separate flow from disruption resolution: the eligibility gate runs
//! first, and only on approval does the pipeline search for an alternate
//! deadhead, score the candidates, and fire the booking step. One audit
//! record is appended per request, keyed by crew id.

pub mod alternate;
pub mod booking;
pub mod eligibility;
pub mod scoring;
pub mod search;

pub use alternate::{AlternateOutcome, AlternateSelector};
pub use booking::{BookingConfirmation, BookingError, BookingProvider, StubBookingProvider};
pub use eligibility::{TravelAction, TravelDecision, TravelEvaluator};
pub use search::{FlightOption, FlightSearch, MockFlightSearch, SearchError, SkyscannerSearch};

use crate::audit::{AuditError, AuditRecord, AuditSink};
use crate::config::{IropsConfig, ScoringConfig};
use crate::context::TravelContext;
use crate::travel::eligibility::parse_duty_start;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

/// Crew preferences passed through search and scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelPreferences {
    pub preferred_airlines: Vec<String>,
    pub seat_preference: String,
    pub class_of_service: String,
}

impl From<&TravelContext> for TravelPreferences {
    fn from(context: &TravelContext) -> Self {
        Self {
            preferred_airlines: context.preferred_airlines.clone(),
            seat_preference: context.seat_preference.clone(),
            class_of_service: context.class_of_service.clone(),
        }
    }
}

/// Errors surfaced by a travel pipeline run. Input problems are rejections,
/// not errors; these cover the external collaborators only.
#[derive(Error, Debug)]
pub enum TravelError {
    #[error("Flight search failure: {0}")]
    Search(#[from] SearchError),

    #[error("Booking failure: {0}")]
    Booking(#[from] BookingError),

    #[error("Audit sink failure: {0}")]
    Audit(#[from] AuditError),
}

/// Everything one repositioning request produced.
#[derive(Debug, Clone, Serialize)]
pub struct TravelOutcome {
    pub decision: TravelDecision,
    /// Present only when the eligibility gate approved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate: Option<AlternateOutcome>,
    /// Scored candidates, best first; present only on approval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked_options: Option<Vec<FlightOption>>,
    /// Present only when an alternate was selected and booked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingConfirmation>,
}

/// End-to-end repositioning pipeline: eligibility, alternate selection,
/// scoring, booking.
pub struct TravelPipeline {
    evaluator: TravelEvaluator,
    selector: AlternateSelector,
    scoring: ScoringConfig,
    search: Arc<dyn FlightSearch>,
    booking: Arc<dyn BookingProvider>,
    audit: Arc<dyn AuditSink>,
}

impl TravelPipeline {
    pub fn new(
        config: &IropsConfig,
        search: Arc<dyn FlightSearch>,
        booking: Arc<dyn BookingProvider>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            evaluator: TravelEvaluator::new(config.travel.clone()),
            selector: AlternateSelector::new(config.travel.clone()),
            scoring: config.scoring,
            search,
            booking,
            audit,
        }
    }

    /// Process one repositioning request against the current clock.
    pub async fn process(
        &self,
        context: &mut TravelContext,
        original_deadhead_price: f64,
    ) -> Result<TravelOutcome, TravelError> {
        self.process_at(context, original_deadhead_price, Utc::now())
            .await
    }

    /// Process against an explicit clock.
    pub async fn process_at(
        &self,
        context: &mut TravelContext,
        original_deadhead_price: f64,
        now: DateTime<Utc>,
    ) -> Result<TravelOutcome, TravelError> {
        tracing::info!(
            crew_id = %context.crew_id,
            travel_type = %context.travel_type,
            "processing repositioning request"
        );

        let decision = self.evaluator.evaluate_at(context, now);

        // The first eligibility gate guarantees a parseable duty start on
        // the approved path.
        let duty_start = parse_duty_start(&context.duty_start_time);

        let outcome = if let (true, Some(duty_start)) = (decision.is_approved(), duty_start) {
            // One provider call serves both selection and ranking, so the
            // ranked list always agrees with the candidate set the selector
            // saw.
            let preferences = TravelPreferences::from(&*context);
            let origin = context.gateway.clone();
            let destination = context.sign_on_airport().to_string();
            let options = self
                .search
                .search(&origin, &destination, duty_start.date_naive(), &preferences)
                .await?;

            let alternate =
                self.selector
                    .evaluate(context, original_deadhead_price, duty_start, &options);

            let booking = match alternate.selected() {
                Some(option) => Some(self.booking.book(option).await?),
                None => None,
            };

            let ranked_options =
                scoring::rank_options(options, &preferences, duty_start, &self.scoring);
            if let Some(best) = ranked_options.first() {
                context.log(
                    "TravelAgent",
                    format!(
                        "Top recommendation {} {} scored {:.2}",
                        best.airline,
                        best.flight_number,
                        best.score.unwrap_or_default()
                    ),
                );
            }

            TravelOutcome {
                decision,
                alternate: Some(alternate),
                ranked_options: Some(ranked_options),
                booking,
            }
        } else {
            tracing::info!(
                crew_id = %context.crew_id,
                reason = %decision.reason,
                "travel rejected, skipping flight search"
            );
            TravelOutcome {
                decision,
                alternate: None,
                ranked_options: None,
                booking: None,
            }
        };

        self.audit.append(&AuditRecord::new(
            "TravelAgent",
            &context.crew_id,
            json!({
                "travel_type": context.travel_type,
                "duty_start_time": context.duty_start_time,
                "gateway": context.gateway,
                "base": context.base,
                "class_of_service": context.class_of_service,
            }),
            serde_json::to_value(&outcome).map_err(AuditError::Serialize)?,
        ))?;

        Ok(outcome)
    }

}
