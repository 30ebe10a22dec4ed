//! Travel eligibility evaluation.
//!
//! A three-gate sequential filter over a repositioning request; each gate
//! short-circuits. Input problems (unparseable timestamp, unsupported travel
//! type) produce well-formed rejection decisions, never errors.

use crate::config::TravelConfig;
use crate::context::TravelContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict on one repositioning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelAction {
    Approve,
    Reject,
}

impl fmt::Display for TravelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelAction::Approve => write!(f, "Approve travel"),
            TravelAction::Reject => write!(f, "Reject travel"),
        }
    }
}

/// Eligibility decision, echoing the crew's preferences for downstream use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelDecision {
    pub action: TravelAction,
    pub reason: String,
    /// Whole minutes from evaluation time to duty start; absent when the
    /// duty start timestamp could not be parsed
    pub minutes_to_report: Option<i64>,
    #[serde(default)]
    pub preferred_airlines: Vec<String>,
    #[serde(default)]
    pub seat_preference: String,
}

impl TravelDecision {
    fn reject(reason: impl Into<String>, minutes_to_report: Option<i64>) -> Self {
        Self {
            action: TravelAction::Reject,
            reason: reason.into(),
            minutes_to_report,
            preferred_airlines: Vec::new(),
            seat_preference: String::new(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.action == TravelAction::Approve
    }
}

/// Parse a duty start timestamp in RFC 3339 form.
pub fn parse_duty_start(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Contractual eligibility gate for crew repositioning.
pub struct TravelEvaluator {
    config: TravelConfig,
}

impl TravelEvaluator {
    pub fn new(config: TravelConfig) -> Self {
        Self { config }
    }

    /// Evaluate against the current clock.
    pub fn evaluate(&self, context: &mut TravelContext) -> TravelDecision {
        self.evaluate_at(context, Utc::now())
    }

    /// Evaluate against an explicit clock. Eligibility is monotonic in the
    /// report gap: once the gap exceeds the cutoff, every larger gap is also
    /// rejected.
    pub fn evaluate_at(&self, context: &mut TravelContext, now: DateTime<Utc>) -> TravelDecision {
        let Some(duty_start) = parse_duty_start(&context.duty_start_time) else {
            context.log(
                "TravelAgent",
                format!("Unparseable duty start: {}", context.duty_start_time),
            );
            return TravelDecision::reject("Invalid datetime format for duty_start_time", None);
        };

        let minutes_to_report = (duty_start - now).num_minutes();
        context.log(
            "TravelAgent",
            format!("Time to report: {} minutes", minutes_to_report),
        );

        if context.travel_type != "gateway" {
            return TravelDecision::reject(
                "Only gateway travel supported in current prototype",
                Some(minutes_to_report),
            );
        }
        context.log("TravelAgent", "Gateway travel authorized based on travel_type");

        let max_gap = context
            .max_report_gap_minutes
            .unwrap_or(self.config.max_report_gap_minutes);
        if minutes_to_report > max_gap {
            return TravelDecision::reject(
                format!(
                    "Report time too far from duty period (more than {} mins)",
                    max_gap
                ),
                Some(minutes_to_report),
            );
        }

        context.log(
            "TravelAgent",
            format!(
                "Checking preferences: airline {:?}, seat {}",
                context.preferred_airlines, context.seat_preference
            ),
        );

        TravelDecision {
            action: TravelAction::Approve,
            reason: "Travel falls within CBA/LOA bounds and preferences captured.".to_string(),
            minutes_to_report: Some(minutes_to_report),
            preferred_airlines: context.preferred_airlines.clone(),
            seat_preference: context.seat_preference.clone(),
        }
    }
}
