//! Decision types produced by the domain evaluators and the ops resolver.
//!
//! Every evaluator returns the same uniform shape - an action, a reason, and
//! agent-specific extras - modelled as a tagged enum rather than a generic
//! mapping so the arbitration layer only ever sees well-formed decisions.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Dispatch legality outcome from the MEL database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchAction {
    FlyWithoutRestriction,
    FlyWithRestriction,
    NoGo,
    /// No MEL entry resolved for the reported fault
    Unknown,
}

impl fmt::Display for DispatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DispatchAction::FlyWithoutRestriction => "Fly without restriction",
            DispatchAction::FlyWithRestriction => "Fly with restriction",
            DispatchAction::NoGo => "No-go",
            DispatchAction::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Fuel tankering recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelAction {
    Tanker,
    NoTankering,
}

impl fmt::Display for FuelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FuelAction::Tanker => "Tanker",
            FuelAction::NoTankering => "No tankering",
        };
        f.write_str(s)
    }
}

/// Output of one domain evaluator.
///
/// The variant identifies the agent; each carries the extras that agent is
/// contractually required to report. Actions and reasons are always
/// non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "agent", rename_all = "snake_case")]
pub enum Decision {
    /// Crew legality verdict. The action vocabulary is free-form ("Suggest
    /// delay ...", "Cancel") because production crew systems phrase their
    /// verdicts; the resolver matches on prefixes.
    Crew { action: String, reason: String },
    /// Fuel tankering economics with the full numeric breakdown.
    Fuel {
        action: FuelAction,
        reason: String,
        savings: f64,
        penalty: f64,
        net_savings: f64,
    },
    /// MEL dispatch legality. `matched_from` holds the original reported
    /// text when the entry was resolved fuzzily.
    Mel {
        action: DispatchAction,
        reason: String,
        defer_days: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        matched_from: Option<String>,
    },
}

impl Decision {
    /// The evaluator that produced this decision.
    pub fn agent(&self) -> &'static str {
        match self {
            Decision::Crew { .. } => "CrewAgent",
            Decision::Fuel { .. } => "FuelAgent",
            Decision::Mel { .. } => "MelAgent",
        }
    }

    /// Human-readable action label, uniform across agents.
    pub fn action(&self) -> Cow<'_, str> {
        match self {
            Decision::Crew { action, .. } => Cow::Borrowed(action.as_str()),
            Decision::Fuel { action, .. } => Cow::Owned(action.to_string()),
            Decision::Mel { action, .. } => Cow::Owned(action.to_string()),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Decision::Crew { reason, .. }
            | Decision::Fuel { reason, .. }
            | Decision::Mel { reason, .. } => reason,
        }
    }
}

/// Final operational action chosen by the ops resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpsAction {
    CancelFlight,
    DelayOrRecrew,
    HoldForMaintenance,
    DelayFlight,
    Proceed,
}

impl fmt::Display for OpsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpsAction::CancelFlight => "Cancel flight",
            OpsAction::DelayOrRecrew => "Delay or re-crew",
            OpsAction::HoldForMaintenance => "Hold for maintenance",
            OpsAction::DelayFlight => "Delay flight",
            OpsAction::Proceed => "Proceed",
        };
        f.write_str(s)
    }
}

/// Output of arbitration: one action and a consolidated reason derived from
/// the contributing decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalDecision {
    pub action: OpsAction,
    pub reason: String,
}
