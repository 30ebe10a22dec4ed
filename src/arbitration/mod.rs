//! Ops resolver: merges the crew, fuel, and MEL decisions into one final
//! operational action.
//!
//! This is a small finite decision table, not a rule engine. Rules are
//! evaluated in strict priority order and the first match wins; earlier
//! rules shadow later ones, so the ordering below is part of the contract:
//!
//! 1. any action "Cancel"                          -> Cancel flight
//! 2. crew reason: no legal reserve available      -> Delay or re-crew
//! 3. MEL action Unknown                           -> Hold for maintenance
//! 4. crew suggests delay and fuel says no tanker  -> Delay flight
//! 5. otherwise                                    -> Proceed

use crate::audit::{AuditError, AuditRecord, AuditSink};
use crate::context::FlightContext;
use crate::decision::{Decision, DispatchAction, FinalDecision, FuelAction, OpsAction};
use serde_json::json;
use std::sync::Arc;

/// Deterministic arbitration policy over the three domain decisions.
pub struct OpsResolver {
    audit: Arc<dyn AuditSink>,
}

impl OpsResolver {
    pub fn new(audit: Arc<dyn AuditSink>) -> Self {
        Self { audit }
    }

    pub fn name(&self) -> &'static str {
        "OpsResolver"
    }

    /// Apply the decision table. Pure apart from one audit append.
    pub fn resolve(
        &self,
        context: &FlightContext,
        crew: &Decision,
        fuel: &Decision,
        mel: &Decision,
    ) -> Result<FinalDecision, AuditError> {
        let final_decision = Self::apply_rules(crew, fuel, mel);

        tracing::info!(
            flight_id = %context.flight_id,
            action = %final_decision.action,
            "arbitration complete"
        );

        self.audit.append(&AuditRecord::new(
            self.name(),
            &context.flight_id,
            json!({
                "inputs": [crew.reason(), fuel.reason(), mel.reason()],
            }),
            serde_json::to_value(&final_decision)?,
        ))?;

        Ok(final_decision)
    }

    fn apply_rules(crew: &Decision, fuel: &Decision, mel: &Decision) -> FinalDecision {
        let any_cancel = [crew, fuel, mel].iter().any(|d| d.action() == "Cancel");

        let crew_no_reserve = crew.reason().contains("No legal reserve available");
        let mel_unknown = matches!(
            mel,
            Decision::Mel {
                action: DispatchAction::Unknown,
                ..
            }
        );
        let crew_suggests_delay = crew.action().starts_with("Suggest delay");
        let fuel_no_tankering = matches!(
            fuel,
            Decision::Fuel {
                action: FuelAction::NoTankering,
                ..
            }
        );

        if any_cancel {
            FinalDecision {
                action: OpsAction::CancelFlight,
                reason: format!(
                    "Cancellation required due to agent input: {}; {}; {}",
                    crew.reason(),
                    fuel.reason(),
                    mel.reason()
                ),
            }
        } else if crew_no_reserve {
            FinalDecision {
                action: OpsAction::DelayOrRecrew,
                reason: format!("Crew unavailable within legal limits: {}", crew.reason()),
            }
        } else if mel_unknown {
            FinalDecision {
                action: OpsAction::HoldForMaintenance,
                reason: format!("Unlisted MEL item needs manual review: {}", mel.reason()),
            }
        } else if crew_suggests_delay && fuel_no_tankering {
            FinalDecision {
                action: OpsAction::DelayFlight,
                reason: format!(
                    "Crew legal after delay; MEL deferred; fuel impact low. ({}; {}; {})",
                    crew.reason(),
                    fuel.reason(),
                    mel.reason()
                ),
            }
        } else {
            FinalDecision {
                action: OpsAction::Proceed,
                reason: format!(
                    "All inputs within operational tolerance. ({}; {}; {})",
                    crew.reason(),
                    fuel.reason(),
                    mel.reason()
                ),
            }
        }
    }
}
