//! MEL dispatch-legality matcher.
//!
//! Resolves a free-text fault report against the legality database: exact
//! case-insensitive lookup first, then a fuzzy pass over every description
//! registered for the aircraft type. A fuzzy resolution annotates the reason
//! and records the original text in `matched_from`. No resolvable entry is a
//! normal outcome (`DispatchAction::Unknown`), not an error.

pub mod database;
pub mod similarity;

pub use database::{MelDatabase, MelEntry};

use super::DomainEvaluator;
use crate::audit::{AuditError, AuditRecord, AuditSink};
use crate::config::MelConfig;
use crate::context::FlightContext;
use crate::decision::{Decision, DispatchAction};
use serde_json::json;
use std::sync::Arc;

const NO_ENTRY_REASON: &str = "No MEL entry found";

/// Exact + fuzzy fault matcher over the MEL database.
pub struct MelEvaluator {
    config: MelConfig,
    database: MelDatabase,
    audit: Arc<dyn AuditSink>,
}

impl MelEvaluator {
    pub fn new(config: MelConfig, database: MelDatabase, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            config,
            database,
            audit,
        }
    }

    /// Resolve a reported fault for an aircraft type.
    fn resolve(&self, aircraft_type: &str, reported: &str) -> Decision {
        let reported = reported.trim();
        let entries = match self.database.entries_for(aircraft_type) {
            Some(entries) if !reported.is_empty() => entries,
            _ => return Self::unknown(),
        };

        // Exact match, case-insensitive: return the entry unmodified.
        let reported_lower = reported.to_lowercase();
        for (fault, entry) in entries {
            if fault.to_lowercase() == reported_lower {
                return Decision::Mel {
                    action: entry.action,
                    reason: entry.reason.clone(),
                    defer_days: entry.defer_days,
                    matched_from: None,
                };
            }
        }

        // Fuzzy pass. Entries iterate in lexicographic fault order and only
        // a strictly greater score replaces the current best, so ties go to
        // the lexicographically smallest description.
        let mut best: Option<(&str, &MelEntry, f64)> = None;
        for (fault, entry) in entries {
            let score = similarity::best_window_ratio(&reported_lower, &fault.to_lowercase());
            if score < self.config.fuzzy_cutoff {
                continue;
            }
            if best.map_or(true, |(_, _, s)| score > s) {
                best = Some((fault, entry, score));
            }
        }

        match best {
            Some((fault, entry, score)) => {
                tracing::debug!(
                    aircraft_type,
                    reported,
                    matched = fault,
                    score,
                    "fuzzy MEL resolution"
                );
                Decision::Mel {
                    action: entry.action,
                    reason: format!("{} (fuzzy matched to '{}')", entry.reason, fault),
                    defer_days: entry.defer_days,
                    matched_from: Some(reported.to_string()),
                }
            }
            None => Self::unknown(),
        }
    }

    fn unknown() -> Decision {
        Decision::Mel {
            action: DispatchAction::Unknown,
            reason: NO_ENTRY_REASON.to_string(),
            defer_days: 0,
            matched_from: None,
        }
    }
}

impl DomainEvaluator for MelEvaluator {
    fn name(&self) -> &'static str {
        "MelAgent"
    }

    fn evaluate(&self, context: &mut FlightContext) -> Result<Decision, AuditError> {
        let decision = self.resolve(&context.aircraft_type, &context.reported_fault);
        context.log(self.name(), decision.reason().to_string());

        self.audit.append(&AuditRecord::new(
            self.name(),
            &context.flight_id,
            json!({
                "aircraft_type": context.aircraft_type,
                "reported_fault": context.reported_fault,
            }),
            serde_json::to_value(&decision)?,
        ))?;

        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAuditSink;

    fn evaluator() -> MelEvaluator {
        MelEvaluator::new(
            MelConfig::default(),
            MelDatabase::builtin(),
            Arc::new(MemoryAuditSink::new()),
        )
    }

    fn context(aircraft: &str, fault: &str) -> FlightContext {
        let mut ctx = FlightContext::new("QF11", aircraft, "SYD", "LAX", 180);
        ctx.reported_fault = fault.to_string();
        ctx
    }

    #[test]
    fn exact_match_returns_entry_unmodified() {
        let mut ctx = context("B747", "APU inop");
        let decision = evaluator().evaluate(&mut ctx).unwrap();

        match decision {
            Decision::Mel {
                action,
                reason,
                defer_days,
                matched_from,
            } => {
                assert_eq!(action, DispatchAction::FlyWithRestriction);
                assert_eq!(reason, "Allowed with ground power at departure");
                assert_eq!(defer_days, 10);
                assert!(matched_from.is_none());
            }
            other => panic!("expected MEL decision, got {:?}", other),
        }
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let mut ctx = context("B747", "apu INOP");
        let decision = evaluator().evaluate(&mut ctx).unwrap();

        match decision {
            Decision::Mel { defer_days, matched_from, .. } => {
                assert_eq!(defer_days, 10);
                assert!(matched_from.is_none());
            }
            other => panic!("expected MEL decision, got {:?}", other),
        }
    }

    #[test]
    fn shorthand_report_fuzzy_matches_radar_entry() {
        let mut ctx = context("B747", "radar out");
        let decision = evaluator().evaluate(&mut ctx).unwrap();

        match decision {
            Decision::Mel {
                action,
                reason,
                defer_days,
                matched_from,
            } => {
                assert_eq!(action, DispatchAction::NoGo);
                assert_eq!(defer_days, 0);
                assert!(reason.contains("Weather radar inop"));
                assert!(reason.contains("fuzzy"));
                assert_eq!(matched_from.as_deref(), Some("radar out"));
            }
            other => panic!("expected MEL decision, got {:?}", other),
        }
    }

    #[test]
    fn dissimilar_report_returns_unknown() {
        let mut ctx = context("B747", "coffee maker broken beyond repair");
        let decision = evaluator().evaluate(&mut ctx).unwrap();

        match decision {
            Decision::Mel { action, reason, defer_days, .. } => {
                assert_eq!(action, DispatchAction::Unknown);
                assert_eq!(reason, "No MEL entry found");
                assert_eq!(defer_days, 0);
            }
            other => panic!("expected MEL decision, got {:?}", other),
        }
    }

    #[test]
    fn empty_report_returns_unknown() {
        let mut ctx = context("B747", "   ");
        let decision = evaluator().evaluate(&mut ctx).unwrap();
        assert_eq!(decision.action(), "Unknown");
    }

    #[test]
    fn unregistered_aircraft_type_returns_unknown() {
        let mut ctx = context("A380", "APU inop");
        let decision = evaluator().evaluate(&mut ctx).unwrap();
        assert_eq!(decision.action(), "Unknown");
    }

    #[test]
    fn fuzzy_tie_breaks_to_lexicographically_smallest() {
        let mut db = MelDatabase::default();
        // Both entries are equally similar to the report below.
        db.insert(
            "B747",
            "crake fan fail",
            DispatchAction::NoGo,
            "Second entry",
            0,
        );
        db.insert(
            "B747",
            "brake fan fail",
            DispatchAction::FlyWithRestriction,
            "First entry",
            5,
        );

        let eval = MelEvaluator::new(
            MelConfig::default(),
            db,
            Arc::new(MemoryAuditSink::new()),
        );
        let mut ctx = context("B747", "drake fan fail");
        let decision = eval.evaluate(&mut ctx).unwrap();

        match decision {
            Decision::Mel { action, reason, .. } => {
                assert_eq!(action, DispatchAction::FlyWithRestriction);
                assert!(reason.contains("brake fan fail"));
            }
            other => panic!("expected MEL decision, got {:?}", other),
        }
    }

    #[test]
    fn each_invocation_appends_one_audit_record() {
        let sink = Arc::new(MemoryAuditSink::new());
        let eval = MelEvaluator::new(
            MelConfig::default(),
            MelDatabase::builtin(),
            Arc::clone(&sink) as Arc<dyn AuditSink>,
        );

        let mut ctx = context("B747", "radar out");
        eval.evaluate(&mut ctx).unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].agent, "MelAgent");
        assert_eq!(records[0].input["aircraft_type"], "B747");
        assert_eq!(records[0].input["reported_fault"], "radar out");
        assert_eq!(records[0].outcome["action"], "no_go");
    }

    #[test]
    fn context_log_receives_resolution_reason() {
        let mut ctx = context("B747", "Landing gear issue");
        evaluator().evaluate(&mut ctx).unwrap();

        assert_eq!(ctx.log_entries().len(), 1);
        assert_eq!(
            ctx.log_entries()[0].message,
            "Landing gear must be fully operational"
        );
    }
}
