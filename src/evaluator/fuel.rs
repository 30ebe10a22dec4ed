//! Fuel tankering economics evaluator.
//!
//! Pure function of the origin/destination fuel prices plus one audit
//! append: carrying extra fuel from the cheaper airport saves
//! `price_diff * mass` but burns `mass * penalty_rate * duration` of it on
//! the way. Tankering is recommended only when the net clears the configured
//! threshold.

use super::DomainEvaluator;
use crate::audit::{AuditError, AuditRecord, AuditSink};
use crate::config::FuelConfig;
use crate::context::FlightContext;
use crate::decision::{Decision, FuelAction};
use serde_json::json;
use std::sync::Arc;

/// Tankering cost/benefit evaluator.
pub struct FuelEvaluator {
    config: FuelConfig,
    audit: Arc<dyn AuditSink>,
}

impl FuelEvaluator {
    pub fn new(config: FuelConfig, audit: Arc<dyn AuditSink>) -> Self {
        Self { config, audit }
    }
}

impl DomainEvaluator for FuelEvaluator {
    fn name(&self) -> &'static str {
        "FuelAgent"
    }

    fn evaluate(&self, context: &mut FlightContext) -> Result<Decision, AuditError> {
        let cfg = &self.config;

        // Airports missing from the price table default to par.
        let origin_price = context
            .fuel_prices
            .get(&context.origin)
            .copied()
            .unwrap_or(cfg.par_price);
        let dest_price = context
            .fuel_prices
            .get(&context.destination)
            .copied()
            .unwrap_or(cfg.par_price);

        let price_diff = dest_price - origin_price;
        let savings = price_diff * cfg.tanker_mass_kg;
        let penalty = cfg.tanker_mass_kg * cfg.burn_penalty_rate * cfg.flight_duration_hours;
        let net_savings = savings - penalty;

        let (action, reason) = if net_savings > cfg.savings_threshold {
            (
                FuelAction::Tanker,
                format!(
                    "Tanker {:.0}T saves approx ${:.2} after penalties.",
                    cfg.tanker_mass_kg / 1000.0,
                    net_savings
                ),
            )
        } else {
            (
                FuelAction::NoTankering,
                format!("Net savings only ${:.2}; not worth tankering.", net_savings),
            )
        };

        context.log(self.name(), reason.clone());

        let decision = Decision::Fuel {
            action,
            reason,
            savings,
            penalty,
            net_savings,
        };

        self.audit.append(&AuditRecord::new(
            self.name(),
            &context.flight_id,
            json!({
                "origin": context.origin,
                "destination": context.destination,
                "fuel_prices": context.fuel_prices,
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

    fn evaluator(sink: Arc<MemoryAuditSink>) -> FuelEvaluator {
        FuelEvaluator::new(FuelConfig::default(), sink)
    }

    fn context_with_prices(origin_price: f64, dest_price: f64) -> FlightContext {
        let mut ctx = FlightContext::new("QF11", "B747", "SYD", "LAX", 180);
        ctx.fuel_prices.insert("SYD".to_string(), origin_price);
        ctx.fuel_prices.insert("LAX".to_string(), dest_price);
        ctx
    }

    #[test]
    fn marginal_differential_is_not_worth_tankering() {
        // (0.40 * 5000) - (5000 * 0.03 * 13) = 2000 - 1950 = 50
        let sink = Arc::new(MemoryAuditSink::new());
        let mut ctx = context_with_prices(0.95, 1.35);
        let decision = evaluator(sink).evaluate(&mut ctx).unwrap();

        match decision {
            Decision::Fuel {
                action,
                net_savings,
                savings,
                penalty,
                ..
            } => {
                assert_eq!(action, FuelAction::NoTankering);
                assert!((savings - 2000.0).abs() < 1e-9);
                assert!((penalty - 1950.0).abs() < 1e-9);
                assert!((net_savings - 50.0).abs() < 1e-9);
            }
            other => panic!("expected fuel decision, got {:?}", other),
        }
    }

    #[test]
    fn large_differential_recommends_tankering() {
        let sink = Arc::new(MemoryAuditSink::new());
        let mut ctx = context_with_prices(0.80, 1.60);
        let decision = evaluator(sink).evaluate(&mut ctx).unwrap();

        // (0.80 * 5000) - 1950 = 2050 > 1000
        match decision {
            Decision::Fuel { action, net_savings, .. } => {
                assert_eq!(action, FuelAction::Tanker);
                assert!(net_savings > 1000.0);
            }
            other => panic!("expected fuel decision, got {:?}", other),
        }
    }

    #[test]
    fn missing_prices_default_to_par() {
        let sink = Arc::new(MemoryAuditSink::new());
        let mut ctx = FlightContext::new("QF12", "B747", "SYD", "LAX", 0);
        let decision = evaluator(sink).evaluate(&mut ctx).unwrap();

        // price_diff = 0, so net savings is exactly the burn penalty, negated
        match decision {
            Decision::Fuel { action, net_savings, .. } => {
                assert_eq!(action, FuelAction::NoTankering);
                assert!((net_savings + 1950.0).abs() < 1e-9);
            }
            other => panic!("expected fuel decision, got {:?}", other),
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let sink = Arc::new(MemoryAuditSink::new());
        let eval = evaluator(Arc::clone(&sink));

        let mut a = context_with_prices(0.95, 1.35);
        let mut b = context_with_prices(0.95, 1.35);
        let da = eval.evaluate(&mut a).unwrap();
        let db = eval.evaluate(&mut b).unwrap();

        match (da, db) {
            (Decision::Fuel { net_savings: x, .. }, Decision::Fuel { net_savings: y, .. }) => {
                assert_eq!(x, y);
            }
            _ => panic!("expected fuel decisions"),
        }
    }

    #[test]
    fn each_evaluation_appends_one_audit_record() {
        let sink = Arc::new(MemoryAuditSink::new());
        let eval = evaluator(Arc::clone(&sink));
        let mut ctx = context_with_prices(0.95, 1.35);

        eval.evaluate(&mut ctx).unwrap();
        eval.evaluate(&mut ctx).unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].agent, "FuelAgent");
        assert_eq!(records[0].subject, "QF11");
        assert_eq!(records[0].input["fuel_prices"]["SYD"], 0.95);
    }
}
