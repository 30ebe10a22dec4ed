//! Crew legality evaluator (stub).
//!
//! Placeholder producing a fixed-shape verdict until the rostering system
//! integration lands. Kept behind `DomainEvaluator` so the production
//! implementation replaces it without touching the resolver.

use super::DomainEvaluator;
use crate::audit::AuditError;
use crate::context::FlightContext;
use crate::decision::Decision;

/// Fixed-response crew legality stub.
#[derive(Debug, Default)]
pub struct CrewEvaluator;

impl CrewEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl DomainEvaluator for CrewEvaluator {
    fn name(&self) -> &'static str {
        "CrewAgent"
    }

    fn evaluate(&self, context: &mut FlightContext) -> Result<Decision, AuditError> {
        context.log(self.name(), "Evaluating crew legality.");
        Ok(Decision::Crew {
            action: "Suggest delay".to_string(),
            reason: format!(
                "Best candidate legal with {} min delay",
                context.delay_minutes
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crew_stub_suggests_delay() {
        let mut ctx = FlightContext::new("QF11", "B747", "SYD", "LAX", 180);
        let decision = CrewEvaluator::new().evaluate(&mut ctx).unwrap();

        assert_eq!(decision.action(), "Suggest delay");
        assert!(decision.reason().contains("180 min"));
        assert_eq!(ctx.log_entries().len(), 1);
    }
}
