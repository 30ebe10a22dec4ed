//! Domain evaluator abstraction.
//!
//! Each disruption domain (crew legality, fuel economics, MEL dispatch
//! legality) implements `DomainEvaluator` and is consulted independently by
//! the engine; the ops resolver merges the resulting decisions. Production
//! implementations plug in behind the trait without touching arbitration.

pub mod crew;
pub mod fuel;
pub mod mel;

pub use crew::CrewEvaluator;
pub use fuel::FuelEvaluator;
pub use mel::MelEvaluator;

use crate::audit::AuditError;
use crate::context::FlightContext;
use crate::decision::Decision;

/// Unified interface for disruption domain evaluators.
///
/// Evaluation is synchronous and pure apart from two side effects: entries
/// appended to the context log and one record appended to the audit sink.
/// Input-validation failures and no-match conditions are expressed as
/// rejection-shaped decisions, never as errors; the only `Err` an evaluator
/// may return is a failed audit append.
pub trait DomainEvaluator: Send + Sync {
    /// Agent name used in log entries and audit records.
    fn name(&self) -> &'static str;

    /// Evaluate the context and return a structured decision.
    fn evaluate(&self, context: &mut FlightContext) -> Result<Decision, AuditError>;
}
