//! Disruption resolution engine.
//!
//! Wires the three domain evaluators and the ops resolver together: the
//! context is built once by the caller, each evaluator consumes it
//! independently, and the resolver merges their decisions into the final
//! operational action.

use crate::arbitration::OpsResolver;
use crate::audit::{AuditError, AuditSink};
use crate::config::{ConfigError, IropsConfig};
use crate::context::FlightContext;
use crate::decision::{Decision, FinalDecision};
use crate::evaluator::mel::MelDatabase;
use crate::evaluator::{CrewEvaluator, DomainEvaluator, FuelEvaluator, MelEvaluator};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by a resolution run. Domain evaluators never raise for
/// input-validation or no-match conditions, so the only runtime failure is
/// the audit sink.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Audit sink failure: {0}")]
    Audit(#[from] AuditError),
}

/// Everything one resolution run produced: the three independent decisions
/// and the arbitrated final decision.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub crew: Decision,
    pub fuel: Decision,
    pub mel: Decision,
    #[serde(rename = "final")]
    pub final_decision: FinalDecision,
}

/// Multi-agent disruption resolution engine.
pub struct DisruptionEngine {
    crew: Box<dyn DomainEvaluator>,
    fuel: Box<dyn DomainEvaluator>,
    mel: Box<dyn DomainEvaluator>,
    resolver: OpsResolver,
}

impl DisruptionEngine {
    /// Build an engine from configuration, loading the MEL database from the
    /// configured path (or the built-in table when none is set).
    pub fn from_config(
        config: &IropsConfig,
        audit: Arc<dyn AuditSink>,
    ) -> Result<Self, ConfigError> {
        let database = match &config.mel.database_path {
            Some(path) => MelDatabase::load(path)?,
            None => MelDatabase::builtin(),
        };
        Ok(Self::new(config, database, audit))
    }

    pub fn new(config: &IropsConfig, database: MelDatabase, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            crew: Box::new(CrewEvaluator::new()),
            fuel: Box::new(FuelEvaluator::new(config.fuel, Arc::clone(&audit))),
            mel: Box::new(MelEvaluator::new(
                config.mel.clone(),
                database,
                Arc::clone(&audit),
            )),
            resolver: OpsResolver::new(audit),
        }
    }

    /// Replace the crew legality stub with a production implementation.
    pub fn with_crew_evaluator(mut self, crew: Box<dyn DomainEvaluator>) -> Self {
        self.crew = crew;
        self
    }

    /// Run every evaluator over the context and arbitrate.
    pub fn resolve(&self, context: &mut FlightContext) -> Result<Resolution, EngineError> {
        tracing::info!(
            flight_id = %context.flight_id,
            aircraft_type = %context.aircraft_type,
            delay_minutes = context.delay_minutes,
            "resolving disruption"
        );

        let mel = self.mel.evaluate(context)?;
        let crew = self.crew.evaluate(context)?;
        let fuel = self.fuel.evaluate(context)?;

        let final_decision = self.resolver.resolve(context, &crew, &fuel, &mel)?;

        Ok(Resolution {
            crew,
            fuel,
            mel,
            final_decision,
        })
    }
}
