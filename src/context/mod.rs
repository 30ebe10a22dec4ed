//! Decision contexts passed to the domain evaluators.
//!
//! A context is built once per evaluation run, identifies the disrupted
//! flight (or repositioning request), and owns an append-only log that the
//! evaluators annotate as they run. Contexts are never shared across
//! requests; the audit sink is the only cross-request resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry in a context's append-only log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub agent: String,
    pub message: String,
}

/// Input bundle for one disrupted flight.
///
/// Immutable per run apart from [`FlightContext::log`]; scoped to a single
/// evaluation and dropped when the run completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightContext {
    pub flight_id: String,
    pub aircraft_type: String,
    pub origin: String,
    pub destination: String,
    pub delay_minutes: i64,
    /// Fuel unit price per airport code
    #[serde(default)]
    pub fuel_prices: HashMap<String, f64>,
    /// Free-text fault report to resolve against the MEL database
    #[serde(default)]
    pub reported_fault: String,
    #[serde(default)]
    log: Vec<LogEntry>,
}

impl FlightContext {
    pub fn new(
        flight_id: impl Into<String>,
        aircraft_type: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        delay_minutes: i64,
    ) -> Self {
        Self {
            flight_id: flight_id.into(),
            aircraft_type: aircraft_type.into(),
            origin: origin.into(),
            destination: destination.into(),
            delay_minutes,
            fuel_prices: HashMap::new(),
            reported_fault: String::new(),
            log: Vec::new(),
        }
    }

    /// Append one entry to the run log. This is the only mutation a context
    /// permits after construction.
    pub fn log(&mut self, agent: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(agent, %message, flight_id = %self.flight_id, "context log");
        self.log.push(LogEntry {
            timestamp: Utc::now(),
            agent: agent.to_string(),
            message,
        });
    }

    pub fn log_entries(&self) -> &[LogEntry] {
        &self.log
    }
}

/// Schedule stub attached to a repositioning request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleStub {
    /// Airport where the crew member signs on for duty; falls back to the
    /// home base when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_on_airport: Option<String>,
}

/// Input bundle for one crew repositioning request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelContext {
    pub crew_id: String,
    pub name: String,
    /// Home base airport code
    pub base: String,
    /// Company-designated gateway airport code
    pub gateway: String,
    /// Travel category; only "gateway" is currently implemented
    pub travel_type: String,
    /// Duty start as an RFC 3339 timestamp. Kept as raw text because an
    /// unparseable value must yield a rejection decision, not an error.
    pub duty_start_time: String,
    #[serde(default)]
    pub preferred_airlines: Vec<String>,
    #[serde(default)]
    pub seat_preference: String,
    /// Requested class of service ("business" or "economy")
    #[serde(default)]
    pub class_of_service: String,
    #[serde(default)]
    pub schedule: ScheduleStub,
    /// Per-request override of the contractual report-to-duty gap, minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_report_gap_minutes: Option<i64>,
    #[serde(default)]
    log: Vec<LogEntry>,
}

impl TravelContext {
    pub fn new(
        crew_id: impl Into<String>,
        name: impl Into<String>,
        base: impl Into<String>,
        gateway: impl Into<String>,
        travel_type: impl Into<String>,
        duty_start_time: impl Into<String>,
    ) -> Self {
        Self {
            crew_id: crew_id.into(),
            name: name.into(),
            base: base.into(),
            gateway: gateway.into(),
            travel_type: travel_type.into(),
            duty_start_time: duty_start_time.into(),
            preferred_airlines: Vec::new(),
            seat_preference: String::new(),
            class_of_service: String::new(),
            schedule: ScheduleStub::default(),
            max_report_gap_minutes: None,
            log: Vec::new(),
        }
    }

    /// Append one entry to the run log.
    pub fn log(&mut self, agent: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(agent, %message, crew_id = %self.crew_id, "context log");
        self.log.push(LogEntry {
            timestamp: Utc::now(),
            agent: agent.to_string(),
            message,
        });
    }

    pub fn log_entries(&self) -> &[LogEntry] {
        &self.log
    }

    /// Destination airport for alternate-deadhead search.
    pub fn sign_on_airport(&self) -> &str {
        self.schedule.sign_on_airport.as_deref().unwrap_or(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_context_log_is_append_only() {
        let mut ctx = FlightContext::new("QF11", "B747", "SYD", "LAX", 180);
        ctx.log("FuelAgent", "first");
        ctx.log("MelAgent", "second");

        let entries = ctx.log_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].agent, "FuelAgent");
        assert_eq!(entries[1].message, "second");
    }

    #[test]
    fn sign_on_airport_falls_back_to_base() {
        let ctx = TravelContext::new(
            "C100",
            "Jordan Avery",
            "SFO",
            "LAX",
            "gateway",
            "2026-09-01T08:00:00Z",
        );
        assert_eq!(ctx.sign_on_airport(), "SFO");
    }

    #[test]
    fn sign_on_airport_prefers_schedule() {
        let mut ctx = TravelContext::new(
            "C100",
            "Jordan Avery",
            "SFO",
            "LAX",
            "gateway",
            "2026-09-01T08:00:00Z",
        );
        ctx.schedule.sign_on_airport = Some("JFK".to_string());
        assert_eq!(ctx.sign_on_airport(), "JFK");
    }
}
