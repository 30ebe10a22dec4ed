//! Flight option scoring weights

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Weights for scoring candidate reposition flights.
///
/// The score is a weighted multi-criteria heuristic, not an optimisation
/// proof: a fixed base plus additive bonuses/penalties. Keeping the weights
/// here lets operations tune preferences without touching the ranking code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score every candidate starts from
    pub base: f64,
    /// Bonus when the airline is on the crew member's preferred list
    pub preferred_airline_bonus: f64,
    /// Penalty when the airline is not on the preferred list
    pub other_airline_penalty: f64,
    /// Bonus when the crew member prefers a window seat
    pub window_seat_bonus: f64,
    /// Bonus when the candidate's class of service matches the request
    pub class_match_bonus: f64,
    /// Penalty per hour of absolute offset between departure and duty start
    pub hour_offset_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base: 1000.0,
            preferred_airline_bonus: 200.0,
            other_airline_penalty: 100.0,
            window_seat_bonus: 50.0,
            class_match_bonus: 150.0,
            hour_offset_penalty: 10.0,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scoring.preferred_airline_bonus", self.preferred_airline_bonus),
            ("scoring.other_airline_penalty", self.other_airline_penalty),
            ("scoring.window_seat_bonus", self.window_seat_bonus),
            ("scoring.class_match_bonus", self.class_match_bonus),
            ("scoring.hour_offset_penalty", self.hour_offset_penalty),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: "weights are magnitudes and cannot be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}
