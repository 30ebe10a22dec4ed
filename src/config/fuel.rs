//! Fuel tankering economics parameters

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Parameters for the fuel tankering cost/benefit model.
///
/// The evaluator computes `net_savings = price_diff * tanker_mass_kg -
/// tanker_mass_kg * burn_penalty_rate * flight_duration_hours` and recommends
/// tankering when the result clears `savings_threshold`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelConfig {
    /// Planned flight duration in hours
    pub flight_duration_hours: f64,
    /// Candidate extra fuel mass in kilograms
    pub tanker_mass_kg: f64,
    /// Extra burn caused by the added mass, as a fraction of mass per hour
    pub burn_penalty_rate: f64,
    /// Minimum net savings (currency units) before tankering is recommended
    pub savings_threshold: f64,
    /// Unit price assumed for airports missing from the price table
    pub par_price: f64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            flight_duration_hours: 13.0,
            tanker_mass_kg: 5000.0,
            burn_penalty_rate: 0.03,
            savings_threshold: 1000.0,
            par_price: 1.0,
        }
    }
}

impl FuelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tanker_mass_kg <= 0.0 {
            return Err(ConfigError::Validation {
                field: "fuel.tanker_mass_kg".to_string(),
                message: "mass must be positive".to_string(),
            });
        }
        if self.burn_penalty_rate < 0.0 {
            return Err(ConfigError::Validation {
                field: "fuel.burn_penalty_rate".to_string(),
                message: "penalty rate cannot be negative".to_string(),
            });
        }
        if self.flight_duration_hours < 0.0 {
            return Err(ConfigError::Validation {
                field: "fuel.flight_duration_hours".to_string(),
                message: "duration cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_config_defaults() {
        let config = FuelConfig::default();
        assert_eq!(config.flight_duration_hours, 13.0);
        assert_eq!(config.tanker_mass_kg, 5000.0);
        assert_eq!(config.burn_penalty_rate, 0.03);
        assert_eq!(config.savings_threshold, 1000.0);
        assert_eq!(config.par_price, 1.0);
    }

    #[test]
    fn test_fuel_config_rejects_zero_mass() {
        let config = FuelConfig {
            tanker_mass_kg: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fuel_config_rejects_negative_rate() {
        let config = FuelConfig {
            burn_penalty_rate: -0.01,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
