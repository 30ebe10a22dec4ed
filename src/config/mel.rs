//! MEL matcher parameters

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters for MEL (Minimum Equipment List) fault resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MelConfig {
    /// Minimum similarity (0-1) for a fuzzy match to be accepted
    pub fuzzy_cutoff: f64,
    /// Optional TOML file replacing the built-in legality database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Default for MelConfig {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: 0.6,
            database_path: None,
        }
    }
}

impl MelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fuzzy_cutoff) {
            return Err(ConfigError::Validation {
                field: "mel.fuzzy_cutoff".to_string(),
                message: format!("cutoff must be within 0..=1, got {}", self.fuzzy_cutoff),
            });
        }
        Ok(())
    }
}
