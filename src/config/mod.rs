//! Configuration module for Irops
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`IROPS_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use irops::config::IropsConfig;
//!
//! // Load defaults
//! let config = IropsConfig::default();
//! assert_eq!(config.server.port, 8000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [fuel]
//! savings_threshold = 1500.0
//! "#;
//! let config: IropsConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.fuel.savings_threshold, 1500.0);
//! ```

pub mod audit;
pub mod error;
pub mod fuel;
pub mod logging;
pub mod mel;
pub mod scoring;
pub mod server;
pub mod travel;

pub use audit::AuditConfig;
pub use error::ConfigError;
pub use fuel::FuelConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use mel::MelConfig;
pub use scoring::ScoringConfig;
pub use server::ServerConfig;
pub use travel::{SearchProvider, TravelConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the Irops engine.
///
/// Aggregates the server settings, logging, audit sink location, and the
/// per-domain evaluator parameters (fuel economics, MEL matching, travel
/// rules, flight scoring weights). Every operational threshold lives here so
/// it can be tuned without touching evaluator logic.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IropsConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Audit sink configuration
    pub audit: AuditConfig,
    /// Fuel tankering economics parameters
    pub fuel: FuelConfig,
    /// MEL matcher parameters
    pub mel: MelConfig,
    /// Crew travel / repositioning rules
    pub travel: TravelConfig,
    /// Flight option scoring weights
    pub scoring: ScoringConfig,
}

impl IropsConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports IROPS_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        // Server settings
        if let Ok(port) = std::env::var("IROPS_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("IROPS_HOST") {
            self.server.host = host;
        }

        // Logging settings
        if let Ok(level) = std::env::var("IROPS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("IROPS_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        // Audit sink
        if let Ok(path) = std::env::var("IROPS_AUDIT_LOG") {
            self.audit.path = path.into();
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        self.fuel.validate()?;
        self.mel.validate()?;
        self.travel.validate()?;
        self.scoring.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_irops_config_defaults() {
        let config = IropsConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.fuel.savings_threshold, 1000.0);
        assert_eq!(config.mel.fuzzy_cutoff, 0.6);
        assert_eq!(config.travel.max_report_gap_minutes, 720);
    }

    #[test]
    fn test_config_parse_minimal_toml() {
        let toml = r#"
        [server]
        port = 9000
        "#;

        let config: IropsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0"); // Default
    }

    #[test]
    fn test_config_parse_full_toml() {
        let toml = include_str!("../../irops.example.toml");
        let config: IropsConfig = toml::from_str(toml).unwrap();
        assert!(config.server.port > 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let config = IropsConfig::load(Some(temp.path())).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_missing_file_error() {
        let result = IropsConfig::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_config_env_override_port() {
        std::env::set_var("IROPS_PORT", "9999");
        let config = IropsConfig::default().with_env_overrides();
        std::env::remove_var("IROPS_PORT");

        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_config_env_override_audit_path() {
        std::env::set_var("IROPS_AUDIT_LOG", "/tmp/audit.jsonl");
        let config = IropsConfig::default().with_env_overrides();
        std::env::remove_var("IROPS_AUDIT_LOG");

        assert_eq!(config.audit.path, std::path::PathBuf::from("/tmp/audit.jsonl"));
    }

    #[test]
    fn test_config_env_invalid_value_ignored() {
        std::env::set_var("IROPS_PORT", "not-a-number");
        let config = IropsConfig::default().with_env_overrides();
        std::env::remove_var("IROPS_PORT");

        // Should keep default, not crash
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_config_validation_zero_port() {
        let mut config = IropsConfig::default();
        config.server.port = 0;

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "server.port"
        ));
    }

    #[test]
    fn test_config_validation_bad_cutoff() {
        let mut config = IropsConfig::default();
        config.mel.fuzzy_cutoff = 1.5;

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "mel.fuzzy_cutoff"
        ));
    }

    #[test]
    fn test_config_load_none_returns_defaults() {
        let config = IropsConfig::load(None).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
