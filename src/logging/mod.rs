//! Tracing setup.
//!
//! Builds an env-filter directive string from [`LoggingConfig`] and installs
//! the global subscriber. `RUST_LOG` in the environment wins over the
//! configured levels.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build filter directives from the logging configuration.
///
/// Produces `"base_level,irops::component1=level1,..."` so per-component
/// levels in the config map onto this crate's module tree.
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        for (component, level) in component_levels {
            filter_str.push_str(&format!(",irops::{}={}", component, level));
        }
    }

    filter_str
}

/// Initialize the global tracing subscriber.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = build_filter_directives(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_build_filter_base_level_only() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(build_filter_directives(&config), "debug");
    }

    #[test]
    fn test_build_filter_with_component_levels() {
        let mut component_levels = HashMap::new();
        component_levels.insert("arbitration".to_string(), "debug".to_string());

        let config = LoggingConfig {
            level: "info".to_string(),
            component_levels: Some(component_levels),
            ..Default::default()
        };
        assert_eq!(
            build_filter_directives(&config),
            "info,irops::arbitration=debug"
        );
    }
}
