//! Crew travel and repositioning rules

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Flight search provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchProvider {
    /// Deterministic in-process candidates (development and tests)
    #[default]
    Mock,
    /// Skyscanner browse-quotes HTTP API
    Skyscanner,
}

/// Contractual and legality rules for crew repositioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    /// Maximum report-to-duty gap, in minutes, for travel approval
    pub max_report_gap_minutes: i64,
    /// Minimum rest between alternate-flight arrival and duty start, in hours
    pub min_rest_hours: f64,
    /// Fraction of the original deadhead cost allowed for economy rebooking.
    /// Business class keeps the full original cost as its ceiling.
    pub economy_ceiling_ratio: f64,
    /// Which flight search backend to use
    pub search_provider: SearchProvider,
    /// Skyscanner API host (only used when `search_provider = "skyscanner"`)
    pub search_api_host: String,
    /// Environment variable holding the search API key (never stored in config)
    pub search_api_key_env: String,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            max_report_gap_minutes: 720,
            min_rest_hours: 10.0,
            economy_ceiling_ratio: 0.5,
            search_provider: SearchProvider::Mock,
            search_api_host: "skyscanner-skyscanner-flight-search-v1.p.rapidapi.com".to_string(),
            search_api_key_env: "IROPS_SEARCH_API_KEY".to_string(),
        }
    }
}

impl TravelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_report_gap_minutes <= 0 {
            return Err(ConfigError::Validation {
                field: "travel.max_report_gap_minutes".to_string(),
                message: "report gap must be positive".to_string(),
            });
        }
        if self.min_rest_hours < 0.0 {
            return Err(ConfigError::Validation {
                field: "travel.min_rest_hours".to_string(),
                message: "rest hours cannot be negative".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.economy_ceiling_ratio) {
            return Err(ConfigError::Validation {
                field: "travel.economy_ceiling_ratio".to_string(),
                message: format!(
                    "ceiling ratio must be within 0..=1, got {}",
                    self.economy_ceiling_ratio
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_config_defaults() {
        let config = TravelConfig::default();
        assert_eq!(config.max_report_gap_minutes, 720);
        assert_eq!(config.min_rest_hours, 10.0);
        assert_eq!(config.economy_ceiling_ratio, 0.5);
        assert_eq!(config.search_provider, SearchProvider::Mock);
    }

    #[test]
    fn test_search_provider_serde() {
        let provider: SearchProvider = serde_json::from_str("\"skyscanner\"").unwrap();
        assert_eq!(provider, SearchProvider::Skyscanner);
    }

    #[test]
    fn test_travel_config_rejects_zero_gap() {
        let config = TravelConfig {
            max_report_gap_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_travel_config_rejects_bad_ratio() {
        let config = TravelConfig {
            economy_ceiling_ratio: 2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
