//! Alternate-deadhead selection.
//!
//! Filters candidate flights against a class-of-service price ceiling and a
//! minimum-rest legality window, then picks the cheapest legal option. An
//! empty legal set is a normal outcome with its own result shape, not an
//! error.

use crate::config::TravelConfig;
use crate::context::TravelContext;
use crate::travel::search::FlightOption;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of an alternate-deadhead search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AlternateOutcome {
    /// Cheapest legal candidate.
    Selected(FlightOption),
    /// Empty legal set after filtering.
    NoValidOption,
}

impl AlternateOutcome {
    pub fn selected(&self) -> Option<&FlightOption> {
        match self {
            AlternateOutcome::Selected(option) => Some(option),
            AlternateOutcome::NoValidOption => None,
        }
    }
}

/// Maximum rebooking price for a class of service. Business keeps the full
/// original deadhead cost; economy is capped at the configured fraction of
/// it; unrecognized classes keep the full cost unchanged.
pub fn price_ceiling(original_price: f64, class_of_service: &str, economy_ratio: f64) -> f64 {
    match class_of_service.to_ascii_lowercase().as_str() {
        "business" => original_price,
        "economy" => original_price * economy_ratio,
        _ => original_price,
    }
}

/// Whether an arrival leaves enough rest before duty start.
pub fn is_legal_rest(
    arrival: DateTime<Utc>,
    duty_start: DateTime<Utc>,
    min_rest_hours: f64,
) -> bool {
    let rest_hours = (duty_start - arrival).num_seconds() as f64 / 3600.0;
    rest_hours >= min_rest_hours
}

/// Alternate-deadhead selector over a fetched candidate set.
pub struct AlternateSelector {
    config: TravelConfig,
}

impl AlternateSelector {
    pub fn new(config: TravelConfig) -> Self {
        Self { config }
    }

    /// Pick the cheapest legal candidate from an already-fetched set. Ties
    /// on price go to whichever candidate the provider presented first. The
    /// caller owns the search so selection and ranking see the same set.
    pub fn evaluate(
        &self,
        context: &mut TravelContext,
        original_deadhead_price: f64,
        duty_start: DateTime<Utc>,
        options: &[FlightOption],
    ) -> AlternateOutcome {
        let ceiling = price_ceiling(
            original_deadhead_price,
            &context.class_of_service,
            self.config.economy_ceiling_ratio,
        );
        context.log(
            "AlternateDH",
            format!(
                "Class {} ceiling ${:.2} against original ${:.2}",
                context.class_of_service, ceiling, original_deadhead_price
            ),
        );

        let selected = select_cheapest_legal(
            options,
            ceiling,
            duty_start,
            self.config.min_rest_hours,
        );

        match selected {
            Some(option) => {
                context.log(
                    "AlternateDH",
                    format!(
                        "Selected {} {} at ${:.2} from {} candidates",
                        option.airline, option.flight_number, option.price, options.len()
                    ),
                );
                AlternateOutcome::Selected(option)
            }
            None => {
                context.log(
                    "AlternateDH",
                    format!("No legal alternate among {} candidates", options.len()),
                );
                AlternateOutcome::NoValidOption
            }
        }
    }
}

/// Filter to legal candidates and fold for the minimum price. The fold uses
/// a strict less-than so the earliest candidate wins exact price ties.
fn select_cheapest_legal(
    options: &[FlightOption],
    ceiling: f64,
    duty_start: DateTime<Utc>,
    min_rest_hours: f64,
) -> Option<FlightOption> {
    options
        .iter()
        .filter(|option| {
            option.price <= ceiling
                && is_legal_rest(option.arrival_time, duty_start, min_rest_hours)
        })
        .fold(None, |best: Option<&FlightOption>, candidate| match best {
            Some(current) if candidate.price < current.price => Some(candidate),
            Some(current) => Some(current),
            None => Some(candidate),
        })
        .cloned()
}
