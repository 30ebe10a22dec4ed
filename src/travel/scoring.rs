//! Preference-weighted flight scoring.
//!
//! A weighted multi-criteria heuristic: every candidate starts from the
//! configured base, gains bonuses for matching crew preferences, and pays a
//! continuous penalty for departing far from duty start. Scores are
//! deterministic given identical context and candidate set.

use crate::config::ScoringConfig;
use crate::travel::search::FlightOption;
use crate::travel::TravelPreferences;
use chrono::{DateTime, Utc};

/// Score one candidate against the crew's preferences.
pub fn score_option(
    option: &FlightOption,
    preferences: &TravelPreferences,
    duty_start: DateTime<Utc>,
    weights: &ScoringConfig,
) -> f64 {
    let mut score = weights.base;

    if preferences.preferred_airlines.contains(&option.airline) {
        score += weights.preferred_airline_bonus;
    } else {
        score -= weights.other_airline_penalty;
    }

    if preferences.seat_preference == "Window" {
        score += weights.window_seat_bonus;
    }

    if option
        .class_of_service
        .eq_ignore_ascii_case(&preferences.class_of_service)
    {
        score += weights.class_match_bonus;
    }

    // Penalize departures far from report time, in fractional hours.
    let offset_hours =
        (duty_start - option.departure_time).num_seconds().abs() as f64 / 3600.0;
    score -= offset_hours * weights.hour_offset_penalty;

    (score * 100.0).round() / 100.0
}

/// Assign scores and sort descending. The sort is stable, so exact ties
/// keep the caller-supplied order.
pub fn rank_options(
    mut options: Vec<FlightOption>,
    preferences: &TravelPreferences,
    duty_start: DateTime<Utc>,
    weights: &ScoringConfig,
) -> Vec<FlightOption> {
    for option in &mut options {
        option.score = Some(score_option(option, preferences, duty_start, weights));
    }
    options.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    options
}
