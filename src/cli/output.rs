//! Output formatting helpers for CLI commands

use crate::context::LogEntry;
use crate::decision::OpsAction;
use crate::engine::Resolution;
use crate::travel::{AlternateOutcome, TravelAction, TravelOutcome};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Format a resolution as a table: one row per agent, then the final
/// decision.
pub fn format_resolution_table(resolution: &Resolution) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Agent", "Action", "Reason"]);

    for decision in [&resolution.mel, &resolution.crew, &resolution.fuel] {
        table.add_row(vec![
            Cell::new(decision.agent()),
            Cell::new(decision.action()),
            Cell::new(decision.reason()),
        ]);
    }

    let final_action = match resolution.final_decision.action {
        OpsAction::Proceed => resolution.final_decision.action.to_string().green(),
        OpsAction::CancelFlight => resolution.final_decision.action.to_string().red(),
        _ => resolution.final_decision.action.to_string().yellow(),
    };

    format!(
        "{}\n\n{} {}\n  {}",
        table,
        "Final:".bold(),
        final_action,
        resolution.final_decision.reason
    )
}

/// Format a resolution as pretty JSON.
pub fn format_resolution_json(resolution: &Resolution) -> String {
    serde_json::to_string_pretty(resolution).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Format a travel outcome for humans.
pub fn format_travel_table(outcome: &TravelOutcome) -> String {
    let mut out = String::new();

    let action = match outcome.decision.action {
        TravelAction::Approve => outcome.decision.action.to_string().green(),
        TravelAction::Reject => outcome.decision.action.to_string().red(),
    };
    out.push_str(&format!("{} {}\n  {}\n", "Decision:".bold(), action, outcome.decision.reason));
    if let Some(minutes) = outcome.decision.minutes_to_report {
        out.push_str(&format!("  Minutes to report: {}\n", minutes));
    }

    if let Some(ranked) = &outcome.ranked_options {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "Airline", "Flight", "Departure", "Arrival", "Price", "Class", "Score",
        ]);
        for option in ranked {
            table.add_row(vec![
                Cell::new(&option.airline),
                Cell::new(&option.flight_number),
                Cell::new(option.departure_time.to_rfc3339()),
                Cell::new(option.arrival_time.to_rfc3339()),
                Cell::new(format!("${:.2}", option.price)),
                Cell::new(&option.class_of_service),
                Cell::new(format!("{:.2}", option.score.unwrap_or_default())),
            ]);
        }
        out.push_str(&format!("\n{}\n{}\n", "Candidates:".bold(), table));
    }

    match &outcome.alternate {
        Some(AlternateOutcome::Selected(option)) => {
            out.push_str(&format!(
                "\n{} {} {} at ${:.2}\n",
                "Alternate:".bold(),
                option.airline,
                option.flight_number,
                option.price
            ));
        }
        Some(AlternateOutcome::NoValidOption) => {
            out.push_str(&format!(
                "\n{} {}\n",
                "Alternate:".bold(),
                "no valid option".yellow()
            ));
        }
        None => {}
    }

    if let Some(booking) = &outcome.booking {
        out.push_str(&format!(
            "{} {} on {} departing {}\n",
            "Booked:".bold().green(),
            booking.flight,
            booking.airline,
            booking.departure.to_rfc3339()
        ));
    }

    out
}

/// Format a travel outcome as pretty JSON.
pub fn format_travel_json(outcome: &TravelOutcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Format the context log for verbose output.
pub fn format_log(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("[{}] {}: {}", e.timestamp.to_rfc3339(), e.agent, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}
