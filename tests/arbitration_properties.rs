//! Property tests for the arbitration decision table.

use irops::arbitration::OpsResolver;
use irops::audit::MemoryAuditSink;
use irops::context::FlightContext;
use irops::decision::{Decision, DispatchAction, FuelAction, OpsAction};
use proptest::prelude::*;
use std::sync::Arc;

fn crew_decision() -> impl Strategy<Value = Decision> {
    let actions = prop_oneof![
        Just("Cancel".to_string()),
        Just("Suggest delay".to_string()),
        Just("Suggest delay until 14:00Z".to_string()),
        Just("Proceed as planned".to_string()),
        "[A-Za-z ]{1,20}",
    ];
    let reasons = prop_oneof![
        Just("No legal reserve available at base".to_string()),
        Just("Best candidate legal with 180 min delay".to_string()),
        "[A-Za-z ]{1,40}",
    ];
    (actions, reasons).prop_map(|(action, reason)| Decision::Crew { action, reason })
}

fn fuel_decision() -> impl Strategy<Value = Decision> {
    (
        prop_oneof![Just(FuelAction::Tanker), Just(FuelAction::NoTankering)],
        -5000.0..5000.0f64,
    )
        .prop_map(|(action, net_savings)| Decision::Fuel {
            action,
            reason: format!("net ${:.2}", net_savings),
            savings: net_savings.max(0.0),
            penalty: 0.0,
            net_savings,
        })
}

fn mel_decision() -> impl Strategy<Value = Decision> {
    (
        prop_oneof![
            Just(DispatchAction::FlyWithoutRestriction),
            Just(DispatchAction::FlyWithRestriction),
            Just(DispatchAction::NoGo),
            Just(DispatchAction::Unknown),
        ],
        0u32..120,
    )
        .prop_map(|(action, defer_days)| Decision::Mel {
            action,
            reason: "reference entry".to_string(),
            defer_days,
            matched_from: None,
        })
}

proptest! {
    // Arbitration is total: every decision combination lands on exactly one
    // of the five outcomes, never panics, never needs a fallthrough.
    #[test]
    fn arbitration_is_total(
        crew in crew_decision(),
        fuel in fuel_decision(),
        mel in mel_decision(),
    ) {
        let sink = Arc::new(MemoryAuditSink::new());
        let resolver = OpsResolver::new(sink);
        let ctx = FlightContext::new("QF11", "B747", "SYD", "LAX", 0);

        let result = resolver.resolve(&ctx, &crew, &fuel, &mel).unwrap();
        prop_assert!(matches!(
            result.action,
            OpsAction::CancelFlight
                | OpsAction::DelayOrRecrew
                | OpsAction::HoldForMaintenance
                | OpsAction::DelayFlight
                | OpsAction::Proceed
        ));
        prop_assert!(!result.reason.is_empty());
    }

    // Rule 1 shadows everything: a Cancel action forces cancellation no
    // matter what the other agents say.
    #[test]
    fn cancel_always_wins(
        fuel in fuel_decision(),
        mel in mel_decision(),
    ) {
        let sink = Arc::new(MemoryAuditSink::new());
        let resolver = OpsResolver::new(sink);
        let ctx = FlightContext::new("QF11", "B747", "SYD", "LAX", 0);
        let crew = Decision::Crew {
            action: "Cancel".to_string(),
            reason: "unable to crew".to_string(),
        };

        let result = resolver.resolve(&ctx, &crew, &fuel, &mel).unwrap();
        prop_assert_eq!(result.action, OpsAction::CancelFlight);
    }

    // Without cancel or reserve-exhaustion signals, an Unknown MEL action
    // always holds for maintenance.
    #[test]
    fn unknown_mel_without_earlier_triggers_holds(
        fuel in fuel_decision(),
    ) {
        let sink = Arc::new(MemoryAuditSink::new());
        let resolver = OpsResolver::new(sink);
        let ctx = FlightContext::new("QF11", "B747", "SYD", "LAX", 0);
        let crew = Decision::Crew {
            action: "Suggest delay".to_string(),
            reason: "Best candidate legal with 60 min delay".to_string(),
        };
        let mel = Decision::Mel {
            action: DispatchAction::Unknown,
            reason: "No MEL entry found".to_string(),
            defer_days: 0,
            matched_from: None,
        };

        let result = resolver.resolve(&ctx, &crew, &fuel, &mel).unwrap();
        prop_assert_eq!(result.action, OpsAction::HoldForMaintenance);
    }

    // The arbitration never drops information: all three reasons appear in
    // the cancel and proceed outcomes.
    #[test]
    fn cancel_reason_carries_all_inputs(
        fuel in fuel_decision(),
        mel in mel_decision(),
    ) {
        let sink = Arc::new(MemoryAuditSink::new());
        let resolver = OpsResolver::new(sink);
        let ctx = FlightContext::new("QF11", "B747", "SYD", "LAX", 0);
        let crew = Decision::Crew {
            action: "Cancel".to_string(),
            reason: "crew timed out".to_string(),
        };

        let result = resolver.resolve(&ctx, &crew, &fuel, &mel).unwrap();
        prop_assert!(result.reason.contains("crew timed out"));
        prop_assert!(result.reason.contains(fuel.reason()));
        prop_assert!(result.reason.contains(mel.reason()));
    }
}
