//! Travel command implementation

use crate::audit::JsonlAuditSink;
use crate::cli::output::{format_travel_json, format_travel_table};
use crate::cli::serve::build_search_provider;
use crate::cli::TravelArgs;
use crate::config::IropsConfig;
use crate::context::TravelContext;
use crate::travel::{StubBookingProvider, TravelPipeline};
use std::sync::Arc;

/// Handle `irops travel` command
pub async fn handle_travel(args: &TravelArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = if args.config.exists() {
        IropsConfig::load(Some(&args.config))?
    } else {
        IropsConfig::default()
    }
    .with_env_overrides();
    config.validate()?;

    let audit = Arc::new(JsonlAuditSink::open(&config.audit.path)?);
    let search = build_search_provider(&config)?;
    let pipeline = TravelPipeline::new(
        &config,
        search,
        Arc::new(StubBookingProvider::new()),
        audit,
    );

    let mut context = TravelContext::new(
        args.crew_id.clone(),
        args.name.clone(),
        args.base.clone(),
        args.gateway.clone(),
        args.travel_type.clone(),
        args.duty_start.clone(),
    );
    context.preferred_airlines = args.airlines.clone();
    context.seat_preference = args.seat.clone();
    context.class_of_service = args.class.clone();
    context.schedule.sign_on_airport = args.sign_on.clone();

    let outcome = pipeline.process(&mut context, args.deadhead_price).await?;

    if args.json {
        Ok(format_travel_json(&outcome))
    } else {
        Ok(format_travel_table(&outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn travel_args(duty_start: &str, dir: &std::path::Path) -> TravelArgs {
        let config_path = dir.join("irops.toml");
        std::fs::write(
            &config_path,
            format!(
                "[audit]\npath = \"{}\"\n",
                dir.join("audit.jsonl").display()
            ),
        )
        .unwrap();

        TravelArgs {
            config: config_path,
            crew_id: "AL1234".to_string(),
            name: "Corey W".to_string(),
            base: "JFK".to_string(),
            gateway: "ORD".to_string(),
            travel_type: "gateway".to_string(),
            duty_start: duty_start.to_string(),
            airlines: vec!["United".to_string(), "Delta".to_string()],
            seat: "Window".to_string(),
            class: "business".to_string(),
            sign_on: None,
            deadhead_price: 2000.0,
            json: true,
        }
    }

    #[tokio::test]
    async fn test_travel_rejects_bad_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let args = travel_args("not a timestamp", dir.path());

        let output = handle_travel(&args).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["decision"]["action"], "reject");
        assert!(parsed["decision"]["minutes_to_report"].is_null());
    }

    #[tokio::test]
    async fn test_travel_config_missing_uses_defaults() {
        let args = TravelArgs {
            config: PathBuf::from("nonexistent.toml"),
            crew_id: "AL1234".to_string(),
            name: "Corey W".to_string(),
            base: "JFK".to_string(),
            gateway: "ORD".to_string(),
            travel_type: "charter".to_string(),
            duty_start: "2026-09-02T10:00:00Z".to_string(),
            airlines: Vec::new(),
            seat: String::new(),
            class: "economy".to_string(),
            sign_on: None,
            deadhead_price: 1000.0,
            json: true,
        };

        // Default audit path writes under logs/; keep the test hermetic.
        std::env::set_var("IROPS_AUDIT_LOG", std::env::temp_dir().join("irops_cli_test_audit.jsonl"));
        let output = handle_travel(&args).await.unwrap();
        std::env::remove_var("IROPS_AUDIT_LOG");

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["decision"]["action"], "reject");
    }
}
