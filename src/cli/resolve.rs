//! Resolve command implementation

use crate::audit::JsonlAuditSink;
use crate::cli::output::{format_resolution_json, format_resolution_table};
use crate::cli::ResolveArgs;
use crate::config::IropsConfig;
use crate::context::FlightContext;
use crate::engine::DisruptionEngine;
use std::collections::HashMap;
use std::sync::Arc;

/// Parse repeated `CODE=PRICE` arguments into a price map.
fn parse_fuel_prices(raw: &[String]) -> Result<HashMap<String, f64>, String> {
    let mut prices = HashMap::new();
    for entry in raw {
        let (code, price) = entry
            .split_once('=')
            .ok_or_else(|| format!("Invalid fuel price '{}'; expected CODE=PRICE", entry))?;
        let price: f64 = price
            .parse()
            .map_err(|_| format!("Invalid fuel price value '{}'", entry))?;
        prices.insert(code.to_string(), price);
    }
    Ok(prices)
}

/// Handle `irops resolve` command
pub fn handle_resolve(args: &ResolveArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = if args.config.exists() {
        IropsConfig::load(Some(&args.config))?
    } else {
        IropsConfig::default()
    }
    .with_env_overrides();
    config.validate()?;

    let audit = Arc::new(JsonlAuditSink::open(&config.audit.path)?);
    let engine = DisruptionEngine::from_config(&config, audit)?;

    let mut context = FlightContext::new(
        args.flight_id.clone(),
        args.aircraft_type.clone(),
        args.origin.clone(),
        args.destination.clone(),
        args.delay,
    );
    context.fuel_prices = parse_fuel_prices(&args.fuel_prices)?;
    context.reported_fault = args.fault.clone();

    let resolution = engine.resolve(&mut context)?;

    if args.json {
        Ok(format_resolution_json(&resolution))
    } else {
        Ok(format_resolution_table(&resolution))
    }
}
