//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::audit::JsonlAuditSink;
use crate::cli::ServeArgs;
use crate::config::{IropsConfig, SearchProvider};
use crate::engine::DisruptionEngine;
use crate::travel::{
    FlightSearch, MockFlightSearch, SkyscannerSearch, StubBookingProvider, TravelPipeline,
};
use std::sync::Arc;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<IropsConfig, Box<dyn std::error::Error>> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        IropsConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        IropsConfig::default()
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Build the configured flight search provider.
pub fn build_search_provider(
    config: &IropsConfig,
) -> Result<Arc<dyn FlightSearch>, Box<dyn std::error::Error>> {
    match config.travel.search_provider {
        SearchProvider::Mock => Ok(Arc::new(MockFlightSearch::new())),
        SearchProvider::Skyscanner => {
            let search = SkyscannerSearch::from_config(&config.travel)?;
            Ok(Arc::new(search))
        }
    }
}

/// Build the application state shared by all handlers.
pub fn build_app_state(config: IropsConfig) -> Result<Arc<AppState>, Box<dyn std::error::Error>> {
    let audit = Arc::new(JsonlAuditSink::open(&config.audit.path)?);

    let engine = DisruptionEngine::from_config(&config, Arc::clone(&audit) as _)?;
    let search = build_search_provider(&config)?;
    let travel = TravelPipeline::new(
        &config,
        search,
        Arc::new(StubBookingProvider::new()),
        audit,
    );

    Ok(Arc::new(AppState::new(Arc::new(config), engine, travel)))
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    crate::logging::init_tracing(&config.logging)?;

    tracing::info!("Starting Irops server");
    tracing::debug!(?config, "Loaded configuration");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_app_state(config)?;
    let app = create_router(state);

    tracing::info!(addr = %addr, "Irops API server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Irops server stopped");
    Ok(())
}
