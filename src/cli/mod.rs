//! Command-line interface for Irops.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP API server
//! - `resolve` - Resolve one disruption from the command line
//! - `travel` - Evaluate one crew repositioning request
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start the server with default config
//! irops serve
//!
//! # One-shot resolution for a delayed flight with a reported fault
//! irops resolve --flight-id QF11 --aircraft-type B747 \
//!     --origin SYD --destination LAX --delay 180 \
//!     --fault "radar out" --fuel-price SYD=0.95 --fuel-price LAX=1.35
//!
//! # Evaluate gateway travel for a crew member
//! irops travel --crew-id AL1234 --name "Corey W" --base JFK --gateway ORD \
//!     --duty-start 2026-09-02T10:00:00Z --airline United --airline Delta
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod resolve;
pub mod serve;
pub mod travel;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Irops - Airline irregular-operations decision support
#[derive(Parser, Debug)]
#[command(
    name = "irops",
    version,
    about = "Multi-agent airline disruption resolution and crew repositioning"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Irops server
    Serve(ServeArgs),
    /// Resolve a flight disruption
    Resolve(ResolveArgs),
    /// Evaluate a crew repositioning request
    Travel(TravelArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "irops.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "IROPS_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "IROPS_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "IROPS_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "irops.toml")]
    pub config: PathBuf,

    /// Flight identifier
    #[arg(long)]
    pub flight_id: String,

    /// Aircraft type (e.g. B747)
    #[arg(long)]
    pub aircraft_type: String,

    /// Origin airport code
    #[arg(long)]
    pub origin: String,

    /// Destination airport code
    #[arg(long)]
    pub destination: String,

    /// Current delay in minutes
    #[arg(long, default_value = "0")]
    pub delay: i64,

    /// Reported fault text to resolve against the MEL database
    #[arg(long, default_value = "")]
    pub fault: String,

    /// Fuel price per airport, as CODE=PRICE (repeatable)
    #[arg(long = "fuel-price", value_name = "CODE=PRICE")]
    pub fuel_prices: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TravelArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "irops.toml")]
    pub config: PathBuf,

    /// Crew member identifier
    #[arg(long)]
    pub crew_id: String,

    /// Crew member name
    #[arg(long)]
    pub name: String,

    /// Home base airport code
    #[arg(long)]
    pub base: String,

    /// Gateway airport code
    #[arg(long)]
    pub gateway: String,

    /// Travel category
    #[arg(long, default_value = "gateway")]
    pub travel_type: String,

    /// Duty start time (RFC 3339)
    #[arg(long)]
    pub duty_start: String,

    /// Preferred airline (repeatable)
    #[arg(long = "airline")]
    pub airlines: Vec<String>,

    /// Seat preference (e.g. Window)
    #[arg(long, default_value = "")]
    pub seat: String,

    /// Class of service (business or economy)
    #[arg(long, default_value = "economy")]
    pub class: String,

    /// Sign-on airport, when different from base
    #[arg(long)]
    pub sign_on: Option<String>,

    /// Estimated original deadhead cost
    #[arg(long, default_value = "1000.0")]
    pub deadhead_price: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "irops.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
