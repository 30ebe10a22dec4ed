//! Configuration error types.
//!
//! Shared by the config tree loader and the MEL database loader, which both
//! read strongly-typed TOML and validate it before use.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An explicitly requested file (config or MEL database) is absent.
    /// A missing default `irops.toml` is not an error; defaults apply.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A parsed value is out of range or inconsistent, with the offending
    /// field named in dotted form (`server.port`, `mel.fuzzy_cutoff`).
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}
