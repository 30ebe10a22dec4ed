//! Audit sink configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audit sink configuration
///
/// The audit log is an append-only JSONL file: one self-contained record per
/// evaluation, one record per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Path to the JSONL audit log
    pub path: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("logs/irops_audit.jsonl"),
        }
    }
}
