//! Append-only audit sink.
//!
//! Every evaluation (MEL, fuel, arbitration, travel) appends exactly one
//! self-contained record: timestamp, subject, the input snapshot, and the
//! resulting decision. Records are serialized as one JSON object per line.
//! The sink is the only resource shared across concurrent requests, so each
//! append is atomic with respect to other appends.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

/// Errors from the audit sink. An audit failure is a defect to surface, not
/// to mask; callers propagate it.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize audit record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One audit record. `input` and `outcome` are serialized snapshots of the
/// evaluator's input and decision.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Evaluator or policy that produced the record
    pub agent: String,
    /// Flight id or crew id the record concerns
    pub subject: String,
    pub input: serde_json::Value,
    pub outcome: serde_json::Value,
}

impl AuditRecord {
    pub fn new(
        agent: &str,
        subject: &str,
        input: serde_json::Value,
        outcome: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            agent: agent.to_string(),
            subject: subject.to_string(),
            input,
            outcome,
        }
    }
}

/// Destination for audit records.
///
/// Implementations must tolerate interleaved appends from concurrent
/// requests without interleaving individual record bytes.
pub trait AuditSink: Send + Sync {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError>;
}

/// File-backed JSONL sink. A mutex around the file handle keeps each record
/// on its own line under concurrent appends.
pub struct JsonlAuditSink {
    file: Mutex<File>,
}

impl JsonlAuditSink {
    /// Open (or create) the audit log, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self, AuditError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for JsonlAuditSink {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        // Serialize outside the lock; write line + newline in one call so a
        // record never interleaves with another request's record.
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests.
#[derive(Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.clone());
        Ok(())
    }
}
