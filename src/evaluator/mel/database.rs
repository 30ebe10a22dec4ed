//! MEL legality database.
//!
//! Static reference data keyed by (aircraft type, fault description),
//! read-only at evaluation time. Loaded from a TOML table at process start
//! and validated once; the built-in table covers the B747 entries used by
//! the demo scenarios. `BTreeMap` keeps fault descriptions in lexicographic
//! order, which the fuzzy matcher relies on for deterministic tie-breaks.

use crate::config::ConfigError;
use crate::decision::DispatchAction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One legality entry: what dispatch action the MEL permits for a fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MelEntry {
    pub action: DispatchAction,
    pub reason: String,
    pub defer_days: u32,
}

/// Legality table: aircraft type -> fault description -> entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MelDatabase {
    entries: BTreeMap<String, BTreeMap<String, MelEntry>>,
}

impl MelDatabase {
    /// Built-in reference table.
    pub fn builtin() -> Self {
        let mut db = Self::default();
        let b747 = [
            (
                "APU inop",
                DispatchAction::FlyWithRestriction,
                "Allowed with ground power at departure",
                10,
            ),
            (
                "AC Pack 1 fail",
                DispatchAction::FlyWithRestriction,
                "One pack failure allowed for non-ETOPS flight",
                3,
            ),
            (
                "Landing gear issue",
                DispatchAction::NoGo,
                "Landing gear must be fully operational",
                0,
            ),
            (
                "Left IRS fault",
                DispatchAction::FlyWithRestriction,
                "Redundancy allows dispatch with 2 IRS working",
                3,
            ),
            (
                "Weather radar inop",
                DispatchAction::NoGo,
                "Required for international and convective weather environments",
                0,
            ),
            (
                "Fuel qty indication inop",
                DispatchAction::FlyWithRestriction,
                "Allowed with manual verification if alternate system working",
                2,
            ),
            (
                "Cockpit dome light out",
                DispatchAction::FlyWithoutRestriction,
                "Non-essential item; no dispatch impact",
                99,
            ),
        ];
        for (fault, action, reason, defer_days) in b747 {
            db.insert("B747", fault, action, reason, defer_days);
        }
        db
    }

    /// Load a table from a TOML file, replacing the built-in data.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let db: Self =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        db.validate()?;
        Ok(db)
    }

    pub fn insert(
        &mut self,
        aircraft_type: &str,
        fault: &str,
        action: DispatchAction,
        reason: &str,
        defer_days: u32,
    ) {
        self.entries
            .entry(aircraft_type.to_string())
            .or_default()
            .insert(
                fault.to_string(),
                MelEntry {
                    action,
                    reason: reason.to_string(),
                    defer_days,
                },
            );
    }

    /// Entries registered for an aircraft type, in lexicographic fault order.
    pub fn entries_for(&self, aircraft_type: &str) -> Option<&BTreeMap<String, MelEntry>> {
        self.entries.get(aircraft_type)
    }

    pub fn aircraft_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Validate the table once at load time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (aircraft, faults) in &self.entries {
            if faults.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("mel_database.{}", aircraft),
                    message: "aircraft type has no entries".to_string(),
                });
            }
            for (fault, entry) in faults {
                if fault.trim().is_empty() {
                    return Err(ConfigError::Validation {
                        field: format!("mel_database.{}", aircraft),
                        message: "fault description cannot be blank".to_string(),
                    });
                }
                if entry.reason.trim().is_empty() {
                    return Err(ConfigError::Validation {
                        field: format!("mel_database.{}.{}", aircraft, fault),
                        message: "reason cannot be blank".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_b747() {
        let db = MelDatabase::builtin();
        let entries = db.entries_for("B747").unwrap();
        assert_eq!(entries.len(), 7);

        let radar = &entries["Weather radar inop"];
        assert_eq!(radar.action, DispatchAction::NoGo);
        assert_eq!(radar.defer_days, 0);
    }

    #[test]
    fn builtin_table_validates() {
        assert!(MelDatabase::builtin().validate().is_ok());
    }

    #[test]
    fn entries_iterate_in_lexicographic_order() {
        let db = MelDatabase::builtin();
        let keys: Vec<_> = db.entries_for("B747").unwrap().keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn loads_from_toml_file() {
        let toml = r#"
            [A320."Brake fan inop"]
            action = "fly_with_restriction"
            reason = "Brake temperature monitoring required"
            defer_days = 10
        "#;
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), toml).unwrap();

        let db = MelDatabase::load(temp.path()).unwrap();
        let entry = &db.entries_for("A320").unwrap()["Brake fan inop"];
        assert_eq!(entry.action, DispatchAction::FlyWithRestriction);
        assert_eq!(entry.defer_days, 10);
    }

    #[test]
    fn load_rejects_blank_reason() {
        let toml = r#"
            [A320."Brake fan inop"]
            action = "no_go"
            reason = ""
            defer_days = 0
        "#;
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), toml).unwrap();

        assert!(matches!(
            MelDatabase::load(temp.path()),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let result = MelDatabase::load(Path::new("/nonexistent/mel.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
