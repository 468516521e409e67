//! Actions on resolved settings and the result types callers display.

use std::fmt;
use std::path::PathBuf;

use crate::error::EcfgError;
use crate::settings::Settings;

/// Result of an [`EcfgAction`](crate::EcfgAction). Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum EcfgResult {
    /// All resolved key-value pairs, sorted by key.
    Listing { entries: Vec<(String, String)> },
    /// One key's resolved value.
    KeyValue { key: String, value: String },
    /// The files resolved cleanly.
    Checked { files: Vec<PathBuf>, entries: usize },
    /// The resolved settings as a JSON object.
    Json(String),
}

impl fmt::Display for EcfgResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcfgResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            EcfgResult::KeyValue { value, .. } => write!(f, "{value}"),
            EcfgResult::Checked { files, entries } => {
                let noun = if *entries == 1 { "setting" } else { "settings" };
                write!(f, "OK: {entries} {noun}")?;
                if !files.is_empty() {
                    let names: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
                    write!(f, " from {}", names.join(", "))?;
                }
                Ok(())
            }
            EcfgResult::Json(json) => write!(f, "{json}"),
        }
    }
}

pub fn list_values(settings: &Settings) -> EcfgResult {
    let entries = settings
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EcfgResult::Listing { entries }
}

pub fn get_value(settings: &Settings, key: &str) -> Result<EcfgResult, EcfgError> {
    let value = settings
        .get(key)
        .ok_or_else(|| EcfgError::KeyNotFound(key.into()))?;
    Ok(EcfgResult::KeyValue {
        key: key.into(),
        value: value.into(),
    })
}

pub fn check(settings: &Settings, files: Vec<PathBuf>) -> EcfgResult {
    EcfgResult::Checked {
        files,
        entries: settings.len(),
    }
}

pub fn export_json(settings: &Settings) -> Result<EcfgResult, EcfgError> {
    Ok(EcfgResult::Json(serde_json::to_string_pretty(settings)?))
}
