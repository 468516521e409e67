use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcfgError {
    #[error("Environment variable is undefined: {token} (line {line})")]
    RequiredEnvUndefined { token: String, line: usize },

    #[error("Default provided for a literal value on line {line}: {content}")]
    IllegalDefaultTriple { line: usize, content: String },

    #[error("Failed to read line {line}: {source}")]
    ReadError {
        line: usize,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No '{file_name}' found in any search path ({})", display_paths(.searched))]
    FileNotFound {
        file_name: String,
        searched: Vec<PathBuf>,
    },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("App name is required: call .app_name() or .file() on the builder")]
    AppNameRequired,

    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl EcfgError {
    /// The 1-based input line the error points at, for parse-time errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            EcfgError::RequiredEnvUndefined { line, .. }
            | EcfgError::IllegalDefaultTriple { line, .. }
            | EcfgError::ReadError { line, .. } => Some(*line),
            _ => None,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no directories searched".into();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
