//! Error types for grindlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for grindlog
#[derive(Debug, Error)]
pub enum GrindlogError {
    #[error("Not a grindlog directory: {0}")]
    NotGrindlogDirectory(PathBuf),

    #[error("Missing required field: {0}")]
    Validation(&'static str),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Storage error for '{key}': {message}")]
    Persistence { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl GrindlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GrindlogError::NotGrindlogDirectory(_) => 2,
            GrindlogError::Validation(_) => 3,
            GrindlogError::NotFound { .. } => 4,
            GrindlogError::Persistence { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            GrindlogError::NotGrindlogDirectory(path) => {
                format!(
                    "Not a grindlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'grindlog init' in this directory to start a journal\n\
                    • Navigate to an existing grindlog directory\n\
                    • Set GRINDLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            GrindlogError::Validation(field) => {
                format!(
                    "Missing required field: {}\n\n\
                    Required fields:\n\
                    • Patterns: title, description, difficulty\n\
                    • Journal entries: title, difficulty\n\n\
                    Valid difficulties: easy, medium, hard",
                    field
                )
            }
            GrindlogError::NotFound { kind, id } => {
                let list_cmd = if *kind == "Pattern" {
                    "grindlog pattern list"
                } else {
                    "grindlog entry list"
                };
                format!(
                    "{} not found: {}\n\n\
                    Suggestions:\n\
                    • Use '{}' to see existing ids",
                    kind, id, list_cmd
                )
            }
            GrindlogError::Config(msg) => {
                if msg.contains("goal") {
                    format!(
                        "{}\n\n\
                        Goals must be positive whole numbers\n\
                        Example: grindlog config weekly_goal 12",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using GrindlogError
pub type Result<T> = std::result::Result<T, GrindlogError>;
