//! Error types for folio-core

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for folio operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine a config directory for preferences")]
    NoConfigDir,

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML config: {message}")]
    TomlParse {
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid config value for '{key}': {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    // ===================
    // Preference Errors
    // ===================
    #[error("Preference storage unavailable: {reason}")]
    StorageUnavailable { reason: String },
}

impl CoreError {
    pub fn invalid_config(key: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidConfig {
            key,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
