//! Session configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so an
//! empty object (or no file at all) gives a working session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inventory::DEFAULT_CAPACITY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of hotbar slots
    pub capacity: usize,

    /// Preferences file; None uses the platform config directory
    pub preferences_path: Option<PathBuf>,

    /// Item catalog; None uses the built-in items
    pub items_path: Option<PathBuf>,

    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            capacity: DEFAULT_CAPACITY,
            preferences_path: None,
            items_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
