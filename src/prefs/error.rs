use thiserror::Error;

/// Error types for preference load/save operations
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported preferences version: {0}")]
    InvalidVersion(u32),

    #[error("No platform config directory available")]
    NoConfigDir,
}
