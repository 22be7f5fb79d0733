use thiserror::Error;

/// Errors raised while building or loading the item catalog
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item '{0}' already registered")]
    DuplicateId(String),

    #[error("Item id must not be empty")]
    EmptyId,

    #[error("Could not read item catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse item catalog: {0}")]
    Json(#[from] serde_json::Error),
}
