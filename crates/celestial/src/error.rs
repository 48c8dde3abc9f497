//! Serialization errors

use thiserror::Error;

/// Result type for encoding and decoding bodies
pub type Result<T> = std::result::Result<T, SerializationError>;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },
}
