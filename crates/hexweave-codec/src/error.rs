//! Error types for hexweave-codec

use thiserror::Error;

/// Codec error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("corrupt compressed payload: {0}")]
    Compression(#[from] std::io::Error),

    #[error("malformed item data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
