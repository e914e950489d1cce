//! Codec error types

use thiserror::Error;

/// Errors produced while moving a payload through the textual channel
#[derive(Error, Debug)]
pub enum CodecError {
    /// The payload could not be serialized
    #[error("payload encode error: {0}")]
    PayloadEncode(#[source] serde_json::Error),

    /// The encoded segment after the delimiter is not valid payload data
    #[error("payload decode error: {0}")]
    PayloadDecode(#[source] serde_json::Error),

    /// The payload decoded fine but does not have the requested shape
    #[error("payload type mismatch: {0}")]
    PayloadType(#[source] serde_json::Error),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
