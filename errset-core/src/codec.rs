//! Textual payload channel
//!
//! A raised failure carries its payload as JSON appended to the
//! human-readable message:
//!
//! ```text
//! <message>:--> <json payload>
//! ```
//!
//! [`decode`] reverses that concatenation on anything caught from a
//! [`RaisedError`] or from a panic produced by
//! [`ResultBox::unwrap`](crate::ResultBox::unwrap).
//!
//! The split happens at the first occurrence of [`DELIMITER`], so a message
//! that itself contains the delimiter cannot be told apart from a payload.
//! Catalog messages must not contain it.

use crate::error::{CodecError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::fmt;

/// Separator between the message and its encoded payload
pub const DELIMITER: &str = ":--> ";

/// Encode a payload as JSON
pub fn encode<E: Serialize + ?Sized>(payload: &E) -> Result<String> {
    serde_json::to_string(payload).map_err(CodecError::PayloadEncode)
}

/// Concatenate a message and an already encoded payload
pub fn join(message: &str, encoded: &str) -> String {
    let mut out = String::with_capacity(message.len() + DELIMITER.len() + encoded.len());
    out.push_str(message);
    out.push_str(DELIMITER);
    out.push_str(encoded);
    out
}

/// Whether `text` contains the delimiter and would be split by [`decode_message`]
pub fn contains_delimiter(text: &str) -> bool {
    text.contains(DELIMITER)
}

/// Message and payload recovered from a raised failure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    /// Message part, empty when the caught value was not error-like
    pub message: String,
    /// Parsed payload, `None` when no delimiter was present
    pub payload: Option<Value>,
}

impl Decoded {
    /// Whether the message part is exactly `expected`
    ///
    /// This is the comparison every catalog lookup goes through.
    pub fn matches_message(&self, expected: &str) -> bool {
        self.message == expected
    }

    /// Deserialize the payload into a concrete type
    ///
    /// A missing payload and a JSON `null` payload both yield `Ok(None)`.
    pub fn payload_as<E: DeserializeOwned>(&self) -> Result<Option<E>> {
        match &self.payload {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(CodecError::PayloadType),
        }
    }

    /// Consume into a `(message, payload)` pair
    pub fn into_parts(self) -> (String, Option<Value>) {
        (self.message, self.payload)
    }
}

/// Error value carrying an encoded failure across a call boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    message: String,
}

impl RaisedError {
    /// Build a raised error from a message and a payload
    ///
    /// A payload that cannot be serialized is replaced by `null`.
    pub fn new<E: Serialize + ?Sized>(message: &str, payload: &E) -> Self {
        let encoded = encode(payload).unwrap_or_else(|e| {
            tracing::warn!(error = %e, failure = message, "payload could not be encoded, sending null");
            "null".to_string()
        });
        Self {
            message: join(message, &encoded),
        }
    }

    /// Wrap a message that is already in the `<message>:--> <payload>` form
    pub fn from_encoded(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Full encoded message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Decode this error back into message and payload
    pub fn decode(&self) -> Result<Decoded> {
        decode_message(&self.message)
    }

    /// Consume into the encoded message
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for RaisedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RaisedError {}

/// Message of an error-like caught value
///
/// `RaisedError`, `String` and `&'static str` are recognized; the latter two
/// are what `panic!` leaves behind.
pub fn error_message(caught: &(dyn Any + Send)) -> Option<&str> {
    if let Some(raised) = caught.downcast_ref::<RaisedError>() {
        Some(raised.message())
    } else if let Some(message) = caught.downcast_ref::<String>() {
        Some(message.as_str())
    } else {
        caught.downcast_ref::<&'static str>().copied()
    }
}

/// Decode a caught value into message and payload
///
/// Values that are not error-like decode to an empty message and no payload.
pub fn decode(caught: &(dyn Any + Send)) -> Result<Decoded> {
    match error_message(caught) {
        Some(message) => decode_message(message),
        None => Ok(Decoded::default()),
    }
}

/// Decode an encoded message string
pub fn decode_message(message: &str) -> Result<Decoded> {
    let Some((head, tail)) = message.split_once(DELIMITER) else {
        return Ok(Decoded {
            message: message.to_string(),
            payload: None,
        });
    };

    let payload = serde_json::from_str(tail).map_err(|e| {
        tracing::debug!(error = %e, encoded = tail, "malformed payload segment");
        CodecError::PayloadDecode(e)
    })?;

    Ok(Decoded {
        message: head.to_string(),
        payload: Some(payload),
    })
}
