//! Success/failure container

use crate::codec::RaisedError;
use serde::Serialize;
use std::fmt;

/// Message used when a payload is requested from a success
pub const NOT_AN_ERROR: &str = "this is not an Error";

/// Failure state: a human-readable message and a separately stored payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<E> {
    /// Human-readable message
    pub message: String,
    /// Payload attached to the failure
    pub payload: E,
}

impl<E> Failure<E> {
    /// Create a new failure
    pub fn new(message: impl Into<String>, payload: E) -> Self {
        Self {
            message: message.into(),
            payload,
        }
    }

    /// Encode this failure into a freshly built raised error
    pub fn raise(&self) -> RaisedError
    where
        E: Serialize,
    {
        RaisedError::new(&self.message, &self.payload)
    }
}

impl<E> fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<E: fmt::Debug> std::error::Error for Failure<E> {}

/// Either a success value or a failure carrying a message and payload
///
/// # Examples
///
/// ```rust
/// use errset_core::ResultBox;
///
/// fn divide(a: i64, b: i64) -> ResultBox<i64, i64> {
///     if b == 0 {
///         return ResultBox::err("b cannot be 0.", b);
///     }
///     ResultBox::ok(a / b)
/// }
///
/// assert_eq!(divide(4, 2).unwrap(), 2);
///
/// let raised = divide(4, 0).try_unwrap().unwrap_err();
/// assert_eq!(raised.message(), "b cannot be 0.:--> 0");
/// assert_eq!(raised.decode().unwrap().payload_as::<i64>().unwrap(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultBox<T, E> {
    /// Success value
    Ok(T),
    /// Failure with message and payload
    Err(Failure<E>),
}

/// Result whose failure payload is `()`
pub type Outcome<T> = ResultBox<T, ()>;

impl<T, E> ResultBox<T, E> {
    /// Create a success
    pub fn ok(value: T) -> Self {
        ResultBox::Ok(value)
    }

    /// Create a failure
    pub fn err(message: impl Into<String>, payload: E) -> Self {
        ResultBox::Err(Failure::new(message, payload))
    }

    /// Whether this is a success
    pub fn is_ok(&self) -> bool {
        matches!(self, ResultBox::Ok(_))
    }

    /// Whether this is a failure
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow the success value
    pub fn value(&self) -> Option<&T> {
        match self {
            ResultBox::Ok(value) => Some(value),
            ResultBox::Err(_) => None,
        }
    }

    /// Borrow the failure message
    pub fn message(&self) -> Option<&str> {
        match self {
            ResultBox::Ok(_) => None,
            ResultBox::Err(failure) => Some(&failure.message),
        }
    }

    /// Borrow the failure payload
    pub fn payload(&self) -> Option<&E> {
        match self {
            ResultBox::Ok(_) => None,
            ResultBox::Err(failure) => Some(&failure.payload),
        }
    }

    /// Return the value, or `fallback` on failure
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            ResultBox::Ok(value) => value,
            ResultBox::Err(_) => fallback,
        }
    }

    /// Return the value, or compute one from the failure payload
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            ResultBox::Ok(value) => value,
            ResultBox::Err(failure) => op(failure.payload),
        }
    }

    /// Return the value, or the failure encoded as a [`RaisedError`]
    pub fn try_unwrap(self) -> Result<T, RaisedError>
    where
        E: Serialize,
    {
        match self {
            ResultBox::Ok(value) => Ok(value),
            ResultBox::Err(failure) => {
                tracing::debug!(failure = %failure.message, "raising failure");
                Err(failure.raise())
            }
        }
    }

    /// Return the value, panicking with the encoded failure otherwise
    ///
    /// The panic payload is the encoded message as a `String`, which
    /// [`codec::decode`](crate::codec::decode) accepts after
    /// `std::panic::catch_unwind`.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Serialize,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(raised) => std::panic::panic_any(raised.into_message()),
        }
    }

    /// Return the failure payload directly, or the success value encoded as
    /// a [`RaisedError`]
    pub fn try_unwrap_err(self) -> Result<E, RaisedError>
    where
        T: Serialize,
    {
        match self {
            ResultBox::Ok(value) => Err(RaisedError::new(NOT_AN_ERROR, &value)),
            ResultBox::Err(failure) => Ok(failure.payload),
        }
    }

    /// Return the failure payload, panicking with the encoded success value
    /// otherwise
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Serialize,
    {
        match self.try_unwrap_err() {
            Ok(payload) => payload,
            Err(raised) => std::panic::panic_any(raised.into_message()),
        }
    }

    /// Map the success value
    pub fn map<U, F>(self, op: F) -> ResultBox<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ResultBox::Ok(value) => ResultBox::Ok(op(value)),
            ResultBox::Err(failure) => ResultBox::Err(failure),
        }
    }

    /// Map the failure payload, keeping the message
    pub fn map_err<G, F>(self, op: F) -> ResultBox<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            ResultBox::Ok(value) => ResultBox::Ok(value),
            ResultBox::Err(Failure { message, payload }) => ResultBox::Err(Failure {
                message,
                payload: op(payload),
            }),
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<T, Failure<E>> {
        self.into()
    }
}

impl<T, E> From<ResultBox<T, E>> for Result<T, Failure<E>> {
    fn from(result: ResultBox<T, E>) -> Self {
        match result {
            ResultBox::Ok(value) => Ok(value),
            ResultBox::Err(failure) => Err(failure),
        }
    }
}

impl<T, E> From<Result<T, Failure<E>>> for ResultBox<T, E> {
    fn from(result: Result<T, Failure<E>>) -> Self {
        match result {
            Ok(value) => ResultBox::Ok(value),
            Err(failure) => ResultBox::Err(failure),
        }
    }
}
