//! Result-style container with typed error sets
//!
//! This crate provides [`ResultBox`], a success/failure container whose
//! failure side carries a human-readable message next to a typed payload,
//! and [`ErrorSet`], a fixed catalog of pre-registered failure messages.
//!
//! Failures are meant to travel as values. When one has to cross an
//! unwinding boundary instead, [`ResultBox::unwrap`] encodes the payload as
//! JSON after the message (`"<message>:--> <payload>"`), and
//! [`codec::decode`] together with [`ErrorSet::match_caught`] recover it on
//! the other side.
//!
//! # Example
//!
//! ```rust
//! use errset_core::{codec, error_set, ErrorSet, ResultBox};
//!
//! error_set! {
//!     pub enum MathError {
//!         dividedByZero => "do not divide by Zero.",
//!     }
//! }
//!
//! let errors = ErrorSet::<MathError>::new();
//! let result: ResultBox<i64, i64> = errors.new_err_with(MathError::dividedByZero, 0);
//!
//! let caught = std::panic::catch_unwind(move || result.unwrap()).unwrap_err();
//! let decoded = codec::decode(caught.as_ref()).unwrap();
//! assert_eq!(decoded.message, "do not divide by Zero.");
//! assert_eq!(decoded.payload_as::<i64>().unwrap(), Some(0));
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod codec;
pub mod error;
pub mod error_set;
pub mod result;

// Re-export key types
pub use catalog::CatalogKey;
pub use codec::{Decoded, RaisedError, DELIMITER};
pub use error::CodecError;
pub use error_set::{error_set, ErrorSet, MatchResult};
pub use result::{Failure, Outcome, ResultBox};
