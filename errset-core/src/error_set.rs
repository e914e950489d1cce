//! Pre-registered failures and matching of caught values

use crate::catalog::CatalogKey;
use crate::codec::{self, Decoded};
use crate::error::Result;
use crate::result::ResultBox;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::marker::PhantomData;

/// Message of the failure returned when a caught value is not error-like
pub const UNKNOWN_TYPE: &str = "e is unknown type:";

/// Outcome of matching a caught value against a catalog key
///
/// `Ok(Some(payload))` when the message belongs to the key, `Ok(None)` when
/// it does not or carried no payload, and a failure when the caught value
/// was not error-like at all.
pub type MatchResult<E> = ResultBox<Option<E>, ()>;

/// Failures pre-registered in a message catalog
///
/// # Examples
///
/// ```rust
/// use errset_core::{error_set, ErrorSet, ResultBox};
///
/// error_set! {
///     pub enum MathError {
///         dividedByZero => "do not divide by Zero.",
///         dividedByNegative => "well, you did divide as Negative value.",
///     }
/// }
///
/// let errors = ErrorSet::<MathError>::new();
///
/// fn divide(errors: &ErrorSet<MathError>, a: i64, b: i64) -> ResultBox<i64, i64> {
///     if b == 0 {
///         return errors.new_err_with(MathError::dividedByZero, b);
///     }
///     ResultBox::ok(a / b)
/// }
///
/// let caught = std::panic::catch_unwind(|| divide(&errors, 4, 0).unwrap()).unwrap_err();
/// let payload = errors
///     .match_caught::<i64>(caught.as_ref(), MathError::dividedByZero)
///     .unwrap()
///     .unwrap();
/// assert_eq!(payload, Some(0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorSet<K: CatalogKey> {
    _catalog: PhantomData<K>,
}

impl<K: CatalogKey> Default for ErrorSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an error set for a catalog
pub fn error_set<K: CatalogKey>() -> ErrorSet<K> {
    ErrorSet::new()
}

impl<K: CatalogKey> ErrorSet<K> {
    /// Create an error set for the catalog `K`
    pub const fn new() -> Self {
        Self {
            _catalog: PhantomData,
        }
    }

    /// Message registered for `key`
    pub fn message(&self, key: K) -> &'static str {
        key.message()
    }

    /// Iterate over `(name, message)` pairs in declaration order
    pub fn messages(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        K::ALL.iter().map(|key| (key.name(), key.message()))
    }

    /// Look up a key by its symbolic name
    pub fn key_by_name(&self, name: &str) -> Option<K> {
        K::from_name(name)
    }

    /// Failure for `key` without a payload
    pub fn new_err<T>(&self, key: K) -> ResultBox<T, ()> {
        ResultBox::err(key.message(), ())
    }

    /// Failure for `key` carrying `payload`
    pub fn new_err_with<T, E>(&self, key: K, payload: E) -> ResultBox<T, E> {
        ResultBox::err(key.message(), payload)
    }

    /// Match a caught value against `key`
    ///
    /// The payload is only deserialized into `E` when the message matches;
    /// a malformed encoded payload is an error either way.
    pub fn match_caught<E: DeserializeOwned>(
        &self,
        caught: &(dyn Any + Send),
        key: K,
    ) -> Result<MatchResult<E>> {
        let Some(message) = codec::error_message(caught) else {
            tracing::trace!(key = key.name(), "caught value is not error-like");
            return Ok(ResultBox::err(UNKNOWN_TYPE, ()));
        };
        self.match_message(message, key)
    }

    /// Match an encoded message string against `key`
    pub fn match_message<E: DeserializeOwned>(
        &self,
        message: &str,
        key: K,
    ) -> Result<MatchResult<E>> {
        let decoded = codec::decode_message(message)?;
        self.match_decoded(&decoded, key)
    }

    /// Match an already decoded message against `key`
    pub fn match_decoded<E: DeserializeOwned>(
        &self,
        decoded: &Decoded,
        key: K,
    ) -> Result<MatchResult<E>> {
        if !decoded.matches_message(key.message()) {
            tracing::trace!(key = key.name(), "message belongs to another key");
            return Ok(ResultBox::ok(None));
        }
        Ok(ResultBox::ok(decoded.payload_as()?))
    }

    /// Find the key whose message the caught value carries
    pub fn classify(&self, caught: &(dyn Any + Send)) -> Result<Option<K>> {
        let decoded = codec::decode(caught)?;
        Ok(K::ALL
            .iter()
            .copied()
            .find(|key| decoded.matches_message(key.message())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use serde::{Deserialize, Serialize};

    crate::error_set! {
        enum Header {
            notFound => "not found",
            somethingWrong => "something wrong...",
            wrongHeader => "please fix your header.",
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        age: u32,
        has_a_job: bool,
    }

    fn raise<E: Serialize>(result: ResultBox<(), E>) -> Box<dyn Any + Send> {
        Box::new(result.try_unwrap().unwrap_err())
    }

    #[test]
    fn test_messages() {
        let errors = error_set::<Header>();
        let pairs: Vec<_> = errors.messages().collect();
        assert_eq!(pairs[0], ("notFound", "not found"));
        assert_eq!(pairs.len(), 3);
        assert_eq!(errors.message(Header::wrongHeader), "please fix your header.");
    }

    #[test]
    fn test_new_err_without_payload() {
        let errors = ErrorSet::<Header>::new();
        let result = errors.new_err::<u8>(Header::wrongHeader);
        assert_eq!(result, ResultBox::err("please fix your header.", ()));

        let raised = result.try_unwrap().unwrap_err();
        assert_eq!(raised.message(), "please fix your header.:--> null");
    }

    #[test]
    fn test_match_structured_payload() {
        let errors = ErrorSet::<Header>::new();
        let person = Person {
            name: "Name".to_string(),
            age: 12,
            has_a_job: true,
        };
        let caught = raise(errors.new_err_with(Header::somethingWrong, person));

        let matched = errors
            .match_caught::<Person>(caught.as_ref(), Header::somethingWrong)
            .unwrap();
        assert_eq!(
            matched.unwrap(),
            Some(Person {
                name: "Name".to_string(),
                age: 12,
                has_a_job: true,
            })
        );
    }

    #[test]
    fn test_mismatch_does_not_deserialize_payload() {
        let errors = ErrorSet::<Header>::new();
        let caught = raise(errors.new_err_with(Header::notFound, "a string payload"));

        let matched = errors
            .match_caught::<u64>(caught.as_ref(), Header::wrongHeader)
            .unwrap();
        assert_eq!(matched, ResultBox::ok(None));
    }

    #[test]
    fn test_match_without_payload_yields_none() {
        let errors = ErrorSet::<Header>::new();
        let caught = raise(errors.new_err(Header::notFound));
        let matched = errors
            .match_caught::<u64>(caught.as_ref(), Header::notFound)
            .unwrap();
        assert_eq!(matched.unwrap(), None);
    }

    #[test]
    fn test_match_unknown_value() {
        let errors = ErrorSet::<Header>::new();
        let caught: Box<dyn Any + Send> = Box::new(vec![1_u8, 2, 3]);
        let matched = errors
            .match_caught::<u64>(caught.as_ref(), Header::notFound)
            .unwrap();
        assert!(matched.is_err());
        assert_eq!(matched.message(), Some(UNKNOWN_TYPE));

        let raised = matched.try_unwrap().unwrap_err();
        assert_eq!(raised.message(), "e is unknown type::--> null");
    }

    #[test]
    fn test_payload_type_mismatch_on_matching_key() {
        let errors = ErrorSet::<Header>::new();
        let caught = raise(errors.new_err_with(Header::notFound, "text"));
        let err = errors
            .match_caught::<u64>(caught.as_ref(), Header::notFound)
            .unwrap_err();
        assert!(matches!(err, CodecError::PayloadType(_)));
    }

    #[test]
    fn test_malformed_payload_propagates() {
        let errors = ErrorSet::<Header>::new();
        let err = errors
            .match_message::<u64>("not found:--> {oops", Header::notFound)
            .unwrap_err();
        assert!(matches!(err, CodecError::PayloadDecode(_)));
    }

    #[test]
    fn test_classify() {
        let errors = ErrorSet::<Header>::new();
        let caught = raise(errors.new_err_with(Header::somethingWrong, 7));
        assert_eq!(errors.classify(caught.as_ref()).unwrap(), Some(Header::somethingWrong));

        let other: Box<dyn Any + Send> = Box::new("unrelated panic");
        assert_eq!(errors.classify(other.as_ref()).unwrap(), None);
        assert_eq!(errors.key_by_name("notFound"), Some(Header::notFound));
    }
}
