//! Message catalogs keyed by enum variants

use std::fmt::Debug;

/// Key of a fixed message catalog
///
/// Implemented by enums declared with [`error_set!`](crate::error_set!).
/// Every variant maps to one literal message; the mapping never changes.
pub trait CatalogKey: Copy + Eq + Debug + 'static {
    /// Every key of the catalog, in declaration order
    const ALL: &'static [Self];

    /// Symbolic name of the key
    fn name(self) -> &'static str;

    /// Message registered for the key
    fn message(self) -> &'static str;

    /// Look a key up by its symbolic name
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }

    /// Look a key up by its registered message
    fn from_message(message: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.message() == message)
    }
}

/// Declare a message catalog
///
/// ```rust
/// use errset_core::{error_set, CatalogKey};
///
/// error_set! {
///     /// Arithmetic failures
///     pub enum MathError {
///         dividedByZero => "do not divide by Zero.",
///         dividedByNegative => "well, you did divide as Negative value.",
///     }
/// }
///
/// assert_eq!(MathError::dividedByZero.message(), "do not divide by Zero.");
/// assert_eq!(MathError::from_name("dividedByNegative"), Some(MathError::dividedByNegative));
/// ```
#[macro_export]
macro_rules! error_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $key:ident => $message:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $key, )+
        }

        impl $crate::CatalogKey for $name {
            const ALL: &'static [Self] = &[ $( $name::$key, )+ ];

            fn name(self) -> &'static str {
                match self {
                    $( $name::$key => stringify!($key), )+
                }
            }

            fn message(self) -> &'static str {
                match self {
                    $( $name::$key => $message, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::CatalogKey::message(*self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::error_set! {
        enum Stack {
            Full => "full of stack",
            OutOfBounds => "out of bounds",
        }
    }

    #[test]
    fn test_all_keys_in_declaration_order() {
        assert_eq!(Stack::ALL, &[Stack::Full, Stack::OutOfBounds]);
    }

    #[test]
    fn test_names_and_messages() {
        assert_eq!(Stack::Full.name(), "Full");
        assert_eq!(Stack::OutOfBounds.message(), "out of bounds");
        assert_eq!(Stack::Full.to_string(), "full of stack");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Stack::from_name("OutOfBounds"), Some(Stack::OutOfBounds));
        assert_eq!(Stack::from_name("Missing"), None);
        assert_eq!(Stack::from_message("full of stack"), Some(Stack::Full));
        assert_eq!(Stack::from_message("full of stack:--> null"), None);
    }
}
