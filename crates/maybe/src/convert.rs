//! Lifting conversions and untyped-data interop
//!
//! The conversion set is what makes the auto-lifting API work: every
//! operation accepting `impl Into<Maybe<T>>` takes plain values (lifted to
//! present containers), `Option`s (`None` lifts to absence) and other
//! `Maybe`s (passed through as-is).
//!
//! For typed data the type system already distinguishes "no value" from
//! "value", so no runtime absence check exists here. The [`Nullable`] trait
//! covers the remaining case: untyped/external data whose null lives inside
//! the value itself (e.g. `serde_json::Value::Null`).
//!
//! When the target type is not pinned by context, lifting an `Option` is
//! ambiguous (it could also lift to a present `Maybe<Option<T>>`); annotate
//! the container type at such call sites.

use crate::Maybe;

// ==================== Lifting ====================

impl<T> From<T> for Maybe<T> {
    /// A plain value lifts to a present container.
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `Option::None` lifts to absence, `Option::Some` to presence.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Exit to the std ecosystem.
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

// ==================== Untyped-data interop ====================

/// Absence-equivalence test for untyped data.
///
/// Typed data never needs this: `Option` and `Maybe` carry absence in the
/// type. Implement `Nullable` for representations whose "no value" is a
/// value itself — JSON nulls, sentinel records from foreign systems — so
/// they can enter the container world through
/// [`Maybe::of_nullable`].
pub trait Nullable: Sized {
    /// True iff this value should be treated as "no value".
    fn is_null(&self) -> bool;

    /// Lift into a container: null values become absent, everything else
    /// present.
    fn into_maybe(self) -> Maybe<Self> {
        if self.is_null() {
            Maybe::None
        } else {
            Maybe::Some(self)
        }
    }
}

/// `Value::Null` is the canonical absent-equivalent of untyped JSON.
#[cfg(feature = "json")]
impl Nullable for serde_json::Value {
    fn is_null(&self) -> bool {
        matches!(self, serde_json::Value::Null)
    }
}

impl<T: Nullable> Maybe<T> {
    /// Lift untyped data, consulting its absence-equivalence test.
    ///
    /// Composes with the guaranteed-present constructor:
    /// `Maybe::some(Maybe::of_nullable(value))` errors on a null input
    /// instead of producing an absent container.
    pub fn of_nullable(value: T) -> Self {
        value.into_maybe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_lifts_to_present() {
        let m: Maybe<i32> = 5.into();
        assert_eq!(m, Maybe::Some(5));
    }

    #[test]
    fn test_option_lifts_by_presence() {
        let present: Maybe<i32> = Some(5).into();
        assert_eq!(present, Maybe::Some(5));
        let absent: Maybe<i32> = Option::<i32>::None.into();
        assert_eq!(absent, Maybe::None);
    }

    #[test]
    fn test_option_round_trip() {
        let m: Maybe<i32> = Maybe::of(Some(5));
        assert_eq!(Option::from(m), Some(5));
        assert_eq!(Option::<i32>::from(Maybe::<i32>::None), None);
    }

    #[test]
    fn test_nested_option_lifts_to_nested_container_when_asked() {
        // The blanket lift still allows treating an Option as a plain value
        // when the target type says so.
        let m: Maybe<Option<i32>> = Maybe::of(Option::<i32>::None);
        assert_eq!(m, Maybe::Some(None));
    }

    #[cfg(feature = "json")]
    mod json {
        use serde_json::{Value, json};

        use crate::{Maybe, Nullable};

        #[test]
        fn test_json_null_is_absent_equivalent() {
            assert!(Nullable::is_null(&Value::Null));
            assert!(!Nullable::is_null(&json!(0)));
            assert!(!Nullable::is_null(&json!("")));
        }

        #[test]
        fn test_of_nullable_lifts_json_by_nullness() {
            assert_eq!(Maybe::of_nullable(json!(42)), Maybe::Some(json!(42)));
            assert_eq!(Maybe::of_nullable(Value::Null), Maybe::None);
        }

        #[test]
        fn test_some_rejects_json_null() {
            let err = Maybe::<Value>::some(Maybe::of_nullable(Value::Null)).unwrap_err();
            assert_eq!(err.message(), "Provided value must not be empty");
            assert!(Maybe::<Value>::some(Maybe::of_nullable(json!("x"))).is_ok());
        }
    }
}
