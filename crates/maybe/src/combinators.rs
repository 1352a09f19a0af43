//! Transformation and combination of containers
//!
//! Every combinator consumes the container and returns a new one, so chains
//! read left to right without intermediate bindings:
//!
//! ```rust,ignore
//! let port = Maybe::of(raw_port)
//!     .try_map(|s| s.parse::<u16>())
//!     .filter(|p| *p >= 1024)
//!     .get_or(8080);
//! ```
//!
//! Combinators that accept another value ([`and`](Maybe::and),
//! [`or`](Maybe::or), [`xor`](Maybe::xor)) auto-lift it, so a nullable
//! literal argument behaves exactly like the container it would lift to.
//! The `*_with` forms take a producer instead and invoke it only when the
//! result is needed.

use std::fmt;

use tracing::trace;

use crate::Maybe;

impl<T> Maybe<T> {
    // ==================== Transformation ====================

    /// Transform the held value, lifting the result.
    ///
    /// Absent containers pass through untouched and `transform` is never
    /// invoked. A present value is fed to `transform` and the result lifted:
    /// a transform returning a `Maybe` (or an `Option`) is flattened rather
    /// than nested, and a plain result goes through the [`Maybe::of`] lift.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(Maybe::Some(2).map(|v| v + 1), Maybe::Some(3));
    /// // A Maybe-returning transform does not nest:
    /// assert_eq!(Maybe::Some(2).map(|v| Maybe::Some(v + 1)), Maybe::Some(3));
    /// ```
    pub fn map<U, R, F>(self, transform: F) -> Maybe<U>
    where
        R: Into<Maybe<U>>,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => transform(value).into(),
            Self::None => Maybe::None,
        }
    }

    /// Transform the held value, or return `default` if absent.
    ///
    /// The result is returned unwrapped, not re-lifted. `default` is
    /// evaluated eagerly; see [`map_or_else`](Maybe::map_or_else).
    pub fn map_or<U, F>(self, default: U, transform: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => transform(value),
            Self::None => default,
        }
    }

    /// Transform the held value, or produce a default if absent.
    ///
    /// Exactly one of the two closures runs.
    pub fn map_or_else<U, D, F>(self, default: D, transform: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => transform(value),
            Self::None => default(),
        }
    }

    /// Like [`map`](Maybe::map), but the transform is fallible and its error
    /// converts to absence.
    ///
    /// The error boundary wraps exactly the transform invocation; panics are
    /// not caught.
    pub fn try_map<U, R, E, F>(self, transform: F) -> Maybe<U>
    where
        R: Into<Maybe<U>>,
        E: fmt::Debug,
        F: FnOnce(T) -> Result<R, E>,
    {
        match self {
            Self::Some(value) => match transform(value) {
                Ok(result) => result.into(),
                Err(error) => {
                    trace!(?error, "transform failed, lifting to an absent container");
                    Maybe::None
                }
            },
            Self::None => Maybe::None,
        }
    }

    /// Keep the held value only if `predicate` accepts it.
    ///
    /// Absent input and a rejected value produce the same result: absence.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    // ==================== Combination ====================

    /// Return the lifted `other` if this container is present, absence
    /// otherwise.
    ///
    /// The result's presence depends only on `other`: a present container
    /// chained with an absent `other` is absent.
    pub fn and<U>(self, other: impl Into<Maybe<U>>) -> Maybe<U> {
        match self {
            Self::Some(_) => other.into(),
            Self::None => Maybe::None,
        }
    }

    /// Like [`and`](Maybe::and), with the other value coming from a producer
    /// invoked only when this container is present.
    pub fn and_with<U, R, F>(self, producer: F) -> Maybe<U>
    where
        R: Into<Maybe<U>>,
        F: FnOnce() -> R,
    {
        match self {
            Self::Some(_) => producer().into(),
            Self::None => Maybe::None,
        }
    }

    /// Return this container if present, the lifted `other` otherwise.
    pub fn or(self, other: impl Into<Maybe<T>>) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other.into(),
        }
    }

    /// Like [`or`](Maybe::or), with the fallback coming from a producer
    /// invoked only when this container is absent.
    pub fn or_with<R, F>(self, producer: F) -> Self
    where
        R: Into<Maybe<T>>,
        F: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => producer().into(),
        }
    }

    /// Return whichever of the two containers is present, if exactly one is.
    ///
    /// `other` is lifted eagerly — its presence must be known to decide.
    /// Both present or both absent produce absence.
    pub fn xor(self, other: impl Into<Maybe<T>>) -> Self {
        match (self, other.into()) {
            (Self::Some(value), Maybe::None) => Self::Some(value),
            (Self::None, Maybe::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Like [`xor`](Maybe::xor), with the other value coming from a producer.
    ///
    /// The producer is always invoked: deciding exclusive presence requires
    /// knowing both sides.
    pub fn xor_with<R, F>(self, producer: F) -> Self
    where
        R: Into<Maybe<T>>,
        F: FnOnce() -> R,
    {
        self.xor(producer())
    }

    // ==================== Side-effect hooks ====================

    /// Invoke `f` with a borrow of the held value, if present.
    ///
    /// Returns the container either way, so hooks slot into a chain.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Invoke `f` if the container is absent.
    ///
    /// Returns the container either way.
    pub fn inspect_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapse one level of nesting.
    ///
    /// The lifting constructors never produce a nested container; this exists
    /// for values nested by direct variant construction.
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Some(inner) => inner,
            Maybe::None => Maybe::None,
        }
    }
}
