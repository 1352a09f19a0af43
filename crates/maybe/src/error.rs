//! Error type for container operations
//!
//! One error kind exists in this crate: asking a present value out of an
//! absent container (or constructing a guaranteed-present container from an
//! absent input). Everything else is encoded in the type system.

use std::borrow::Cow;

use thiserror::Error;

/// Result type alias for fallible container operations
pub type MaybeResult<T> = Result<T, EmptyValueError>;

/// No value was available where one was required.
///
/// Returned by [`Maybe::some`](crate::Maybe::some) when the input lifts to an
/// absent container, and by [`Maybe::get`](crate::Maybe::get) /
/// [`Maybe::expect`](crate::Maybe::expect) when called on an absent container.
///
/// Carries either the fixed default message or a caller-supplied one
/// (`expect`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EmptyValueError {
    message: Cow<'static, str>,
}

impl EmptyValueError {
    /// Message used when no caller-supplied message is given.
    pub const DEFAULT_MESSAGE: &'static str = "Provided value must not be empty";

    /// Create an error with the default message
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed(Self::DEFAULT_MESSAGE),
        }
    }

    /// Create an error carrying a caller-supplied message
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message this error was constructed with
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for EmptyValueError {
    fn default() -> Self {
        Self::new()
    }
}
