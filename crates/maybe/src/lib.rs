//! # maybe
//!
//! A typed optional-value container: a [`Maybe<T>`] is either
//! `Maybe::Some(value)` or `Maybe::None`, and absence is part of the type —
//! no sentinel checks, no value reachable without an explicit fallback.
//!
//! ## Quick Start
//!
//! ```rust
//! use maybe::Maybe;
//!
//! // Lift nullable data once, then stay in the container world.
//! let timeout: Maybe<u64> = Maybe::of(None);
//! let effective = timeout.filter(|t| *t > 0).get_or(30);
//! assert_eq!(effective, 30);
//!
//! // Fallible parsing folds into absence instead of propagating.
//! let port: Maybe<u16> = Maybe::Some("8080").try_map(str::parse::<u16>);
//! assert_eq!(port, Maybe::Some(8080));
//! ```
//!
//! ## Operation surface
//!
//! - **Construction**: [`Maybe::some`] / [`Maybe::some_with`] (guaranteed
//!   present, error on absent input), [`Maybe::none`], [`Maybe::of`] /
//!   [`Maybe::of_with`] (the lift), [`Maybe::try_of`] (failure → absence)
//! - **Inspection**: [`Maybe::is_some`], [`Maybe::is_none`],
//!   [`Maybe::contains`]
//! - **Unwrapping**: [`Maybe::get`], [`Maybe::expect`], [`Maybe::get_or`],
//!   [`Maybe::get_or_else`], [`Maybe::get_or_default`]
//! - **Transformation**: [`Maybe::map`] (auto-flattening), [`Maybe::map_or`],
//!   [`Maybe::map_or_else`], [`Maybe::try_map`], [`Maybe::filter`]
//! - **Combination**: [`Maybe::and`], [`Maybe::or`], [`Maybe::xor`] and
//!   their lazy `*_with` forms
//! - **Side-effect hooks**: [`Maybe::inspect`], [`Maybe::inspect_none`]
//! - **Interop**: `From`/`Into` against plain values and `Option`, the
//!   [`Nullable`] trait for untyped data (`json` feature)
//!
//! Producers (`*_with` arguments) are `FnOnce` and run at most once, only on
//! the path where their value is needed.

mod combinators;
mod convert;
mod error;
mod maybe;

pub use convert::Nullable;
pub use error::{EmptyValueError, MaybeResult};
pub use maybe::Maybe;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{EmptyValueError, Maybe, MaybeResult, Nullable};
}
