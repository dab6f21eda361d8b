//! # maybars
//!
//! An optional-value type for Rust in the ML `Maybe` tradition, with a
//! full combinator library and type class instances.
//!
//! ## Overview
//!
//! This library provides [`Maybe<T>`](maybe::Maybe), a closed two-variant
//! sum type modeling the presence (`Just`) or absence (`Nothing`) of a
//! value, together with:
//!
//! - **Combinators**: map, bind, filter, fold, zip, pattern matching as
//!   functions, lazy fallbacks, and panic-absorbing construction
//! - **Conversions**: `Option` interop, `Vec`/slice views, and a lazy
//!   restartable iterator
//! - **Type Classes**: Functor, Applicative, Monad, and Foldable instances
//!   built on GAT-based higher-kinded type emulation
//!
//! `Maybe` models *optionality*, not *failure with a reason*: there is
//! exactly one designated error condition ("value absent"), surfaced only
//! by the explicitly unsafe extractors.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.) and their
//!   `Maybe` instances (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe<T>`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybars::prelude::*;
//!
//! let value = Maybe::just(5)
//!     .filter(|n| *n % 5 == 0)
//!     .map(|n| n * 2);
//! assert_eq!(value, Maybe::just(10));
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.unwrap_or(0), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybars::prelude::*;
/// ```
pub mod prelude {

    pub use crate::maybe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use maybe::{AbsentError, Maybe};
