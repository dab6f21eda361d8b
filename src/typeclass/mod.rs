//! Type class traits for the `Maybe` optional-value type.
//!
//! This module provides the fundamental type classes (traits) that give
//! [`Maybe`](crate::Maybe) its functional-programming pedigree:
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Combining independent optional values
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding the zero-or-one contained values to a summary
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior via [`TypeConstructor`], allowing the traits above to be
//! stated generically rather than hard-wired to `Maybe`.
//!
//! # Examples
//!
//! ## Using Functor
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Functor;
//!
//! let value = Maybe::just(5);
//! let transformed = value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::just("5".to_string()));
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Applicative;
//!
//! // Lifting a pure value
//! let value: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(value, Maybe::just(42));
//!
//! // Combining two optional values
//! let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::just(3));
//! ```
//!
//! ## Using Monad
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Monad;
//!
//! let result = Maybe::just(4).flat_map(|n| {
//!     if n > 0 { Maybe::just(n * 10) } else { Maybe::nothing() }
//! });
//! assert_eq!(result, Maybe::just(40));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
