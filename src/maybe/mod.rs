//! The `Maybe` optional-value type and its combinators.
//!
//! This module provides [`Maybe<T>`], a closed two-variant sum type that
//! models the presence (`Just`) or absence (`Nothing`) of a value, along
//! with the full combinator set defined over it:
//!
//! - Construction and predicates: [`Maybe::just`], [`Maybe::nothing`],
//!   [`Maybe::is_just`], [`Maybe::is_nothing`], [`Maybe::try_with`]
//! - Extraction: [`Maybe::unwrap_or`], [`Maybe::unwrap_or_else`],
//!   [`Maybe::unwrap_just`], [`Maybe::ok_or_absent`]
//! - Transformation: [`Maybe::map`], [`Maybe::map2`], [`Maybe::map3`],
//!   [`Maybe::bind`], [`Maybe::flatten`], [`Maybe::or`], [`Maybe::or_else`]
//! - Filtering: [`Maybe::filter`], [`Maybe::exists`], [`Maybe::for_all`],
//!   [`Maybe::contains`]
//! - Folding and matching: [`Maybe::fold`], [`Maybe::fold_back`],
//!   [`Maybe::for_each`], [`Maybe::match_with`], [`Maybe::visit`]
//! - Conversion and combination: [`Maybe::into_vec`], [`Maybe::as_slice`],
//!   [`Maybe::iter`], [`Maybe::zip`], [`Maybe::count`]
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//!
//! let doubled = Maybe::just(21).map(|n| n * 2);
//! assert_eq!(doubled, Maybe::just(42));
//!
//! let chained = Maybe::just("maybe")
//!     .bind(|s| if s.is_empty() { Maybe::nothing() } else { Maybe::just(s.len()) });
//! assert_eq!(chained, Maybe::just(5));
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.map(|n| n * 2), Maybe::nothing());
//! ```

mod convert;
mod core;
mod iter;

pub use self::core::{AbsentError, Maybe};
pub use self::iter::{IntoIter, Iter};
