//! Monad type class - sequencing optional computations.
//!
//! This module provides the `Monad` trait, which extends `Applicative`
//! with the ability to chain computations where each step may depend on
//! the value produced by the previous one, and where any step may fail to
//! produce a value.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Monad;
//!
//! fn first_char(s: &str) -> Maybe<char> {
//!     Maybe::from_option(s.chars().next())
//! }
//!
//! let result = Maybe::just("maybe").flat_map(first_char);
//! assert_eq!(result, Maybe::just('m'));
//!
//! let absent = Maybe::just("").flat_map(first_char);
//! assert_eq!(absent, Maybe::nothing());
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for types that support sequencing dependent computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which chains a
/// computation whose continuation is itself wrapped in the context.
pub trait Monad: Applicative {
    /// Chains a computation that produces a value in the same context.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the inner value to a new context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Monad;
    ///
    /// let result = Maybe::just(5).flat_map(|n| Maybe::just(n * 2));
    /// assert_eq!(result, Maybe::just(10));
    ///
    /// let absent = Maybe::<i32>::nothing().flat_map(|n| Maybe::just(n * 2));
    /// assert_eq!(absent, Maybe::nothing());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`], matching Rust's `Option`/`Result`
    /// vocabulary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Monad;
    ///
    /// let result = Maybe::just(5).and_then(|n| Maybe::just(n + 1));
    /// assert_eq!(result, Maybe::just(6));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// The second context is returned only if the first produced a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::just(1).then(Maybe::just("next")), Maybe::just("next"));
    /// assert_eq!(Maybe::<i32>::nothing().then(Maybe::just("next")), Maybe::nothing());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn flat_map_just_to_just() {
        assert_eq!(
            Maybe::just(5).flat_map(|n| Maybe::just(n * 2)),
            Maybe::just(10)
        );
    }

    #[rstest]
    fn flat_map_just_to_nothing() {
        assert_eq!(
            Maybe::just(5).flat_map(|_| Maybe::<i32>::nothing()),
            Maybe::nothing()
        );
    }

    #[rstest]
    fn flat_map_skips_function_on_nothing() {
        let absent: Maybe<i32> = Maybe::nothing();
        let result = absent.flat_map(|_| -> Maybe<i32> { panic!("must not be invoked") });
        assert_eq!(result, Maybe::nothing());
    }

    #[rstest]
    fn then_discards_first_value() {
        assert_eq!(Maybe::just(1).then(Maybe::just(2)), Maybe::just(2));
        assert_eq!(
            Maybe::<i32>::nothing().then(Maybe::just(2)),
            Maybe::nothing()
        );
    }
}
