//! Applicative type class - combining independent optional computations.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine multiple applicative values using a function (`map2`, `map3`)
//! - Create tuples of applicative values (`product`)
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Applicative;
//!
//! // Lifting a pure value into the Maybe context
//! let value: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(value, Maybe::just(42));
//!
//! // Combining two Maybe values
//! let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::just(3));
//!
//! // Creating a tuple of values
//! let pair = Maybe::just(1).product(Maybe::just("hello"));
//! assert_eq!(pair, Maybe::just((1, "hello")));
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A type class for types that support lifting values and combining
/// contexts.
///
/// `Applicative` extends `Functor` with the ability to lift any value
/// into the context using `pure`, and to combine multiple values in the
/// context using `map2`/`map3`. For `Maybe`, combination short-circuits:
/// the result is `Nothing` the instant any input is `Nothing`.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Applicative;
    ///
    /// let value: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(value, Maybe::just(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// The function is applied only when both computations produced a
    /// value.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Applicative;
    ///
    /// let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
    /// assert_eq!(sum, Maybe::just(3));
    ///
    /// let absent = Maybe::just(1).map2(Maybe::<i32>::nothing(), |a, b| a + b);
    /// assert_eq!(absent, Maybe::nothing());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Applicative;
    ///
    /// let sum = Maybe::just(1).map3(Maybe::just(2), Maybe::just(3), |a, b, c| a + b + c);
    /// assert_eq!(sum, Maybe::just(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Applicative;
    ///
    /// let pair = Maybe::just(1).product(Maybe::just("hello"));
    /// assert_eq!(pair, Maybe::just((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicatives and keeps the left value.
    ///
    /// Both inputs must be present for the result to be present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::just(1).product_left(Maybe::just(2)), Maybe::just(1));
    /// assert_eq!(Maybe::just(1).product_left(Maybe::<i32>::nothing()), Maybe::nothing());
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicatives and keeps the right value.
    ///
    /// Both inputs must be present for the result to be present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::just(1).product_right(Maybe::just(2)), Maybe::just(2));
    /// assert_eq!(Maybe::<i32>::nothing().product_right(Maybe::just(2)), Maybe::nothing());
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the
    /// context.
    ///
    /// Available when `Self` contains a function type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Maybe::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Maybe::Just(function), Maybe::Just(b)) => Maybe::Just(function(b)),
            _ => Maybe::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pure_creates_just() {
        let value: Maybe<i32> = <Maybe<()>>::pure(42);
        assert_eq!(value, Maybe::just(42));
    }

    #[rstest]
    fn map2_requires_both_inputs() {
        assert_eq!(
            Maybe::just(1).map2(Maybe::just(2), |a, b| a + b),
            Maybe::just(3)
        );
        assert_eq!(
            Maybe::just(1).map2(Maybe::<i32>::nothing(), |a, b| a + b),
            Maybe::nothing()
        );
        assert_eq!(
            Maybe::<i32>::nothing().map2(Maybe::just(2), |a, b| a + b),
            Maybe::nothing()
        );
    }

    #[rstest]
    fn map3_requires_all_inputs() {
        assert_eq!(
            Maybe::just(1).map3(Maybe::just(2), Maybe::just(3), |a, b, c| a + b + c),
            Maybe::just(6)
        );
        assert_eq!(
            Maybe::just(1).map3(Maybe::<i32>::nothing(), Maybe::just(3), |a, b, c| a + b + c),
            Maybe::nothing()
        );
    }

    #[rstest]
    fn product_pairs_values() {
        assert_eq!(
            Maybe::just(1).product(Maybe::just("a")),
            Maybe::just((1, "a"))
        );
        assert_eq!(
            Maybe::<i32>::nothing().product(Maybe::just("a")),
            Maybe::nothing()
        );
    }

    #[rstest]
    fn apply_uses_contained_function() {
        let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x * 2);
        assert_eq!(function.apply(Maybe::just(21)), Maybe::just(42));

        let absent: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert_eq!(absent.apply(Maybe::just(21)), Maybe::nothing());
    }
}
