//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that
//! can have a function applied to their inner value while preserving the
//! structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent
//! functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their
//! composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Functor;
//!
//! let value = Maybe::just(5);
//! let transformed = value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::just("5".to_string()));
//!
//! // Nothing is preserved
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::nothing());
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their
/// contents.
///
/// `Functor` represents the ability to apply a function to the value
/// inside a container while preserving the container's structure.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Functor;
    ///
    /// let value = Maybe::just(5);
    /// assert_eq!(value.fmap(|n| n * 2), Maybe::just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor should not be consumed, or the inner type
    /// does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Functor;
    ///
    /// let text = Maybe::just("hello".to_string());
    /// let length = text.fmap_ref(|s| s.len());
    /// assert_eq!(length, Maybe::just(5));
    /// // text is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// Equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    /// assert_eq!(Maybe::<i32>::nothing().replace("replaced"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Useful when only the shape of the functor matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).void(), Maybe::just(()));
    /// assert_eq!(Maybe::<i32>::nothing().void(), Maybe::nothing());
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn fmap_transforms_just() {
        assert_eq!(Maybe::just(5).fmap(|n| n + 1), Maybe::just(6));
    }

    #[rstest]
    fn fmap_preserves_nothing() {
        let absent: Maybe<i32> = Maybe::nothing();
        assert_eq!(absent.fmap(|n| n + 1), Maybe::nothing());
    }

    #[rstest]
    fn fmap_ref_leaves_original_usable() {
        let text = Maybe::just("hello".to_string());
        assert_eq!(text.fmap_ref(|s| s.len()), Maybe::just(5));
        assert!(text.is_just());
    }

    #[rstest]
    fn replace_and_void() {
        assert_eq!(Maybe::just(5).replace('x'), Maybe::just('x'));
        assert_eq!(Maybe::just(5).void(), Maybe::just(()));
        assert_eq!(Maybe::<i32>::nothing().void(), Maybe::nothing());
    }
}
