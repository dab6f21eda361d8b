//! Foldable type class - reducing a structure to a summary value.
//!
//! This module provides the `Foldable` trait for structures whose
//! elements can be folded into an accumulator. A `Maybe` holds zero or
//! one elements, so its folds run the folder at most once; the empty
//! structure returns the accumulator unchanged.
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Foldable;
//!
//! let sum = Maybe::just(2).fold_left(40, |state, n| state + n);
//! assert_eq!(sum, 42);
//!
//! assert_eq!(Maybe::just(5).length(), 1);
//! assert_eq!(Maybe::<i32>::nothing().length(), 0);
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold`.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function combining the accumulator with an element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// assert_eq!(Maybe::just(2).fold_left(40, |state, n| state + n), 42);
    /// assert_eq!(Maybe::<i32>::nothing().fold_left(40, |state, n| state + n), 40);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// The element comes first in the folder's argument list. For a
    /// zero-or-one-element structure the result matches `fold_left` with
    /// swapped arguments; it is offered separately for API parity with
    /// sequence folds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// assert_eq!(Maybe::just(2).fold_right(40, |n, state| state + n), 42);
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// assert!(!Maybe::just(5).is_empty());
    /// assert!(Maybe::<i32>::nothing().is_empty());
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// assert_eq!(Maybe::just(5).length(), 1);
    /// assert_eq!(Maybe::<i32>::nothing().length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// assert_eq!(Maybe::just(42).to_list(), vec![42]);
    /// assert_eq!(Maybe::<i32>::nothing().to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// Returns `Just(element)` if found, `Nothing` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// assert_eq!(Maybe::just(4).find(|n| *n > 3), Maybe::just(4));
    /// assert_eq!(Maybe::just(2).find(|n| *n > 3), Maybe::nothing());
    /// ```
    fn find<P>(self, mut predicate: P) -> Maybe<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Maybe::Nothing, |accumulator, element| {
            if accumulator.is_just() {
                accumulator
            } else if predicate(&element) {
                Maybe::Just(element)
            } else {
                Maybe::Nothing
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// assert!(Maybe::just(4).exists(|n| *n > 3));
    /// assert!(!Maybe::<i32>::nothing().exists(|n| *n > 3));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_just()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for the empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::typeclass::Foldable;
    ///
    /// assert!(Maybe::just(4).for_all(|n| *n % 2 == 0));
    /// assert!(Maybe::<i32>::nothing().for_all(|n| *n % 2 == 0));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Maybe::Just(value) => function(init, value),
            Maybe::Nothing => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Maybe::Just(value) => function(value, init),
            Maybe::Nothing => init,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_nothing()
    }

    fn length(&self) -> usize {
        self.count()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn fold_left_runs_folder_once_on_just() {
        assert_eq!(Maybe::just(2).fold_left(40, |state, n| state + n), 42);
    }

    #[rstest]
    fn fold_left_returns_init_on_nothing() {
        assert_eq!(
            Maybe::<i32>::nothing().fold_left(40, |state, n| state + n),
            40
        );
    }

    #[rstest]
    fn fold_right_passes_element_first() {
        let result = Maybe::just("a").fold_right("b".to_string(), |element, state| {
            format!("{element}{state}")
        });
        assert_eq!(result, "ab");
    }

    #[rstest]
    fn to_list_matches_into_vec() {
        assert_eq!(Maybe::just(42).to_list(), Maybe::just(42).into_vec());
        assert_eq!(
            Maybe::<i32>::nothing().to_list(),
            Maybe::<i32>::nothing().into_vec()
        );
    }

    #[rstest]
    fn find_returns_maybe() {
        assert_eq!(Maybe::just(4).find(|n| *n > 3), Maybe::just(4));
        assert_eq!(Maybe::just(2).find(|n| *n > 3), Maybe::nothing());
        assert_eq!(Maybe::<i32>::nothing().find(|_| true), Maybe::nothing());
    }

    #[rstest]
    fn length_and_is_empty_use_overrides() {
        assert_eq!(Maybe::just(5).length(), 1);
        assert!(!Maybe::just(5).is_empty());
        assert!(Maybe::<i32>::nothing().is_empty());
    }
}
