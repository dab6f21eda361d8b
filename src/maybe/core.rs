//! Maybe type - an optional value with two variants.
//!
//! This module provides the `Maybe<T>` type, which represents a value that
//! is either present (`Just(T)`) or absent (`Nothing`). This is commonly
//! used in functional programming for:
//!
//! - Modeling optionality without sentinel values
//! - Chaining computations that may not produce a value
//! - Making "no value" cases explicit at the type level
//!
//! `Maybe` strictly models *optionality*, not *failure with a reason*; the
//! single designated error condition is [`AbsentError`], surfaced only by
//! the explicitly unsafe extractors.
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::just(42);
//! let absent: Maybe<i32> = Maybe::nothing();
//!
//! // Pattern matching
//! match present {
//!     Maybe::Just(n) => println!("Got value: {}", n),
//!     Maybe::Nothing => println!("No value"),
//! }
//!
//! // Using match_with to handle both cases
//! let description = absent.match_with(
//!     |n| format!("Number: {}", n),
//!     || "absent".to_string(),
//! );
//! assert_eq!(description, "absent");
//! ```

use std::fmt;
use std::panic::{self, UnwindSafe};

use thiserror::Error;

/// The designated "value absent" error.
///
/// Returned by [`Maybe::ok_or_absent`] when called on `Nothing`. This is
/// the only error condition in the library's contract, and it is a
/// distinct type so callers can branch on it or embed it in their own
/// error enums.
///
/// # Examples
///
/// ```rust
/// use maybars::{AbsentError, Maybe};
///
/// let absent: Maybe<i32> = Maybe::nothing();
/// assert_eq!(absent.ok_or_absent(), Err(AbsentError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value absent: `Maybe` holds `Nothing`")]
pub struct AbsentError;

/// An optional value: either present or absent.
///
/// `Maybe<T>` represents a value that is either `Just(T)` or `Nothing`.
/// Exactly one of the two variants is active at any time; there is no
/// third state and no sentinel value. Equality is structural: two values
/// are equal iff both are `Nothing`, or both are `Just` with equal
/// contents.
///
/// The type is immutable in spirit: every transforming operation consumes
/// `self` and produces a new value, and no in-place mutation API is
/// offered.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value. May itself be a `Maybe<U>`,
///   enabling nesting (see [`Maybe::flatten`]).
///
/// # Examples
///
/// ```rust
/// use maybars::Maybe;
///
/// let value: Maybe<i32> = Maybe::just(42);
/// let doubled = value.map(|x| x * 2);
/// assert_eq!(doubled, Maybe::just(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The variant holding a value.
    Just(T),
    /// The variant holding no value.
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in the `Just` variant.
    ///
    /// Total: never fails, even if `value` is itself an absent-like value
    /// of another optional type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let value = Maybe::just(42);
    /// assert!(value.is_just());
    ///
    /// // Nesting is allowed
    /// let nested = Maybe::just(Maybe::<i32>::nothing());
    /// assert!(nested.is_just());
    /// ```
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Returns the `Nothing` value for `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert!(absent.is_nothing());
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Invokes a thunk exactly once, absorbing any panic it raises.
    ///
    /// Returns `Just` of the thunk's result on normal return, `Nothing` if
    /// the thunk panics. This is the only construction path that absorbs
    /// failures; every other operation in this library propagates panics
    /// from caller-supplied closures unchanged.
    ///
    /// The panic is caught via [`std::panic::catch_unwind`], so the
    /// process-wide panic hook still runs (by default, printing the panic
    /// message to stderr).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let parsed = Maybe::try_with(|| "42".parse::<i32>().unwrap());
    /// assert_eq!(parsed, Maybe::just(42));
    ///
    /// std::panic::set_hook(Box::new(|_| {})); // quiet the expected panic
    /// let failed = Maybe::try_with(|| "not a number".parse::<i32>().unwrap());
    /// assert_eq!(failed, Maybe::nothing());
    /// ```
    pub fn try_with<F>(function: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(function) {
            Ok(value) => Self::Just(value),
            Err(_) => Self::Nothing,
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert!(Maybe::just(42).is_just());
    /// assert!(!Maybe::<i32>::nothing().is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert!(Maybe::<i32>::nothing().is_nothing());
    /// assert!(!Maybe::just(42).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Reference Adaptation
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// Useful for running consuming combinators without giving up the
    /// original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let text = Maybe::just("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::just(5));
    /// // text is still available here
    /// assert!(text.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, or `default` if this is `Nothing`.
    ///
    /// The default is an already-computed value; for a lazily computed
    /// fallback use [`Maybe::unwrap_or_else`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).unwrap_or(0), 42);
    /// assert_eq!(Maybe::<i32>::nothing().unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value, or computes one from a thunk.
    ///
    /// Laziness contract: the thunk is invoked at most once, and only when
    /// this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).unwrap_or_else(|| unreachable!()), 42);
    /// assert_eq!(Maybe::<i32>::nothing().unwrap_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Returns the contained value, consuming the maybe.
    ///
    /// This is the single partial extraction primitive; prefer
    /// [`Maybe::unwrap_or`], [`Maybe::unwrap_or_else`], or
    /// [`Maybe::ok_or_absent`] where the absent case is expected.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`, with a message distinct from any
    /// caller-code failure so call sites are auditable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).unwrap_just(), 42);
    /// ```
    #[inline]
    pub fn unwrap_just(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::unwrap_just()` on a `Nothing` value"),
        }
    }

    /// Converts to a `Result`, mapping `Nothing` to the designated
    /// [`AbsentError`].
    ///
    /// This is the branchable form of [`Maybe::unwrap_just`]: callers that
    /// need to distinguish "value absent" from their own failures can
    /// match on the error type.
    ///
    /// # Errors
    ///
    /// Returns `Err(AbsentError)` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::{AbsentError, Maybe};
    ///
    /// assert_eq!(Maybe::just(42).ok_or_absent(), Ok(42));
    /// assert_eq!(Maybe::<i32>::nothing().ok_or_absent(), Err(AbsentError));
    /// ```
    #[inline]
    pub fn ok_or_absent(self) -> Result<T, AbsentError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(AbsentError),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the contained value, if present.
    ///
    /// The function is applied at most once, and never on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(21).map(|n| n * 2), Maybe::just(42));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n * 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Combines two maybes using a binary function.
    ///
    /// The function is applied only when both inputs are `Just`; any
    /// `Nothing` input short-circuits to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
    /// assert_eq!(sum, Maybe::just(3));
    ///
    /// let absent = Maybe::just(1).map2(Maybe::<i32>::nothing(), |a, b| a + b);
    /// assert_eq!(absent, Maybe::nothing());
    /// ```
    #[inline]
    pub fn map2<U, V, F>(self, other: Maybe<U>, function: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }

    /// Combines three maybes using a ternary function.
    ///
    /// The function is applied only when all three inputs are `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let sum = Maybe::just(1).map3(Maybe::just(2), Maybe::just(3), |a, b, c| a + b + c);
    /// assert_eq!(sum, Maybe::just(6));
    /// ```
    #[inline]
    pub fn map3<U, V, W, F>(self, second: Maybe<U>, third: Maybe<V>, function: F) -> Maybe<W>
    where
        F: FnOnce(T, U, V) -> W,
    {
        match (self, second, third) {
            (Self::Just(first), Maybe::Just(second), Maybe::Just(third)) => {
                Maybe::Just(function(first, second, third))
            }
            _ => Maybe::Nothing,
        }
    }

    /// Chains a maybe-producing computation (monadic sequencing).
    ///
    /// Returns `function(value)` if this is `Just(value)`, otherwise
    /// `Nothing` without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// fn reciprocal(n: f64) -> Maybe<f64> {
    ///     if n == 0.0 { Maybe::nothing() } else { Maybe::just(1.0 / n) }
    /// }
    ///
    /// assert_eq!(Maybe::just(4.0).bind(reciprocal), Maybe::just(0.25));
    /// assert_eq!(Maybe::just(0.0).bind(reciprocal), Maybe::nothing());
    /// assert_eq!(Maybe::nothing().bind(reciprocal), Maybe::nothing());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns this maybe if it is `Just`, otherwise `alternative`.
    ///
    /// The alternative is an already-constructed value; for a lazily
    /// computed alternative use [`Maybe::or_else`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(1).or(Maybe::just(2)), Maybe::just(1));
    /// assert_eq!(Maybe::nothing().or(Maybe::just(2)), Maybe::just(2));
    /// ```
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative,
        }
    }

    /// Returns this maybe if it is `Just`, otherwise computes an
    /// alternative from a thunk.
    ///
    /// Laziness contract: the thunk is invoked at most once, and only when
    /// this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(1).or_else(|| unreachable!()), Maybe::just(1));
    /// assert_eq!(Maybe::nothing().or_else(|| Maybe::just(2)), Maybe::just(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the contained value only if it satisfies a predicate.
    ///
    /// `Nothing` stays `Nothing` and the predicate is never invoked on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).filter(|n| *n == 5), Maybe::just(5));
    /// assert_eq!(Maybe::just(5).filter(|n| *n != 5), Maybe::nothing());
    /// assert_eq!(Maybe::<i32>::nothing().filter(|_| true), Maybe::nothing());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Returns whether the contained value satisfies a predicate.
    ///
    /// Returns `false` on `Nothing` without invoking the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert!(Maybe::just(4).exists(|n| n % 2 == 0));
    /// assert!(!Maybe::just(3).exists(|n| n % 2 == 0));
    /// assert!(!Maybe::<i32>::nothing().exists(|n| n % 2 == 0));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => predicate(value),
            Self::Nothing => false,
        }
    }

    /// Returns whether every contained value satisfies a predicate.
    ///
    /// Returns `true` on `Nothing` (vacuous truth over an empty
    /// container).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert!(Maybe::just(4).for_all(|n| n % 2 == 0));
    /// assert!(!Maybe::just(3).for_all(|n| n % 2 == 0));
    /// assert!(Maybe::<i32>::nothing().for_all(|n| n % 2 == 0));
    /// ```
    #[inline]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => predicate(value),
            Self::Nothing => true,
        }
    }

    /// Returns whether the contained value equals `value`.
    ///
    /// Equality is value equality via `PartialEq`; `Nothing` never
    /// contains anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert!(Maybe::just(42).contains(&42));
    /// assert!(!Maybe::just(42).contains(&43));
    /// assert!(!Maybe::<i32>::nothing().contains(&42));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Just(contained) => contained == value,
            Self::Nothing => false,
        }
    }

    // =========================================================================
    // Folding, Iteration, Matching
    // =========================================================================

    /// Folds over the zero-or-one contained values from the left.
    ///
    /// Returns `folder(state, value)` for `Just(value)`, otherwise `state`
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).fold(40, |state, n| state + n), 42);
    /// assert_eq!(Maybe::<i32>::nothing().fold(40, |state, n| state + n), 40);
    /// ```
    #[inline]
    pub fn fold<S, F>(self, state: S, folder: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self {
            Self::Just(value) => folder(state, value),
            Self::Nothing => state,
        }
    }

    /// Folds over the zero-or-one contained values from the right.
    ///
    /// Argument order is reversed relative to [`Maybe::fold`], for parity
    /// with sequence folds; the result is equivalent for a single-element
    /// container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).fold_back(|n, state| state + n, 40), 42);
    /// assert_eq!(Maybe::<i32>::nothing().fold_back(|n, state| state + n, 40), 40);
    /// ```
    #[inline]
    pub fn fold_back<S, F>(self, folder: F, state: S) -> S
    where
        F: FnOnce(T, S) -> S,
    {
        match self {
            Self::Just(value) => folder(value, state),
            Self::Nothing => state,
        }
    }

    /// Invokes an action on the contained value, if present.
    ///
    /// The action runs exactly once for `Just`, never for `Nothing`; its
    /// return value is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// Maybe::just(42).for_each(|n| seen.push(n));
    /// Maybe::<i32>::nothing().for_each(|n| seen.push(n));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Self::Just(value) = self {
            action(value);
        }
    }

    /// Eliminates the maybe by applying one of two functions.
    ///
    /// Exactly one branch is invoked, never zero, never both. This is
    /// "pattern matching as a function", the value-producing form; for the
    /// side-effecting form see [`Maybe::visit`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let text = Maybe::just(42).match_with(|n| n.to_string(), || "absent".to_string());
    /// assert_eq!(text, "42");
    ///
    /// let text = Maybe::<i32>::nothing().match_with(|n| n.to_string(), || "absent".to_string());
    /// assert_eq!(text, "absent");
    /// ```
    #[inline]
    pub fn match_with<R, F, G>(self, on_just: F, on_nothing: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Invokes one of two side-effecting callbacks.
    ///
    /// Exactly one branch is invoked. Equivalent to
    /// [`Maybe::match_with`] with `()` results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let log = std::cell::RefCell::new(Vec::new());
    /// Maybe::just(42).visit(
    ///     |n| log.borrow_mut().push(n.to_string()),
    ///     || log.borrow_mut().push("absent".to_string()),
    /// );
    /// assert_eq!(log.into_inner(), vec!["42".to_string()]);
    /// ```
    #[inline]
    pub fn visit<F, G>(self, on_just: F, on_nothing: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        self.match_with(on_just, on_nothing);
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Combines two maybes into a pair.
    ///
    /// Returns `Just((a, b))` only if both inputs are `Just`; `Nothing`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(1).zip(Maybe::just("a")), Maybe::just((1, "a")));
    /// assert_eq!(Maybe::just(1).zip(Maybe::<&str>::nothing()), Maybe::nothing());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just((first, second)),
            _ => Maybe::Nothing,
        }
    }

    /// Returns the number of contained values: 1 for `Just`, 0 for
    /// `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).count(), 1);
    /// assert_eq!(Maybe::<i32>::nothing().count(), 0);
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        match self {
            Self::Just(_) => 1,
            Self::Nothing => 0,
        }
    }
}

// =============================================================================
// Nested Maybe Operations
// =============================================================================

impl<T> Maybe<Maybe<T>> {
    /// Removes exactly one level of nesting.
    ///
    /// `Just(Just(v))` becomes `Just(v)`; `Just(Nothing)` and `Nothing`
    /// both become `Nothing`. Flattening more than one level requires
    /// repeated calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(42)).flatten(), Maybe::just(42));
    /// assert_eq!(Maybe::just(Maybe::<i32>::nothing()).flatten(), Maybe::nothing());
    /// assert_eq!(Maybe::<Maybe<i32>>::nothing().flatten(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Maybe<T> {
    /// Returns the contained value, or `T`'s default if this is `Nothing`.
    ///
    /// A deliberately lossy convenience for ecosystems that expect a
    /// non-panicking default-producing accessor; not a safe replacement
    /// for [`Maybe::unwrap_just`] / [`Maybe::ok_or_absent`], since the
    /// absent case becomes indistinguishable from a contained default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).unwrap_or_default(), 42);
    /// assert_eq!(Maybe::<i32>::nothing().unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => T::default(),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Nothing`, mirroring `Option`.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}
