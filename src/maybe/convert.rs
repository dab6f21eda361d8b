//! Conversions between `Maybe` and host-ecosystem containers.
//!
//! `Option<T>` is Rust's native "no value" sentinel, so the nullable
//! interop boundary is expressed as lossless `From` conversions in both
//! directions. Sequence interop produces zero-or-one-element views:
//! an owned `Vec`, a borrowed slice, and (in [`super::iter`]) a lazy
//! iterator.

use std::slice;

use super::core::Maybe;

impl<T> Maybe<T> {
    /// Converts an `Option` into a `Maybe`.
    ///
    /// `Some(v)` becomes `Just(v)` and `None` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(42)), Maybe::just(42));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::nothing());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    /// Converts the `Maybe` into an `Option`.
    ///
    /// `Just(v)` becomes `Some(v)` and `Nothing` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).into_option(), Some(42));
    /// assert_eq!(Maybe::<i32>::nothing().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts the `Maybe` into a zero-or-one-element `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).into_vec(), vec![42]);
    /// assert_eq!(Maybe::<i32>::nothing().into_vec(), Vec::<i32>::new());
    /// ```
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Just(value) => vec![value],
            Self::Nothing => Vec::new(),
        }
    }

    /// Returns a zero-or-one-element slice view of the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).as_slice(), &[42]);
    /// assert_eq!(Maybe::<i32>::nothing().as_slice(), &[] as &[i32]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Just(value) => slice::from_ref(value),
            Self::Nothing => &[],
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let value: Maybe<i32> = Some(42).into();
    /// assert_eq!(value, Maybe::just(42));
    ///
    /// let absent: Maybe<i32> = None.into();
    /// assert_eq!(absent, Maybe::nothing());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let value: Option<i32> = Maybe::just(42).into();
    /// assert_eq!(value, Some(42));
    ///
    /// let absent: Option<i32> = Maybe::<i32>::nothing().into();
    /// assert_eq!(absent, None);
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    /// Serializes like `Option`: `Just(v)` as `v`, `Nothing` as null.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    /// Deserializes like `Option`: null as `Nothing`, anything else as
    /// `Just`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn option_conversion_roundtrip() {
        let some: Option<i32> = Some(42);
        let maybe: Maybe<i32> = some.into();
        let back: Option<i32> = maybe.into();
        assert_eq!(back, Some(42));

        let none: Option<i32> = None;
        let maybe: Maybe<i32> = none.into();
        let back: Option<i32> = maybe.into();
        assert_eq!(back, None);
    }

    #[rstest]
    fn slice_view_borrows_without_consuming() {
        let value = Maybe::just("hello".to_string());
        assert_eq!(value.as_slice().len(), 1);
        assert!(value.is_just());
    }
}
