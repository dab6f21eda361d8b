//! Lazy iteration over the zero-or-one contained values.
//!
//! A `Maybe` is a finite sequence of length zero or one. The iterators
//! here realize that sequence lazily: the element, if any, is produced
//! only when consumption begins, and every fresh call to
//! [`Maybe::iter`] or `into_iter` starts a new traversal from the
//! beginning.

use std::iter::FusedIterator;

use super::core::Maybe;

impl<T> Maybe<T> {
    /// Returns a borrowing iterator over the zero-or-one contained values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let value = Maybe::just(42);
    /// assert_eq!(value.iter().collect::<Vec<_>>(), vec![&42]);
    ///
    /// // Restartable: a second traversal yields the same elements.
    /// assert_eq!(value.iter().count(), 1);
    /// assert_eq!(value.iter().count(), 1);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_option(),
        }
    }
}

/// A borrowing iterator over the zero-or-one values of a [`Maybe`].
///
/// Created by [`Maybe::iter`] or `(&maybe).into_iter()`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A consuming iterator over the zero-or-one values of a [`Maybe`].
///
/// Created by `maybe.into_iter()`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the maybe into an iterator yielding zero or one elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let collected: Vec<i32> = Maybe::just(42).into_iter().collect();
    /// assert_eq!(collected, vec![42]);
    ///
    /// let empty: Vec<i32> = Maybe::<i32>::nothing().into_iter().collect();
    /// assert_eq!(empty, Vec::<i32>::new());
    /// ```
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn iterator_is_fused_after_exhaustion() {
        let mut iterator = Maybe::just(42).into_iter();
        assert_eq!(iterator.next(), Some(42));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn size_hint_is_exact() {
        let value = Maybe::just(42);
        assert_eq!(value.iter().size_hint(), (1, Some(1)));

        let absent: Maybe<i32> = Maybe::nothing();
        assert_eq!(absent.iter().size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn for_loop_over_reference() {
        let value = Maybe::just(3);
        let mut total = 0;
        for element in &value {
            total += element;
        }
        assert_eq!(total, 3);
    }
}
