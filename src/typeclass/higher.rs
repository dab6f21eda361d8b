//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` as a bare type constructor, so
//! the type class traits in this module's siblings are stated in terms of
//! [`TypeConstructor`]: a GAT-based encoding that names the current inner
//! type and the "same constructor, different inner type" family.
//!
//! # Example
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::TypeConstructor;
//!
//! // Maybe implements TypeConstructor
//! fn rebuild_empty<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = rebuild_empty(Maybe::just(42));
//! assert_eq!(absent, Maybe::nothing());
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. The implementing type is a type constructor applied to some
/// type `A` — here, `Maybe<A>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type
///   `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should
///    be equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use maybars::Maybe;
/// use maybars::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures the resulting
    /// type is itself a valid type constructor, so transformations chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

use crate::maybe::Maybe;

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn maybe_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Maybe<String> = transform(Maybe::just(42));
        assert_eq!(result, Maybe::nothing());
    }

    #[test]
    fn nested_maybe_is_a_type_constructor() {
        fn assert_inner<T: TypeConstructor<Inner = Maybe<i32>>>() {}
        assert_inner::<Maybe<Maybe<i32>>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Maybe<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_maybe_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_maybe_bool::<Step2>();
    }
}
