//! Unit tests for the Maybe type class instances.
//!
//! Functor, Applicative, Monad, and Foldable are exercised against the
//! same present/absent cases as the inherent combinators, through the
//! trait surface.

use maybars::Maybe;
use maybars::typeclass::{Applicative, Foldable, Functor, Monad};
use rstest::rstest;

// =============================================================================
// Functor
// =============================================================================

#[rstest]
fn fmap_transforms_just() {
    assert_eq!(Maybe::just(5).fmap(|n| n.to_string()), Maybe::just("5".to_string()));
}

#[rstest]
fn fmap_preserves_nothing() {
    let absent: Maybe<i32> = Maybe::nothing();
    assert_eq!(absent.fmap(|n| n.to_string()), Maybe::nothing());
}

#[rstest]
fn fmap_ref_does_not_consume() {
    let text = Maybe::just("hello".to_string());
    assert_eq!(text.fmap_ref(|s| s.len()), Maybe::just(5));
    assert_eq!(text, Maybe::just("hello".to_string()));
}

#[rstest]
fn replace_and_void_preserve_shape() {
    assert_eq!(Maybe::just(5).replace("x"), Maybe::just("x"));
    assert_eq!(Maybe::<i32>::nothing().replace("x"), Maybe::nothing());
    assert_eq!(Maybe::just(5).void(), Maybe::just(()));
}

// =============================================================================
// Applicative
// =============================================================================

#[rstest]
fn pure_lifts_into_just() {
    let value: Maybe<i32> = <Maybe<()>>::pure(42);
    assert_eq!(value, Maybe::just(42));
}

#[rstest]
fn map2_through_trait_surface() {
    let sum = Applicative::map2(Maybe::just(1), Maybe::just(2), |a, b| a + b);
    assert_eq!(sum, Maybe::just(3));

    let absent = Applicative::map2(Maybe::<i32>::nothing(), Maybe::just(2), |a, b| a + b);
    assert_eq!(absent, Maybe::nothing());
}

#[rstest]
fn product_left_and_right_need_both_values() {
    assert_eq!(Maybe::just(1).product_left(Maybe::just(2)), Maybe::just(1));
    assert_eq!(Maybe::just(1).product_right(Maybe::just(2)), Maybe::just(2));
    assert_eq!(
        Maybe::just(1).product_left(Maybe::<i32>::nothing()),
        Maybe::nothing()
    );
}

#[rstest]
fn apply_applies_contained_function() {
    let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
}

// =============================================================================
// Monad
// =============================================================================

#[rstest]
fn flat_map_matches_bind() {
    let through_trait = Maybe::just(5).flat_map(|n| Maybe::just(n * 2));
    let through_inherent = Maybe::just(5).bind(|n| Maybe::just(n * 2));
    assert_eq!(through_trait, through_inherent);
}

#[rstest]
fn and_then_is_an_alias_for_flat_map() {
    let result = Maybe::just(5).and_then(|n| Maybe::just(n + 1));
    assert_eq!(result, Maybe::just(6));
}

#[rstest]
fn then_sequences_and_discards() {
    assert_eq!(Maybe::just(1).then(Maybe::just("next")), Maybe::just("next"));
    assert_eq!(
        Maybe::<i32>::nothing().then(Maybe::just("next")),
        Maybe::nothing()
    );
}

// =============================================================================
// Foldable
// =============================================================================

#[rstest]
fn fold_left_and_right_agree_for_one_element() {
    let left = Maybe::just(2).fold_left(40, |state, n| state + n);
    let right = Maybe::just(2).fold_right(40, |n, state| state + n);
    assert_eq!(left, right);
    assert_eq!(left, 42);
}

#[rstest]
fn to_list_produces_zero_or_one_elements() {
    assert_eq!(Maybe::just(42).to_list(), vec![42]);
    assert_eq!(Maybe::<i32>::nothing().to_list(), Vec::<i32>::new());
}

#[rstest]
fn find_filters_through_the_fold() {
    assert_eq!(Maybe::just(4).find(|n| *n > 3), Maybe::just(4));
    assert_eq!(Maybe::just(2).find(|n| *n > 3), Maybe::nothing());
}

#[rstest]
fn length_and_is_empty() {
    assert_eq!(Foldable::length(&Maybe::just(5)), 1);
    assert_eq!(Foldable::length(&Maybe::<i32>::nothing()), 0);
    assert!(Foldable::is_empty(&Maybe::<i32>::nothing()));
    assert!(!Foldable::is_empty(&Maybe::just(5)));
}
