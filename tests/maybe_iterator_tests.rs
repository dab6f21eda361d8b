//! Tests for the lazy zero-or-one-element sequence view of Maybe<T>.
//!
//! The iterators must be lazy (nothing is produced until consumption
//! begins), finite, fused, and restartable: every fresh call to `iter`
//! or `into_iter` starts a new traversal from the beginning.

use maybars::Maybe;
use rstest::rstest;

// =============================================================================
// Consuming Iteration
// =============================================================================

#[rstest]
fn into_iter_yields_single_element_for_just() {
    let collected: Vec<i32> = Maybe::just(42).into_iter().collect();
    assert_eq!(collected, vec![42]);
}

#[rstest]
fn into_iter_yields_nothing_for_nothing() {
    let collected: Vec<i32> = Maybe::<i32>::nothing().into_iter().collect();
    assert!(collected.is_empty());
}

#[rstest]
fn into_iter_works_with_owned_strings() {
    let collected: Vec<String> = Maybe::just("hello".to_string()).into_iter().collect();
    assert_eq!(collected, vec!["hello".to_string()]);
}

#[rstest]
fn for_loop_consumes_just_once() {
    let mut seen = Vec::new();
    for element in Maybe::just(42) {
        seen.push(element);
    }
    assert_eq!(seen, vec![42]);
}

// =============================================================================
// Borrowing Iteration and Restartability
// =============================================================================

#[rstest]
fn iter_borrows_without_consuming() {
    let value = Maybe::just(42);
    let first: Vec<&i32> = value.iter().collect();
    assert_eq!(first, vec![&42]);
    assert!(value.is_just());
}

#[rstest]
fn iter_is_restartable() {
    let value = Maybe::just(42);

    let first_traversal: Vec<&i32> = value.iter().collect();
    let second_traversal: Vec<&i32> = value.iter().collect();

    assert_eq!(first_traversal, second_traversal);
    assert_eq!(first_traversal, vec![&42]);

    let absent: Maybe<i32> = Maybe::nothing();
    assert_eq!(absent.iter().count(), 0);
    assert_eq!(absent.iter().count(), 0);
}

// =============================================================================
// Iterator Contract
// =============================================================================

#[rstest]
fn iterator_is_fused() {
    let mut iterator = Maybe::just(1).into_iter();
    assert_eq!(iterator.next(), Some(1));
    assert_eq!(iterator.next(), None);
    assert_eq!(iterator.next(), None);
}

#[rstest]
fn exact_size_is_reported() {
    assert_eq!(Maybe::just(1).into_iter().len(), 1);
    assert_eq!(Maybe::<i32>::nothing().into_iter().len(), 0);
}

#[rstest]
fn double_ended_iteration_agrees_with_forward() {
    let mut iterator = Maybe::just(1).into_iter();
    assert_eq!(iterator.next_back(), Some(1));
    assert_eq!(iterator.next_back(), None);
    assert_eq!(iterator.next(), None);
}

#[rstest]
fn chaining_with_std_iterator_adapters() {
    let total: i32 = Maybe::just(40)
        .into_iter()
        .chain(Maybe::just(2))
        .chain(Maybe::<i32>::nothing())
        .sum();
    assert_eq!(total, 42);
}
