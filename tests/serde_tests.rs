//! Serde round-trip tests for Maybe<T>.
//!
//! `Maybe` serializes transparently, like `Option`: `Just(v)` as the
//! value itself and `Nothing` as null.

#![cfg(feature = "serde")]

use maybars::Maybe;
use rstest::rstest;

#[rstest]
fn just_serializes_as_bare_value() {
    let json = serde_json::to_string(&Maybe::just(42)).unwrap();
    assert_eq!(json, "42");
}

#[rstest]
fn nothing_serializes_as_null() {
    let json = serde_json::to_string(&Maybe::<i32>::nothing()).unwrap();
    assert_eq!(json, "null");
}

#[rstest]
fn roundtrip_integer() {
    let original = Maybe::just(42);
    let json = serde_json::to_string(&original).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn roundtrip_string() {
    let original = Maybe::just("hello".to_string());
    let json = serde_json::to_string(&original).unwrap();
    let restored: Maybe<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn roundtrip_nothing() {
    let original: Maybe<i32> = Maybe::nothing();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn null_deserializes_to_nothing() {
    let restored: Maybe<String> = serde_json::from_str("null").unwrap();
    assert_eq!(restored, Maybe::nothing());
}
