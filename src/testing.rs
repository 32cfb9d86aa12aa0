//! Assertion helpers for testing collection chains.
//!
//! These compare collections and grouped results with detailed panic
//! messages, so a failing chain points at the first differing element rather
//! than a wall of JSON.

use crate::Collection;
use indexmap::IndexMap;
use serde_json::Value;

/// Assert that a collection's elements equal `expected`, in order.
///
/// # Panics
///
/// Panics with the index and both full sequences on the first mismatch.
///
/// # Example
///
/// ```
/// use corral::{collect, json};
/// use corral::testing::assert_collection_eq;
///
/// let doubled = collect(json!([1, 2])).map(|v, _| json!(v.as_i64().unwrap() * 2));
/// assert_collection_eq(&doubled, &[json!(2), json!(4)]);
/// ```
pub fn assert_collection_eq(actual: &Collection, expected: &[Value]) {
    assert_values_eq(actual.all(), expected);
}

/// Assert that two value sequences are equal, in order.
pub fn assert_values_eq(actual: &[Value], expected: &[Value]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Sequence length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Sequence mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that grouped output has exactly the expected labels (in order)
/// with the expected group contents.
///
/// # Panics
///
/// Panics when labels, label order, or any group's elements differ.
pub fn assert_groups_eq(actual: &IndexMap<String, Collection>, expected: &[(&str, &[Value])]) {
    let actual_labels: Vec<&str> = actual.keys().map(String::as_str).collect();
    let expected_labels: Vec<&str> = expected.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        actual_labels, expected_labels,
        "Group label mismatch:\n  Expected: {expected_labels:?}\n  Actual: {actual_labels:?}"
    );

    for (label, elements) in expected {
        let group = &actual[*label];
        assert_values_eq(group.all(), elements);
    }
}
