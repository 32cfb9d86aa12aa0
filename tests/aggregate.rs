use corral::testing::*;
use corral::{Collection, collect, json};

#[test]
fn sum_of_raw_elements() {
    assert_eq!(collect(json!([1, 2, 3, 4])).sum(), 10.0);
    assert_eq!(Collection::new().sum(), 0.0);
}

#[test]
fn sum_coerces_loosely_and_propagates_nan() {
    // null -> 0, bool -> 1/0, numeric strings parse.
    assert_eq!(collect(json!([1, null, true, "2"])).sum(), 4.0);
    // A non-numeric element poisons the sum, mirroring native addition.
    assert!(collect(json!([1, {"a": 1}])).sum().is_nan());
    assert!(collect(json!([1, "oops"])).sum().is_nan());
}

#[test]
fn sum_by_extracts_with_default_zero() {
    let c = collect(json!([{"v": 3}, {"v": 4}, {"other": 9}]));
    assert_eq!(c.sum_by("v"), 7.0);
    let nested = collect(json!([{"a": {"b": 1}}, {"a": {"b": 2}}]));
    assert_eq!(nested.sum_by("a.b"), 3.0);
}

#[test]
fn sum_with_uses_the_accessor() {
    let c = collect(json!(["a", "bb", "ccc"]));
    let total = c.sum_with(|v| v.as_str().map_or(0.0, |s| s.len() as f64));
    assert_eq!(total, 6.0);
}

#[test]
fn avg_and_alias() {
    let c = collect(json!([1, 2, 3, 4]));
    assert_eq!(c.avg(), 2.5);
    assert_eq!(c.average(), 2.5);
    let records = collect(json!([{"v": 10}, {"v": 20}]));
    assert_eq!(records.avg_by("v"), 15.0);
}

#[test]
fn avg_of_empty_collection_is_nan() {
    // Division by a zero count is part of the contract, not an error.
    assert!(Collection::new().avg().is_nan());
    assert!(Collection::new().avg_by("v").is_nan());
}

#[test]
fn min_and_max_over_raw_elements() {
    let c = collect(json!([5, 3, 8, 1]));
    assert_eq!(c.min(), 1.0);
    assert_eq!(c.max(), 8.0);
}

#[test]
fn min_and_max_empty_sentinels() {
    assert_eq!(Collection::new().min(), f64::INFINITY);
    assert_eq!(Collection::new().max(), f64::NEG_INFINITY);
}

#[test]
fn min_and_max_propagate_nan() {
    let c = collect(json!([3, "not a number"]));
    assert!(c.min().is_nan());
    assert!(c.max().is_nan());
}

#[test]
fn min_by_and_max_by_pluck_first() {
    let c = collect(json!([{"v": 5}, {"v": 2}, {"v": 9}]));
    assert_eq!(c.min_by("v"), 2.0);
    assert_eq!(c.max_by("v"), 9.0);

    // pluck drops falsy extractions, so a 0 never reaches the minimum.
    let with_zero = collect(json!([{"v": 0}, {"v": 4}]));
    assert_eq!(with_zero.min_by("v"), 4.0);
}

#[test]
fn median_of_odd_and_even_counts() {
    let mut odd = collect(json!([7, 1, 3]));
    assert_eq!(odd.median(), 3.0);
    let mut even = collect(json!([4, 1, 3, 2]));
    assert_eq!(even.median(), 2.5);
}

#[test]
fn median_sorts_the_receiver_as_an_observable_side_effect() {
    let mut c = collect(json!([9, 2, 5]));
    c.median();
    assert_collection_eq(&c, &[json!(2), json!(5), json!(9)]);
}

#[test]
fn median_by_key() {
    let mut c = collect(json!([{"v": 30}, {"v": 10}, {"v": 20}, {"v": 40}]));
    assert_eq!(c.median_by("v"), 25.0);
    // Receiver is now sorted by the key.
    assert_eq!(c.get("0.v"), json!(10));
}

#[test]
fn median_of_empty_collection_is_nan() {
    assert!(Collection::new().median().is_nan());
}

#[test]
fn mode_returns_most_frequent_first_occurrence_wins() {
    let c = collect(json!([1, 2, 2, 3, 3]));
    // 2 and 3 both appear twice; 2 was seen first.
    assert_eq!(c.mode(), Some(json!(2)));
    assert_eq!(collect(json!(["a", "b", "b"])).mode(), Some(json!("b")));
}

#[test]
fn mode_uses_deep_equality_for_records() {
    let c = collect(json!([{"a": 1}, {"a": 2}, {"a": 1}]));
    assert_eq!(c.mode(), Some(json!({"a": 1})));
}

#[test]
fn mode_by_returns_the_extracted_value() {
    let c = collect(json!([{"n": "x"}, {"n": "y"}, {"n": "y"}]));
    assert_eq!(c.mode_by("n"), Some(json!("y")));
}

#[test]
fn mode_of_empty_collection_is_none() {
    assert_eq!(Collection::new().mode(), None);
    assert_eq!(Collection::new().mode_by("k"), None);
}
