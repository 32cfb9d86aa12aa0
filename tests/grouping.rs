use corral::testing::*;
use corral::{Label, collect, json};

#[test]
fn group_by_path_partitions_in_first_seen_order() {
    let c = collect(json!([
        {"n": "x", "v": 1},
        {"n": "y", "v": 2},
        {"n": "x", "v": 3},
    ]));
    let groups = c.group_by("n");
    assert_groups_eq(
        &groups,
        &[
            ("x", &[json!({"n": "x", "v": 1}), json!({"n": "x", "v": 3})]),
            ("y", &[json!({"n": "y", "v": 2})]),
        ],
    );
}

#[test]
fn group_by_matches_the_spec_scenario() {
    let c = collect(json!([{"n": "x", "v": 1}, {"n": "x", "v": 2}]));
    let groups = c.group_by("n");
    assert_eq!(groups.len(), 1);
    assert_collection_eq(
        &groups["x"],
        &[json!({"n": "x", "v": 1}), json!({"n": "x", "v": 2})],
    );
}

#[test]
fn group_by_callback_labels() {
    let c = collect(json!([1, 2, 3, 4, 5]));
    let groups = c.group_by(Label::func(|v| {
        if v.as_i64().unwrap_or(0) % 2 == 0 { "even".into() } else { "odd".into() }
    }));
    assert_groups_eq(
        &groups,
        &[
            ("odd", &[json!(1), json!(3), json!(5)]),
            ("even", &[json!(2), json!(4)]),
        ],
    );
}

#[test]
fn group_by_missing_key_collects_under_null_label() {
    let c = collect(json!([{"n": "x"}, {"other": 1}]));
    let groups = c.group_by("n");
    assert_eq!(groups["x"].count(), 1);
    assert_eq!(groups["null"].count(), 1);
}

#[test]
fn count_by_replaces_groups_with_counts() {
    let c = collect(json!([
        {"lang": "rust"},
        {"lang": "go"},
        {"lang": "rust"},
    ]));
    let counts = c.count_by("lang");
    assert_eq!(counts["rust"], 2);
    assert_eq!(counts["go"], 1);
    let order: Vec<&str> = counts.keys().map(String::as_str).collect();
    assert_eq!(order, ["rust", "go"]);
}

#[test]
fn unique_deduplicates_by_deep_equality() {
    let c = collect(json!([1, 2, 1, {"a": [1]}, {"a": [1]}, {"a": [2]}]));
    let unique = c.unique();
    assert_collection_eq(
        &unique,
        &[json!(1), json!(2), json!({"a": [1]}), json!({"a": [2]})],
    );
}

#[test]
fn unique_preserves_first_occurrence_order() {
    let c = collect(json!(["b", "a", "b", "c", "a"]));
    assert_collection_eq(&c.unique(), &[json!("b"), json!("a"), json!("c")]);
}

#[test]
fn unique_by_annotates_survivors_with_occurrence_counts() {
    let c = collect(json!([
        {"n": "x", "v": 1},
        {"n": "y", "v": 2},
        {"n": "x", "v": 3},
    ]));
    // The first "x" survives; the count lands under the key name.
    let unique = c.unique_by("n");
    assert_collection_eq(
        &unique,
        &[json!({"n": 2, "v": 1}), json!({"n": 1, "v": 2})],
    );
}

#[test]
fn unique_by_counts_scalars_into_records() {
    let c = collect(json!(["a", "a", "a"]));
    // All scalars extract to the same (null) key, so one survivor carries
    // the whole count as a record.
    let unique = c.unique_by("k");
    assert_collection_eq(&unique, &[json!({"k": 3})]);
}

#[test]
fn merge_concatenates_then_deduplicates() {
    let c = collect(json!([1, 2]));
    let merged = c.merge(&[json!(2), json!(3)]);
    assert_collection_eq(&merged, &[json!(1), json!(2), json!(3)]);
    assert_eq!(c.count(), 2);
}
