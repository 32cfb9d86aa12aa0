//! The Key-Path Extractor and the value semantics shared by every operation.
//!
//! A *key path* is a dotted string such as `"a.b.c"` naming a nested field.
//! [`extract`] resolves it against a single element; [`Collection::get`]
//! resolves it against the backing sequence itself, where a leading numeric
//! segment indexes the sequence.
//!
//! This module also defines the crate-wide coercion rules: [`truthy`],
//! [`loose_eq`], numeric evaluation ([`num`]), and label stringification
//! ([`label_of`]). All other modules go through these four functions so the
//! rules are applied uniformly.
//!
//! [`Collection::get`]: crate::Collection::get

use serde_json::Value;

/// Resolve a dotted key path against `target`, substituting `default` at any
/// step that cannot be resolved.
///
/// Descent is one segment at a time: an object is looked up by field name,
/// an array by numeric index. If the segment is absent **or resolves to a
/// falsy value** (see [`truthy`]), the default takes its place and descent
/// continues from the default.
///
/// # Compatibility quirk
///
/// Short-circuiting on *any* falsy intermediate — including `0`, `""`, and
/// `false`, not only missing fields — is deliberate and preserved for
/// compatibility with the original behavior. `extract("a.b", {"a": {"b": 0}},
/// default)` returns the default, not `0`. Do not "fix" this; the test suite
/// asserts on it.
///
/// # Example
///
/// ```
/// use corral::{extract, json};
///
/// let record = json!({"user": {"address": {"city": "Oslo"}}});
/// assert_eq!(extract("user.address.city", &record, &json!(null)), json!("Oslo"));
/// assert_eq!(extract("user.phone", &record, &json!(null)), json!(null));
/// ```
pub fn extract(path: &str, target: &Value, default: &Value) -> Value {
    extract_segments(path.split('.'), target, default)
}

/// Segment-wise descent used by both [`extract`] and [`crate::Collection::get`].
pub(crate) fn extract_segments<'a>(
    segments: impl Iterator<Item = &'a str>,
    target: &Value,
    default: &Value,
) -> Value {
    let mut current = target.clone();
    for segment in segments {
        current = match lookup(&current, segment) {
            Some(next) if truthy(next) => next.clone(),
            _ => default.clone(),
        };
    }
    current
}

/// Look one segment up in a value: object field, or array index when the
/// segment parses as one. Scalars have no addressable segments.
fn lookup<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Loose-evaluation truthiness.
///
/// `Null`, `false`, numeric zero, and the empty string are falsy. Everything
/// else is truthy — including empty arrays and empty objects.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose equality, used by the `where_*` filters.
///
/// Numbers compare numerically across integer and float representations,
/// booleans coerce to `1`/`0` against numbers, and numeric strings compare
/// equal to the number they parse to. Any other combination falls back to
/// structural equality.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (numeric_view(a), numeric_view(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// The numeric reading of a value for loose comparison, if it has one.
fn numeric_view(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Evaluate a value as `f64` for aggregation and the default sort order.
///
/// `Null` is `0`, booleans are `1`/`0`, numeric strings parse; anything else
/// is `NaN`, which propagates through sums the way native addition of a
/// non-numeric operand would.
pub fn num(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(*b),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// The group-label / join string form of a value: strings verbatim,
/// everything else JSON-encoded.
pub fn label_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
