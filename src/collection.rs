//! The `Collection` type: sequence store, constructors, and mutation
//! primitives.
//!
//! The operation families (transformation, aggregation, grouping, ordering,
//! set-like queries) live in [`crate::ops`] as further `impl Collection`
//! blocks; this module owns the backing sequence and the primitives that
//! touch it directly.

use crate::extract::{extract_segments, label_of, truthy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered, in-memory sequence of JSON values with a fluent, chainable
/// API.
///
/// A `Collection` wraps exactly one `Vec<Value>`. Elements are either opaque
/// scalars (numbers, strings, booleans, null) or structured records
/// (objects, possibly nested) and nested arrays.
///
/// # Mutation contract
///
/// The mutate/return-new distinction is part of each method's signature:
/// methods taking `&mut self` mutate the receiver and return `&mut Self` for
/// chaining; methods taking `&self` leave the receiver untouched and return
/// a new `Collection` (or a scalar). There are no hidden aliasing effects —
/// `clone()` copies the element values.
///
/// # Error policy
///
/// Best-effort, silent fallback throughout: out-of-range indices yield
/// `None` / no-ops, unresolvable key paths yield the supplied default, and
/// empty-input aggregates yield documented sentinel values (`NaN`, `±∞`,
/// `None`) rather than panicking or returning errors.
///
/// # Example
///
/// ```
/// use corral::{collect, json};
///
/// let total = collect(json!([{"price": 10}, {"price": 32}]))
///     .pluck("price")
///     .sum();
/// assert_eq!(total, 42.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub(crate) items: Vec<Value>,
}

/// Create a [`Collection`] from anything convertible into one: a JSON array,
/// a `Vec<Value>`, or a slice of values.
///
/// ```
/// use corral::{collect, json};
///
/// assert_eq!(collect(json!([1, 2, 3])).count(), 3);
/// assert_eq!(collect(vec![json!("a")]).count(), 1);
/// ```
pub fn collect(items: impl Into<Collection>) -> Collection {
    items.into()
}

impl Collection {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection as `[f(1), f(2), …, f(n)]`.
    ///
    /// ```
    /// use corral::{Collection, json};
    ///
    /// let squares = Collection::times(3, |i| json!(i * i));
    /// assert_eq!(squares.all(), &[json!(1), json!(4), json!(9)]);
    /// ```
    #[must_use]
    pub fn times(n: usize, f: impl Fn(usize) -> Value) -> Self {
        (1..=n).map(f).collect()
    }

    /// A view of the live backing sequence.
    #[must_use]
    pub fn all(&self) -> &[Value] {
        &self.items
    }

    /// Consume the collection, returning the backing sequence.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// Number of elements in the collection.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// `true` when the collection holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() < 1
    }

    /// `true` when the collection holds at least one element.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Remove every element.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Replace the backing sequence wholesale.
    pub fn fill(&mut self, items: impl Into<Collection>) -> &mut Self {
        self.items = items.into().items;
        self
    }

    /// Append an element.
    pub fn push(&mut self, item: Value) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Insert an element at the front.
    pub fn prepend(&mut self, item: Value) -> &mut Self {
        self.items.insert(0, item);
        self
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Remove and return the first element, or `None` when empty.
    pub fn shift(&mut self) -> Option<Value> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Remove the element at `index`, returning it as a new collection
    /// (empty when `index` is out of range).
    pub fn pull(&mut self, index: usize) -> Collection {
        if index < self.items.len() {
            Collection::from(vec![self.items.remove(index)])
        } else {
            log::debug!("pull: index {index} out of range (len {})", self.items.len());
            Collection::new()
        }
    }

    /// Remove the elements at the given indexes, applied one at a time in
    /// the order given (later indexes see the shifted sequence).
    pub fn forget(&mut self, indexes: &[usize]) -> &mut Self {
        for &index in indexes {
            if index < self.items.len() {
                self.items.remove(index);
            }
        }
        self
    }

    /// `true` when `index` addresses an element.
    #[must_use]
    pub fn has(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Resolve a key path against the backing sequence, with `Null` as the
    /// default. The leading segment indexes the sequence, the rest descend
    /// into the element: `get("1.name")` is the `name` field of the second
    /// element.
    #[must_use]
    pub fn get(&self, path: &str) -> Value {
        self.get_or(path, Value::Null)
    }

    /// [`get`](Self::get) with an explicit default, substituted at any
    /// unresolvable or falsy step (see [`crate::extract`]).
    #[must_use]
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        let mut segments = path.split('.');
        let head = segments.next().unwrap_or_default();
        let first = match head.parse::<usize>().ok().and_then(|i| self.items.get(i)) {
            Some(v) if truthy(v) => v,
            _ => &default,
        };
        extract_segments(segments, first, &default)
    }

    /// Pass the collection to `f`, then return the receiver for further
    /// chaining. Useful for inspecting intermediate results.
    pub fn tap(&self, f: impl FnOnce(&Collection)) -> &Self {
        f(self);
        self
    }

    /// JSON-encode the backing sequence.
    ///
    /// Serialization of JSON values cannot fail; in the impossible case it
    /// does, this falls back to an empty string per the crate's silent
    /// fallback policy.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_default()
    }

    /// The string form of an element used for group labels, `implode`, and
    /// `combine` keys: strings verbatim, everything else JSON-encoded.
    pub(crate) fn label(value: &Value) -> String {
        label_of(value)
    }
}

impl From<Vec<Value>> for Collection {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl From<&[Value]> for Collection {
    fn from(items: &[Value]) -> Self {
        Self { items: items.to_vec() }
    }
}

/// A JSON array becomes its elements; any other value becomes a
/// single-element collection.
impl From<Value> for Collection {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self { items },
            other => Self { items: vec![other] },
        }
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
