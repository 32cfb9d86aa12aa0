//! Set-like queries: membership, difference, key-path filters, and
//! positional lookups.

use crate::Collection;
use crate::extract::{extract, loose_eq};
use rand::seq::SliceRandom;
use serde_json::{Map, Value};

impl Collection {
    /// Deep-equality membership test.
    #[must_use]
    pub fn contains(&self, needle: &Value) -> bool {
        self.items.contains(needle)
    }

    /// `true` when the element at `index` deep-equals `value`.
    #[must_use]
    pub fn contains_at(&self, index: usize, value: &Value) -> bool {
        self.items.get(index) == Some(value)
    }

    /// The elements not deep-equal to any element of `items`.
    #[must_use]
    pub fn diff(&self, items: &[Value]) -> Collection {
        self.filter(|v, _| !items.contains(v))
    }

    /// The elements whose value at `path` loosely equals `value`.
    ///
    /// ```
    /// use corral::{collect, json};
    ///
    /// let ones = collect(json!([{"a": 1}, {"a": 2}, {"a": "1"}]))
    ///     .where_eq("a", &json!(1));
    /// assert_eq!(ones.count(), 2);
    /// ```
    #[must_use]
    pub fn where_eq(&self, path: &str, value: &Value) -> Collection {
        self.filter(|v, _| loose_eq(&extract(path, v, &Value::Null), value))
    }

    /// The elements whose value at `path` loosely equals any of `values`.
    #[must_use]
    pub fn where_in(&self, path: &str, values: &[Value]) -> Collection {
        self.filter(|v, _| {
            let extracted = extract(path, v, &Value::Null);
            values.iter().any(|candidate| loose_eq(&extracted, candidate))
        })
    }

    /// The elements whose value at `path` loosely equals none of `values`.
    #[must_use]
    pub fn where_not_in(&self, path: &str, values: &[Value]) -> Collection {
        self.filter(|v, _| {
            let extracted = extract(path, v, &Value::Null);
            !values.iter().any(|candidate| loose_eq(&extracted, candidate))
        })
    }

    /// Index of the first element deep-equal to `needle`.
    #[must_use]
    pub fn search(&self, needle: &Value) -> Option<usize> {
        self.items.iter().position(|v| v == needle)
    }

    /// Index of the first element passing the predicate.
    #[must_use]
    pub fn search_by(&self, f: impl Fn(&Value, usize) -> bool) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .find(|(i, v)| f(v, *i))
            .map(|(i, _)| i)
    }

    /// The first element, or `None` when empty.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// The first element passing the predicate.
    #[must_use]
    pub fn first_where(&self, f: impl Fn(&Value, usize) -> bool) -> Option<&Value> {
        self.items
            .iter()
            .enumerate()
            .find(|(i, v)| f(v, *i))
            .map(|(_, v)| v)
    }

    /// The last element, or `None` when empty.
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// The last element passing the predicate.
    #[must_use]
    pub fn last_where(&self, f: impl Fn(&Value, usize) -> bool) -> Option<&Value> {
        self.items
            .iter()
            .enumerate()
            .rev()
            .find(|(i, v)| f(v, *i))
            .map(|(_, v)| v)
    }

    /// A uniformly random element, or `None` when empty.
    #[must_use]
    pub fn random(&self) -> Option<&Value> {
        self.items.choose(&mut rand::thread_rng())
    }

    /// Remove `item` when present (first deep-equal occurrence), append it
    /// otherwise.
    ///
    /// ```
    /// use corral::{collect, json};
    ///
    /// let mut c = collect(json!(["a", "b"]));
    /// c.toggle(json!("a"));
    /// assert_eq!(c.all(), &[json!("b")]);
    /// c.toggle(json!("a"));
    /// assert_eq!(c.all(), &[json!("b"), json!("a")]);
    /// ```
    pub fn toggle(&mut self, item: Value) -> &mut Self {
        match self.search(&item) {
            Some(index) => {
                self.items.remove(index);
            }
            None => self.items.push(item),
        }
        self
    }

    /// Join the elements' string forms with `glue` (strings verbatim,
    /// everything else JSON-encoded).
    #[must_use]
    pub fn implode(&self, glue: &str) -> String {
        self.items
            .iter()
            .map(Collection::label)
            .collect::<Vec<_>>()
            .join(glue)
    }

    /// Join the values at `path` (default `Null`) with `glue`.
    #[must_use]
    pub fn implode_by(&self, path: &str, glue: &str) -> String {
        self.items
            .iter()
            .map(|v| Collection::label(&extract(path, v, &Value::Null)))
            .collect::<Vec<_>>()
            .join(glue)
    }

    /// Zip this collection's elements (as keys, stringified) with `values`;
    /// keys beyond the end of `values` map to `Null`. Key order is this
    /// collection's element order.
    #[must_use]
    pub fn combine(&self, values: &[Value]) -> Map<String, Value> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let value = values.get(i).cloned().unwrap_or(Value::Null);
                (Collection::label(key), value)
            })
            .collect()
    }
}
