//! Transformation operations: element-wise mapping, filtering, and in-place
//! record reshaping.

use crate::Collection;
use crate::extract::{extract, truthy};
use serde_json::Value;

impl Collection {
    /// A new collection where each element is `f(element, index)`.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Value, usize) -> Value) -> Collection {
        self.items
            .iter()
            .enumerate()
            .map(|(i, v)| f(v, i))
            .collect()
    }

    /// A new collection keeping the elements where `f(element, index)` is
    /// `true`.
    #[must_use]
    pub fn filter(&self, f: impl Fn(&Value, usize) -> bool) -> Collection {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, v)| f(v, *i))
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// A new collection keeping only truthy elements.
    ///
    /// This is the zero-argument form the original exposed as both bare
    /// `filter()` *and* bare `reject()` — the latter an inherited quirk kept
    /// here under a single explicit name.
    #[must_use]
    pub fn compact(&self) -> Collection {
        self.items.iter().filter(|v| truthy(v)).cloned().collect()
    }

    /// The complement of [`filter`](Self::filter): keeps the elements where
    /// `f(element, index)` is `false`.
    #[must_use]
    pub fn reject(&self, f: impl Fn(&Value, usize) -> bool) -> Collection {
        self.filter(|v, i| !f(v, i))
    }

    /// Extract `path` from every element (default `Null`), dropping falsy
    /// results.
    ///
    /// ```
    /// use corral::{collect, json};
    ///
    /// let names = collect(json!([{"a": 1}, {"a": 2}, {"a": 1}])).pluck("a");
    /// assert_eq!(names.all(), &[json!(1), json!(2), json!(1)]);
    /// ```
    #[must_use]
    pub fn pluck(&self, path: &str) -> Collection {
        self.map(|v, _| extract(path, v, &Value::Null)).compact()
    }

    /// Remove the listed top-level fields from every record, in place.
    /// Non-record elements are left untouched.
    pub fn except(&mut self, keys: &[&str]) -> &mut Self {
        for item in &mut self.items {
            if let Value::Object(map) = item {
                for key in keys {
                    map.shift_remove(*key);
                }
            }
        }
        self
    }

    /// Remove everything *but* the listed top-level fields from every
    /// record, in place. Non-record elements are left untouched.
    pub fn only(&mut self, keys: &[&str]) -> &mut Self {
        for item in &mut self.items {
            if let Value::Object(map) = item {
                map.retain(|k, _| keys.contains(&k.as_str()));
            }
        }
        self
    }

    /// Replace every element with `f(element, index)`, in place.
    pub fn transform(&mut self, f: impl Fn(&Value, usize) -> Value) -> &mut Self {
        for (i, item) in self.items.iter_mut().enumerate() {
            *item = f(item, i);
        }
        self
    }

    /// Iterate over the elements, stopping early when `f` returns `false`.
    /// Returns `false` when iteration was cut short.
    pub fn each(&self, mut f: impl FnMut(&Value, usize) -> bool) -> bool {
        for (i, item) in self.items.iter().enumerate() {
            if !f(item, i) {
                return false;
            }
        }
        true
    }

    /// `true` when every element passes the predicate (vacuously `true` when
    /// empty).
    #[must_use]
    pub fn every(&self, f: impl Fn(&Value) -> bool) -> bool {
        self.items.iter().all(f)
    }

    /// Every `n`-th element, counting from `offset`.
    #[must_use]
    pub fn nth(&self, n: usize, offset: usize) -> Collection {
        if n == 0 {
            log::warn!("nth: step of 0, returning empty collection");
            return Collection::new();
        }
        self.filter(|_, i| (i + offset) % n == 0)
    }

    /// A new collection of this one's elements followed by `items`.
    #[must_use]
    pub fn concat(&self, items: &[Value]) -> Collection {
        self.items.iter().chain(items.iter()).cloned().collect()
    }

    /// Fold the elements into a single value.
    #[must_use]
    pub fn reduce(&self, f: impl Fn(Value, &Value) -> Value, initial: Value) -> Value {
        self.items.iter().fold(initial, f)
    }
}
