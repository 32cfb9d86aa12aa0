//! Grouping and uniqueness: partitioning by label and deduplication.

use crate::Collection;
use crate::extract::extract;
use crate::label::Label;
use indexmap::IndexMap;
use serde_json::{Value, json};

impl Collection {
    /// Partition the elements into groups keyed by label, in first-seen
    /// label order.
    ///
    /// The label is a [`Label`]: a key path (extracted through the Key-Path
    /// Extractor) or a callback.
    ///
    /// ```
    /// use corral::{collect, json};
    ///
    /// let groups = collect(json!([
    ///     {"n": "x", "v": 1},
    ///     {"n": "x", "v": 2},
    /// ]))
    /// .group_by("n");
    /// assert_eq!(groups["x"].count(), 2);
    /// ```
    #[must_use]
    pub fn group_by<'a>(&self, label: impl Into<Label<'a>>) -> IndexMap<String, Collection> {
        let label = label.into();
        let mut groups: IndexMap<String, Collection> = IndexMap::new();
        for item in &self.items {
            groups
                .entry(label.resolve(item))
                .or_default()
                .push(item.clone());
        }
        groups
    }

    /// [`group_by`](Self::group_by) with every group replaced by its count.
    #[must_use]
    pub fn count_by<'a>(&self, label: impl Into<Label<'a>>) -> IndexMap<String, usize> {
        self.group_by(label)
            .into_iter()
            .map(|(label, group)| (label, group.count()))
            .collect()
    }

    /// Deduplicate by deep equality against already-accepted elements,
    /// preserving first-occurrence order.
    ///
    /// ```
    /// use corral::{collect, json};
    ///
    /// let unique = collect(json!([1, 2, 1])).unique();
    /// assert_eq!(unique.count(), 2);
    /// ```
    #[must_use]
    pub fn unique(&self) -> Collection {
        let mut accepted: Vec<Value> = Vec::new();
        for item in &self.items {
            if !accepted.contains(item) {
                accepted.push(item.clone());
            }
        }
        Collection::from(accepted)
    }

    /// Deduplicate by equality of the value at `key`, annotating each
    /// surviving record with its occurrence count under that key name.
    ///
    /// Every element whose extracted key deep-equals an already-accepted
    /// element's counts toward that element instead of surviving; the count
    /// is then merged back onto the survivor (replacing the field named
    /// `key`; a non-record survivor becomes a record holding only the
    /// count).
    #[must_use]
    pub fn unique_by(&self, key: &str) -> Collection {
        let mut accepted: Vec<(Value, Value, usize)> = Vec::new();
        for item in &self.items {
            let extracted = extract(key, item, &Value::Null);
            match accepted.iter_mut().find(|(seen, _, _)| *seen == extracted) {
                Some((_, _, count)) => *count += 1,
                None => accepted.push((extracted, item.clone(), 1)),
            }
        }
        accepted
            .into_iter()
            .map(|(_, item, count)| annotate(item, key, count))
            .collect()
    }

    /// Concatenate with `items`, then deduplicate the result.
    #[must_use]
    pub fn merge(&self, items: &[Value]) -> Collection {
        self.concat(items).unique()
    }
}

/// Merge `{key: count}` onto a surviving record.
fn annotate(item: Value, key: &str, count: usize) -> Value {
    match item {
        Value::Object(mut map) => {
            map.insert(key.to_string(), json!(count));
            Value::Object(map)
        }
        _ => json!({ key: count }),
    }
}
