//! Ordering and partitioning: sorting, reversal, shuffling, and the
//! chunk/split/slice family.

use crate::Collection;
use crate::extract::{extract, num};
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::cmp::Ordering;

impl Collection {
    /// Sort in place, ascending by numeric value.
    ///
    /// Uses a total order over `f64` (`NaN` sorts greatest), so non-numeric
    /// elements — which evaluate to `NaN` — end up at the back in a stable
    /// order.
    pub fn sort(&mut self) -> &mut Self {
        self.items
            .sort_by_key(|v| OrderedFloat(num(v)));
        self
    }

    /// Sort in place with a custom comparator.
    pub fn sort_with(&mut self, mut cmp: impl FnMut(&Value, &Value) -> Ordering) -> &mut Self {
        self.items.sort_by(|a, b| cmp(a, b));
        self
    }

    /// [`sort`](Self::sort), then [`reverse`](Self::reverse).
    pub fn sort_desc(&mut self) -> &mut Self {
        self.sort().reverse()
    }

    /// Sort in place by the numeric value at `path` (extracted with default
    /// `0`).
    pub fn sort_by(&mut self, path: &str) -> &mut Self {
        self.items
            .sort_by_key(|v| OrderedFloat(num(&extract(path, v, &json!(0)))));
        self
    }

    /// [`sort_by`](Self::sort_by), then [`reverse`](Self::reverse).
    pub fn sort_by_desc(&mut self, path: &str) -> &mut Self {
        self.sort_by(path).reverse()
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Uniformly shuffle the elements in place (Fisher–Yates).
    pub fn shuffle(&mut self) -> &mut Self {
        self.items.shuffle(&mut rand::thread_rng());
        self
    }

    /// Drain the collection into `ceil(count / size)` sub-collections of at
    /// most `size` elements each.
    ///
    /// This consumes the backing sequence: the receiver is empty afterwards.
    /// A `size` of `0` is degenerate and yields no chunks, leaving the
    /// receiver untouched.
    ///
    /// ```
    /// use corral::{collect, json};
    ///
    /// let mut c = collect(json!([1, 2, 3]));
    /// let chunks = c.chunk(2);
    /// assert_eq!(chunks.len(), 2);
    /// assert_eq!(chunks[0].all(), &[json!(1), json!(2)]);
    /// assert_eq!(chunks[1].all(), &[json!(3)]);
    /// assert!(c.is_empty());
    /// ```
    pub fn chunk(&mut self, size: usize) -> Vec<Collection> {
        if size == 0 {
            log::warn!("chunk: size of 0, returning no chunks");
            return Vec::new();
        }
        let mut chunks = Vec::with_capacity(self.count().div_ceil(size));
        while !self.items.is_empty() {
            let take = size.min(self.items.len());
            chunks.push(self.items.drain(..take).collect());
        }
        chunks
    }

    /// Divide into exactly `groups` contiguous sub-collections whose sizes
    /// differ by at most one and sum to the collection's length.
    ///
    /// Each chunk takes the ceiling of remaining-length over
    /// remaining-groups; trailing groups are empty when `groups` exceeds the
    /// length. Non-destructive.
    #[must_use]
    pub fn split(&self, groups: usize) -> Vec<Collection> {
        let mut chunks = Vec::with_capacity(groups);
        let mut rest = self.items.as_slice();
        for remaining in (1..=groups).rev() {
            let take = rest.len().div_ceil(remaining);
            let (chunk, tail) = rest.split_at(take);
            chunks.push(Collection::from(chunk));
            rest = tail;
        }
        chunks
    }

    /// The elements from `index`, at most `size` of them when given,
    /// otherwise through the end. Out-of-range bounds clamp.
    #[must_use]
    pub fn slice(&self, index: usize, size: Option<usize>) -> Collection {
        let start = index.min(self.items.len());
        let end = match size {
            Some(size) => (start + size).min(self.items.len()),
            None => self.items.len(),
        };
        Collection::from(&self.items[start..end])
    }

    /// Remove `count` elements starting at `index` (through the end when
    /// `None`), splicing `replacement` in their place. The removed elements
    /// come back as a new collection.
    pub fn splice(
        &mut self,
        index: usize,
        count: Option<usize>,
        replacement: Vec<Value>,
    ) -> Collection {
        let start = index.min(self.items.len());
        let end = match count {
            Some(count) => (start + count).min(self.items.len()),
            None => self.items.len(),
        };
        self.items.splice(start..end, replacement).collect()
    }

    /// The first `limit` elements; a negative `limit` takes from the tail
    /// instead.
    ///
    /// ```
    /// use corral::{collect, json};
    ///
    /// let c = collect(json!([5, 3, 8, 1]));
    /// assert_eq!(c.take(2).all(), &[json!(5), json!(3)]);
    /// assert_eq!(c.take(-2).all(), &[json!(8), json!(1)]);
    /// ```
    #[must_use]
    pub fn take(&self, limit: isize) -> Collection {
        let len = self.items.len();
        if limit < 0 {
            let take = len.min(limit.unsigned_abs());
            Collection::from(&self.items[len - take..])
        } else {
            Collection::from(&self.items[..len.min(limit as usize)])
        }
    }
}
