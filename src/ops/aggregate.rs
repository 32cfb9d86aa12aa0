//! Aggregation operations: reductions of the sequence to scalar results.
//!
//! All numeric aggregates evaluate elements through
//! [`num`](crate::extract::num): a non-numeric element contributes `NaN`,
//! which then propagates the way native addition would — there is no type
//! check and no error. Empty-collection results are the documented sentinel
//! values (`NaN`, `±∞`, `None`), asserted by the test suite rather than
//! guarded against.

use crate::Collection;
use crate::extract::{extract, num};
use serde_json::{Value, json};

impl Collection {
    /// Sum of the raw elements.
    ///
    /// ```
    /// use corral::{collect, json};
    ///
    /// assert_eq!(collect(json!([1, 2, 3, 4])).sum(), 10.0);
    /// ```
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.items.iter().map(num).sum()
    }

    /// Sum of the values at `path` in each element (default `0`).
    #[must_use]
    pub fn sum_by(&self, path: &str) -> f64 {
        self.items
            .iter()
            .map(|v| num(&extract(path, v, &json!(0))))
            .sum()
    }

    /// Sum of `f(element)` over the elements.
    #[must_use]
    pub fn sum_with(&self, f: impl Fn(&Value) -> f64) -> f64 {
        self.items.iter().map(f).sum()
    }

    /// `sum() / count()`. `NaN` on an empty collection — the division by
    /// zero is part of the contract, not an error.
    #[must_use]
    pub fn avg(&self) -> f64 {
        self.sum() / self.count() as f64
    }

    /// `sum_by(path) / count()`; `NaN` when empty.
    #[must_use]
    pub fn avg_by(&self, path: &str) -> f64 {
        self.sum_by(path) / self.count() as f64
    }

    /// Alias for [`avg`](Self::avg).
    #[must_use]
    pub fn average(&self) -> f64 {
        self.avg()
    }

    /// Numeric minimum of the raw elements. `+∞` when empty; `NaN` when any
    /// element evaluates to `NaN`.
    #[must_use]
    pub fn min(&self) -> f64 {
        let mut min = f64::INFINITY;
        for n in self.items.iter().map(num) {
            if n.is_nan() {
                return f64::NAN;
            }
            if n < min {
                min = n;
            }
        }
        min
    }

    /// Minimum of the values at `path`: plucks (dropping falsy extractions),
    /// then takes the numeric minimum.
    #[must_use]
    pub fn min_by(&self, path: &str) -> f64 {
        self.pluck(path).min()
    }

    /// Numeric maximum of the raw elements. `−∞` when empty; `NaN` when any
    /// element evaluates to `NaN`.
    #[must_use]
    pub fn max(&self) -> f64 {
        let mut max = f64::NEG_INFINITY;
        for n in self.items.iter().map(num) {
            if n.is_nan() {
                return f64::NAN;
            }
            if n > max {
                max = n;
            }
        }
        max
    }

    /// Maximum of the values at `path`: plucks (dropping falsy extractions),
    /// then takes the numeric maximum.
    #[must_use]
    pub fn max_by(&self, path: &str) -> f64 {
        self.pluck(path).max()
    }

    /// Median of the raw elements.
    ///
    /// **Sorts the receiver in place first** — the reordering is an
    /// observable side effect of the original design, preserved here (hence
    /// `&mut self`). Odd counts yield the middle element's numeric value,
    /// even counts the mean of the two central elements; `NaN` when empty.
    pub fn median(&mut self) -> f64 {
        self.sort();
        self.middle(|v| num(v))
    }

    /// Median of the values at `path`. Sorts the receiver in place by
    /// `path`, like [`median`](Self::median).
    pub fn median_by(&mut self, path: &str) -> f64 {
        self.sort_by(path);
        self.middle(|v| num(&extract(path, v, &json!(0))))
    }

    fn middle(&self, value_of: impl Fn(&Value) -> f64) -> f64 {
        let len = self.count();
        let mid = len / 2;
        if len % 2 == 1 {
            value_of(&self.items[mid])
        } else {
            match (self.items.get(mid.wrapping_sub(1)), self.items.get(mid)) {
                (Some(lo), Some(hi)) => (value_of(lo) + value_of(hi)) / 2.0,
                _ => f64::NAN,
            }
        }
    }

    /// The most frequent element by deep equality, first occurrence winning
    /// ties. `None` when empty.
    #[must_use]
    pub fn mode(&self) -> Option<Value> {
        self.mode_over(|v| v.clone())
    }

    /// The most frequent value at `path`, compared and returned as the
    /// extracted value.
    #[must_use]
    pub fn mode_by(&self, path: &str) -> Option<Value> {
        self.mode_over(|v| extract(path, v, &Value::Null))
    }

    fn mode_over(&self, value_of: impl Fn(&Value) -> Value) -> Option<Value> {
        let values: Vec<Value> = self.items.iter().map(value_of).collect();
        let mut best: Option<(usize, &Value)> = None;
        for candidate in &values {
            let frequency = values.iter().filter(|v| *v == candidate).count();
            if best.is_none_or(|(count, _)| frequency > count) {
                best = Some((frequency, candidate));
            }
        }
        best.map(|(_, v)| v.clone())
    }
}
