//! # Corral
//!
//! A **fluent, chainable, in-memory collection library** over JSON values.
//! Corral wraps an ordered sequence of [`Value`]s — scalars, records, or
//! nested containers — and offers expressive list manipulation without a
//! query engine: transformation, aggregation, grouping, ordering, and
//! set-like queries, every call eager and fully materialized.
//!
//! ## Quick start
//!
//! ```
//! use corral::{collect, json};
//!
//! let mut sales = collect(json!([
//!     {"region": "north", "amount": 120},
//!     {"region": "south", "amount": 80},
//!     {"region": "north", "amount": 100},
//! ]));
//!
//! assert_eq!(sales.sum_by("amount"), 300.0);
//! assert_eq!(sales.avg_by("amount"), 100.0);
//!
//! let by_region = sales.group_by("region");
//! assert_eq!(by_region["north"].count(), 2);
//!
//! sales.sort_by_desc("amount");
//! assert_eq!(sales.get("0.amount"), json!(120));
//! ```
//!
//! ## Core concepts
//!
//! ### Collection
//!
//! [`Collection`] owns exactly one backing `Vec<Value>`. Construct one with
//! [`collect`], [`Collection::new`], [`Collection::times`], or any of the
//! `From` conversions (JSON array, `Vec<Value>`, slice, iterator).
//!
//! ### Key paths
//!
//! Many operations accept a *key path* — a dotted string such as `"a.b.c"`
//! naming a nested field. Resolution ([`extract`]) substitutes a default at
//! any step that is missing **or falsy**; see the function docs for this
//! deliberate compatibility quirk.
//!
//! ### Mutation contract
//!
//! Whether an operation mutates the receiver or returns a new collection is
//! encoded in its signature: `&mut self` methods (`sort*`, `reverse`,
//! `shuffle`, `transform`, `except`, `only`, `toggle`, `splice`, `chunk`,
//! `median*`, and the store primitives) mutate in place and chain through
//! `&mut Self`; `&self` methods (`map`, `filter`, `pluck`, `where_*`,
//! `unique*`, `slice`, `take`, `split`, `group_by`, …) leave the receiver
//! untouched.
//!
//! ### Error policy
//!
//! There is no error type. Out-of-range indices yield `None` or no-ops,
//! unresolvable key paths yield the supplied default, and empty-input
//! aggregates yield sentinel values (`avg` → `NaN`, `min` → `+∞`, `max` →
//! `−∞`, `mode` → `None`). Degenerate arguments on destructive operations
//! log through the [`log`] facade and fall back silently.
//!
//! ## Scope
//!
//! Corral is deliberately **not** a query planner (no indexes, no deferred
//! execution), not a streaming abstraction (everything is eager), and not
//! thread-safe (one owner per collection; serialize access externally).

pub mod extract;
pub mod testing;

mod collection;
mod label;
mod ops;

pub use collection::{Collection, collect};
pub use extract::extract;
pub use label::Label;

// Re-exported so element construction needs no direct serde_json dependency.
pub use serde_json::{Map, Value, json};
