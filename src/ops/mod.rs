//! Operation families of [`Collection`](crate::Collection), one module per
//! responsibility.

mod aggregate;
mod grouping;
mod ordering;
mod query;
mod transform;
