//! Search query types.

mod query;

pub use query::{ProductQuery, SortDirection, SortKey};
