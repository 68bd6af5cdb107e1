//! Query engine — resolves strategies over the inverted index.

pub mod catalog;
pub mod query;

pub use catalog::Catalog;
pub use query::{resolve, MatchSet, Query, QueryEngine};
