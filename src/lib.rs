//! people-search — in-memory inverted-index search over a list of people.
//!
//! Records are indexed once, word by word, and queried with one of three
//! strategies: every word (ALL), at least one word (ANY) or none of the
//! words (NONE).

pub mod cli;
pub mod engine;
pub mod format;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{resolve, Catalog, MatchSet, Query, QueryEngine};
pub use format::RecordReader;
pub use index::{tokenize, InvertedIndex};
pub use types::{PeopleList, PsearchError, PsearchResult, Strategy};
