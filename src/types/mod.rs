//! All data types for the people-search library.

pub mod error;
pub mod record;
pub mod strategy;

pub use error::{PsearchError, PsearchResult};
pub use record::PeopleList;
pub use strategy::Strategy;
