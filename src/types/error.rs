//! Error types for the people-search library.

use thiserror::Error;

/// All errors that can occur in the people-search library.
///
/// Neither the indexer nor the query resolver can fail; these errors come from
/// the edges of the program: reading records, parsing user input, and
/// rendering output.
#[derive(Error, Debug)]
pub enum PsearchError {
    /// Strategy text did not name ALL, ANY or NONE.
    #[error("Unknown matching strategy: {0:?}")]
    UnknownStrategy(String),

    /// Menu input was not one of the offered options.
    #[error("Invalid menu option: {0:?}")]
    InvalidMenuChoice(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for people-search operations.
pub type PsearchResult<T> = Result<T, PsearchError>;
