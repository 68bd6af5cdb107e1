//! Inverted index and the tokenizer feeding it.

pub mod inverted_index;
pub mod tokenizer;

pub use inverted_index::InvertedIndex;
pub use tokenizer::tokenize;
