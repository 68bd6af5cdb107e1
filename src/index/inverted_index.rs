//! Word-level inverted index over a list of records.

use std::collections::{BTreeSet, HashMap};

use super::tokenizer::tokenize;

/// Maps each lowercase word to the set of record positions containing it.
///
/// Built in one pass by [`InvertedIndex::build`] and read-only afterwards.
/// Positions are 0-based; callers apply any display offset.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    index: HashMap<String, BTreeSet<usize>>,
    record_count: usize,
}

impl InvertedIndex {
    /// Build the index from records in order. Position `i` is the `i`-th record.
    ///
    /// A word repeated within one record contributes its position once.
    pub fn build<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, BTreeSet<usize>> = HashMap::new();
        let mut record_count = 0;

        for (position, record) in records.into_iter().enumerate() {
            for word in tokenize(record.as_ref()) {
                index.entry(word).or_default().insert(position);
            }
            record_count = position + 1;
        }

        log::debug!(
            "Indexed {} records, {} distinct words",
            record_count,
            index.len()
        );

        Self {
            index,
            record_count,
        }
    }

    /// Positions of records containing `word`. The word must already be lowercase.
    pub fn get(&self, word: &str) -> Option<&BTreeSet<usize>> {
        self.index.get(word)
    }

    /// Whether `word` is a key of the index.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    /// Number of records the index was built from.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over all indexed words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}
