//! Query resolution — combines per-word position sets under a strategy.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::index::{tokenize, InvertedIndex};
use crate::types::Strategy;

/// A single search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// How per-word results are combined.
    pub strategy: Strategy,
    /// Query words, in the order they were entered.
    pub words: Vec<String>,
}

impl Query {
    /// Create a query from already-split words.
    pub fn new<I, S>(strategy: Strategy, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strategy,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a query from a line of user input, split the same way records are.
    pub fn from_text(strategy: Strategy, text: &str) -> Self {
        Self {
            strategy,
            words: tokenize(text).collect(),
        }
    }
}

/// The record positions matched by a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSet {
    positions: BTreeSet<usize>,
}

impl MatchSet {
    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether the record at `position` matched.
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Matching positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    /// Borrow the underlying position set.
    pub fn positions(&self) -> &BTreeSet<usize> {
        &self.positions
    }
}

impl From<BTreeSet<usize>> for MatchSet {
    fn from(positions: BTreeSet<usize>) -> Self {
        Self { positions }
    }
}

/// Resolves queries against an [`InvertedIndex`].
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Run a query against the index, using the index's own record count.
    pub fn search(&self, index: &InvertedIndex, query: &Query) -> MatchSet {
        self.resolve(index, index.record_count(), query.strategy, &query.words)
    }

    /// Resolve `query_words` under `strategy`.
    ///
    /// Query words that are not index keys are ignored. When no query word is
    /// a key, the result is empty for every strategy, NONE included.
    pub fn resolve<S: AsRef<str>>(
        &self,
        index: &InvertedIndex,
        total_records: usize,
        strategy: Strategy,
        query_words: &[S],
    ) -> MatchSet {
        let candidates = candidate_keys(index, query_words);

        let mut sets = candidates.iter().filter_map(|word| index.get(word));
        let Some(first) = sets.next() else {
            log::debug!("No query word is indexed ({} words given)", query_words.len());
            return MatchSet::default();
        };

        let mut acc = first.clone();
        for set in sets {
            acc = match strategy {
                Strategy::All => acc.intersection(set).copied().collect(),
                Strategy::Any | Strategy::None => acc.union(set).copied().collect(),
            };
        }

        if strategy == Strategy::None {
            acc = (0..total_records).filter(|p| !acc.contains(p)).collect();
        } else {
            acc.retain(|&p| p < total_records);
        }

        log::debug!(
            "{} query over {:?} matched {} of {} records",
            strategy,
            candidates,
            acc.len(),
            total_records
        );

        MatchSet::from(acc)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a query without holding a [`QueryEngine`].
pub fn resolve<S: AsRef<str>>(
    index: &InvertedIndex,
    total_records: usize,
    strategy: Strategy,
    query_words: &[S],
) -> MatchSet {
    QueryEngine::new().resolve(index, total_records, strategy, query_words)
}

/// Lowercased query words that are index keys, first occurrence order, no repeats.
fn candidate_keys<S: AsRef<str>>(index: &InvertedIndex, query_words: &[S]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    query_words
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .filter(|w| index.contains(w))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
