//! Records paired with the index built from them.

use crate::index::InvertedIndex;
use crate::types::PeopleList;

use super::query::{MatchSet, Query, QueryEngine};

/// A loaded people list and its inverted index.
///
/// The index is built once when the catalog is created. Neither part can be
/// mutated afterwards, so the two always agree.
pub struct Catalog {
    people: PeopleList,
    index: InvertedIndex,
    engine: QueryEngine,
}

impl Catalog {
    /// Index `people` and take ownership of both.
    pub fn new(people: PeopleList) -> Self {
        let index = InvertedIndex::build(people.iter());
        Self {
            people,
            index,
            engine: QueryEngine::new(),
        }
    }

    /// Run a query over the catalog.
    pub fn find(&self, query: &Query) -> MatchSet {
        self.engine
            .resolve(&self.index, self.people.len(), query.strategy, &query.words)
    }

    /// Records matched by `matches`, in ascending position order.
    pub fn records<'a>(&'a self, matches: &'a MatchSet) -> impl Iterator<Item = &'a str> + 'a {
        matches.iter().filter_map(move |p| self.people.get(p))
    }

    /// The loaded records.
    pub fn people(&self) -> &PeopleList {
        &self.people
    }

    /// The inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strategy;

    #[test]
    fn test_find_and_render_records() {
        let catalog = Catalog::new(PeopleList::from(vec![
            "Tom Smith tom@x.com".to_string(),
            "Ann Tom ann@y.com".to_string(),
            "Bob Lee bob@z.com".to_string(),
        ]));
        let matches = catalog.find(&Query::new(Strategy::None, ["tom"]));
        let records: Vec<&str> = catalog.records(&matches).collect();
        assert_eq!(records, vec!["Bob Lee bob@z.com"]);
        assert_eq!(catalog.index().record_count(), 3);
    }
}
