//! The loaded list of people records.

use serde::Serialize;

/// An ordered, read-only list of records.
///
/// A record is addressed by its 0-based position, which stays stable for the
/// lifetime of the list: there is no way to insert or remove after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeopleList {
    records: Vec<String>,
}

impl PeopleList {
    /// Create a list from already-loaded records.
    pub fn new(records: Vec<String>) -> Self {
        Self { records }
    }

    /// Get the record at a position.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.records.get(position).map(String::as_str)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in original order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(String::as_str)
    }

    /// Borrow the records as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.records
    }
}

impl From<Vec<String>> for PeopleList {
    fn from(records: Vec<String>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<String> for PeopleList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
