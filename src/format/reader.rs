//! Reads plain-text people files, one record per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::{PeopleList, PsearchResult};

/// Reader for line-oriented record files.
pub struct RecordReader;

impl RecordReader {
    /// Read a file into a list of records, one per line.
    pub fn read_from_file(path: &Path) -> PsearchResult<PeopleList> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read records from any buffered reader. Line terminators are stripped.
    pub fn read_from(reader: impl BufRead) -> PsearchResult<PeopleList> {
        let records = reader.lines().collect::<Result<Vec<String>, _>>()?;
        log::debug!("Read {} records", records.len());
        Ok(PeopleList::new(records))
    }

    /// Read a file, falling back to an empty list if it is missing or unreadable.
    pub fn load_or_empty(path: &Path) -> PeopleList {
        match Self::read_from_file(path) {
            Ok(people) => people,
            Err(e) => {
                log::warn!("Could not read {}: {}; starting empty", path.display(), e);
                PeopleList::default()
            }
        }
    }
}
