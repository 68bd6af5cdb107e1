//! CLI command implementations.

use std::io::Write;

use crate::engine::{Catalog, MatchSet, Query};
use crate::types::PsearchResult;

/// Summary line for a non-empty result: `1 person found:` or `N people found:`.
pub fn found_line(count: usize) -> String {
    if count == 1 {
        "1 person found:".to_string()
    } else {
        format!("{} people found:", count)
    }
}

/// Print a result set as text.
pub fn render_matches(
    out: &mut impl Write,
    catalog: &Catalog,
    matches: &MatchSet,
) -> PsearchResult<()> {
    if matches.is_empty() {
        writeln!(out, "No matching people found.")?;
        return Ok(());
    }
    writeln!(out, "{}", found_line(matches.len()))?;
    for record in catalog.records(matches) {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Search the catalog and print the matching people.
pub fn cmd_find(
    out: &mut impl Write,
    catalog: &Catalog,
    query: &Query,
    json: bool,
) -> PsearchResult<()> {
    let matches = catalog.find(query);

    if json {
        let people: Vec<&str> = catalog.records(&matches).collect();
        let info = serde_json::json!({
            "strategy": query.strategy,
            "words": query.words,
            "count": matches.len(),
            "positions": matches.positions(),
            "people": people,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        render_matches(out, catalog, &matches)?;
    }
    Ok(())
}

/// Print every record in original order.
pub fn cmd_list(out: &mut impl Write, catalog: &Catalog, json: bool) -> PsearchResult<()> {
    if json {
        let info = serde_json::json!({
            "count": catalog.people().len(),
            "people": catalog.people(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "=== List of people ===")?;
        for record in catalog.people().iter() {
            writeln!(out, "{}", record)?;
        }
    }
    Ok(())
}

/// Print record and word counts.
pub fn cmd_stats(out: &mut impl Write, catalog: &Catalog, json: bool) -> PsearchResult<()> {
    let records = catalog.people().len();
    let words = catalog.index().word_count();

    if json {
        let info = serde_json::json!({
            "records": records,
            "distinct_words": words,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "Records: {}", records)?;
        writeln!(out, "Distinct words: {}", words)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PeopleList, Strategy};

    fn catalog() -> Catalog {
        Catalog::new(PeopleList::from(vec![
            "Tom Smith tom@x.com".to_string(),
            "Ann Tom ann@y.com".to_string(),
            "Bob Lee bob@z.com".to_string(),
        ]))
    }

    fn run(f: impl FnOnce(&mut Vec<u8>) -> PsearchResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_found_line_pluralizes() {
        assert_eq!(found_line(1), "1 person found:");
        assert_eq!(found_line(2), "2 people found:");
    }

    #[test]
    fn test_cmd_find_text() {
        let c = catalog();
        let query = Query::new(Strategy::All, ["tom"]);
        let text = run(|out| cmd_find(out, &c, &query, false));
        assert_eq!(
            text,
            "2 people found:\nTom Smith tom@x.com\nAnn Tom ann@y.com\n"
        );
    }

    #[test]
    fn test_cmd_find_no_match() {
        let c = catalog();
        let query = Query::new(Strategy::Any, ["zed"]);
        let text = run(|out| cmd_find(out, &c, &query, false));
        assert_eq!(text, "No matching people found.\n");
    }

    #[test]
    fn test_cmd_find_json() {
        let c = catalog();
        let query = Query::new(Strategy::None, ["tom"]);
        let text = run(|out| cmd_find(out, &c, &query, true));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["strategy"], "NONE");
        assert_eq!(value["count"], 1);
        assert_eq!(value["positions"], serde_json::json!([2]));
        assert_eq!(value["people"][0], "Bob Lee bob@z.com");
    }

    #[test]
    fn test_cmd_list_and_stats() {
        let c = catalog();
        let text = run(|out| cmd_list(out, &c, false));
        assert!(text.starts_with("=== List of people ===\nTom Smith"));
        assert_eq!(text.lines().count(), 4);

        let text = run(|out| cmd_stats(out, &c, true));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["records"], 3);
        assert_eq!(value["distinct_words"], 8);
    }
}
