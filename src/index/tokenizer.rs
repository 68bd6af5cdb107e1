//! Word splitting shared by the indexer and the query side.

/// Split text into lowercase words.
///
/// Every whitespace character is a separator, so runs of whitespace yield
/// empty words. Empty words are kept: they are indexed like any other word.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(char::is_whitespace).map(str::to_lowercase)
}
