//! Core data models used throughout Vocab Index.
//!
//! These types represent the catalog rows, per-document word observations,
//! and corpus-wide aggregates that flow from the extraction pipeline into
//! the store.

use serde::Serialize;

/// Title recorded when a document declares none.
pub const TITLE_NOT_FOUND: &str = "Title Not Found";
/// Author recorded when a document declares none.
pub const AUTHOR_NOT_FOUND: &str = "Author Not Found";

/// Bibliographic metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub date: Option<String>,
}

impl DocumentMetadata {
    /// Build metadata from optional raw fields, substituting sentinels for
    /// missing or blank values.
    pub fn from_raw(title: Option<&str>, author: Option<&str>, date: Option<&str>) -> Self {
        fn clean(value: Option<&str>) -> Option<String> {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }
        Self {
            title: clean(title).unwrap_or_else(|| TITLE_NOT_FOUND.to_string()),
            author: clean(author).unwrap_or_else(|| AUTHOR_NOT_FOUND.to_string()),
            date: clean(date),
        }
    }
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self::from_raw(None, None, None)
    }
}

/// One row of the catalog relation, keyed by `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub path: String,
    pub title: String,
    pub author: String,
    pub date: Option<String>,
}

impl CatalogEntry {
    pub fn new(path: &str, metadata: DocumentMetadata) -> Self {
        Self {
            path: path.to_string(),
            title: metadata.title,
            author: metadata.author,
            date: metadata.date,
        }
    }
}

/// One (document, distinct word) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordObservation {
    pub path: String,
    pub word: String,
    pub count: u64,
    pub is_dictionary_word: bool,
    pub is_numeric: bool,
}

impl WordObservation {
    /// Build an observation, deriving `is_numeric` from the word.
    pub fn new(path: &str, word: &str, count: u64, is_dictionary_word: bool) -> Self {
        Self {
            path: path.to_string(),
            word: word.to_string(),
            count,
            is_dictionary_word,
            is_numeric: is_numeric(word),
        }
    }
}

/// Corpus-wide rollup of observations sharing `(word, is_dictionary_word, is_numeric)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateEntry {
    pub word: String,
    pub is_dictionary_word: bool,
    pub is_numeric: bool,
    pub total_count: u64,
}

/// Row counts across the three relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub documents: u64,
    pub observations: u64,
    pub distinct_words: u64,
    pub aggregate_rows: u64,
    pub total_tokens: u64,
}

/// True iff `word` is non-empty and made only of ASCII decimal digits.
pub fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_flag() {
        assert!(is_numeric("1984"));
        assert!(is_numeric("0"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("3rd"));
        assert!(!is_numeric("1_000"));
        assert!(!WordObservation::new("a", "cat", 1, true).is_numeric);
        assert!(WordObservation::new("a", "42", 1, false).is_numeric);
    }

    #[test]
    fn metadata_defaults_to_sentinels() {
        let meta = DocumentMetadata::from_raw(Some("  "), None, Some(""));
        assert_eq!(meta.title, TITLE_NOT_FOUND);
        assert_eq!(meta.author, AUTHOR_NOT_FOUND);
        assert_eq!(meta.date, None);
        assert_eq!(meta, DocumentMetadata::default());
    }

    #[test]
    fn metadata_keeps_trimmed_values() {
        let meta = DocumentMetadata::from_raw(Some(" Emma "), Some("Jane Austen"), Some("1815"));
        assert_eq!(meta.title, "Emma");
        assert_eq!(meta.author, "Jane Austen");
        assert_eq!(meta.date.as_deref(), Some("1815"));
    }
}
