//! Dictionary validation.
//!
//! The spell-check backend is abstracted behind [`DictionaryOracle`].
//! [`DictionaryValidator`] adds the capitalization fallback: a word is a
//! dictionary word if the oracle accepts it verbatim or with only its
//! first character uppercased, which covers proper nouns and
//! sentence-initial forms that the tokenizer has lowercased.

use std::collections::HashSet;

/// A spell-check backend.
pub trait DictionaryOracle: Send + Sync {
    /// Whether `word` is a recognized form in `locale`'s dictionary.
    fn recognized(&self, word: &str, locale: &str) -> bool;
}

/// Exact-match oracle over a fixed word set, for a single locale.
#[derive(Debug, Clone, Default)]
pub struct WordListOracle {
    locale: String,
    words: HashSet<String>,
}

impl WordListOracle {
    pub fn new<I, S>(locale: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locale: locale.to_string(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a word list: one word per line, blank lines and `#` comments skipped.
    pub fn parse(locale: &str, content: &str) -> Self {
        Self::new(
            locale,
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordListOracle {
    fn recognized(&self, word: &str, locale: &str) -> bool {
        locale == self.locale && self.words.contains(word)
    }
}

/// Uppercase the first character of `word`, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Classifies words against an oracle for one locale.
pub struct DictionaryValidator {
    oracle: Box<dyn DictionaryOracle>,
    locale: String,
}

impl DictionaryValidator {
    pub fn new(oracle: Box<dyn DictionaryOracle>, locale: &str) -> Self {
        Self {
            oracle,
            locale: locale.to_string(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn is_dictionary_word(&self, word: &str) -> bool {
        is_dictionary_word(self.oracle.as_ref(), word, &self.locale)
    }
}

/// True iff `oracle` recognizes `word` as-is or with its first character capitalized.
pub fn is_dictionary_word(oracle: &dyn DictionaryOracle, word: &str, locale: &str) -> bool {
    if oracle.recognized(word, locale) {
        return true;
    }
    let capitalized = capitalize_first(word);
    capitalized != word && oracle.recognized(&capitalized, locale)
}
