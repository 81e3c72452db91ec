//! Word tokenization.
//!
//! A token is a maximal run of word characters (Unicode alphanumerics and
//! underscore), optionally followed by one apostrophe and another run of
//! word characters. `don't` is a single token; `hyphenated-words` yields
//! `hyphenated` and `words`.
//!
//! Input is lowercased before matching, so every token is lowercase.
//! Right single quotes (typographic `’` and its common mojibake `â€™`)
//! are rewritten to a plain apostrophe first, so contractions and
//! possessives from typeset e-books stay whole.

use std::sync::OnceLock;

use regex::Regex;

/// UTF-8 bytes of U+2019 decoded as Windows-1252.
const MOJIBAKE_RIGHT_QUOTE: &str = "\u{e2}\u{20ac}\u{2122}";
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\b\w+(?:'\w+)?\b").expect("word pattern is valid"))
}

/// Normalized text ready to be iterated as tokens.
///
/// Iteration is lazy and restartable: every call to [`TokenStream::iter`]
/// starts again from the beginning of the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    text: String,
}

impl TokenStream {
    pub fn iter(&self) -> Tokens<'_> {
        Tokens {
            inner: word_regex().find_iter(&self.text),
        }
    }

    /// The normalized, lowercased text the tokens are drawn from.
    pub fn normalized_text(&self) -> &str {
        &self.text
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a str;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the tokens of a [`TokenStream`].
pub struct Tokens<'a> {
    inner: regex::Matches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| m.as_str())
    }
}

/// Rewrite known right-single-quote encodings to `'`.
pub fn normalize_quotes(text: &str) -> String {
    text.replace(MOJIBAKE_RIGHT_QUOTE, "'")
        .replace(RIGHT_SINGLE_QUOTE, "'")
}

/// Prepare `text` for tokenization.
pub fn tokenize(text: &str) -> TokenStream {
    TokenStream {
        text: normalize_quotes(text).to_lowercase(),
    }
}
