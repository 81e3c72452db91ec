//! Word frequency counting.

use std::collections::hash_map::{self, HashMap};

/// Mapping from distinct word to its number of occurrences.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of `tokens` exactly once.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = Self::new();
        for token in tokens {
            counts.add(token, 1);
        }
        counts
    }

    /// Add `n` occurrences of `word`.
    pub fn add(&mut self, word: &str, n: u64) {
        if n == 0 {
            return;
        }
        match self.counts.get_mut(word) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(word.to_string(), n);
            }
        }
    }

    /// Fold another mapping into this one, summing shared words.
    pub fn merge(&mut self, other: &WordCounts) {
        for (word, n) in other.iter() {
            self.add(word, n);
        }
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the number of tokens counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, n)| (w.as_str(), *n))
    }

    /// The most frequent word, ties broken by lexical order.
    pub fn most_common(&self) -> Option<(&str, u64)> {
        self.iter()
            .max_by(|(wa, na), (wb, nb)| na.cmp(nb).then_with(|| wb.cmp(wa)))
    }
}

impl<'a> FromIterator<&'a str> for WordCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl IntoIterator for WordCounts {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    #[test]
    fn counts_each_occurrence_once() {
        let counts = WordCounts::from_tokens(["the", "cat", "sat", "the", "cat", "sat"]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("the"), 2);
        assert_eq!(counts.get("cat"), 2);
        assert_eq!(counts.get("sat"), 2);
        assert_eq!(counts.get("dog"), 0);
    }

    #[test]
    fn total_matches_token_count() {
        let texts = [
            "",
            "The cat sat. The CAT sat!",
            "It's a dog-eat-dog world, isn't it? 42 times, 42 ways.",
            "Ünïcödé wörds and  spaces\n\nnew   lines",
        ];
        for text in texts {
            let stream = tokenize(text);
            let counts: WordCounts = stream.iter().collect();
            assert_eq!(counts.total(), stream.iter().count() as u64, "text: {:?}", text);
        }
    }

    #[test]
    fn merge_sums_shared_words() {
        let mut a = WordCounts::from_tokens(["cat", "cat", "dog"]);
        let b = WordCounts::from_tokens(["cat", "bird"]);
        a.merge(&b);
        assert_eq!(a.get("cat"), 3);
        assert_eq!(a.get("dog"), 1);
        assert_eq!(a.get("bird"), 1);
        assert_eq!(a.total(), 5);
    }

    #[test]
    fn adding_zero_does_not_create_entry() {
        let mut counts = WordCounts::new();
        counts.add("ghost", 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn most_common_breaks_ties_lexically() {
        let counts = WordCounts::from_tokens(["b", "a", "b", "a", "c"]);
        assert_eq!(counts.most_common(), Some(("a", 2)));
        assert_eq!(WordCounts::new().most_common(), None);
    }
}
