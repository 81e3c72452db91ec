//! In-memory [`VocabStore`] implementation for testing.
//!
//! Uses `BTreeMap` behind `std::sync::RwLock`. A word batch is applied
//! under a single write lock, which makes it atomic with respect to
//! other callers.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use crate::dictionary::DictionaryValidator;
use crate::frequency::WordCounts;
use crate::models::{AggregateEntry, CatalogEntry, CorpusStats, WordObservation};

use super::{classify, rank_top_words, BatchSummary, VocabStore, WordBatchMode};

type ObservationKey = (String, String);
type AggregateKey = (String, bool, bool);

/// In-memory store for tests.
pub struct InMemoryStore {
    catalog: RwLock<BTreeMap<String, CatalogEntry>>,
    observations: RwLock<BTreeMap<ObservationKey, WordObservation>>,
    aggregate: RwLock<Vec<AggregateEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(BTreeMap::new()),
            observations: RwLock::new(BTreeMap::new()),
            aggregate: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VocabStore for InMemoryStore {
    async fn upsert_catalog(&self, entry: &CatalogEntry) -> Result<()> {
        let mut catalog = self.catalog.write().unwrap();
        catalog.insert(entry.path.clone(), entry.clone());
        Ok(())
    }

    async fn upsert_word(
        &self,
        path: &str,
        word: &str,
        count: u64,
        is_dictionary_word: bool,
    ) -> Result<()> {
        let obs = WordObservation::new(path, word, count, is_dictionary_word);
        let mut observations = self.observations.write().unwrap();
        observations.insert((obs.path.clone(), obs.word.clone()), obs);
        Ok(())
    }

    async fn upsert_all(
        &self,
        path: &str,
        counts: &WordCounts,
        validator: &DictionaryValidator,
        mode: WordBatchMode,
    ) -> Result<BatchSummary> {
        let batch = classify(path, counts, validator);
        let summary = BatchSummary::of(&batch);
        let mut observations = self.observations.write().unwrap();
        if mode == WordBatchMode::Replace {
            observations.retain(|(p, _), _| p != path);
        }
        for obs in batch {
            observations.insert((obs.path.clone(), obs.word.clone()), obs);
        }
        Ok(summary)
    }

    async fn rebuild_aggregate(&self) -> Result<u64> {
        let observations = self.observations.read().unwrap();
        let mut sums: HashMap<AggregateKey, u64> = HashMap::new();
        for obs in observations.values() {
            *sums
                .entry((obs.word.clone(), obs.is_dictionary_word, obs.is_numeric))
                .or_insert(0) += obs.count;
        }
        let mut rows: Vec<AggregateEntry> = sums
            .into_iter()
            .map(
                |((word, is_dictionary_word, is_numeric), total_count)| AggregateEntry {
                    word,
                    is_dictionary_word,
                    is_numeric,
                    total_count,
                },
            )
            .collect();
        rows.sort_by(|a, b| {
            (&a.word, a.is_dictionary_word, a.is_numeric).cmp(&(
                &b.word,
                b.is_dictionary_word,
                b.is_numeric,
            ))
        });
        let n = rows.len() as u64;
        *self.aggregate.write().unwrap() = rows;
        Ok(n)
    }

    async fn catalog_entry(&self, path: &str) -> Result<Option<CatalogEntry>> {
        Ok(self.catalog.read().unwrap().get(path).cloned())
    }

    async fn word_observations(&self, path: &str) -> Result<Vec<WordObservation>> {
        let observations = self.observations.read().unwrap();
        Ok(observations
            .values()
            .filter(|obs| obs.path == path)
            .cloned()
            .collect())
    }

    async fn aggregate_entries(&self) -> Result<Vec<AggregateEntry>> {
        Ok(self.aggregate.read().unwrap().clone())
    }

    async fn top_words(&self, limit: usize, dictionary_only: bool) -> Result<Vec<AggregateEntry>> {
        let entries: Vec<AggregateEntry> = self
            .aggregate
            .read()
            .unwrap()
            .iter()
            .filter(|e| !dictionary_only || e.is_dictionary_word)
            .cloned()
            .collect();
        Ok(rank_top_words(entries, limit))
    }

    async fn corpus_stats(&self) -> Result<CorpusStats> {
        let catalog = self.catalog.read().unwrap();
        let observations = self.observations.read().unwrap();
        let aggregate = self.aggregate.read().unwrap();
        let mut words: Vec<&str> = observations.keys().map(|(_, w)| w.as_str()).collect();
        words.sort_unstable();
        words.dedup();
        Ok(CorpusStats {
            documents: catalog.len() as u64,
            observations: observations.len() as u64,
            distinct_words: words.len() as u64,
            aggregate_rows: aggregate.len() as u64,
            total_tokens: observations.values().map(|o| o.count).sum(),
        })
    }
}
