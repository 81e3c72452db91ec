//! Storage abstraction for Vocab Index.
//!
//! The [`VocabStore`] trait covers the three relations the pipeline writes:
//! the catalog (one row per document path), word observations (one row per
//! path and word), and the aggregate (corpus-wide sums, rebuilt on demand).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::confirm::{MetadataConfirmer, MetadataField};
use crate::dictionary::DictionaryValidator;
use crate::frequency::WordCounts;
use crate::models::{AggregateEntry, CatalogEntry, CorpusStats, WordObservation};

/// How a document's word batch treats rows left over from earlier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordBatchMode {
    /// Delete the path's existing observations before inserting the batch.
    #[default]
    Replace,
    /// Only insert or replace rows for words in the batch.
    Merge,
}

/// What one [`VocabStore::upsert_all`] call wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Observations written, one per distinct word.
    pub written: u64,
    /// How many of those words the dictionary did not recognize.
    pub non_dictionary: u64,
}

impl BatchSummary {
    pub fn of(batch: &[WordObservation]) -> Self {
        Self {
            written: batch.len() as u64,
            non_dictionary: batch.iter().filter(|o| !o.is_dictionary_word).count() as u64,
        }
    }
}

/// Abstract storage backend for Vocab Index.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`upsert_catalog`](VocabStore::upsert_catalog) | Insert or replace a catalog row |
/// | [`upsert_word`](VocabStore::upsert_word) | Insert or replace one observation |
/// | [`upsert_all`](VocabStore::upsert_all) | Classify and write a document's words in one transaction |
/// | [`rebuild_aggregate`](VocabStore::rebuild_aggregate) | Recompute the aggregate from observations |
/// | [`catalog_entry`](VocabStore::catalog_entry) | Look up a catalog row |
/// | [`word_observations`](VocabStore::word_observations) | Observations for one path |
/// | [`aggregate_entries`](VocabStore::aggregate_entries) | Every aggregate row |
/// | [`top_words`](VocabStore::top_words) | Most frequent aggregate rows |
/// | [`corpus_stats`](VocabStore::corpus_stats) | Row counts |
#[async_trait]
pub trait VocabStore: Send + Sync {
    /// Insert the row for `entry.path`, or fully replace the existing one.
    async fn upsert_catalog(&self, entry: &CatalogEntry) -> Result<()>;

    /// Insert or replace the observation keyed by `(path, word)`.
    ///
    /// `is_numeric` is derived from `word`.
    async fn upsert_word(
        &self,
        path: &str,
        word: &str,
        count: u64,
        is_dictionary_word: bool,
    ) -> Result<()>;

    /// Classify every word in `counts` and write them for `path`.
    ///
    /// The whole batch commits together or not at all.
    async fn upsert_all(
        &self,
        path: &str,
        counts: &WordCounts,
        validator: &DictionaryValidator,
        mode: WordBatchMode,
    ) -> Result<BatchSummary>;

    /// Drop and recompute the aggregate. Returns the number of aggregate rows.
    async fn rebuild_aggregate(&self) -> Result<u64>;

    async fn catalog_entry(&self, path: &str) -> Result<Option<CatalogEntry>>;

    /// Observations for `path`, ordered by word.
    async fn word_observations(&self, path: &str) -> Result<Vec<WordObservation>>;

    /// Every aggregate row, ordered by word then flags.
    async fn aggregate_entries(&self) -> Result<Vec<AggregateEntry>>;

    /// Aggregate rows by descending total count, ties broken by word.
    async fn top_words(&self, limit: usize, dictionary_only: bool) -> Result<Vec<AggregateEntry>>;

    async fn corpus_stats(&self) -> Result<CorpusStats>;
}

/// Classify `counts` into observations for `path`, sorted by word.
pub fn classify(
    path: &str,
    counts: &WordCounts,
    validator: &DictionaryValidator,
) -> Vec<WordObservation> {
    let mut observations: Vec<WordObservation> = counts
        .iter()
        .map(|(word, count)| {
            WordObservation::new(path, word, count, validator.is_dictionary_word(word))
        })
        .collect();
    observations.sort_by(|a, b| a.word.cmp(&b.word));
    observations
}

/// Write `entry` after passing its title and author through `confirmer`.
pub async fn upsert_catalog_confirmed(
    store: &dyn VocabStore,
    confirmer: &dyn MetadataConfirmer,
    entry: &CatalogEntry,
) -> Result<CatalogEntry> {
    let confirmed = CatalogEntry {
        path: entry.path.clone(),
        title: confirmer.confirm(&entry.path, MetadataField::Title, &entry.title),
        author: confirmer.confirm(&entry.path, MetadataField::Author, &entry.author),
        date: entry.date.clone(),
    };
    store.upsert_catalog(&confirmed).await?;
    Ok(confirmed)
}

/// Sort aggregate rows for [`VocabStore::top_words`] and truncate to `limit`.
pub fn rank_top_words(mut entries: Vec<AggregateEntry>, limit: usize) -> Vec<AggregateEntry> {
    entries.sort_by(|a, b| {
        b.total_count
            .cmp(&a.total_count)
            .then_with(|| a.word.cmp(&b.word))
    });
    entries.truncate(limit);
    entries
}
