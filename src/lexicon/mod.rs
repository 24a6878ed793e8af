//! The merged term → expansion-list dictionary.
//!
//! Built once at startup from three sources, in order:
//! 1. per-document metadata (NDJSON lemma descriptors)
//! 2. classical corpus (plain-text synonym runs)
//! 3. hardcoded fallback table (always wins on key collision)
//!
//! The lexicon is injected through [`crate::state::AppState`] and never
//! mutated after construction, so concurrent requests read it without locks.

pub mod corpus;
pub mod fallback;
pub mod metadata;

use serde::Serialize;
use std::collections::HashMap;

use crate::config::LexiconConfig;

/// One dictionary entry. Expansion order encodes preference: earlier entries
/// are stronger matches.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub expansions: Vec<String>,
    pub section: Option<String>,
    pub verse_reference: Option<String>,
    /// Count of valid synonyms at parse time
    pub frequency: u32,
    /// Base relevance for decay scoring. None means "use the matching pass's
    /// default" (sources that don't carry a base leave this unset).
    pub relevance_base: Option<f32>,
    pub source: LexiconSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconSource {
    Metadata,
    Corpus,
    Fallback,
}

/// Loader counters exposed at `/api/lexicon/stats`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconStats {
    pub total_entries: usize,
    pub from_metadata: usize,
    pub from_corpus: usize,
    pub from_fallback: usize,
    pub skipped_metadata_items: usize,
}

pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    stats: LexiconStats,
}

/// Normalize a term for lookup: lower-cased and trimmed.
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

impl Lexicon {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            stats: LexiconStats::default(),
        }
    }

    /// Load and merge all three sources. Individual source failures are
    /// logged and recovered; the worst case is an empty lexicon, which turns
    /// query expansion into a no-op downstream.
    pub fn load(config: &LexiconConfig) -> Self {
        let mut lexicon = Self::empty();

        match metadata::load_metadata(&config.metadata_path, &mut lexicon) {
            Ok((inserted, skipped)) => {
                lexicon.stats.from_metadata = inserted;
                lexicon.stats.skipped_metadata_items = skipped;
                tracing::info!(
                    "Lexicon metadata source: {} entries ({} items skipped)",
                    inserted,
                    skipped
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Lexicon metadata source unavailable ({}): {e:#}",
                    config.metadata_path.display()
                );
            }
        }

        match corpus::load_corpus(&config.corpus_path, &mut lexicon) {
            Ok(inserted) => {
                lexicon.stats.from_corpus = inserted;
                tracing::info!("Lexicon corpus source: {} entries", inserted);
            }
            Err(e) => {
                tracing::warn!(
                    "Lexicon corpus source unavailable ({}): {e:#}",
                    config.corpus_path.display()
                );
            }
        }

        lexicon.stats.from_fallback = fallback::merge_fallback(&mut lexicon);
        lexicon.stats.total_entries = lexicon.entries.len();
        tracing::info!("Lexicon ready: {} terms", lexicon.entries.len());

        lexicon
    }

    pub fn get(&self, term: &str) -> Option<&LexiconEntry> {
        self.entries.get(&normalize(term))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LexiconEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> &LexiconStats {
        &self.stats
    }

    /// Insert, overwriting any existing entry for the same normalized key.
    pub(crate) fn insert(&mut self, term: &str, entry: LexiconEntry) {
        self.entries.insert(normalize(term), entry);
    }

    /// Insert only if the normalized key is absent (first occurrence wins).
    /// Returns true when the entry was inserted.
    pub(crate) fn insert_if_absent(&mut self, term: &str, entry: LexiconEntry) -> bool {
        let key = normalize(term);
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    /// Test helper: build a lexicon from bare (term, expansions) pairs.
    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        let mut lexicon = Self::empty();
        for (term, expansions) in pairs {
            lexicon.insert(
                term,
                LexiconEntry {
                    expansions: expansions.iter().map(|s| s.to_string()).collect(),
                    section: None,
                    verse_reference: None,
                    frequency: expansions.len() as u32,
                    relevance_base: None,
                    source: LexiconSource::Metadata,
                },
            );
        }
        lexicon.stats.total_entries = lexicon.entries.len();
        lexicon
    }
}
