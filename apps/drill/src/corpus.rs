//! Corpus loading from JSON.

use anyhow::Context;
use chrono::NaiveDate;
use std::path::Path;
use vocab_core::{CorpusEntry, VocabularyStore};

/// Word list compiled into the binary.
const BUNDLED_CORPUS: &str = include_str!("../data/vocabulary.json");

/// Parse a JSON array of corpus entries.
pub fn parse_corpus(content: &str) -> anyhow::Result<Vec<CorpusEntry>> {
    serde_json::from_str(content).context("corpus is not a JSON array of word pairs")
}

/// Load the corpus from `path`, or the bundled word list when `None`.
pub fn load_store(path: Option<&Path>, today: NaiveDate) -> anyhow::Result<VocabularyStore> {
    let entries = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read corpus {}", path.display()))?;
            tracing::info!("Loading corpus from {}", path.display());
            parse_corpus(&content)?
        }
        None => {
            tracing::info!("Loading bundled corpus");
            parse_corpus(BUNDLED_CORPUS)?
        }
    };

    let store = VocabularyStore::from_entries(entries, today)?;
    tracing::info!("Loaded {} words", store.len());
    Ok(store)
}
