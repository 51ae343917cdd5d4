//! In-memory vocabulary corpus and its learning state.

use crate::error::{DrillError, Result};
use crate::types::{VocabularyItem, MAX_MASTERY};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One corpus record as supplied by a loader.
///
/// Learning-state fields are optional; missing ones start fresh. The camelCase
/// aliases accept the word lists shipped with the original web drill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    #[serde(alias = "japanese")]
    pub source: String,
    #[serde(alias = "english")]
    pub target: String,
    #[serde(default, alias = "exposureCount", skip_serializing_if = "Option::is_none")]
    pub exposure_count: Option<u32>,
    #[serde(default, alias = "masteryLevel", skip_serializing_if = "Option::is_none")]
    pub mastery_level: Option<u8>,
    #[serde(default, alias = "correctStreak", skip_serializing_if = "Option::is_none")]
    pub correct_streak: Option<u32>,
    #[serde(default, alias = "nextReviewDate", skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<NaiveDate>,
}

impl CorpusEntry {
    pub fn pair(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            exposure_count: None,
            mastery_level: None,
            correct_streak: None,
            next_review_date: None,
        }
    }

    fn into_item(self, position: usize, today: NaiveDate) -> Result<VocabularyItem> {
        let source = self.source.trim().to_string();
        let target = self.target.trim().to_string();
        if source.is_empty() {
            return Err(DrillError::EmptyField {
                field: "source_text",
                position,
            });
        }
        if target.is_empty() {
            return Err(DrillError::EmptyField {
                field: "target_text",
                position,
            });
        }

        let mastery_level = self.mastery_level.unwrap_or(0);
        if mastery_level > MAX_MASTERY {
            return Err(DrillError::InvalidMastery {
                key: source,
                level: mastery_level,
            });
        }

        Ok(VocabularyItem {
            source_text: source,
            target_text: target,
            exposure_count: self.exposure_count.unwrap_or(0),
            mastery_level,
            correct_streak: self.correct_streak.unwrap_or(0),
            next_review_date: self.next_review_date.unwrap_or(today),
        })
    }
}

/// Owns the corpus in load order plus a key index.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    items: Vec<VocabularyItem>,
    index: HashMap<String, usize>,
}

impl VocabularyStore {
    /// Build a store from loader records, rejecting blank fields and duplicate keys.
    pub fn from_entries(entries: Vec<CorpusEntry>, today: NaiveDate) -> Result<Self> {
        let mut store = Self::default();
        for (position, entry) in entries.into_iter().enumerate() {
            let item = entry.into_item(position, today)?;
            if store.index.contains_key(item.key()) {
                return Err(DrillError::DuplicateKey {
                    key: item.source_text,
                    position,
                });
            }
            store.index.insert(item.source_text.clone(), store.items.len());
            store.items.push(item);
        }
        tracing::debug!(items = store.items.len(), "vocabulary store loaded");
        Ok(store)
    }

    /// Build a store of fresh items from `(source, target)` pairs.
    pub fn from_pairs<S, T>(pairs: impl IntoIterator<Item = (S, T)>, today: NaiveDate) -> Result<Self>
    where
        S: Into<String>,
        T: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(source, target)| CorpusEntry::pair(source, target))
            .collect();
        Self::from_entries(entries, today)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in corpus order.
    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn get(&self, key: &str) -> Option<&VocabularyItem> {
        self.index.get(key).map(|&idx| &self.items[idx])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Overwrite the entry with the same key. Returns false if no such entry exists.
    pub fn replace(&mut self, item: VocabularyItem) -> bool {
        match self.index.get(item.key()) {
            Some(&idx) => {
                self.items[idx] = item;
                true
            }
            None => false,
        }
    }

    /// Number of items eligible for review on `today`.
    pub fn count_due(&self, today: NaiveDate) -> usize {
        self.items.iter().filter(|item| item.is_due(today)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn pairs_load_fresh_state() {
        let store = VocabularyStore::from_pairs([("はい", "yes"), ("いいえ", "no")], day(7)).unwrap();
        assert_eq!(store.len(), 2);
        let item = store.get("いいえ").unwrap();
        assert_eq!(item.target_text, "no");
        assert_eq!(item.exposure_count, 0);
        assert_eq!(item.next_review_date, day(7));
    }

    #[test]
    fn keeps_corpus_order() {
        let store =
            VocabularyStore::from_pairs([("c", "3"), ("a", "1"), ("b", "2")], day(7)).unwrap();
        let keys: Vec<_> = store.items().iter().map(|i| i.key()).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = VocabularyStore::from_pairs([("はい", "yes"), ("はい", "yeah")], day(7));
        assert!(matches!(
            result,
            Err(DrillError::DuplicateKey { position: 1, .. })
        ));
    }

    #[test]
    fn rejects_blank_fields() {
        let result = VocabularyStore::from_pairs([("はい", "  ")], day(7));
        assert_eq!(
            result.unwrap_err(),
            DrillError::EmptyField {
                field: "target_text",
                position: 0
            }
        );
    }

    #[test]
    fn rejects_out_of_range_mastery() {
        let mut entry = CorpusEntry::pair("はい", "yes");
        entry.mastery_level = Some(6);
        let result = VocabularyStore::from_entries(vec![entry], day(7));
        assert!(matches!(result, Err(DrillError::InvalidMastery { level: 6, .. })));
    }

    #[test]
    fn loads_saved_state_with_original_field_names() {
        let json = r#"[{
            "japanese": "こんにちは",
            "english": "hello",
            "exposureCount": 4,
            "masteryLevel": 2,
            "nextReviewDate": "2025-06-10",
            "correctStreak": 1
        }]"#;
        let entries: Vec<CorpusEntry> = serde_json::from_str(json).unwrap();
        let store = VocabularyStore::from_entries(entries, day(7)).unwrap();
        let item = store.get("こんにちは").unwrap();
        assert_eq!(item.exposure_count, 4);
        assert_eq!(item.mastery_level, 2);
        assert_eq!(item.correct_streak, 1);
        assert_eq!(item.next_review_date, day(10));
    }

    #[test]
    fn replace_updates_only_known_keys() {
        let mut store = VocabularyStore::from_pairs([("はい", "yes")], day(7)).unwrap();
        let mut item = store.get("はい").unwrap().clone();
        item.exposure_count = 9;
        assert!(store.replace(item));
        assert_eq!(store.get("はい").unwrap().exposure_count, 9);

        let stranger = VocabularyItem::new("ねこ", "cat", day(7));
        assert!(!store.replace(stranger));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn count_due_includes_today_and_overdue() {
        let mut entries = vec![
            CorpusEntry::pair("a", "1"),
            CorpusEntry::pair("b", "2"),
            CorpusEntry::pair("c", "3"),
        ];
        entries[0].next_review_date = Some(day(5));
        entries[2].next_review_date = Some(day(9));
        let store = VocabularyStore::from_entries(entries, day(7)).unwrap();
        assert_eq!(store.count_due(day(7)), 2);
        assert_eq!(store.count_due(day(9)), 3);
        assert_eq!(store.count_due(day(4)), 0);
    }
}
