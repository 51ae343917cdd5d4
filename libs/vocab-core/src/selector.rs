//! Question set selection per session mode.

use crate::store::VocabularyStore;
use crate::types::{DrillSettings, EmptyReason, Mode, ReviewOrder, VocabularyItem, MAX_MASTERY};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered item keys chosen for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub keys: Vec<String>,
    /// Set when `keys` is empty.
    pub empty_reason: Option<EmptyReason>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Build the question set for `mode`.
pub fn build_session<R: Rng + ?Sized>(
    mode: Mode,
    store: &VocabularyStore,
    today: NaiveDate,
    settings: &DrillSettings,
    rng: &mut R,
) -> Selection {
    let mut picked = match mode {
        Mode::New => select_new(store, settings),
        Mode::Review => select_review(store, today),
        Mode::Challenge => store.items().iter().collect(),
    };

    match (mode, settings.review_order) {
        (Mode::Review, ReviewOrder::DueFirst) => {}
        _ => picked.shuffle(rng),
    }

    let keys: Vec<String> = picked.iter().map(|item| item.source_text.clone()).collect();
    let empty_reason = if !keys.is_empty() {
        None
    } else if store.is_empty() {
        Some(EmptyReason::NoCorpus)
    } else {
        match mode {
            Mode::New => Some(EmptyReason::AllMastered),
            Mode::Review => Some(EmptyReason::NothingDue),
            Mode::Challenge => Some(EmptyReason::NoCorpus),
        }
    };

    tracing::debug!(mode = %mode, size = keys.len(), "session built");
    Selection { keys, empty_reason }
}

/// Least-seen, least-mastered items first, capped; falls back to anything not yet mastered.
fn select_new<'a>(store: &'a VocabularyStore, settings: &DrillSettings) -> Vec<&'a VocabularyItem> {
    let mut candidates: Vec<&VocabularyItem> = store
        .items()
        .iter()
        .filter(|item| {
            item.exposure_count < settings.new_exposure_below
                || item.mastery_level < settings.new_mastery_below
        })
        .collect();
    candidates.sort_by_key(|item| (item.exposure_count, item.mastery_level));

    if candidates.is_empty() {
        candidates = store
            .items()
            .iter()
            .filter(|item| item.mastery_level < MAX_MASTERY)
            .collect();
        candidates.sort_by_key(|item| item.mastery_level);
    }

    candidates.truncate(settings.new_session_cap);
    candidates
}

/// Due items, earliest due first.
fn select_review(store: &VocabularyStore, today: NaiveDate) -> Vec<&VocabularyItem> {
    let mut due: Vec<&VocabularyItem> = store.items().iter().filter(|item| item.is_due(today)).collect();
    due.sort_by_key(|item| item.next_review_date);
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CorpusEntry;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn entry(source: &str, exposure: u32, mastery: u8, due: u32) -> CorpusEntry {
        CorpusEntry {
            exposure_count: Some(exposure),
            mastery_level: Some(mastery),
            next_review_date: Some(day(due)),
            ..CorpusEntry::pair(source, format!("{}-t", source))
        }
    }

    fn fresh_store(n: usize) -> VocabularyStore {
        VocabularyStore::from_pairs((0..n).map(|i| (format!("w{}", i), format!("t{}", i))), day(7))
            .unwrap()
    }

    #[test]
    fn new_mode_takes_whole_fresh_corpus() {
        let store = fresh_store(10);
        let selection = build_session(Mode::New, &store, day(7), &DrillSettings::default(), &mut rng());
        assert_eq!(selection.keys.len(), 10);
        let unique: HashSet<_> = selection.keys.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(store.items().iter().all(|i| unique.contains(&i.source_text)));
        assert_eq!(selection.empty_reason, None);
    }

    #[test]
    fn new_mode_caps_at_session_limit() {
        let store = fresh_store(40);
        let selection = build_session(Mode::New, &store, day(7), &DrillSettings::default(), &mut rng());
        assert_eq!(selection.keys.len(), 15);
    }

    #[test]
    fn new_mode_prefers_least_exposed() {
        let mut entries = vec![
            entry("seen", 2, 1, 7),
            entry("fresh", 0, 0, 7),
            entry("mastered", 5, 4, 7),
        ];
        entries.push(entry("half", 1, 0, 7));
        let store = VocabularyStore::from_entries(entries, day(7)).unwrap();
        let settings = DrillSettings {
            new_session_cap: 2,
            ..Default::default()
        };
        let selection = build_session(Mode::New, &store, day(7), &settings, &mut rng());
        let keys: HashSet<_> = selection.keys.iter().map(String::as_str).collect();
        assert_eq!(keys, HashSet::from(["fresh", "half"]));
    }

    #[test]
    fn new_mode_breaks_exposure_ties_by_mastery() {
        let entries = vec![entry("b", 1, 1, 7), entry("a", 1, 0, 7)];
        let store = VocabularyStore::from_entries(entries, day(7)).unwrap();
        let settings = DrillSettings {
            new_session_cap: 1,
            ..Default::default()
        };
        let selection = build_session(Mode::New, &store, day(7), &settings, &mut rng());
        assert_eq!(selection.keys, vec!["a".to_string()]);
    }

    #[test]
    fn new_mode_falls_back_to_unmastered() {
        let entries = vec![
            entry("done", 9, 5, 7),
            entry("close", 6, 4, 7),
            entry("mid", 6, 2, 7),
        ];
        let store = VocabularyStore::from_entries(entries, day(7)).unwrap();
        let settings = DrillSettings {
            new_session_cap: 1,
            ..Default::default()
        };
        let selection = build_session(Mode::New, &store, day(7), &settings, &mut rng());
        assert_eq!(selection.keys, vec!["mid".to_string()]);
    }

    #[test]
    fn new_mode_reports_all_mastered() {
        let store = VocabularyStore::from_entries(vec![entry("done", 9, 5, 7)], day(7)).unwrap();
        let selection = build_session(Mode::New, &store, day(7), &DrillSettings::default(), &mut rng());
        assert!(selection.is_empty());
        assert_eq!(selection.empty_reason, Some(EmptyReason::AllMastered));
    }

    #[test]
    fn review_mode_keeps_only_due_items_in_due_order() {
        let entries = vec![
            entry("later", 3, 2, 12),
            entry("today", 3, 2, 7),
            entry("overdue", 3, 2, 3),
            entry("yesterday", 3, 2, 6),
        ];
        let store = VocabularyStore::from_entries(entries, day(7)).unwrap();
        let selection =
            build_session(Mode::Review, &store, day(7), &DrillSettings::default(), &mut rng());
        assert_eq!(selection.keys, vec!["overdue", "yesterday", "today"]);
    }

    #[test]
    fn review_mode_shuffled_order_keeps_same_items() {
        let entries = (1..=6).map(|d| entry(&format!("w{}", d), 3, 2, d)).collect();
        let store = VocabularyStore::from_entries(entries, day(7)).unwrap();
        let settings = DrillSettings {
            review_order: ReviewOrder::Shuffled,
            ..Default::default()
        };
        let selection = build_session(Mode::Review, &store, day(7), &settings, &mut rng());
        let mut keys = selection.keys.clone();
        keys.sort();
        assert_eq!(keys, vec!["w1", "w2", "w3", "w4", "w5", "w6"]);
    }

    #[test]
    fn review_mode_reports_nothing_due() {
        let store = VocabularyStore::from_entries(vec![entry("later", 1, 1, 20)], day(7)).unwrap();
        let selection =
            build_session(Mode::Review, &store, day(7), &DrillSettings::default(), &mut rng());
        assert_eq!(selection.empty_reason, Some(EmptyReason::NothingDue));
    }

    #[test]
    fn challenge_mode_uses_everything() {
        let store = fresh_store(25);
        let selection =
            build_session(Mode::Challenge, &store, day(7), &DrillSettings::default(), &mut rng());
        assert_eq!(selection.keys.len(), 25);
    }

    #[test]
    fn empty_store_reports_no_corpus_in_every_mode() {
        let store = VocabularyStore::default();
        for mode in [Mode::New, Mode::Review, Mode::Challenge] {
            let selection = build_session(mode, &store, day(7), &DrillSettings::default(), &mut rng());
            assert_eq!(selection.empty_reason, Some(EmptyReason::NoCorpus));
        }
    }
}
