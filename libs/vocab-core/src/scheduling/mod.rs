//! Spaced repetition scheduling.

pub mod ladder;

pub use ladder::MasteryLadder;

use crate::types::VocabularyItem;
use chrono::NaiveDate;

/// Result of scheduling an item after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingResult {
    pub item: VocabularyItem,
    pub interval_days: u32,
    pub next_review_date: NaiveDate,
}

/// Computes the learning-state transition for one attempt.
pub trait Scheduler {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Apply a correct or incorrect attempt made on `today`.
    fn apply_outcome(&self, item: &VocabularyItem, correct: bool, today: NaiveDate) -> SchedulingResult;
}
