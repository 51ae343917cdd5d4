//! Mastery ladder scheduler.
//!
//! Two consecutive correct answers climb one mastery rung; a miss drops one
//! rung and brings the item back tomorrow.

use super::{Scheduler, SchedulingResult};
use crate::types::{VocabularyItem, MAX_MASTERY};
use chrono::{Days, NaiveDate};

/// Mastery ladder with a per-level interval table.
#[derive(Debug, Clone)]
pub struct MasteryLadder {
    /// Review interval in days, indexed by mastery level.
    pub intervals: Vec<u32>,
    /// Correct answers in a row needed to climb a level.
    pub promote_every: u32,
    /// Interval after a miss, regardless of level.
    pub relearn_interval: u32,
}

impl Default for MasteryLadder {
    fn default() -> Self {
        Self {
            intervals: vec![1, 2, 4, 8, 16, 30],
            promote_every: 2,
            relearn_interval: 1,
        }
    }
}

impl MasteryLadder {
    /// Interval for a mastery level, clamped to the last table entry.
    pub fn interval_for(&self, mastery_level: u8) -> u32 {
        let last = self.intervals.len().saturating_sub(1);
        self.intervals
            .get((mastery_level as usize).min(last))
            .copied()
            .unwrap_or(self.relearn_interval)
    }
}

impl Scheduler for MasteryLadder {
    fn name(&self) -> &'static str {
        "mastery_ladder"
    }

    fn apply_outcome(&self, item: &VocabularyItem, correct: bool, today: NaiveDate) -> SchedulingResult {
        let mut next = item.clone();
        next.exposure_count += 1;

        let interval_days = if correct {
            next.correct_streak += 1;
            if self.promote_every > 0
                && next.correct_streak % self.promote_every == 0
                && next.mastery_level < MAX_MASTERY
            {
                next.mastery_level += 1;
            }
            self.interval_for(next.mastery_level)
        } else {
            next.correct_streak = 0;
            next.mastery_level = next.mastery_level.saturating_sub(1);
            self.relearn_interval
        };

        let next_review_date = today + Days::new(u64::from(interval_days));
        next.next_review_date = next_review_date;

        SchedulingResult {
            item: next,
            interval_days,
            next_review_date,
        }
    }
}
