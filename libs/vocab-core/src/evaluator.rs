//! Judging a single answer and applying its consequences.

use crate::error::{DrillError, Result};
use crate::matching::compare_answers;
use crate::scheduling::Scheduler;
use crate::session::SessionState;
use crate::store::VocabularyStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every this-many consecutive correct answers earn a bonus point.
pub const COMBO_BONUS_EVERY: u32 = 3;

/// A scheduled question whose key is missing from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyFault {
    pub key: String,
    pub index: usize,
}

impl fmt::Display for ConsistencyFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question {} references missing entry {}", self.index, self.key)
    }
}

/// Outcome of one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: bool,
    pub score_delta: u32,
    pub combo_after: u32,
    pub accuracy_pct: u32,
    /// Canonical answer, for feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<NaiveDate>,
    /// Set when the question was skipped instead of judged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<ConsistencyFault>,
}

/// Judge `response` against the session's current question.
///
/// Updates the session counters, reschedules the answered item in `store`
/// and advances the cursor. A question whose key is not in the store is
/// skipped and reported through [`Evaluation::fault`].
pub fn evaluate<S: Scheduler + ?Sized>(
    session: &mut SessionState,
    store: &mut VocabularyStore,
    scheduler: &S,
    response: &str,
    today: NaiveDate,
) -> Result<Evaluation> {
    let index = session.current_index();
    let key = session
        .current_key()
        .ok_or(DrillError::SessionFinished)?
        .to_string();

    let Some(item) = store.get(&key) else {
        let fault = ConsistencyFault { key, index };
        tracing::warn!(%fault, "skipping question");
        session.advance();
        return Ok(Evaluation {
            correct: false,
            score_delta: 0,
            combo_after: session.combo,
            accuracy_pct: session.accuracy_pct(),
            expected: None,
            next_review_date: None,
            fault: Some(fault),
        });
    };

    let expected = item.field(session.format.answer_field()).to_string();
    let correct = compare_answers(response, &expected).is_correct;

    session.words_attempted += 1;
    let mut score_delta = 0;
    if correct {
        session.correct_answers += 1;
        session.combo += 1;
        score_delta += 1;
        if session.combo % COMBO_BONUS_EVERY == 0 {
            score_delta += 1;
        }
        session.score += score_delta;
        session.wrong_set.remove(&key);
    } else {
        session.combo = 0;
        session.wrong_set.insert(key.clone());
    }

    let result = scheduler.apply_outcome(item, correct, today);
    let next_review_date = result.next_review_date;
    store.replace(result.item);
    session.advance();

    tracing::debug!(
        key = %key,
        correct,
        combo = session.combo,
        interval_days = result.interval_days,
        "answer evaluated"
    );

    Ok(Evaluation {
        correct,
        score_delta,
        combo_after: session.combo,
        accuracy_pct: session.accuracy_pct(),
        expected: Some(expected),
        next_review_date: Some(next_review_date),
        fault: None,
    })
}
