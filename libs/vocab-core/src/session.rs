//! Per-session drill state.

use crate::types::{Mode, QuestionFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// State of one drill session.
///
/// The question set is fixed at creation; only the cursor moves. Dropping a
/// session never touches the vocabulary store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub mode: Mode,
    pub format: QuestionFormat,
    question_set: Vec<String>,
    current_index: usize,
    pub score: u32,
    pub combo: u32,
    pub words_attempted: u32,
    pub correct_answers: u32,
    /// Keys answered wrong in this session and not since corrected.
    pub wrong_set: BTreeSet<String>,
}

impl SessionState {
    pub fn new(mode: Mode, format: QuestionFormat, question_set: Vec<String>) -> Self {
        Self {
            mode,
            format,
            question_set,
            current_index: 0,
            score: 0,
            combo: 0,
            words_attempted: 0,
            correct_answers: 0,
            wrong_set: BTreeSet::new(),
        }
    }

    pub fn question_set(&self) -> &[String] {
        &self.question_set
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Key of the question awaiting an answer.
    pub fn current_key(&self) -> Option<&str> {
        self.question_set.get(self.current_index).map(String::as_str)
    }

    pub fn remaining(&self) -> usize {
        self.question_set.len() - self.current_index
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.question_set.len()
    }

    /// Rounded percentage of correct answers, 0 before the first attempt.
    pub fn accuracy_pct(&self) -> u32 {
        if self.words_attempted == 0 {
            return 0;
        }
        (f64::from(self.correct_answers) / f64::from(self.words_attempted) * 100.0).round() as u32
    }

    pub(crate) fn advance(&mut self) {
        if self.current_index < self.question_set.len() {
            self.current_index += 1;
        }
    }
}
