//! Core vocabulary drill library.
//!
//! Provides:
//! - Vocabulary store with per-item learning state
//! - Mastery ladder spaced repetition scheduling
//! - Session selection for new, review and challenge modes
//! - Answer evaluation with combo scoring
//! - Multiple-choice distractor generation
//! - A command facade (`Drill`) for host display layers

pub mod distractors;
pub mod drill;
pub mod error;
pub mod evaluator;
pub mod matching;
pub mod scheduling;
pub mod selector;
pub mod session;
pub mod store;
pub mod types;

pub use distractors::{generate_options, ChoiceOption, OptionSet};
pub use drill::{AudioSink, DisplayState, Drill, GAME_OVER_PROMPT};
pub use error::{DrillError, Result};
pub use evaluator::{evaluate, ConsistencyFault, Evaluation};
pub use matching::{compare_answers, normalize_answer, MatchResult};
pub use scheduling::{MasteryLadder, Scheduler, SchedulingResult};
pub use selector::{build_session, Selection};
pub use session::SessionState;
pub use store::{CorpusEntry, VocabularyStore};
pub use types::{
    DrillSettings, EmptyReason, Field, Mode, QuestionFormat, ReviewOrder, VocabularyItem,
    MAX_MASTERY,
};
