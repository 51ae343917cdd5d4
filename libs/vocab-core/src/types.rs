//! Core types for the vocabulary drill.

use crate::error::DrillError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest mastery level an item can reach.
pub const MAX_MASTERY: u8 = 5;

/// A learnable word pair with its learning state.
///
/// `source_text` is the identity key and must be unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub source_text: String,
    pub target_text: String,
    pub exposure_count: u32,
    pub mastery_level: u8,
    pub correct_streak: u32,
    pub next_review_date: NaiveDate,
}

impl VocabularyItem {
    /// Fresh item, due on `today`.
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
            exposure_count: 0,
            mastery_level: 0,
            correct_streak: 0,
            next_review_date: today,
        }
    }

    pub fn key(&self) -> &str {
        &self.source_text
    }

    /// Text of the given side of the pair.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Source => &self.source_text,
            Field::Target => &self.target_text,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_review_date <= today
    }
}

/// One side of a word pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Source,
    Target,
}

/// Session selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    New,
    Review,
    Challenge,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Review => "review",
            Self::Challenge => "challenge",
        }
    }
}

impl FromStr for Mode {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "review" => Ok(Self::Review),
            "challenge" => Ok(Self::Challenge),
            _ => Err(DrillError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a question is presented and which side is expected as the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFormat {
    SourceToTarget,
    TargetToSource,
    AudioToTarget,
    FillInBlankSource,
}

impl Default for QuestionFormat {
    fn default() -> Self {
        Self::SourceToTarget
    }
}

impl QuestionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceToTarget => "source_to_target",
            Self::TargetToSource => "target_to_source",
            Self::AudioToTarget => "audio_to_target",
            Self::FillInBlankSource => "fill_in_blank_source",
        }
    }

    /// Field shown to the learner.
    pub fn prompt_field(&self) -> Field {
        match self {
            Self::SourceToTarget | Self::AudioToTarget => Field::Source,
            Self::TargetToSource | Self::FillInBlankSource => Field::Target,
        }
    }

    /// Field the learner must produce; also the domain distractors are drawn from.
    pub fn answer_field(&self) -> Field {
        match self.prompt_field() {
            Field::Source => Field::Target,
            Field::Target => Field::Source,
        }
    }

    /// Whether the prompt should be vocalized rather than read.
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::AudioToTarget)
    }

    /// Prompt text for an item in this format.
    pub fn prompt_for(&self, item: &VocabularyItem) -> String {
        let text = item.field(self.prompt_field());
        match self {
            Self::FillInBlankSource => format!("{} = ____", text),
            _ => text.to_string(),
        }
    }
}

impl FromStr for QuestionFormat {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "source_to_target" => Ok(Self::SourceToTarget),
            "target_to_source" => Ok(Self::TargetToSource),
            "audio_to_target" => Ok(Self::AudioToTarget),
            "fill_in_blank_source" => Ok(Self::FillInBlankSource),
            _ => Err(DrillError::UnknownFormat(s.to_string())),
        }
    }
}

/// Presentation order for review sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOrder {
    /// Earliest-due items first.
    DueFirst,
    /// Due items in random order.
    Shuffled,
}

impl Default for ReviewOrder {
    fn default() -> Self {
        Self::DueFirst
    }
}

impl FromStr for ReviewOrder {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "due_first" => Ok(Self::DueFirst),
            "shuffled" => Ok(Self::Shuffled),
            _ => Err(DrillError::UnknownReviewOrder(s.to_string())),
        }
    }
}

/// Why a session came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    NoCorpus,
    NothingDue,
    AllMastered,
}

impl EmptyReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoCorpus => "no vocabulary loaded",
            Self::NothingDue => "nothing to review",
            Self::AllMastered => "all words mastered",
        }
    }
}

/// Tunables for session selection and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillSettings {
    /// Items seen fewer times than this are eligible for new sessions.
    pub new_exposure_below: u32,
    /// Items below this mastery level are eligible for new sessions.
    pub new_mastery_below: u8,
    pub new_session_cap: usize,
    pub review_order: ReviewOrder,
    pub question_format: QuestionFormat,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            new_exposure_below: 3,
            new_mastery_below: 2,
            new_session_cap: 15,
            review_order: ReviewOrder::default(),
            question_format: QuestionFormat::default(),
        }
    }
}
