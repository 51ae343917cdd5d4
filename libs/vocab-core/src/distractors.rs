//! Multiple-choice option generation.

use crate::matching::same_text;
use crate::store::VocabularyStore;
use crate::types::{Field, QuestionFormat, VocabularyItem};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Options shown per question, including the correct one.
pub const OPTION_COUNT: usize = 4;

/// Generic target-language answers used when the corpus is too small.
const TARGET_FILLERS: &[&str] = &[
    "apple", "water", "book", "friend", "morning", "house", "rain", "school", "cat", "river",
];

/// Generic source-language answers used when the corpus is too small.
const SOURCE_FILLERS: &[&str] = &[
    "りんご", "みず", "ほん", "ともだち", "あさ", "いえ", "あめ", "がっこう", "ねこ", "かわ",
];

/// A single selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub text: String,
    pub is_correct: bool,
}

/// A rendered multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub prompt: String,
    pub answer_field: Field,
    pub options: Vec<ChoiceOption>,
}

impl OptionSet {
    pub fn correct_option(&self) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

/// Build four distinct options for `item`, exactly one of them correct.
pub fn generate_options<R: Rng + ?Sized>(
    store: &VocabularyStore,
    item: &VocabularyItem,
    format: QuestionFormat,
    rng: &mut R,
) -> OptionSet {
    let answer_field = format.answer_field();
    let correct = item.field(answer_field);
    let wanted = OPTION_COUNT - 1;

    let mut pool: Vec<&str> = store.items().iter().map(|other| other.field(answer_field)).collect();
    pool.shuffle(rng);

    let mut distractors: Vec<String> = Vec::with_capacity(wanted);
    let accept = |candidate: &str, distractors: &mut Vec<String>| {
        if distractors.len() < wanted
            && !same_text(candidate, correct)
            && !distractors.iter().any(|taken| same_text(taken, candidate))
        {
            distractors.push(candidate.to_string());
        }
    };

    for &candidate in &pool {
        accept(candidate, &mut distractors);
    }

    if distractors.len() < wanted {
        tracing::debug!(
            found = distractors.len(),
            "corpus too small for distractors, using fillers"
        );
        let fillers = match answer_field {
            Field::Source => SOURCE_FILLERS,
            Field::Target => TARGET_FILLERS,
        };
        for &filler in fillers {
            accept(filler, &mut distractors);
        }
    }

    let mut options: Vec<ChoiceOption> = distractors
        .into_iter()
        .map(|text| ChoiceOption {
            text,
            is_correct: false,
        })
        .collect();
    options.push(ChoiceOption {
        text: correct.to_string(),
        is_correct: true,
    });
    options.shuffle(rng);

    OptionSet {
        prompt: format.prompt_for(item),
        answer_field,
        options,
    }
}
