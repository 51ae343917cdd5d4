//! Command facade driven by a host display layer.
//!
//! The host calls [`Drill::start_session`], [`Drill::set_mode`] and
//! [`Drill::submit_answer`]; each returns the [`DisplayState`] to render.

use crate::distractors::{generate_options, OptionSet};
use crate::error::{DrillError, Result};
use crate::evaluator::{evaluate, Evaluation};
use crate::scheduling::{MasteryLadder, Scheduler};
use crate::selector::build_session;
use crate::session::SessionState;
use crate::store::VocabularyStore;
use crate::types::{DrillSettings, EmptyReason, Mode, VocabularyItem};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Prompt shown once every question of a session has been answered.
pub const GAME_OVER_PROMPT: &str = "ゲーム終了";

/// Something that can speak a source-language text aloud.
pub trait AudioSink {
    fn vocalize(&mut self, source_text: &str);
}

/// What the display layer should show after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub current_prompt: String,
    pub input_enabled: bool,
    pub session_ended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<EmptyReason>,
    pub score: u32,
    pub combo: u32,
    pub accuracy_pct: u32,
    pub remaining: usize,
}

impl DisplayState {
    fn idle() -> Self {
        Self {
            current_prompt: String::new(),
            input_enabled: false,
            session_ended: false,
            mode: None,
            empty_reason: None,
            score: 0,
            combo: 0,
            accuracy_pct: 0,
            remaining: 0,
        }
    }
}

/// The drill engine: vocabulary store, active session and scheduling policy.
pub struct Drill {
    store: VocabularyStore,
    settings: DrillSettings,
    scheduler: Box<dyn Scheduler>,
    rng: StdRng,
    session: Option<SessionState>,
    empty_reason: Option<EmptyReason>,
}

impl Drill {
    pub fn new(store: VocabularyStore, settings: DrillSettings) -> Self {
        Self {
            store,
            settings,
            scheduler: Box::new(MasteryLadder::default()),
            rng: StdRng::from_entropy(),
            session: None,
            empty_reason: None,
        }
    }

    /// Fix the random source, for reproducible sessions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_scheduler(mut self, scheduler: Box<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    pub fn settings(&self) -> &DrillSettings {
        &self.settings
    }

    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    /// Start a fresh session in `mode`, replacing any current one.
    pub fn start_session(&mut self, mode: Mode, today: NaiveDate) -> DisplayState {
        let selection = build_session(mode, &self.store, today, &self.settings, &mut self.rng);
        tracing::info!(
            mode = %mode,
            questions = selection.keys.len(),
            scheduler = self.scheduler.name(),
            "session started"
        );
        self.empty_reason = selection.empty_reason;
        self.session = Some(SessionState::new(
            mode,
            self.settings.question_format,
            selection.keys,
        ));
        self.view()
    }

    /// Switch modes. Progress already written to the store is kept.
    pub fn set_mode(&mut self, mode: Mode, today: NaiveDate) -> DisplayState {
        if let Some(session) = self.session.as_ref().filter(|s| !s.is_finished()) {
            tracing::info!(
                from = %session.mode,
                to = %mode,
                abandoned = session.remaining(),
                "session abandoned"
            );
        }
        self.start_session(mode, today)
    }

    /// Judge an answer to the current question.
    pub fn submit_answer(&mut self, response: &str, today: NaiveDate) -> Result<(Evaluation, DisplayState)> {
        let session = self.session.as_mut().ok_or(DrillError::NoActiveSession)?;
        let evaluation = evaluate(session, &mut self.store, self.scheduler.as_ref(), response, today)?;
        if session.is_finished() {
            tracing::info!(
                score = session.score,
                accuracy_pct = session.accuracy_pct(),
                "session finished"
            );
        }
        Ok((evaluation, self.view()))
    }

    /// Items due on `today`, regardless of any session.
    pub fn count_due(&self, today: NaiveDate) -> usize {
        self.store.count_due(today)
    }

    /// Item behind the current question, if it is still in the store.
    pub fn current_item(&self) -> Option<&VocabularyItem> {
        let key = self.session.as_ref()?.current_key()?;
        self.store.get(key)
    }

    /// Multiple-choice options for the current question.
    pub fn current_options(&mut self) -> Option<OptionSet> {
        let session = self.session.as_ref()?;
        let item = self.store.get(session.current_key()?)?;
        Some(generate_options(&self.store, item, session.format, &mut self.rng))
    }

    /// Ask `sink` to speak the current question's source text. Returns false when there is none.
    pub fn speak_current(&self, sink: &mut dyn AudioSink) -> bool {
        match self.current_item() {
            Some(item) => {
                sink.vocalize(&item.source_text);
                true
            }
            None => false,
        }
    }

    /// Current display state.
    pub fn view(&self) -> DisplayState {
        let Some(session) = self.session.as_ref() else {
            return DisplayState::idle();
        };

        let (current_prompt, input_enabled) = match session.current_key() {
            Some(key) => {
                let prompt = match self.store.get(key) {
                    Some(item) => session.format.prompt_for(item),
                    None => key.to_string(),
                };
                (prompt, true)
            }
            None => match self.empty_reason {
                Some(reason) => (reason.message().to_string(), false),
                None => (GAME_OVER_PROMPT.to_string(), false),
            },
        };

        DisplayState {
            current_prompt,
            input_enabled,
            session_ended: session.is_finished(),
            mode: Some(session.mode),
            empty_reason: self.empty_reason,
            score: session.score,
            combo: session.combo,
            accuracy_pct: session.accuracy_pct(),
            remaining: session.remaining(),
        }
    }
}
