//! Line-oriented terminal front end for the drill.

use std::io::{BufRead, Write};
use std::time::Instant;

use chrono::NaiveDate;
use thiserror::Error;
use vocab_core::{AudioSink, DisplayState, Drill, DrillError, Evaluation, Mode};

use crate::ticker::ElapsedTick;

const HELP: &str = "\
Type the answer and press enter.
  :new :review :challenge   start a session in that mode
  :mode <name>              same, by name
  :choices                  show multiple-choice options
  :say                      speak the current word
  :due                      words due today
  :status                   score, combo and rewards
  :quit                     leave";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error(transparent)]
    Drill(#[from] DrillError),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(Mode),
    Choices,
    Say,
    Due,
    Status,
    Help,
    Quit,
    Answer(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Ok(Self::Answer(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        match name {
            "mode" => {
                let tag = parts.next().unwrap_or_default();
                Ok(Self::Start(tag.parse()?))
            }
            "new" | "review" | "challenge" => Ok(Self::Start(name.parse()?)),
            "choices" => Ok(Self::Choices),
            "say" => Ok(Self::Say),
            "due" => Ok(Self::Due),
            "status" => Ok(Self::Status),
            "help" => Ok(Self::Help),
            "quit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(trimmed.to_string())),
        }
    }
}

/// Writes spoken words as bracketed lines.
struct TextToSpeech<'a, W: Write>(&'a mut W);

impl<W: Write> AudioSink for TextToSpeech<'_, W> {
    fn vocalize(&mut self, source_text: &str) {
        if let Err(err) = writeln!(self.0, "(audio) {}", source_text) {
            tracing::warn!("audio output failed: {}", err);
        }
    }
}

/// Drives a drill from line input until EOF or `:quit`.
pub struct Terminal<'a, W: Write> {
    drill: &'a mut Drill,
    out: &'a mut W,
    rewards: &'a mut dyn ElapsedTick,
}

impl<'a, W: Write> Terminal<'a, W> {
    pub fn new(drill: &'a mut Drill, out: &'a mut W, rewards: &'a mut dyn ElapsedTick) -> Self {
        Self { drill, out, rewards }
    }

    /// Start in `initial_mode`, then process `input` line by line.
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        initial_mode: Mode,
        today: impl Fn() -> NaiveDate,
    ) -> anyhow::Result<()> {
        writeln!(self.out, "{} words due today. Type :help for commands.", self.drill.count_due(today()))?;
        let view = self.drill.start_session(initial_mode, today());
        self.render(&view)?;

        let mut last = Instant::now();
        for line in input.lines() {
            let line = line?;
            self.rewards.tick(last.elapsed());
            last = Instant::now();

            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.out, "error: {}", err)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Start(mode) => {
                    let view = self.drill.set_mode(mode, today());
                    self.render(&view)?;
                }
                Command::Answer(response) => match self.drill.submit_answer(&response, today()) {
                    Ok((evaluation, view)) => {
                        self.feedback(&evaluation)?;
                        self.render(&view)?;
                    }
                    Err(err) => writeln!(self.out, "error: {}", err)?,
                },
                Command::Choices => match self.drill.current_options() {
                    Some(set) => {
                        for (n, option) in set.options.iter().enumerate() {
                            writeln!(self.out, "  {}) {}", n + 1, option.text)?;
                        }
                    }
                    None => writeln!(self.out, "no question to choose for")?,
                },
                Command::Say => {
                    let mut sink = TextToSpeech(&mut *self.out);
                    if !self.drill.speak_current(&mut sink) {
                        writeln!(self.out, "nothing to say")?;
                    }
                }
                Command::Due => {
                    writeln!(self.out, "{} words due today", self.drill.count_due(today()))?;
                }
                Command::Status => {
                    let view = self.drill.view();
                    writeln!(
                        self.out,
                        "score {}  combo {}  accuracy {}%  remaining {}",
                        view.score, view.combo, view.accuracy_pct, view.remaining
                    )?;
                }
                Command::Help => writeln!(self.out, "{}", HELP)?,
            }
        }

        Ok(())
    }

    fn feedback(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        if let Some(fault) = &evaluation.fault {
            writeln!(self.out, "Skipped: {}", fault)?;
        } else if evaluation.correct {
            writeln!(
                self.out,
                "Correct! +{} (combo {})",
                evaluation.score_delta, evaluation.combo_after
            )?;
        } else {
            writeln!(
                self.out,
                "Incorrect. Correct was: {}",
                evaluation.expected.as_deref().unwrap_or_default()
            )?;
        }
        Ok(())
    }

    fn render(&mut self, view: &DisplayState) -> anyhow::Result<()> {
        if view.input_enabled {
            if self.drill.settings().question_format.is_audio() {
                writeln!(self.out, "Q: (listen)")?;
                let mut sink = TextToSpeech(&mut *self.out);
                self.drill.speak_current(&mut sink);
            } else {
                writeln!(self.out, "Q: {}", view.current_prompt)?;
            }
        } else if view.empty_reason.is_some() {
            writeln!(self.out, "{}", view.current_prompt)?;
        } else if view.session_ended {
            writeln!(
                self.out,
                "{}  score: {}  accuracy: {}%",
                view.current_prompt, view.score, view.accuracy_pct
            )?;
        }
        Ok(())
    }
}
