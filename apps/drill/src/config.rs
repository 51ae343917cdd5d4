//! Runtime configuration from environment variables.

use std::path::PathBuf;
use thiserror::Error;
use vocab_core::{DrillError, DrillSettings, Mode};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error(transparent)]
    Drill(#[from] DrillError),
}

/// Host configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON corpus file; the bundled sample is used when unset.
    pub corpus_path: Option<PathBuf>,
    /// Hour of day (0-23) when a new study day begins.
    pub daily_reset_hour: u32,
    pub seed: Option<u64>,
    /// Mode started when the drill opens.
    pub initial_mode: Mode,
    pub settings: DrillSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: None,
            daily_reset_hour: 0,
            seed: None,
            initial_mode: Mode::New,
            settings: DrillSettings::default(),
        }
    }
}

impl Config {
    /// Read `DRILL_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("DRILL_CORPUS").filter(|p| !p.trim().is_empty()) {
            config.corpus_path = Some(PathBuf::from(path));
        }
        if let Some(value) = lookup("DRILL_DAILY_RESET_HOUR") {
            config.daily_reset_hour = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|hour| *hour < 24)
                .ok_or(ConfigError::Invalid {
                    name: "DRILL_DAILY_RESET_HOUR",
                    value,
                })?;
        }
        if let Some(value) = lookup("DRILL_SEED") {
            let seed = value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "DRILL_SEED",
                value: value.clone(),
            })?;
            config.seed = Some(seed);
        }
        if let Some(value) = lookup("DRILL_MODE") {
            config.initial_mode = value.parse()?;
        }
        if let Some(value) = lookup("DRILL_FORMAT") {
            config.settings.question_format = value.parse()?;
        }
        if let Some(value) = lookup("DRILL_REVIEW_ORDER") {
            config.settings.review_order = value.parse()?;
        }
        if let Some(value) = lookup("DRILL_SESSION_CAP") {
            config.settings.new_session_cap = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|cap| *cap > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DRILL_SESSION_CAP",
                    value,
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vocab_core::{QuestionFormat, ReviewOrder};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.corpus_path.is_none());
        assert_eq!(config.daily_reset_hour, 0);
        assert_eq!(config.initial_mode, Mode::New);
        assert_eq!(config.settings, DrillSettings::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("DRILL_CORPUS", "words.json"),
            ("DRILL_DAILY_RESET_HOUR", "4"),
            ("DRILL_SEED", "17"),
            ("DRILL_MODE", "review"),
            ("DRILL_FORMAT", "target_to_source"),
            ("DRILL_REVIEW_ORDER", "shuffled"),
            ("DRILL_SESSION_CAP", "5"),
        ]))
        .unwrap();
        assert_eq!(config.corpus_path, Some(PathBuf::from("words.json")));
        assert_eq!(config.daily_reset_hour, 4);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.initial_mode, Mode::Review);
        assert_eq!(config.settings.question_format, QuestionFormat::TargetToSource);
        assert_eq!(config.settings.review_order, ReviewOrder::Shuffled);
        assert_eq!(config.settings.new_session_cap, 5);
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = Config::from_lookup(lookup(&[("DRILL_MODE", "marathon")]));
        assert!(matches!(
            result,
            Err(ConfigError::Drill(DrillError::UnknownMode(_)))
        ));
    }

    #[test]
    fn rejects_out_of_range_reset_hour() {
        let result = Config::from_lookup(lookup(&[("DRILL_DAILY_RESET_HOUR", "24")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                name: "DRILL_DAILY_RESET_HOUR",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_session_cap() {
        assert!(Config::from_lookup(lookup(&[("DRILL_SESSION_CAP", "0")])).is_err());
    }
}
