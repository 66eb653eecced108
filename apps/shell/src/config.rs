//! Environment configuration for the shell.

use study_core::{MatchingMode, StudySettings};
use thiserror::Error;

pub const SEED_VAR: &str = "STUDY_SEED";
pub const MATCHING_MODE_VAR: &str = "STUDY_MATCHING_MODE";
pub const FUZZY_THRESHOLD_VAR: &str = "STUDY_FUZZY_THRESHOLD";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("STUDY_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),

    #[error("STUDY_MATCHING_MODE must be exact, case_insensitive or fuzzy, got {0:?}")]
    InvalidMatchingMode(String),

    #[error("STUDY_FUZZY_THRESHOLD must be a number between 0 and 1, got {0:?}")]
    InvalidThreshold(String),
}

/// Read settings from the process environment.
pub fn settings_from_env() -> Result<StudySettings, ConfigError> {
    settings_from(|key| std::env::var(key).ok())
}

/// Build settings from a variable lookup, starting from the defaults.
pub fn settings_from(lookup: impl Fn(&str) -> Option<String>) -> Result<StudySettings, ConfigError> {
    let mut settings = StudySettings::default();

    if let Some(raw) = lookup(SEED_VAR) {
        let seed = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
        settings.seed = Some(seed);
    }

    if let Some(raw) = lookup(MATCHING_MODE_VAR) {
        settings.matching_mode =
            MatchingMode::parse(&raw).ok_or_else(|| ConfigError::InvalidMatchingMode(raw.clone()))?;
    }

    if let Some(raw) = lookup(FUZZY_THRESHOLD_VAR) {
        let threshold = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|t| (0.0..=1.0).contains(t))
            .ok_or_else(|| ConfigError::InvalidThreshold(raw.clone()))?;
        settings.fuzzy_threshold = threshold;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(settings_from(lookup(&[])), Ok(StudySettings::default()));
    }

    #[test]
    fn overrides_are_applied() {
        let settings = settings_from(lookup(&[
            (SEED_VAR, " 42 "),
            (MATCHING_MODE_VAR, "fuzzy"),
            (FUZZY_THRESHOLD_VAR, "0.7"),
        ]))
        .unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.matching_mode, MatchingMode::Fuzzy);
        assert_eq!(settings.fuzzy_threshold, 0.7);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            settings_from(lookup(&[(SEED_VAR, "abc")])),
            Err(ConfigError::InvalidSeed("abc".to_string()))
        );
        assert_eq!(
            settings_from(lookup(&[(MATCHING_MODE_VAR, "loose")])),
            Err(ConfigError::InvalidMatchingMode("loose".to_string()))
        );
        assert_eq!(
            settings_from(lookup(&[(FUZZY_THRESHOLD_VAR, "1.5")])),
            Err(ConfigError::InvalidThreshold("1.5".to_string()))
        );
    }
}
