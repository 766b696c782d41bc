//! Tunable game constants.

use serde::{Deserialize, Serialize};

use crate::hints::HintChannel;

/// Failed guesses allowed before the game is lost.
pub const MAX_ATTEMPTS: u32 = 8;

/// A new hint may be revealed every this many failed guesses.
pub const HINT_INTERVAL: u32 = 2;

/// Leading hint channels eligible for the seed hint.
pub const SEED_POOL: usize = 3;

/// Errors raised while loading or checking rules.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("Invalid rules file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid rule: {0}")]
    Invalid(String),
}

/// Game tuning. Missing keys in a rules file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub max_attempts: u32,
    pub hint_interval: u32,
    pub seed_pool: usize,

    /// Maximum number of name suggestions returned.
    pub suggestion_limit: usize,
    /// Queries shorter than this get no suggestions.
    pub suggestion_min_chars: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            hint_interval: HINT_INTERVAL,
            seed_pool: SEED_POOL,
            suggestion_limit: 5,
            suggestion_min_chars: 2,
        }
    }
}

impl GameRules {
    /// Parse and validate rules from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        let rules: GameRules = toml::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that the rules describe a playable game.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.max_attempts == 0 {
            return Err(RulesError::Invalid("max_attempts must be at least 1".into()));
        }
        if self.hint_interval == 0 {
            return Err(RulesError::Invalid("hint_interval must be at least 1".into()));
        }
        if !(1..=HintChannel::ALL.len()).contains(&self.seed_pool) {
            return Err(RulesError::Invalid(format!(
                "seed_pool must be between 1 and {}",
                HintChannel::ALL.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = GameRules::default();
        assert_eq!(rules.max_attempts, 8);
        assert_eq!(rules.hint_interval, 2);
        assert_eq!(rules.seed_pool, 3);
        assert_eq!(rules.suggestion_limit, 5);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let rules = GameRules::from_toml_str("max_attempts = 10\n").unwrap();
        assert_eq!(rules.max_attempts, 10);
        assert_eq!(rules.hint_interval, 2);
        assert_eq!(rules.seed_pool, 3);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(GameRules::from_toml_str("").unwrap(), GameRules::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            GameRules::from_toml_str("max_attempts = 0"),
            Err(RulesError::Invalid(_))
        ));
        assert!(matches!(
            GameRules::from_toml_str("hint_interval = 0"),
            Err(RulesError::Invalid(_))
        ));
        assert!(matches!(
            GameRules::from_toml_str("seed_pool = 8"),
            Err(RulesError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            GameRules::from_toml_str("max_attempts = \"many\""),
            Err(RulesError::Parse(_))
        ));
    }
}
