//! Game session - the state machine orchestrating catalog, matcher and hints.
//!
//! Lifecycle:
//! 1. **NotStarted**: No target; `start` is the only meaningful call
//! 2. **InProgress**: Guesses are resolved, scored and recorded
//! 3. **Won / Lost**: Terminal; only `start` or `restart` begins a new game

mod outcome;
mod state;

pub use outcome::*;
pub use state::*;

use dex_catalog::{Catalog, EntityRecord, RandomSource, RngSource};
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info, trace};

use crate::hints::{HintChannel, HintScheduler, HintValue};
use crate::matcher;
use crate::rules::{GameRules, RulesError};

/// Errors returned by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The guess did not name a catalog entry. Nothing was changed.
    #[error("No entry named '{input}'")]
    GuessNotFound { input: String },

    #[error("Cannot {operation} while the session is {status}")]
    InvalidState {
        operation: &'static str,
        status: SessionStatus,
    },

    #[error(transparent)]
    Rules(#[from] RulesError),
}

impl SessionError {
    /// Check if the caller can simply retry with different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SessionError::GuessNotFound { .. })
    }
}

/// One player's game against a shared catalog.
///
/// Single writer: all mutation goes through [`start`](Self::start),
/// [`submit_guess`](Self::submit_guess) and [`restart`](Self::restart).
pub struct GameSession<R: RandomSource = RngSource<StdRng>> {
    catalog: Arc<Catalog>,
    rules: GameRules,
    scheduler: HintScheduler,
    rng: R,
    state: Option<SessionState>,
}

impl GameSession {
    /// Create a session with default rules and an entropy-seeded source.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_source(catalog, RngSource::from_entropy())
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session with default rules and the given random source.
    pub fn with_source(catalog: Arc<Catalog>, rng: R) -> Self {
        let rules = GameRules::default();
        Self {
            catalog,
            scheduler: HintScheduler::from_rules(&rules),
            rules,
            rng,
            state: None,
        }
    }

    /// Create a session with custom rules.
    pub fn with_rules(
        catalog: Arc<Catalog>,
        rules: GameRules,
        rng: R,
    ) -> Result<Self, SessionError> {
        rules.validate()?;
        Ok(Self {
            catalog,
            scheduler: HintScheduler::from_rules(&rules),
            rules,
            rng,
            state: None,
        })
    }

    /// Begin a game: pick a target, seed the first hint, enter `InProgress`.
    ///
    /// Allowed from `NotStarted` or a terminal status.
    pub fn start(&mut self) -> Result<SessionId, SessionError> {
        let status = self.status();
        if status == SessionStatus::InProgress {
            return Err(SessionError::InvalidState {
                operation: "start",
                status,
            });
        }

        let target = self.catalog.pick_random(&mut self.rng).clone();
        let seed = self.scheduler.seed(&mut self.rng);
        let state = SessionState::new(target, seed);
        let id = state.id;

        debug!(session = %id, seed = %seed, "Session started");
        trace!(session = %id, target = %state.target.name, "Target selected");

        self.state = Some(state);
        Ok(id)
    }

    /// Resolve, score and record a guess.
    ///
    /// Unknown names yield [`SessionError::GuessNotFound`] without touching
    /// the session. A correct guess wins immediately without consuming an
    /// attempt; a wrong one consumes an attempt, may reveal a hint, and
    /// loses the game once the attempt ceiling is reached.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, SessionError> {
        let status = self.status();
        let state = match self.state.as_mut() {
            Some(state) if status == SessionStatus::InProgress => state,
            _ => {
                return Err(SessionError::InvalidState {
                    operation: "submit a guess",
                    status,
                })
            }
        };

        let Some(guessed) = self.catalog.find_by_name(raw) else {
            debug!(session = %state.id, input = raw, "Guess did not resolve");
            return Err(SessionError::GuessNotFound {
                input: raw.trim().to_string(),
            });
        };

        let result = matcher::evaluate(guessed, &state.target);
        let record = GuessRecord {
            entity: guessed.clone(),
            result,
        };
        state.history.insert(0, record.clone());

        let mut revealed = None;
        if result.name_exact {
            state.status = SessionStatus::Won;
            info!(session = %state.id, attempts = state.attempts, "Session won");
        } else {
            state.attempts += 1;

            revealed = self.scheduler.maybe_reveal(
                state.attempts,
                &state.revealed_hints,
                &mut self.rng,
            );
            if let Some(channel) = revealed {
                state.revealed_hints.push(channel);
                debug!(
                    session = %state.id,
                    attempts = state.attempts,
                    channel = %channel,
                    "Hint revealed"
                );
            }

            if state.attempts >= self.rules.max_attempts {
                state.status = SessionStatus::Lost;
                info!(session = %state.id, attempts = state.attempts, "Session lost");
            }
        }

        Ok(GuessOutcome {
            record,
            revealed,
            status: state.status,
            attempts: state.attempts,
        })
    }

    /// Discard the current game. Returns to `NotStarted` when `to_menu`,
    /// otherwise starts a fresh game immediately.
    pub fn restart(&mut self, to_menu: bool) -> Result<Option<SessionId>, SessionError> {
        if let Some(state) = self.state.take() {
            debug!(session = %state.id, status = %state.status, to_menu, "Session discarded");
        }
        if to_menu {
            Ok(None)
        } else {
            self.start().map(Some)
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.state
            .as_ref()
            .map(|s| s.status)
            .unwrap_or(SessionStatus::NotStarted)
    }

    /// Current game, if one has been started.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    pub fn attempts(&self) -> u32 {
        self.state.as_ref().map(|s| s.attempts).unwrap_or(0)
    }

    /// Guesses left before the game is lost.
    pub fn attempts_remaining(&self) -> u32 {
        self.rules.max_attempts.saturating_sub(self.attempts())
    }

    pub fn revealed_hints(&self) -> &[HintChannel] {
        self.state
            .as_ref()
            .map(|s| s.revealed_hints.as_slice())
            .unwrap_or(&[])
    }

    /// Guesses, most recent first.
    pub fn history(&self) -> &[GuessRecord] {
        self.state
            .as_ref()
            .map(|s| s.history.as_slice())
            .unwrap_or(&[])
    }

    /// The hidden target. Not guarded; callers decide when to show it.
    pub fn target(&self) -> Option<&EntityRecord> {
        self.state.as_ref().map(|s| &s.target)
    }

    pub fn target_generation(&self) -> Option<u8> {
        self.target().map(|t| self.catalog.classify_generation(t.id))
    }

    /// Revealed hints paired with their values, in reveal order.
    pub fn visible_hints(&self) -> Vec<(HintChannel, HintValue)> {
        match &self.state {
            Some(state) => state
                .revealed_hints
                .iter()
                .map(|channel| (*channel, channel.reveal(&state.target)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Autocomplete names for a partially typed guess.
    pub fn suggestions(&self, query: &str) -> Vec<&str> {
        if query.chars().count() < self.rules.suggestion_min_chars {
            return Vec::new();
        }
        self.catalog.suggest(query, self.rules.suggestion_limit)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}
