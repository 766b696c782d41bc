//! Session state - the single value describing one game in progress.

use dex_catalog::EntityRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hints::HintChannel;
use crate::matcher::MatchResult;

/// Unique identifier for a started game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a game. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SessionStatus {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    /// Check if the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Won | SessionStatus::Lost)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SessionStatus::NotStarted => "not started",
            SessionStatus::InProgress => "in progress",
            SessionStatus::Won => "won",
            SessionStatus::Lost => "lost",
        };
        write!(f, "{}", text)
    }
}

/// A resolved guess and how it scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub entity: EntityRecord,
    pub result: MatchResult,
}

/// Everything about one game.
///
/// Created by `GameSession::start` and mutated only by
/// `GameSession::submit_guess`. The target never changes, `attempts` and
/// `revealed_hints` only grow, and `history` is most-recent-first.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub(crate) id: SessionId,
    pub(crate) target: EntityRecord,
    pub(crate) attempts: u32,
    pub(crate) revealed_hints: Vec<HintChannel>,
    pub(crate) history: Vec<GuessRecord>,
    pub(crate) status: SessionStatus,
}

impl SessionState {
    /// Fresh in-progress state with the seed hint already revealed.
    pub(crate) fn new(target: EntityRecord, seed: HintChannel) -> Self {
        Self {
            id: SessionId::new(),
            target,
            attempts: 0,
            revealed_hints: vec![seed],
            history: Vec::new(),
            status: SessionStatus::InProgress,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The hidden entity. Secrecy is the caller's responsibility.
    pub fn target(&self) -> &EntityRecord {
        &self.target
    }

    /// Failed, resolvable guesses so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Revealed channels in reveal order; the first is the seed hint.
    pub fn revealed_hints(&self) -> &[HintChannel] {
        &self.revealed_hints
    }

    /// Check if a channel has been revealed.
    pub fn is_revealed(&self, channel: HintChannel) -> bool {
        self.revealed_hints.contains(&channel)
    }

    /// Guesses, most recent first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The most recent guess, if any.
    pub fn last_guess(&self) -> Option<&GuessRecord> {
        self.history.first()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let target = EntityRecord::new(25, "Pikachu", ["Electric"]);
        let state = SessionState::new(target, HintChannel::Types);

        assert_eq!(state.status(), SessionStatus::InProgress);
        assert_eq!(state.attempts(), 0);
        assert_eq!(state.revealed_hints(), &[HintChannel::Types]);
        assert!(state.is_revealed(HintChannel::Types));
        assert!(!state.is_revealed(HintChannel::Sprite));
        assert!(state.history().is_empty());
        assert!(state.last_guess().is_none());
        assert_eq!(state.target().name, "Pikachu");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!SessionStatus::NotStarted.is_terminal());
        assert!(!SessionStatus::InProgress.is_terminal());
        assert!(SessionStatus::Won.is_terminal());
        assert!(SessionStatus::Lost.is_terminal());
    }

    #[test]
    fn test_session_ids_differ() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
