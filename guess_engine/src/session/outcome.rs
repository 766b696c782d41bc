//! Outcome of a resolved guess.

use serde::{Deserialize, Serialize};

use super::{GuessRecord, SessionStatus};
use crate::hints::HintChannel;

/// What a single accepted guess did to the session.
///
/// Callers drive presentation (win animation, hint fade-in, game-over
/// dialog) off this value; the state transition itself is already final.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub record: GuessRecord,
    /// Channel revealed by this guess, if it hit a reveal point.
    pub revealed: Option<HintChannel>,
    /// Status after the guess.
    pub status: SessionStatus,
    /// Attempt count after the guess.
    pub attempts: u32,
}

impl GuessOutcome {
    pub fn is_win(&self) -> bool {
        self.status == SessionStatus::Won
    }

    pub fn is_loss(&self) -> bool {
        self.status == SessionStatus::Lost
    }

    /// Check if this guess ended the game.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}
