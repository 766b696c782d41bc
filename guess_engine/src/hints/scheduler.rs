//! Hint scheduling: the seed hint and the reveal cadence.

use dex_catalog::RandomSource;

use super::HintChannel;
use crate::rules::{GameRules, HINT_INTERVAL, SEED_POOL};

/// Decides which hint to show first and when to reveal the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintScheduler {
    interval: u32,
    seed_pool: usize,
}

impl Default for HintScheduler {
    fn default() -> Self {
        Self::new(HINT_INTERVAL, SEED_POOL)
    }
}

impl HintScheduler {
    /// Create a scheduler. `interval` is raised to 1 and `seed_pool`
    /// clamped to `1..=7`.
    pub fn new(interval: u32, seed_pool: usize) -> Self {
        Self {
            interval: interval.max(1),
            seed_pool: seed_pool.clamp(1, HintChannel::ALL.len()),
        }
    }

    /// Create a scheduler from game rules.
    pub fn from_rules(rules: &GameRules) -> Self {
        Self::new(rules.hint_interval, rules.seed_pool)
    }

    /// Pick the seed hint uniformly from the seed pool.
    pub fn seed(&self, rng: &mut impl RandomSource) -> HintChannel {
        let pool = HintChannel::seed_pool(self.seed_pool);
        pool[rng.pick_index(pool.len())]
    }

    /// Whether `attempts` failed guesses earn a reveal.
    pub fn is_reveal_point(&self, attempts: u32) -> bool {
        attempts > 0 && attempts % self.interval == 0
    }

    /// Pick a not-yet-revealed channel if `attempts` is a reveal point.
    ///
    /// Returns `None` off-cadence or once every channel is revealed.
    pub fn maybe_reveal(
        &self,
        attempts: u32,
        already_revealed: &[HintChannel],
        rng: &mut impl RandomSource,
    ) -> Option<HintChannel> {
        if !self.is_reveal_point(attempts) {
            return None;
        }

        let unseen: Vec<HintChannel> = HintChannel::ALL
            .iter()
            .copied()
            .filter(|channel| !already_revealed.contains(channel))
            .collect();

        if unseen.is_empty() {
            return None;
        }
        Some(unseen[rng.pick_index(unseen.len())])
    }
}
