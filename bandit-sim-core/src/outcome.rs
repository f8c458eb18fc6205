//! Reward outcomes returned by environment scoring calls

use serde::{Deserialize, Serialize};

/// Outcome of a single (arm, context) reward draw
///
/// `probability` is the ground-truth Bernoulli parameter behind the draw.
/// It is returned for evaluation and debugging; an algorithm under test
/// must treat it as unobservable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardOutcome {
    /// Binary reward: 1 for a click, 0 otherwise
    pub reward: u8,
    /// True click probability behind the draw
    pub probability: f64,
}

impl RewardOutcome {
    /// Create a new outcome
    #[must_use]
    pub fn new(reward: u8, probability: f64) -> Self {
        Self {
            reward,
            probability,
        }
    }

    /// Whether the draw produced a click
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.reward == 1
    }
}

impl From<RewardOutcome> for (u8, f64) {
    fn from(outcome: RewardOutcome) -> Self {
        (outcome.reward, outcome.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_flag_tracks_reward() {
        assert!(RewardOutcome::new(1, 0.7).is_click());
        assert!(!RewardOutcome::new(0, 0.7).is_click());
    }

    #[test]
    fn converts_to_pair() {
        let (reward, probability) = RewardOutcome::new(1, 0.25).into();
        assert_eq!(reward, 1);
        assert!((probability - 0.25).abs() < f64::EPSILON);
    }
}
