//! Environment trait and shared configuration

use serde::{Deserialize, Serialize};

use crate::{ArmRef, ArmSet, Context, FeatureSchema, Result, RewardOutcome};

/// Configuration for environments
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Random seed; each environment documents its default when absent
    pub seed: Option<u64>,
}

/// Core contextual-bandit environment trait
///
/// An environment owns a seeded random generator and a fixed ground-truth
/// reward model. Sampling and reward draws advance the generator
/// monotonically; replaying the same seed and call sequence reproduces
/// identical outputs. Scoring via [`Self::click_probability`] is pure.
pub trait BanditEnvironment: Send + Sync {
    /// Ordered feature schema backing every sampled context
    fn feature_schema(&self) -> &FeatureSchema;

    /// Ordered set of arms the environment scores
    fn arms(&self) -> &ArmSet;

    /// Sample a fresh user context, advancing internal random state
    fn sample_context(&mut self) -> Context;

    /// True click probability for an arm under a context
    ///
    /// # Errors
    ///
    /// Returns [`crate::BanditError::InvalidArm`] for an unknown arm and
    /// [`crate::BanditError::DimensionMismatch`] for a context whose length
    /// does not match the feature schema.
    fn click_probability(&self, arm: ArmRef<'_>, context: &Context) -> Result<f64>;

    /// Draw a Bernoulli reward for an arm under a context
    ///
    /// Returns the binary reward together with the true probability behind
    /// the draw, and advances internal random state by exactly one draw.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::click_probability`].
    fn draw_reward(&mut self, arm: ArmRef<'_>, context: &Context) -> Result<RewardOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_no_seed() {
        let config = EnvConfig::default();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EnvConfig { seed: Some(42) };
        let json = serde_json::to_string(&config).unwrap();
        let back: EnvConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(42));
    }
}
