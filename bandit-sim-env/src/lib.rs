//! Synthetic contextual-bandit environments for bandit-sim
//!
//! This crate provides ground-truth reward-generating environments for
//! evaluating bandit algorithms, currently:
//! - News recommendation with interpretable user features
//!
//! Algorithms under test consume an environment through the
//! [`BanditEnvironment`] trait. The true click probabilities these
//! environments report exist for evaluation only and must never be fed
//! to a learner.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod news;

// Re-export environments
pub use news::ContextualNewsEnv;

// Re-export core types
pub use bandit_sim_core::{
    ArmRef, ArmSet, BanditEnvironment, BanditError, Context, EnvConfig, FeatureSchema, Result,
    RewardOutcome,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ContextualNewsEnv;
    pub use bandit_sim_core::prelude::*;
}
