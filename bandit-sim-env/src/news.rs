//! News recommendation environment with interpretable user features
//!
//! Reward ~ Bernoulli(sigmoid(theta[arm] . x)) over six human-readable
//! features, the last of which is standardized age. Users are sampled by
//! picking a coarse latent segment, adding noise, and appending age.

use ndarray::{array, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::trace;

use bandit_sim_core::{
    ArmRef, ArmSet, BanditEnvironment, Context, EnvConfig, FeatureSchema, Result, RewardOutcome,
};

/// Seed used when the configuration does not provide one
pub const DEFAULT_SEED: u64 = 0;

/// Standard deviation of the noise added to segment interest features
const SEGMENT_NOISE_STD: f64 = 0.2;

/// Age distribution: N(40, 12) clipped to [18, 80] for realism
const AGE_MEAN: f64 = 40.0;
const AGE_STD: f64 = 12.0;
const AGE_MIN: f64 = 18.0;
const AGE_MAX: f64 = 80.0;

/// Standardization scale: age_z = (age - 40) / 15 (0 ≈ 40y, +1 ≈ 55y, -1 ≈ 25y)
const AGE_SCALE: f64 = 15.0;

/// Latent user archetype, used only to cluster sampled contexts
///
/// Never exposed in the emitted [`Context`]; learners see the noised
/// feature vector, not the segment behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Politics,
    Sports,
    Tech,
    OnTheGo,
    MorningPerson,
}

impl Segment {
    const ALL: [Self; 5] = [
        Self::Politics,
        Self::Sports,
        Self::Tech,
        Self::OnTheGo,
        Self::MorningPerson,
    ];

    /// Mean of the five interest features before noise
    fn mean(self) -> [f64; 5] {
        match self {
            Self::Politics => [1.6, 0.2, 0.2, 0.3, 0.9],
            Self::Sports => [0.2, 1.8, 0.2, 1.0, 0.3],
            Self::Tech => [0.2, 0.2, 1.9, 0.3, 0.2],
            Self::OnTheGo => [0.4, 0.9, 0.5, 1.8, 0.7],
            Self::MorningPerson => [0.8, 0.3, 0.2, 0.6, 1.9],
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Politics => "politics",
            Self::Sports => "sports",
            Self::Tech => "tech",
            Self::OnTheGo => "on_the_go",
            Self::MorningPerson => "morning_person",
        }
    }
}

/// Contextual news environment
///
/// Owns a seeded random generator together with an immutable feature
/// schema, arm set, and per-arm coefficient matrix. Two instances built
/// with the same seed and driven through the same call sequence produce
/// identical outputs at every step.
pub struct ContextualNewsEnv {
    /// Seeded generator; every sampling or reward draw advances it
    rng: StdRng,
    /// Feature schema, index order significant
    schema: FeatureSchema,
    /// Arm set, index order significant
    arms: ArmSet,
    /// True arm parameters (rows = arms, cols = features)
    theta: Array2<f64>,
}

impl ContextualNewsEnv {
    /// Create a new environment from a configuration
    ///
    /// An absent seed falls back to [`DEFAULT_SEED`].
    #[must_use]
    pub fn new(config: EnvConfig) -> Self {
        Self::with_seed(config.seed.unwrap_or(DEFAULT_SEED))
    }

    /// Create a new environment with an explicit seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let schema = FeatureSchema::new([
            "likes_politics",
            "sports_fan",
            "techie",
            "mobile_user",
            "morning_reader",
            "age_z",
        ]);
        let arms = ArmSet::new(["Politics", "Sports", "Tech", "Lifestyle"]);
        // True arm parameters; age effects in the last column
        let theta = array![
            [1.6, 0.2, 0.1, 0.2, 0.7, 0.4], // Politics: older, morning readers
            [0.1, 1.8, 0.1, 0.7, 0.2, -0.1], // Sports: slightly younger, mobile
            [0.0, 0.1, 1.9, -0.1, -0.2, -0.2], // Tech: slightly younger
            [0.3, 0.2, 0.2, 1.0, 0.8, 0.0], // Lifestyle: device/time driven
        ];
        Self {
            rng: StdRng::seed_from_u64(seed),
            schema,
            arms,
            theta,
        }
    }

    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }

    /// Sample an age in years, clamp it, and standardize
    fn sample_age_z(&mut self) -> f64 {
        let noise: f64 = self.rng.sample(StandardNormal);
        let age = AGE_STD.mul_add(noise, AGE_MEAN).clamp(AGE_MIN, AGE_MAX);
        (age - AGE_MEAN) / AGE_SCALE
    }
}

impl Default for ContextualNewsEnv {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl BanditEnvironment for ContextualNewsEnv {
    fn feature_schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn arms(&self) -> &ArmSet {
        &self.arms
    }

    fn sample_context(&mut self) -> Context {
        let segment = Segment::ALL[self.rng.gen_range(0..Segment::ALL.len())];
        let mut values = Vec::with_capacity(self.schema.dim());
        for mean in segment.mean() {
            let noise: f64 = self.rng.sample(StandardNormal);
            values.push(SEGMENT_NOISE_STD.mul_add(noise, mean));
        }
        values.push(self.sample_age_z());
        trace!(segment = segment.label(), "sampled context");
        Context::from(values)
    }

    fn click_probability(&self, arm: ArmRef<'_>, context: &Context) -> Result<f64> {
        let index = self.arms.resolve(arm)?;
        self.schema.validate(context)?;
        let z = self.theta.row(index).dot(&context.data);
        Ok(Self::sigmoid(z))
    }

    fn draw_reward(&mut self, arm: ArmRef<'_>, context: &Context) -> Result<RewardOutcome> {
        let probability = self.click_probability(arm, context)?;
        let u: f64 = self.rng.gen();
        let reward = u8::from(u < probability);
        trace!(probability, reward, "drew reward");
        Ok(RewardOutcome::new(reward, probability))
    }
}
