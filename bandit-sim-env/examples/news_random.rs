//! Example: uniform-random arm choice against the news environment
//!
//! The driver owns the action-selection loop; the environment only samples
//! users and draws rewards. The oracle tally uses the true probabilities
//! the environment exposes for evaluation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use bandit_sim_core::{ArmRef, BanditEnvironment};
use bandit_sim_env::ContextualNewsEnv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut env = ContextualNewsEnv::with_seed(7);
    // Separate generator for the policy so the environment stream stays
    // reproducible regardless of how actions are chosen.
    let mut policy_rng = StdRng::seed_from_u64(1);

    let rounds = 1_000u32;
    let mut clicks = 0u32;
    let mut expected_best = 0.0f64;

    for _ in 0..rounds {
        let context = env.sample_context();
        let arm = env.arms().sample(&mut policy_rng);
        let outcome = env.draw_reward(ArmRef::Index(arm), &context)?;
        clicks += u32::from(outcome.reward);

        // Oracle view: expected clicks of the best arm for this user.
        let mut best = 0.0f64;
        for index in 0..env.arms().len() {
            best = best.max(env.click_probability(ArmRef::Index(index), &context)?);
        }
        expected_best += best;
    }

    println!(
        "Random policy: {} clicks over {} rounds (CTR = {:.3})",
        clicks,
        rounds,
        f64::from(clicks) / f64::from(rounds)
    );
    println!("Oracle expected clicks: {expected_best:.1}");

    Ok(())
}
