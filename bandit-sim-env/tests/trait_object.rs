//! Drive the news environment through the trait seam an external
//! experiment driver would use.

use bandit_sim_core::{ArmRef, BanditEnvironment};
use bandit_sim_env::ContextualNewsEnv;

#[test]
fn runs_rounds_through_a_boxed_environment() {
    let mut env: Box<dyn BanditEnvironment> = Box::new(ContextualNewsEnv::with_seed(13));

    assert_eq!(env.arms().len(), 4);
    assert_eq!(env.feature_schema().dim(), 6);

    for round in 0..50 {
        let context = env.sample_context();
        assert_eq!(context.len(), env.feature_schema().dim());

        let arm = ArmRef::Index(round % env.arms().len());
        let outcome = env.draw_reward(arm, &context).unwrap();
        assert!(outcome.probability > 0.0 && outcome.probability < 1.0);
        assert!(outcome.reward == 0 || outcome.reward == 1);
    }
}

#[test]
fn arm_names_resolve_to_matching_indices() {
    let env = ContextualNewsEnv::with_seed(13);
    let context = bandit_sim_core::Context::from(vec![0.2, 0.1, 1.9, 0.3, 0.2, -0.5]);

    for (index, name) in env.arms().names().iter().enumerate() {
        let by_name = env
            .click_probability(ArmRef::Name(name), &context)
            .unwrap();
        let by_index = env.click_probability(ArmRef::Index(index), &context).unwrap();
        assert_eq!(by_name.to_bits(), by_index.to_bits());
    }
}
