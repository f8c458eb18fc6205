//! Criterion benchmarks for the news environment

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use bandit_sim_core::{ArmRef, BanditEnvironment};
use bandit_sim_env::ContextualNewsEnv;

fn bench_sample_context(c: &mut Criterion) {
    let mut env = ContextualNewsEnv::with_seed(0);
    c.bench_function("sample_context", |b| {
        b.iter(|| black_box(env.sample_context()));
    });
}

fn bench_click_probability(c: &mut Criterion) {
    let mut env = ContextualNewsEnv::with_seed(0);
    let context = env.sample_context();
    c.bench_function("click_probability", |b| {
        b.iter(|| env.click_probability(black_box(ArmRef::Index(2)), &context));
    });
}

fn bench_draw_reward(c: &mut Criterion) {
    let mut env = ContextualNewsEnv::with_seed(0);
    let context = env.sample_context();
    c.bench_function("draw_reward", |b| {
        b.iter(|| env.draw_reward(black_box(ArmRef::Index(2)), &context));
    });
}

criterion_group!(
    benches,
    bench_sample_context,
    bench_click_probability,
    bench_draw_reward
);
criterion_main!(benches);
