#![allow(dead_code)]

use knapsack_challenges::knapsack::{Problem, Track};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// (value, weight) of every feasible subset, by mask.
pub fn feasible_totals(problem: &Problem) -> Vec<(u64, i128, i128)> {
    let n = problem.num_items();
    (0..1u64 << n)
        .filter_map(|mask| {
            let (mut value, mut weight) = (0i128, 0i128);
            for i in (0..n).filter(|i| mask & (1 << i) != 0) {
                value += problem.values()[i] as i128;
                weight += problem.weights()[i] as i128;
            }
            (weight <= problem.capacity() as i128).then_some((mask, value, weight))
        })
        .collect()
}

/// Seeded instances small enough to enumerate in a test.
pub fn random_problems(count: usize) -> Vec<Problem> {
    let mut rng = StdRng::seed_from_u64(1337);
    (0..count)
        .map(|_| {
            let track = Track {
                n_items: rng.gen_range(0..=12),
                budget: rng.gen_range(5..=95),
            };
            Problem::generate_instance(&rng.gen(), &track).unwrap()
        })
        .collect()
}
