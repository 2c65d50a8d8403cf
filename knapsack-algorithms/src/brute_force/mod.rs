mod power_set;
mod selection;
pub use power_set::{power_set, PowerSet};
pub use selection::{feasible_subsets, lightest, most_valuable, Tally};

use knapsack_challenges::knapsack::{ItemSet, Problem, Solution};
use log::{debug, warn};
use logging_timer::time;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Largest item count the parallel scan can address with a `u64` mask range.
pub const MAX_PARALLEL_ITEMS: usize = 63;

/// Exhaustive search: every feasible subset is scored, the most valuable ones
/// are kept and the lightest of those wins. Among subsets equal in both value
/// and weight the first in bit-mask order is returned.
#[time]
pub fn solve_problem(problem: &Problem) -> Solution {
    let feasible = feasible_subsets(
        power_set(problem.num_items()),
        problem.weights(),
        problem.capacity(),
    );
    let tied = most_valuable(feasible, problem.values());
    debug!("{} subset(s) tied at the maximum value", tied.len());

    // The empty subset is always feasible, so `tied` is never empty.
    let best = lightest(tied, problem.weights()).unwrap_or_default();
    problem.solution_for(best)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    mask: u64,
    value: i128,
    weight: i128,
}

impl Candidate {
    fn key(&self) -> (Reverse<i128>, i128, u64) {
        (Reverse(self.value), self.weight, self.mask)
    }

    // Associative and commutative, so the reduction tree shape does not matter.
    fn better(self, other: Self) -> Self {
        if other.key() < self.key() {
            other
        } else {
            self
        }
    }
}

fn mask_total(mask: u64, amounts: &[i64]) -> i128 {
    let mut total = 0i128;
    let mut rest = mask;
    while rest != 0 {
        let i = rest.trailing_zeros() as usize;
        total += amounts[i] as i128;
        rest &= rest - 1;
    }
    total
}

/// Same result as [`solve_problem`], with the mask range split across the
/// rayon thread pool.
#[time]
pub fn par_solve_problem(problem: &Problem) -> Solution {
    let num_items = problem.num_items();
    if num_items > MAX_PARALLEL_ITEMS {
        warn!(
            "{} items exceed the parallel scan limit of {}; scanning serially",
            num_items, MAX_PARALLEL_ITEMS
        );
        return solve_problem(problem);
    }

    let weights = problem.weights();
    let values = problem.values();
    let capacity = problem.capacity() as i128;
    let best = (0..1u64 << num_items)
        .into_par_iter()
        .filter_map(|mask| {
            let weight = mask_total(mask, weights);
            (weight <= capacity).then(|| Candidate {
                mask,
                value: mask_total(mask, values),
                weight,
            })
        })
        .reduce_with(Candidate::better);

    match best {
        Some(candidate) => problem.solution_for(ItemSet::from_mask(candidate.mask, num_items)),
        None => Solution::empty(),
    }
}
