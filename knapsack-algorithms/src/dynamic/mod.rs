use knapsack_challenges::knapsack::{ItemSet, Problem, Solution};
use log::debug;
use logging_timer::time;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cell {
    value: i128,
    weight: i64,
}

impl Cell {
    fn beats(&self, other: &Cell) -> bool {
        self.value > other.value || (self.value == other.value && self.weight < other.weight)
    }
}

/// Number of cells the keep table needs for `problem`.
pub fn table_cells(problem: &Problem) -> u128 {
    problem.num_items() as u128 * (problem.capacity() as u128 + 1)
}

/// Table over capacities `0..=capacity`. Cell `c` holds the most valuable,
/// then lightest, selection with total weight at most `c`, so the final cell
/// matches the exhaustive search in both value and weight. Only the chosen
/// subset may differ, and only among selections equal in both.
///
/// Memory is `O(n * capacity)`; callers gate on [`table_cells`].
#[time]
pub fn solve_problem(problem: &Problem) -> Solution {
    let num_items = problem.num_items();
    let capacity = problem.capacity() as usize;
    let weights = problem.weights();
    let values = problem.values();

    let mut best = vec![Cell::default(); capacity + 1];
    let mut keep = vec![vec![false; capacity + 1]; num_items];

    for item in 0..num_items {
        let weight = weights[item];
        if weight > problem.capacity() {
            continue;
        }
        let weight = weight as usize;
        for c in (weight..=capacity).rev() {
            let prev = best[c - weight];
            let candidate = Cell {
                value: prev.value + values[item] as i128,
                weight: prev.weight + weights[item],
            };
            if candidate.beats(&best[c]) {
                best[c] = candidate;
                keep[item][c] = true;
            }
        }
    }

    let mut items = Vec::new();
    let mut c = capacity;
    for item in (0..num_items).rev() {
        if keep[item][c] {
            items.push(item);
            c -= weights[item] as usize;
        }
    }
    debug!(
        "table picked {} item(s) with value {}",
        items.len(),
        best[capacity].value
    );

    problem.solution_for(ItemSet::from(items))
}
