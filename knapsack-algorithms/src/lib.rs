pub mod brute_force;
pub mod dynamic;
mod config;
pub use config::*;

use anyhow::Result;
use knapsack_challenges::knapsack::{ItemSet, Problem, Solution};
use knapsack_challenges::ValidationResult;
use log::{info, warn};
use logging_timer::time;
use serde_json::{Map, Value};

/// Validates the inputs, then returns the most valuable subset that fits in
/// `capacity`, preferring the lightest among equally valuable subsets.
pub fn solve(weights: &[i64], values: &[i64], capacity: i64) -> ValidationResult<ItemSet> {
    let problem = Problem::new(weights.to_vec(), values.to_vec(), capacity)?;
    Ok(solve_problem(&problem, &SolverConfig::default()).items)
}

#[time("info")]
pub fn solve_problem(problem: &Problem, config: &SolverConfig) -> Solution {
    if problem.num_items() > config.warn_above_items {
        warn!(
            "{} items means scanning up to 2^{} subsets",
            problem.num_items(),
            problem.num_items()
        );
    }

    match config.strategy {
        Strategy::Dynamic if dynamic::table_cells(problem) <= config.dp_max_cells as u128 => {
            dynamic::solve_problem(problem)
        }
        Strategy::Dynamic => {
            info!(
                "table of {} cells is above dp_max_cells {}; using brute force",
                dynamic::table_cells(problem),
                config.dp_max_cells
            );
            solve_brute_force(problem, config)
        }
        Strategy::BruteForce => solve_brute_force(problem, config),
    }
}

fn solve_brute_force(problem: &Problem, config: &SolverConfig) -> Solution {
    if config.parallel {
        brute_force::par_solve_problem(problem)
    } else {
        brute_force::solve_problem(problem)
    }
}

pub fn solve_challenge(
    problem: &Problem,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let config = SolverConfig::from_hyperparameters(hyperparameters)?;
    let solution = solve_problem(problem, &config);
    save_solution(&solution)
}
