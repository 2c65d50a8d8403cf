mod common;

use common::init_logger;
use knapsack_algorithms::*;
use knapsack_challenges::knapsack::{ItemSet, Problem, Solution};
use knapsack_challenges::ErrorKind;
use serde_json::{json, Map, Value};
use std::cell::RefCell;

fn hyperparameters(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[test]
fn test_solve() {
    init_logger();
    assert_eq!(
        solve(&[1, 2, 5], &[20, 20, 45], 7).unwrap(),
        ItemSet::from(vec![0, 2])
    );
}

#[test]
fn test_solve_without_items() {
    for capacity in [1, 10, i64::MAX] {
        assert!(solve(&[], &[], capacity).unwrap().is_empty());
    }
}

#[test]
fn test_solve_tie_in_value_and_weight() {
    let weights = [10, 20, 30];
    let values = [10, 20, 30];
    let first = solve(&weights, &values, 40).unwrap();
    assert!(first.total_weight(&weights) <= 40);
    assert_eq!(first.total_value(&values), 40);
    assert_eq!(solve(&weights, &values, 40).unwrap(), first);
}

fn all_configs() -> Vec<SolverConfig> {
    vec![
        SolverConfig::default(),
        SolverConfig {
            parallel: true,
            ..SolverConfig::default()
        },
        SolverConfig {
            strategy: Strategy::Dynamic,
            ..SolverConfig::default()
        },
        SolverConfig {
            strategy: Strategy::Dynamic,
            parallel: true,
            dp_max_cells: 0,
            ..SolverConfig::default()
        },
    ]
}

#[test]
fn test_solve_weight_sum_past_i64_max() {
    init_logger();
    let items = solve(&[i64::MAX, 1], &[1, 1], i64::MAX).unwrap();
    assert_eq!(items.indices(), &[1]);

    let problem = Problem::new(vec![i64::MAX, 1], vec![1, 1], i64::MAX).unwrap();
    for config in all_configs() {
        let solution = solve_problem(&problem, &config);
        assert!(solution.total_weight <= i64::MAX as i128);
        assert!(problem.verify_solution(solution.items.indices()).is_ok());
        assert_eq!(solution.total_value, 1);
        assert_eq!(solution.total_weight, 1);
    }
}

#[test]
fn test_solve_value_sum_past_i64_max() {
    init_logger();
    let items = solve(&[1, 1], &[i64::MAX, 1], 2).unwrap();
    assert_eq!(items.indices(), &[0, 1]);

    let problem = Problem::new(vec![1, 1], vec![i64::MAX, 1], 2).unwrap();
    for config in all_configs() {
        let solution = solve_problem(&problem, &config);
        assert_eq!(solution.items.indices(), &[0, 1]);
        assert_eq!(solution.total_value, i64::MAX as i128 + 1);
    }
}

#[test]
fn test_dynamic_gate_counts_cells() {
    init_logger();
    let problem = Problem::new(vec![3, 4, 5], vec![3, 4, 5], 9).unwrap();
    let expected = solve_problem(&problem, &SolverConfig::default());
    for dp_max_cells in [29, 30] {
        let config = SolverConfig {
            strategy: Strategy::Dynamic,
            dp_max_cells,
            ..SolverConfig::default()
        };
        assert_eq!(solve_problem(&problem, &config).total_value, expected.total_value);
    }
}

#[test]
fn test_solve_rejects_invalid_data() {
    let err = solve(&[1, 1, 1, 1], &[1, 1, 1], 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);

    let err = solve(&[-1, 1, 1], &[1, 1, 1], 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidWeight);

    let err = solve(&[1, 1, 1], &[1, -1, 1], 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    let err = solve(&[1, 1, 1], &[1, 1, 1], 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCapacity);
}

#[test]
fn test_config_defaults() {
    let config = SolverConfig::from_hyperparameters(&None).unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.strategy, Strategy::BruteForce);
    assert!(!config.parallel);

    let config = SolverConfig::from_hyperparameters(&hyperparameters(json!({
        "strategy": "dynamic",
        "dp_max_cells": 50
    })))
    .unwrap();
    assert_eq!(config.strategy, Strategy::Dynamic);
    assert_eq!(config.dp_max_cells, 50);
    assert_eq!(config.warn_above_items, SolverConfig::default().warn_above_items);
}

#[test]
fn test_config_rejects_unknown_fields() {
    assert!(SolverConfig::from_hyperparameters(&hyperparameters(json!({"prune": true}))).is_err());
    assert!(
        SolverConfig::from_hyperparameters(&hyperparameters(json!({"strategy": "greedy"})))
            .is_err()
    );
}

#[test]
fn test_solve_problem_strategies_agree() {
    init_logger();
    let problem = Problem::new(vec![4, 1, 2, 3, 7], vec![5, 2, 3, 4, 9], 9).unwrap();
    let expected = solve_problem(&problem, &SolverConfig::default());

    let configs = [
        SolverConfig {
            parallel: true,
            ..SolverConfig::default()
        },
        SolverConfig {
            strategy: Strategy::Dynamic,
            ..SolverConfig::default()
        },
        SolverConfig {
            strategy: Strategy::Dynamic,
            dp_max_cells: 1,
            ..SolverConfig::default()
        },
        SolverConfig {
            warn_above_items: 2,
            ..SolverConfig::default()
        },
    ];
    for config in configs {
        let solution = solve_problem(&problem, &config);
        assert_eq!(solution.total_value, expected.total_value);
        assert_eq!(solution.total_weight, expected.total_weight);
    }
}

#[test]
fn test_solve_challenge() {
    init_logger();
    let problem = Problem::new(vec![1, 2, 5], vec![20, 20, 45], 7).unwrap();
    let saved = RefCell::new(Solution::empty());
    let save_solution_fn = |s: &Solution| -> anyhow::Result<()> {
        *saved.borrow_mut() = s.clone();
        Ok(())
    };

    solve_challenge(
        &problem,
        &save_solution_fn,
        &hyperparameters(json!({"strategy": "dynamic", "parallel": true})),
    )
    .unwrap();
    assert_eq!(saved.borrow().items.indices(), &[0, 2]);
    assert_eq!(saved.borrow().total_value, 65);
}

#[test]
fn test_solve_challenge_bad_hyperparameters() {
    let problem = Problem::new(vec![1], vec![1], 1).unwrap();
    let save_solution_fn = |_: &Solution| -> anyhow::Result<()> { Ok(()) };
    assert!(solve_challenge(
        &problem,
        &save_solution_fn,
        &hyperparameters(json!({"parallel": "yes"}))
    )
    .is_err());
}
