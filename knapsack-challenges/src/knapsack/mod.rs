mod item_set;
pub use item_set::ItemSet;

use crate::{DataValidationError, ValidationResult};
use anyhow::{anyhow, Result};
use knapsack_utils::load_json;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: i64,
    pub value: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Track {
    pub n_items: usize,
    /// Capacity as a percentage of the summed item weights.
    pub budget: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub items: ItemSet,
    pub total_weight: i128,
    pub total_value: i128,
}

impl Solution {
    pub fn empty() -> Self {
        Self {
            items: ItemSet::new(),
            total_weight: 0,
            total_value: 0,
        }
    }
}

/// A validated 0/1 knapsack instance. Every constructor, deserialization
/// included, runs [`validate`] first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "ProblemData")]
pub struct Problem {
    weights: Vec<i64>,
    values: Vec<i64>,
    capacity: i64,
}

#[derive(Deserialize)]
struct ProblemData {
    weights: Vec<i64>,
    values: Vec<i64>,
    capacity: i64,
}

impl TryFrom<ProblemData> for Problem {
    type Error = DataValidationError;

    fn try_from(data: ProblemData) -> ValidationResult<Self> {
        Problem::new(data.weights, data.values, data.capacity)
    }
}

/// Checks the preconditions of a knapsack search, stopping at the first
/// violation: lengths, then weights, then values, then capacity.
pub fn validate(weights: &[i64], values: &[i64], capacity: i64) -> ValidationResult<()> {
    if weights.len() != values.len() {
        return Err(DataValidationError::LengthMismatch {
            num_weights: weights.len(),
            num_values: values.len(),
        });
    }
    if let Some(index) = weights.iter().position(|&w| w <= 0) {
        return Err(DataValidationError::InvalidWeight {
            index,
            weight: weights[index],
        });
    }
    if let Some(index) = values.iter().position(|&v| v < 0) {
        return Err(DataValidationError::InvalidValue {
            index,
            value: values[index],
        });
    }
    if capacity <= 0 {
        return Err(DataValidationError::InvalidCapacity { capacity });
    }
    Ok(())
}

impl Problem {
    pub fn new(weights: Vec<i64>, values: Vec<i64>, capacity: i64) -> ValidationResult<Self> {
        validate(&weights, &values, capacity)?;
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Loads a problem from a json string or a path to a `.json` file.
    pub fn from_json(json_or_path: &str) -> Result<Self> {
        load_json(json_or_path)
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.budget == 0 || track.budget > 100 {
            return Err(anyhow!(
                "Budget ({}) must be between 1 and 100",
                track.budget
            ));
        }
        let mut rng = SmallRng::from_seed(*seed);

        // Generate weights w_i in the range [1, 50]
        let weights: Vec<i64> = (0..track.n_items)
            .map(|_| rng.gen_range(1..=50))
            .collect();

        // Generate values v_i in the range [0, 100]
        let values: Vec<i64> = (0..track.n_items)
            .map(|_| rng.gen_range(0..=100))
            .collect();

        let total_weight: i64 = weights.iter().sum();
        let capacity = (total_weight * track.budget as i64 / 100).max(1);

        Ok(Problem::new(weights, values, capacity)?)
    }

    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn item(&self, index: usize) -> Option<Item> {
        Some(Item {
            weight: *self.weights.get(index)?,
            value: *self.values.get(index)?,
        })
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.weights
            .iter()
            .zip(&self.values)
            .map(|(&weight, &value)| Item { weight, value })
    }

    pub fn is_feasible(&self, items: &ItemSet) -> bool {
        items.total_weight(&self.weights) <= self.capacity as i128
    }

    /// Wraps an already trusted selection with its totals.
    pub fn solution_for(&self, items: ItemSet) -> Solution {
        Solution {
            total_weight: items.total_weight(&self.weights),
            total_value: items.total_value(&self.values),
            items,
        }
    }

    /// Takes raw indices rather than an [`ItemSet`] so duplicates can be reported.
    pub fn verify_solution(&self, items: &[usize]) -> Result<Solution> {
        let selected_items: HashSet<usize> = items.iter().cloned().collect();
        if selected_items.len() != items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }
        if let Some(&item) = items.iter().find(|&&item| item >= self.num_items()) {
            return Err(anyhow!("Item ({}) is out of bounds", item));
        }

        let solution = self.solution_for(ItemSet::from(items.to_vec()));
        if solution.total_weight > self.capacity as i128 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                solution.total_weight,
                self.capacity
            ));
        }
        Ok(solution)
    }

    pub fn evaluate_total_value(&self, items: &[usize]) -> Result<i128> {
        Ok(self.verify_solution(items)?.total_value)
    }
}
