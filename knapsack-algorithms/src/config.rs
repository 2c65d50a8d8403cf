use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Enumerate every subset of the items.
    #[default]
    BruteForce,
    /// Table over capacities. Same value and weight as `BruteForce`.
    Dynamic,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Split the brute force scan across the rayon thread pool.
    pub parallel: bool,
    /// Item count above which a warning about the exponential scan is logged.
    pub warn_above_items: usize,
    /// `Dynamic` falls back to `BruteForce` when `n * (capacity + 1)` exceeds this.
    pub dp_max_cells: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::BruteForce,
            parallel: false,
            warn_above_items: 24,
            dp_max_cells: 10_000_000,
        }
    }
}

impl TryFrom<Map<String, Value>> for SolverConfig {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

impl SolverConfig {
    pub fn from_hyperparameters(
        hyperparameters: &Option<Map<String, Value>>,
    ) -> Result<Self, serde_json::Error> {
        match hyperparameters {
            Some(map) => SolverConfig::try_from(map.clone()),
            None => Ok(SolverConfig::default()),
        }
    }
}
