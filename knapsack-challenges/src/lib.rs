pub mod error;
pub use error::*;
pub mod knapsack;
