/// Reasons a knapsack problem is rejected before any search starts.
///
/// Validation stops at the first violated rule, checked in the order the
/// variants are declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataValidationError {
    LengthMismatch { num_weights: usize, num_values: usize },
    InvalidWeight { index: usize, weight: i64 },
    InvalidValue { index: usize, value: i64 },
    InvalidCapacity { capacity: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LengthMismatch,
    InvalidWeight,
    InvalidValue,
    InvalidCapacity,
}

impl DataValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataValidationError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            DataValidationError::InvalidWeight { .. } => ErrorKind::InvalidWeight,
            DataValidationError::InvalidValue { .. } => ErrorKind::InvalidValue,
            DataValidationError::InvalidCapacity { .. } => ErrorKind::InvalidCapacity,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for DataValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataValidationError::LengthMismatch {
                num_weights,
                num_values,
            } => write!(
                f,
                "Data Error: There is an unequal number of weights and values. Weights: '{}', Values: '{}'",
                num_weights, num_values
            ),
            DataValidationError::InvalidWeight { index, weight } => write!(
                f,
                "Data Error: All item weights must be greater than 0. Item '{}' has weight '{}'",
                index, weight
            ),
            DataValidationError::InvalidValue { index, value } => write!(
                f,
                "Data Error: All item values must be greater than or equal to 0. Item '{}' has value '{}'",
                index, value
            ),
            DataValidationError::InvalidCapacity { capacity } => write!(
                f,
                "Data Error: The weight capacity must be greater than 0. Capacity: '{}'",
                capacity
            ),
        }
    }
}

impl std::error::Error for DataValidationError {}

pub type ValidationResult<T> = std::result::Result<T, DataValidationError>;
