use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifierError {
    /// Malformed training data (row/label count mismatch, empty dataset,
    /// empty class subset)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Query dimensionality differs from the fitted dimensionality
    #[error("dimension mismatch: model was fitted on {expected} features, query has {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Prediction requested before `fit`
    #[error("model has not been fitted")]
    NotFitted,
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
