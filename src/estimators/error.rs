use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter construction or model estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("invalid learning rate {0}")]
    InvalidLearningRate(f32),
    #[error("invalid max_epochs {0}")]
    InvalidMaxEpochs(usize),
    #[error("expected {0} features, got {1}")]
    DimensionMismatch(usize, usize),
    #[error("expected {0} targets, got {1}")]
    TargetsMismatch(usize, usize),
    #[error("dataset contains no samples")]
    EmptyDataset,
    #[error("estimator has not been fitted")]
    NotFitted,
}
