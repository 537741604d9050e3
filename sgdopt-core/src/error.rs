use thiserror::Error;

/// Custom error type for the sgdopt crates.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SgdError {
    #[error("Problem dimension is 0")]
    EmptyDimension,

    #[error("Problem size is 0: there are no samples to batch")]
    EmptyDataset,

    #[error("Batch size must be positive")]
    ZeroBatchSize,

    #[error("Batch size {batch_size} exceeds dataset size {dataset_size} when sampling without replacement")]
    BatchTooLarge {
        batch_size: usize,
        dataset_size: usize,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{0} used before init")]
    Uninitialized(&'static str),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Normal equations are singular")]
    SingularSystem,
}
