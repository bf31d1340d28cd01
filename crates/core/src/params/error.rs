use thiserror::Error;

/// Errors that can occur when validating hyperparameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iter must be positive")]
    MaxIter,

    #[error("max_stall_iter must be positive or unbounded")]
    MaxStallIter,
}
