use thiserror::Error;

/// Reasons a problem specification can be rejected.
///
/// Validation stops at the first failure, so only one rule is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or null.
    #[error("missing required optimisation fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("objective must be a function, found {found}")]
    ObjectiveNotCallable { found: &'static str },

    #[error("bounds must be a sequence of (lower, upper) pairs, found {found}")]
    BoundsNotSequence { found: &'static str },

    #[error("bound {index} must be a (lower, upper) pair")]
    MalformedBound { index: usize },

    #[error("inequality constraint {index} is not a function")]
    InequalityNotCallable { index: usize },

    #[error("equality constraint {index} is not a function")]
    EqualityNotCallable { index: usize },
}
