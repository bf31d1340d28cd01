use thiserror::Error;

use kanisa_core::ValidationError;

/// Errors that can occur when running a solver.
///
/// `E` is the algorithm's own error type. For the base lifecycle this is
/// [`NotImplemented`](super::NotImplemented).
#[derive(Debug, Error)]
pub enum ComputeError<E> {
    /// No problem has been built yet.
    #[error("no optimisation problem loaded; call build() or pass a problem to compute()")]
    NotBuilt,

    /// A problem passed to `compute` failed validation.
    ///
    /// Any previously built problem is still in place.
    #[error("build failed: invalid problem specification")]
    Build(#[source] ValidationError),

    /// The algorithm failed.
    #[error("algorithm failed")]
    Algorithm(#[source] E),
}
