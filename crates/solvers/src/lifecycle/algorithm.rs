use std::convert::Infallible;

use thiserror::Error;

use super::Context;

/// The execution step of a concrete solver.
///
/// The lifecycle validates the problem and enforces build-before-run; an
/// `Algorithm` only supplies the numerical work. Implementations read the
/// problem and hyperparameters through the [`Context`] and may use
/// [`Context::check_constraints`] to accept or reject candidates.
pub trait Algorithm {
    type Solution;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Problem fields this algorithm needs beyond `objective` and `bounds`.
    ///
    /// Builds fail with a missing-field error if any of these are absent.
    fn required_fields(&self) -> &[&'static str] {
        &[]
    }

    /// Runs the algorithm on a built problem.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the algorithm cannot produce a solution.
    fn run(&mut self, context: &Context<'_>) -> Result<Self::Solution, Self::Error>;
}

/// Placeholder algorithm for a lifecycle with no execution step.
///
/// A [`Solver<Unimplemented>`](crate::Solver) still builds and checks
/// problems, but every run fails with [`NotImplemented`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unimplemented;

/// Error returned when a lifecycle without an algorithm is asked to run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no algorithm attached; concrete solvers must supply the execution step")]
pub struct NotImplemented;

impl Algorithm for Unimplemented {
    type Solution = Infallible;
    type Error = NotImplemented;

    fn run(&mut self, _context: &Context<'_>) -> Result<Self::Solution, Self::Error> {
        Err(NotImplemented)
    }
}
