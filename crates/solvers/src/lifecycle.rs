//! The build-validate-execute lifecycle shared by all solvers.
//!
//! # Lifecycle
//!
//! A [`Solver`] starts unbuilt. [`Solver::build`] validates a
//! [`ProblemInput`] and stores the resulting [`ProblemSpec`]; a failed build
//! leaves any earlier problem in place. [`Solver::compute`] rebuilds when
//! given a new objective, refuses to run while unbuilt, and otherwise hands
//! a [`Context`] to the solver's [`Algorithm`].
//!
//! # Failures
//!
//! [`ComputeError`] keeps the three ways `compute` can fail apart:
//!
//! - [`ComputeError::NotBuilt`] — nothing was ever built
//! - [`ComputeError::Build`] — the problem passed to `compute` was invalid
//! - [`ComputeError::Algorithm`] — the algorithm failed, including
//!   [`NotImplemented`] for a solver created with [`Solver::base`]
//!
//! Infeasible points are not errors: [`Solver::check_constraints`] and
//! [`Context::check_constraints`] return `false` and algorithms decide what
//! to do with them.
//!
//! [`ProblemInput`]: kanisa_core::ProblemInput
//! [`ProblemSpec`]: kanisa_core::ProblemSpec

mod algorithm;
mod context;
mod error;
mod solver;


pub use algorithm::{Algorithm, NotImplemented, Unimplemented};
pub use context::Context;
pub use error::ComputeError;
pub use solver::Solver;
