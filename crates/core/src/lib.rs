//! Core types for Kanisa optimisation solvers.
//!
//! This crate defines the data every solver shares, independent of any
//! particular algorithm:
//!
//! - [`HyperParameters`] — validated tuning options merged from [`Overrides`]
//! - [`ProblemInput`] — unvalidated problem data staged by field name
//! - [`ProblemSpec`] — a validated problem: objective, [`Bound`]s, and
//!   inequality/equality constraints
//! - [`check_constraints`] — feasibility test for a candidate point
//!
//! Problem fields hold loosely typed [`Value`]s until validation, and
//! objectives and constraints are [`Function`]s of the decision vector.

mod constraint;
mod function;
mod params;
mod problem;
mod value;

pub use constraint::{EQUALITY_TOLERANCE, check_constraints};
pub use function::Function;
pub use params::{
    ConfigError, DEFAULT_MAX_ITER, DEFAULT_VERBOSITY, HyperParameters, Overrides, StallLimit,
};
pub use problem::{
    BOUNDS, Bound, BuildSummary, EQ_CONSTRAINTS, INEQ_CONSTRAINTS, OBJECTIVE, ProblemInput,
    ProblemSpec, REQUIRED_FIELDS, ValidationError, required_fields,
};
pub use value::Value;
