//! Problem loading and validation.
//!
//! Problem data is staged in a [`ProblemInput`] and validated as a whole into
//! a [`ProblemSpec`]. Validation never produces a partially loaded problem:
//! either every check passes and a new spec is returned, or the input is
//! rejected with a [`ValidationError`].

mod bound;
mod error;
mod input;
mod spec;
mod summary;


pub use bound::Bound;
pub use error::ValidationError;
pub use input::ProblemInput;
pub use spec::ProblemSpec;
pub use summary::BuildSummary;

/// Field name of the objective function.
pub const OBJECTIVE: &str = "objective";

/// Field name of the box bounds.
pub const BOUNDS: &str = "bounds";

/// Field name of the inequality constraint list.
pub const INEQ_CONSTRAINTS: &str = "ineq_constraints";

/// Field name of the equality constraint list.
pub const EQ_CONSTRAINTS: &str = "eq_constraints";

/// Fields every problem must supply.
pub const REQUIRED_FIELDS: [&str; 2] = [OBJECTIVE, BOUNDS];

/// Returns [`REQUIRED_FIELDS`] followed by `extra`, without duplicates.
#[must_use]
pub fn required_fields<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut fields: Vec<&'a str> = REQUIRED_FIELDS.to_vec();
    for &name in extra {
        if !fields.contains(&name) {
            fields.push(name);
        }
    }
    fields
}
