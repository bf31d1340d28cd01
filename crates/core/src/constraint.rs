use crate::Function;

/// Absolute tolerance for equality constraints: `|h(x)| <= EQUALITY_TOLERANCE`.
pub const EQUALITY_TOLERANCE: f64 = 1e-6;

/// Returns `true` if `x` satisfies every constraint.
///
/// Inequality constraints must satisfy `g(x) <= 0` and equality constraints
/// must satisfy `|h(x)| <= EQUALITY_TOLERANCE`. Evaluation stops at the first
/// violated constraint, inequalities first. Empty constraint sets are
/// trivially satisfied.
///
/// No check is made that `x` has the problem's dimension.
#[must_use]
pub fn check_constraints(ineq: &[Function], eq: &[Function], x: &[f64]) -> bool {
    if ineq.iter().any(|g| g.call(x) > 0.0) {
        return false;
    }
    !eq.iter().any(|h| h.call(x).abs() > EQUALITY_TOLERANCE)
}
