use kanisa_core::{Bound, Function, HyperParameters, ProblemSpec, StallLimit, Value};

/// Read-only view of a built problem and its hyperparameters.
///
/// Passed to [`Algorithm::run`](super::Algorithm::run).
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    problem: &'a ProblemSpec,
    params: &'a HyperParameters,
}

impl<'a> Context<'a> {
    pub(super) fn new(problem: &'a ProblemSpec, params: &'a HyperParameters) -> Self {
        Self { problem, params }
    }

    #[must_use]
    pub fn problem(&self) -> &'a ProblemSpec {
        self.problem
    }

    #[must_use]
    pub fn params(&self) -> &'a HyperParameters {
        self.params
    }

    #[must_use]
    pub fn objective(&self) -> &'a Function {
        self.problem.objective()
    }

    #[must_use]
    pub fn bounds(&self) -> &'a [Bound] {
        self.problem.bounds()
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.problem.dim()
    }

    #[must_use]
    pub fn ineq_constraints(&self) -> &'a [Function] {
        self.problem.ineq_constraints()
    }

    #[must_use]
    pub fn eq_constraints(&self) -> &'a [Function] {
        self.problem.eq_constraints()
    }

    /// Returns an additional problem field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.problem.field(name)
    }

    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.params.max_iter()
    }

    #[must_use]
    pub fn max_stall_iter(&self) -> StallLimit {
        self.params.max_stall_iter()
    }

    #[must_use]
    pub fn verbosity(&self) -> u32 {
        self.params.verbosity()
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.params.seed()
    }

    /// Evaluates the objective at `x`.
    #[must_use]
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        self.problem.evaluate(x)
    }

    /// Returns `true` if `x` satisfies every constraint of the problem.
    #[must_use]
    pub fn check_constraints(&self, x: &[f64]) -> bool {
        self.problem.check_constraints(x)
    }
}
