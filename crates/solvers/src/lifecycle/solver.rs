use log::{debug, error, info};

use kanisa_core::{
    Bound, Function, HyperParameters, ProblemInput, ProblemSpec, StallLimit, ValidationError,
    check_constraints, required_fields,
};

use super::{Algorithm, ComputeError, Context, Unimplemented};

/// An optimisation solver: hyperparameters, a problem, and an algorithm.
///
/// The solver is either unbuilt (no problem loaded) or built. [`build`]
/// loads a problem, [`compute`] optionally rebuilds and then hands the built
/// problem to the algorithm.
///
/// [`build`]: Solver::build
/// [`compute`]: Solver::compute
#[derive(Debug, Clone)]
pub struct Solver<A = Unimplemented> {
    params: HyperParameters,
    algorithm: A,
    problem: Option<ProblemSpec>,
}

impl Solver<Unimplemented> {
    /// Creates a solver with no algorithm.
    ///
    /// Problems can be built and checked, but [`Solver::compute`] always
    /// fails with [`NotImplemented`](super::NotImplemented).
    #[must_use]
    pub fn base(params: HyperParameters) -> Self {
        Self::new(params, Unimplemented)
    }
}

impl<A: Algorithm> Solver<A> {
    #[must_use]
    pub fn new(params: HyperParameters, algorithm: A) -> Self {
        Self {
            params,
            algorithm,
            problem: None,
        }
    }

    #[must_use]
    pub fn params(&self) -> &HyperParameters {
        &self.params
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

    #[must_use]
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub fn algorithm_mut(&mut self) -> &mut A {
        &mut self.algorithm
    }

    /// Returns the built problem, or `None` before the first successful build.
    #[must_use]
    pub fn problem(&self) -> Option<&ProblemSpec> {
        self.problem.as_ref()
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.problem.is_some()
    }

    #[must_use]
    pub fn objective(&self) -> Option<&Function> {
        self.problem.as_ref().map(ProblemSpec::objective)
    }

    /// Returns the bounds of the built problem, empty before a build.
    #[must_use]
    pub fn bounds(&self) -> &[Bound] {
        self.problem
            .as_ref()
            .map(ProblemSpec::bounds)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn dim(&self) -> Option<usize> {
        self.problem.as_ref().map(ProblemSpec::dim)
    }

    #[must_use]
    pub fn ineq_constraints(&self) -> &[Function] {
        self.problem
            .as_ref()
            .map(ProblemSpec::ineq_constraints)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn eq_constraints(&self) -> &[Function] {
        self.problem
            .as_ref()
            .map(ProblemSpec::eq_constraints)
            .unwrap_or_default()
    }

    /// Returns every field a problem must supply for this solver.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&'static str> {
        required_fields(self.algorithm.required_fields())
    }

    /// Loads and validates a problem.
    ///
    /// On success the new problem replaces any previous one and, when
    /// verbosity is at least 1, a build summary is logged.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the input is incomplete or malformed.
    /// The previously built problem, if any, is left untouched.
    pub fn build(&mut self, input: ProblemInput) -> Result<&ProblemSpec, ValidationError> {
        let spec = match ProblemSpec::validate(input, self.algorithm.required_fields()) {
            Ok(spec) => spec,
            Err(e) => {
                error!("{e}");
                return Err(e);
            }
        };

        if self.summary_enabled() {
            info!("\n{}", spec.summary(&self.params));
        }

        Ok(&*self.problem.insert(spec))
    }

    /// Returns `true` if a successful build logs its summary.
    pub(super) fn summary_enabled(&self) -> bool {
        self.params.verbosity() >= 1
    }

    /// Returns `true` if `x` satisfies every constraint of the built problem.
    ///
    /// Before a build there are no constraints, so every `x` is accepted.
    #[must_use]
    pub fn check_constraints(&self, x: &[f64]) -> bool {
        check_constraints(self.ineq_constraints(), self.eq_constraints(), x)
    }

    /// Runs the algorithm, rebuilding first if `input` has an objective.
    ///
    /// An input without an objective is ignored and the previously built
    /// problem is used.
    ///
    /// # Errors
    ///
    /// - [`ComputeError::Build`] if the supplied problem fails validation
    /// - [`ComputeError::NotBuilt`] if no problem has been built
    /// - [`ComputeError::Algorithm`] if the algorithm fails
    pub fn compute(
        &mut self,
        input: ProblemInput,
    ) -> Result<A::Solution, ComputeError<A::Error>> {
        if input.has_objective() {
            debug!("rebuilding from the problem passed to compute");
            self.build(input).map_err(ComputeError::Build)?;
        }

        let Some(problem) = self.problem.as_ref() else {
            return Err(ComputeError::NotBuilt);
        };

        debug!("running algorithm on a {}-dimensional problem", problem.dim());
        let context = Context::new(problem, &self.params);
        self.algorithm.run(&context).map_err(ComputeError::Algorithm)
    }

    /// Runs the algorithm on the previously built problem.
    ///
    /// # Errors
    ///
    /// See [`Solver::compute`].
    pub fn run(&mut self) -> Result<A::Solution, ComputeError<A::Error>> {
        self.compute(ProblemInput::default())
    }
}
