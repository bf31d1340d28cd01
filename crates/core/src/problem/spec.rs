use std::collections::BTreeMap;

use crate::{Function, HyperParameters, Value, constraint};

use super::{
    BOUNDS, Bound, BuildSummary, EQ_CONSTRAINTS, INEQ_CONSTRAINTS, OBJECTIVE, ProblemInput,
    ValidationError, required_fields,
};

/// A validated optimisation problem.
///
/// A `ProblemSpec` can only be obtained from [`ProblemSpec::validate`], so
/// holding one means every structural check has passed.
#[derive(Debug, Clone)]
pub struct ProblemSpec {
    objective: Function,
    bounds: Vec<Bound>,
    ineq_constraints: Vec<Function>,
    eq_constraints: Vec<Function>,
    extra: BTreeMap<String, Value>,
}

impl ProblemSpec {
    /// Validates staged problem data.
    ///
    /// `extra_required` names fields required on top of the base set
    /// (`objective`, `bounds`). Checks run in order and stop at the first
    /// failure:
    ///
    /// 1. every required field is present and non-null
    /// 2. `objective` is a function
    /// 3. `bounds` is a sequence
    /// 4. every bound is a two-element `(lower, upper)` sequence
    /// 5. every inequality constraint is a function
    /// 6. every equality constraint is a function
    ///
    /// A null bound end is stored as an infinite limit on that side; see
    /// [`Bound`] for other non-numeric ends.
    ///
    /// Absent or null constraint fields mean no constraints, and a single
    /// value is treated as a one-element list. Any other fields are kept and
    /// available through [`ProblemSpec::field`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(input: ProblemInput, extra_required: &[&str]) -> Result<Self, ValidationError> {
        let missing = input.missing_fields(required_fields(extra_required));
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        let mut fields = input.into_fields();
        let mut take = |name: &str| fields.remove(name).unwrap_or_default();

        let objective = match take(OBJECTIVE) {
            Value::Function(f) => f,
            other => {
                return Err(ValidationError::ObjectiveNotCallable {
                    found: other.kind(),
                });
            }
        };

        let bounds = match take(BOUNDS) {
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    parse_bound(item).ok_or(ValidationError::MalformedBound { index })
                })
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(ValidationError::BoundsNotSequence {
                    found: other.kind(),
                });
            }
        };

        let ineq_constraints = parse_functions(take(INEQ_CONSTRAINTS))
            .map_err(|index| ValidationError::InequalityNotCallable { index })?;
        let eq_constraints = parse_functions(take(EQ_CONSTRAINTS))
            .map_err(|index| ValidationError::EqualityNotCallable { index })?;

        Ok(Self {
            objective,
            bounds,
            ineq_constraints,
            eq_constraints,
            extra: fields,
        })
    }

    #[must_use]
    pub fn objective(&self) -> &Function {
        &self.objective
    }

    #[must_use]
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    /// Returns the number of decision variables, one per bound.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    #[must_use]
    pub fn ineq_constraints(&self) -> &[Function] {
        &self.ineq_constraints
    }

    #[must_use]
    pub fn eq_constraints(&self) -> &[Function] {
        &self.eq_constraints
    }

    /// Returns a field beyond the standard four, such as one an algorithm
    /// declared as required.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Evaluates the objective at `x`.
    #[must_use]
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        self.objective.call(x)
    }

    /// Returns `true` if `x` satisfies every constraint.
    ///
    /// See [`check_constraints`](crate::check_constraints).
    #[must_use]
    pub fn check_constraints(&self, x: &[f64]) -> bool {
        constraint::check_constraints(&self.ineq_constraints, &self.eq_constraints, x)
    }

    /// Returns a printable summary of this problem under `params`.
    #[must_use]
    pub fn summary<'a>(&'a self, params: &HyperParameters) -> BuildSummary<'a> {
        BuildSummary::new(self, params)
    }
}

/// Reads a `(lower, upper)` pair. Only the arity is checked.
fn parse_bound(value: &Value) -> Option<Bound> {
    match value.as_sequence()? {
        [lower, upper] => Some(Bound::new(
            bound_end(lower, f64::NEG_INFINITY),
            bound_end(upper, f64::INFINITY),
        )),
        _ => None,
    }
}

/// A null end is unbounded; any other non-number end becomes NaN.
fn bound_end(value: &Value, unbounded: f64) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::Null => unbounded,
        _ => f64::NAN,
    }
}

/// Collects constraint functions, or returns the index of the first value
/// that is not a function.
fn parse_functions(value: Value) -> Result<Vec<Function>, usize> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(items) => items,
        single => vec![single],
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Function(f) => Ok(f),
            _ => Err(index),
        })
        .collect()
}
