use std::collections::BTreeMap;

use crate::{Function, Value};

use super::{BOUNDS, EQ_CONSTRAINTS, INEQ_CONSTRAINTS, OBJECTIVE};

/// Unvalidated problem data, staged by field name.
///
/// A `ProblemInput` collects whatever the caller supplies; nothing is checked
/// until it is validated into a [`ProblemSpec`]. The typed builder methods
/// cover the usual case, and [`ProblemInput::field`] stores arbitrary values
/// (including fields an algorithm declares as required).
///
/// [`ProblemSpec`]: super::ProblemSpec
#[derive(Debug, Clone, Default)]
pub struct ProblemInput {
    fields: BTreeMap<String, Value>,
}

impl ProblemInput {
    /// Creates an input with an objective and box bounds.
    pub fn new<F, B>(objective: F, bounds: B) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
        B: IntoIterator<Item = (f64, f64)>,
    {
        Self::default().objective(objective).bounds(bounds)
    }

    /// Sets the objective function.
    #[must_use]
    pub fn objective<F>(self, f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.field(OBJECTIVE, Value::function(f))
    }

    /// Sets the box bounds, one `(lower, upper)` pair per dimension.
    #[must_use]
    pub fn bounds<B>(self, bounds: B) -> Self
    where
        B: IntoIterator<Item = (f64, f64)>,
    {
        let pairs: Vec<Value> = bounds.into_iter().map(Value::from).collect();
        self.field(BOUNDS, pairs)
    }

    /// Appends an inequality constraint `g(x) <= 0`.
    #[must_use]
    pub fn inequality<F>(self, g: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.push(INEQ_CONSTRAINTS, Function::new(g).into())
    }

    /// Appends an equality constraint `h(x) = 0`.
    #[must_use]
    pub fn equality<F>(self, h: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.push(EQ_CONSTRAINTS, Function::new(h).into())
    }

    /// Sets a named field, replacing any previous value.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns `true` if a non-null objective was supplied.
    #[must_use]
    pub fn has_objective(&self) -> bool {
        self.is_present(OBJECTIVE)
    }

    /// Returns `true` if `name` is present and non-null.
    #[must_use]
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_null())
    }

    /// Returns the `required` fields that are absent or null, in order.
    #[must_use]
    pub fn missing_fields<'a>(&self, required: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        required
            .into_iter()
            .filter(|name| !self.is_present(name))
            .map(str::to_owned)
            .collect()
    }

    pub(super) fn into_fields(self) -> BTreeMap<String, Value> {
        self.fields
    }

    fn push(mut self, name: &str, value: Value) -> Self {
        let slot = self.fields.entry(name.to_owned()).or_default();
        *slot = match std::mem::take(slot) {
            Value::Null => Value::Sequence(vec![value]),
            Value::Sequence(mut items) => {
                items.push(value);
                Value::Sequence(items)
            }
            single => Value::Sequence(vec![single, value]),
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_objective_and_bounds() {
        let input = ProblemInput::new(|x| x[0], [(0.0, 1.0), (-1.0, 1.0)]);

        assert!(input.has_objective());
        let bounds = input.get(BOUNDS).and_then(Value::as_sequence).unwrap();
        assert_eq!(bounds.len(), 2);
    }

    #[test]
    fn constraints_accumulate() {
        let input = ProblemInput::default()
            .inequality(|x| x[0])
            .inequality(|x| -x[0])
            .equality(|x| x[0]);

        let ineq = input.get(INEQ_CONSTRAINTS).and_then(Value::as_sequence);
        let eq = input.get(EQ_CONSTRAINTS).and_then(Value::as_sequence);
        assert_eq!(ineq.map(<[Value]>::len), Some(2));
        assert_eq!(eq.map(<[Value]>::len), Some(1));
    }

    #[test]
    fn null_fields_count_as_missing() {
        let input = ProblemInput::default()
            .field(OBJECTIVE, Value::Null)
            .field(BOUNDS, vec![(0.0, 1.0)]);

        assert!(!input.has_objective());
        assert_eq!(
            input.missing_fields([OBJECTIVE, BOUNDS, "x0"]),
            vec!["objective".to_owned(), "x0".to_owned()]
        );
    }
}
