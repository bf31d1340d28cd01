use std::{fmt, sync::Arc};

type ScalarFn = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// A scalar-valued function of a decision vector.
///
/// Objectives and constraints share this shape: they take `x` and return a
/// single real value. Cloning is cheap; clones share the same closure.
#[derive(Clone)]
pub struct Function(Arc<ScalarFn>);

impl Function {
    /// Wraps a closure as a [`Function`].
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn call(&self, x: &[f64]) -> f64 {
        (self.0)(x)
    }

    /// Returns `true` if both handles share the same underlying closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(<fn>)")
    }
}
