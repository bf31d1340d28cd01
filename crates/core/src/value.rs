use crate::Function;

/// A loosely typed problem value.
///
/// Problem data is staged as named [`Value`]s before validation turns it
/// into a [`ProblemSpec`]. This lets problems arrive from sources that do
/// not know the Rust types involved, while keeping every structural check
/// explicit.
///
/// [`ProblemSpec`]: crate::ProblemSpec
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// An explicitly absent value.
    #[default]
    Null,

    Bool(bool),

    Number(f64),

    Text(String),

    /// An ordered sequence of values.
    Sequence(Vec<Value>),

    /// A scalar function of the decision vector.
    Function(Function),
}

impl Value {
    /// Wraps a closure as a [`Value::Function`].
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self::Function(Function::new(f))
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a short name for the kind of value, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Sequence(_) => "sequence",
            Self::Function(_) => "function",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<(f64, f64)> for Value {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::Sequence(vec![Self::Number(lower), Self::Number(upper)])
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
