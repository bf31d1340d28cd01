use std::fmt;

/// Box bound on one decision variable.
///
/// No ordering between `lower` and `upper` is enforced. When built from
/// loosely typed problem data, a null end becomes `-inf` (lower) or `+inf`
/// (upper), and any other non-numeric end becomes NaN, which no `x` is
/// [contained](Bound::contains) by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub lower: f64,
    pub upper: f64,
}

impl Bound {
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` if `x` lies in `[lower, upper]`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl From<(f64, f64)> for Bound {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}
