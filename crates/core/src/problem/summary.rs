use std::fmt;

use crate::HyperParameters;

use super::ProblemSpec;

/// Human-readable summary of a freshly built problem.
///
/// Rendered with [`fmt::Display`]. The text is advisory; callers should not
/// parse it.
#[derive(Debug, Clone, Copy)]
pub struct BuildSummary<'a> {
    spec: &'a ProblemSpec,
    max_iter: usize,
}

impl<'a> BuildSummary<'a> {
    pub(super) fn new(spec: &'a ProblemSpec, params: &HyperParameters) -> Self {
        Self {
            spec,
            max_iter: params.max_iter(),
        }
    }
}

impl fmt::Display for BuildSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========= Kanisa Build Summary =========")?;
        writeln!(f, "Problem Dimension:         {}", self.spec.dim())?;
        writeln!(f, "Max Iterations:            {}", self.max_iter)?;
        writeln!(
            f,
            "Inequality Constraints:    {}",
            self.spec.ineq_constraints().len()
        )?;
        writeln!(
            f,
            "Equality Constraints:      {}",
            self.spec.eq_constraints().len()
        )?;

        write!(f, "Bounds:                    [")?;
        for (i, bound) in self.spec.bounds().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{bound}")?;
        }
        writeln!(f, "]")?;

        write!(f, "========================================")
    }
}
