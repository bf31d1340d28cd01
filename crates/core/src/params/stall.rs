#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Limit on consecutive iterations without improvement.
///
/// The lifecycle only stores this value. Algorithms decide what counts as
/// improvement and when to stop.
///
/// With the `serde` feature a bounded limit is written as a plain integer
/// (`"max_stall_iter": 50`). `Unbounded` is written as `null`; in
/// [`Overrides`](super::Overrides) leaving the field out also means
/// unbounded, since that is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum StallLimit {
    /// Never stop for stalling.
    #[default]
    Unbounded,

    /// Stop after this many stalled iterations.
    Iters(usize),
}

impl StallLimit {
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns `true` once `stalled` consecutive iterations reach the limit.
    #[must_use]
    pub fn is_reached(&self, stalled: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Iters(limit) => stalled >= *limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_is_never_reached() {
        assert!(StallLimit::Unbounded.is_unbounded());
        assert!(!StallLimit::Unbounded.is_reached(usize::MAX));
    }

    #[test]
    fn bounded_is_reached_at_limit() {
        let limit = StallLimit::Iters(3);

        assert!(!limit.is_reached(2));
        assert!(limit.is_reached(3));
    }
}
