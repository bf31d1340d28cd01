//! Solver hyperparameters.
//!
//! [`HyperParameters`] holds the tuning options every solver shares. It is
//! assembled by merging caller [`Overrides`] onto documented defaults and is
//! immutable once built. Problem data (objective, bounds, constraints) never
//! passes through here.

mod error;
mod overrides;
mod stall;

pub use error::ConfigError;
pub use overrides::Overrides;
pub use stall::StallLimit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 200;

/// Default verbosity level; `1` prints a build summary.
pub const DEFAULT_VERBOSITY: u32 = 1;

/// Validated solver hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Overrides", into = "Overrides")
)]
pub struct HyperParameters {
    max_iter: usize,
    max_stall_iter: StallLimit,
    verbosity: u32,
    seed: Option<u64>,
}

impl Default for HyperParameters {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            max_stall_iter: StallLimit::Unbounded,
            verbosity: DEFAULT_VERBOSITY,
            seed: None,
        }
    }
}

impl HyperParameters {
    /// Creates hyperparameters from defaults and the supplied overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iter` or a bounded `max_stall_iter` is zero.
    pub fn new(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::default().merge(&overrides)
    }

    /// Returns a copy of `self` with every supplied override applied.
    ///
    /// Options left unset in `overrides` keep their current value.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged values are invalid.
    pub fn merge(&self, overrides: &Overrides) -> Result<Self, ConfigError> {
        let merged = Self {
            max_iter: overrides.max_iter.unwrap_or(self.max_iter),
            max_stall_iter: overrides.max_stall_iter.unwrap_or(self.max_stall_iter),
            verbosity: overrides.verbosity.unwrap_or(self.verbosity),
            seed: overrides.seed.or(self.seed),
        };
        merged.validate()?;
        Ok(merged)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iter == 0 {
            return Err(ConfigError::MaxIter);
        }
        if self.max_stall_iter == StallLimit::Iters(0) {
            return Err(ConfigError::MaxStallIter);
        }
        Ok(())
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Returns the stall-iteration limit.
    #[must_use]
    pub fn max_stall_iter(&self) -> StallLimit {
        self.max_stall_iter
    }

    #[must_use]
    pub fn verbosity(&self) -> u32 {
        self.verbosity
    }

    /// Returns the random seed, if one was set.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl TryFrom<Overrides> for HyperParameters {
    type Error = ConfigError;

    fn try_from(overrides: Overrides) -> Result<Self, Self::Error> {
        Self::new(overrides)
    }
}

impl From<HyperParameters> for Overrides {
    fn from(params: HyperParameters) -> Self {
        Self {
            max_iter: Some(params.max_iter),
            max_stall_iter: Some(params.max_stall_iter),
            verbosity: Some(params.verbosity),
            seed: params.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_give_defaults() {
        let params = HyperParameters::new(Overrides::default()).unwrap();

        assert_eq!(params, HyperParameters::default());
        assert_eq!(params.max_iter(), 200);
        assert_eq!(params.max_stall_iter(), StallLimit::Unbounded);
        assert_eq!(params.verbosity(), 1);
        assert_eq!(params.seed(), None);
    }

    #[test]
    fn overrides_apply_only_at_supplied_keys() {
        let params = HyperParameters::new(Overrides {
            max_iter: Some(50),
            seed: Some(7),
            ..Overrides::default()
        })
        .unwrap();

        assert_eq!(params.max_iter(), 50);
        assert_eq!(params.seed(), Some(7));
        assert_eq!(params.max_stall_iter(), StallLimit::Unbounded);
        assert_eq!(params.verbosity(), DEFAULT_VERBOSITY);
    }

    #[test]
    fn every_option_can_be_overridden() {
        let overrides = Overrides {
            max_iter: Some(10),
            max_stall_iter: Some(StallLimit::Iters(3)),
            verbosity: Some(0),
            seed: Some(42),
        };

        let params = HyperParameters::new(overrides).unwrap();

        assert_eq!(Overrides::from(params), overrides);
    }

    #[test]
    fn merge_keeps_existing_values_as_base() {
        let base = HyperParameters::new(Overrides {
            verbosity: Some(0),
            ..Overrides::default()
        })
        .unwrap();

        let merged = base
            .merge(&Overrides {
                max_iter: Some(5),
                ..Overrides::default()
            })
            .unwrap();

        assert_eq!(merged.verbosity(), 0);
        assert_eq!(merged.max_iter(), 5);
        assert_eq!(base.max_iter(), DEFAULT_MAX_ITER);
    }

    #[test]
    fn rejects_zero_max_iter() {
        let result = HyperParameters::new(Overrides {
            max_iter: Some(0),
            ..Overrides::default()
        });

        assert_eq!(result, Err(ConfigError::MaxIter));
    }

    #[test]
    fn rejects_zero_stall_limit() {
        let result = HyperParameters::new(Overrides {
            max_stall_iter: Some(StallLimit::Iters(0)),
            ..Overrides::default()
        });

        assert_eq!(result, Err(ConfigError::MaxStallIter));
    }

    #[cfg(feature = "serde")]
    mod serde_config {
        use super::*;

        #[test]
        fn deserializes_partial_config() {
            let params: HyperParameters =
                serde_json::from_str(r#"{ "max_iter": 25, "max_stall_iter": 4 }"#).unwrap();

            assert_eq!(params.max_iter(), 25);
            assert_eq!(params.max_stall_iter(), StallLimit::Iters(4));
            assert_eq!(params.verbosity(), DEFAULT_VERBOSITY);
            assert_eq!(params.seed(), None);
        }

        #[test]
        fn unbounded_stall_limit_is_null() {
            let params = HyperParameters::default();

            let json = serde_json::to_value(params).unwrap();

            assert_eq!(json["max_stall_iter"], serde_json::Value::Null);
            let back: HyperParameters = serde_json::from_value(json).unwrap();
            assert_eq!(back.max_stall_iter(), StallLimit::Unbounded);
        }

        #[test]
        fn rejects_problem_fields() {
            let result: Result<HyperParameters, _> =
                serde_json::from_str(r#"{ "max_iter": 25, "objective": "x**2" }"#);

            assert!(result.is_err());
        }

        #[test]
        fn rejects_invalid_values() {
            let result: Result<HyperParameters, _> = serde_json::from_str(r#"{ "max_iter": 0 }"#);

            assert!(result.is_err());
        }
    }
}
