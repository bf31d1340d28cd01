#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::StallLimit;

/// Caller-supplied hyperparameter overrides.
///
/// Every option is optional; unset options fall back to the defaults of
/// [`HyperParameters`](super::HyperParameters). Only tuning options live
/// here, so problem fields are rejected when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Overrides {
    pub max_iter: Option<usize>,
    pub max_stall_iter: Option<StallLimit>,
    pub verbosity: Option<u32>,
    pub seed: Option<u64>,
}
