use thiserror::Error;

use crate::support::{constraint::ConstraintError, params::ParamError};

use super::MAX_RESCALE_POWER;

/// Errors that can occur while building or restarting a [`UnitScale`](super::UnitScale).
///
/// Every variant is a configuration error that must stop the run; see
/// [`UnitScaleSlot::init_or_fail`](super::UnitScaleSlot::init_or_fail).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitScaleError {
    /// The slot already holds a unit scale.
    #[error("unit scale is already initialized")]
    DoubleInitialization,

    /// A rescale exponent lies outside `[-MAX_RESCALE_POWER, MAX_RESCALE_POWER]`.
    #[error(
        "{param} = {value} is outside of the valid range of -{max} to {max}",
        max = MAX_RESCALE_POWER
    )]
    InvalidRescaleExponent {
        /// Name of the offending parameter.
        param: &'static str,

        /// Configured exponent.
        value: i64,

        #[source]
        source: ConstraintError,
    },

    /// A saved restart factor is neither unset (`0.0`) nor a power of two
    /// that some valid rescale exponent could have produced.
    #[error(
        "restart factor {factor} = {value} is not 0 or a power of two within 2^-{max} to 2^{max}",
        max = MAX_RESCALE_POWER
    )]
    InvalidRestartFactor {
        /// Name of the offending factor.
        factor: &'static str,

        /// Saved value.
        value: f64,
    },

    /// The parameter source could not provide an exponent.
    #[error(transparent)]
    Param(#[from] ParamError),
}
