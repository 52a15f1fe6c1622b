//! Dimensional rescaling model.
//!
//! [`UnitScale`] holds the factors converting between physical units and a
//! model's internal units. Build one per run, either directly through a
//! [`UnitScaleSlot`] or as a [`twine_core::Model`] via [`UnitScaling`].
//! The computational core is in the internal `core` module.

mod core;

pub use self::core::{
    Dimension, L_RESCALE_POWER, MAX_RESCALE_POWER, RescalePower, RescalePowers, RestartRescale,
    RestartScaling, T_RESCALE_POWER, UnitScale, UnitScaleError, UnitScaleSlot, Z_RESCALE_POWER,
};

use std::convert::Infallible;

use twine_core::Model;

/// A [`Model`] mapping validated rescale exponents to a [`UnitScale`].
///
/// Exponents are validated when [`RescalePowers`] is built, so the model
/// itself cannot fail.
///
/// ```
/// use twine_core::Model;
/// use unit_scaling::models::scaling::unit_scale::{RescalePowers, UnitScaling};
///
/// let powers = RescalePowers::new(0, 10, 0).unwrap();
/// let scale = UnitScaling.call(&powers).unwrap();
///
/// assert_eq!(scale.l_to_m(), 1024.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitScaling;

impl Model for UnitScaling {
    type Input = RescalePowers;
    type Output = UnitScale;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(UnitScale::from_powers(*input))
    }
}
