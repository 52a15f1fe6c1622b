//! Power-of-two rescaling of a model's internal units.
//!
//! The fundamental dimensions (vertical distance, horizontal distance, and
//! time) are each rescaled by `2^P` for a configured integer `P`. Powers of
//! two keep every conversion exact, so a model that is dimensionally
//! consistent produces bitwise-identical answers under any rescaling, and
//! one that is not shows the bug immediately.

mod error;
mod powers;
mod quantity;
mod restart;
mod scale;
mod slot;

#[cfg(test)]
mod test_support;

pub use error::UnitScaleError;
pub use powers::{
    Dimension, L_RESCALE_POWER, MAX_RESCALE_POWER, RescalePower, RescalePowers, T_RESCALE_POWER,
    Z_RESCALE_POWER,
};
pub use restart::{RestartRescale, RestartScaling};
pub use scale::UnitScale;
pub use slot::UnitScaleSlot;
