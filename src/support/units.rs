//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical quantities handed to or returned from
//! models. This module provides quantities that are useful for modeling but
//! aren't included in [`uom`].
//!
//! ```
//! use uom::si::{area::square_meter, f64::{Area, Time}, time::second};
//! use unit_scaling::support::units::Diffusivity;
//!
//! let kappa: Diffusivity = Area::new::<square_meter>(1e-4) / Time::new::<second>(1.0);
//! assert_eq!(kappa.value, 1e-4);
//! ```

mod quantities;

pub use quantities::Diffusivity;
