//! # Unit Scaling
//!
//! Power-of-two rescaling of a simulation model's internal units, for
//! exposing dimensional-consistency bugs in model numerics.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`UnitScale`](models::scaling::unit_scale::UnitScale) model
//!   and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models (parameters, fatal
//!   error reporting, numeric constraints, unit extensions).
//!
//! ## Example
//!
//! ```
//! use unit_scaling::{
//!     models::scaling::unit_scale::UnitScaleSlot,
//!     support::{fatal::PanicOnFatal, params::{ParamFile, TracingLog}},
//! };
//!
//! let params = ParamFile::from_toml_str(
//!     "Z_RESCALE_POWER = 2\nL_RESCALE_POWER = 0\nT_RESCALE_POWER = -1\n",
//! )
//! .unwrap();
//!
//! let mut slot = UnitScaleSlot::new();
//! let us = slot.init_or_fail(&params, &mut TracingLog, &PanicOnFatal);
//!
//! assert_eq!(us.m_to_z(), 0.25);
//! assert_eq!(us.l_t_to_m_s(), 2.0);
//!
//! slot.release();
//! ```
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
