//! Dimensional scaling models.
//!
//! This module contains models that configure how physical quantities are
//! represented inside a simulation.

pub mod unit_scale;
