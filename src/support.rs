//! Supporting utilities used by models.

pub mod constraint;
pub mod fatal;
pub mod params;
pub mod units;
