use crate::support::params::ParamFile;

use super::{RescalePowers, UnitScale};

/// Parameter file setting all three rescale exponents.
pub(super) fn params(z: i64, l: i64, t: i64) -> ParamFile {
    ParamFile::new()
        .with_int("Z_RESCALE_POWER", z)
        .with_int("L_RESCALE_POWER", l)
        .with_int("T_RESCALE_POWER", t)
}

/// Unit scale built directly from exponents known to be valid.
pub(super) fn scale(z: i64, l: i64, t: i64) -> UnitScale {
    UnitScale::from_powers(RescalePowers::new(z, l, t).expect("test exponents should be valid"))
}
