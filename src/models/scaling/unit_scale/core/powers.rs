use crate::support::{
    constraint::{Bounded, Constrained},
    params::{ParamLog, ParamSource, ParamSpec},
};

use super::UnitScaleError;

/// Largest magnitude allowed for a rescale exponent.
pub const MAX_RESCALE_POWER: i32 = 300;

type RescaleRange = Bounded<{ -MAX_RESCALE_POWER }, MAX_RESCALE_POWER>;

const VALID_RANGE: Option<(i64, i64)> =
    Some((-(MAX_RESCALE_POWER as i64), MAX_RESCALE_POWER as i64));

/// Exponent applied to the internal units of depths and heights.
pub const Z_RESCALE_POWER: ParamSpec = ParamSpec {
    name: "Z_RESCALE_POWER",
    description: "An integer power of 2 that is used to rescale the model's internal units \
                  of depths and heights.",
    units: "nondim",
    default: 0,
    valid_range: VALID_RANGE,
};

/// Exponent applied to the internal units of horizontal lengths.
pub const L_RESCALE_POWER: ParamSpec = ParamSpec {
    name: "L_RESCALE_POWER",
    description: "An integer power of 2 that is used to rescale the model's internal units \
                  of lengths.",
    units: "nondim",
    default: 0,
    valid_range: VALID_RANGE,
};

/// Exponent applied to the internal units of time.
pub const T_RESCALE_POWER: ParamSpec = ParamSpec {
    name: "T_RESCALE_POWER",
    description: "An integer power of 2 that is used to rescale the model's internal units \
                  of time.",
    units: "nondim",
    default: 0,
    valid_range: VALID_RANGE,
};

/// A fundamental dimension with an independently configured rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Vertical distance (`Z`), e.g. depths and layer thicknesses.
    Vertical,

    /// Horizontal distance (`L`).
    Horizontal,

    /// Time (`T`).
    Time,
}

impl Dimension {
    /// All dimensions, in the order their parameters are read.
    pub const ALL: [Self; 3] = [Self::Vertical, Self::Horizontal, Self::Time];

    /// Returns the parameter holding this dimension's rescale exponent.
    #[must_use]
    pub fn param(self) -> &'static ParamSpec {
        match self {
            Self::Vertical => &Z_RESCALE_POWER,
            Self::Horizontal => &L_RESCALE_POWER,
            Self::Time => &T_RESCALE_POWER,
        }
    }
}

/// An integer power of two by which a dimension's internal units are rescaled.
///
/// The exponent is guaranteed to lie in `[-300, 300]`, which keeps every
/// fundamental and derived factor a normal, exactly representable `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescalePower(Constrained<i64, RescaleRange>);

impl RescalePower {
    /// Validates an exponent for the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`UnitScaleError::InvalidRescaleExponent`] naming the
    /// dimension's parameter if `|value| > 300`.
    pub fn new(dimension: Dimension, value: i64) -> Result<Self, UnitScaleError> {
        RescaleRange::new(value).map(Self).map_err(|source| {
            UnitScaleError::InvalidRescaleExponent {
                param: dimension.param().name,
                value,
                source,
            }
        })
    }

    /// Returns the exponent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn get(self) -> i32 {
        // Bounded to ±300.
        *self.0.as_ref() as i32
    }

    /// Returns the rescale factor `2^P`.
    ///
    /// A zero exponent yields exactly `1.0` without evaluating a power.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self.get() {
            0 => 1.0,
            power => 2.0_f64.powi(power),
        }
    }
}

/// The rescale exponents of all three fundamental dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescalePowers {
    pub vertical: RescalePower,
    pub horizontal: RescalePower,
    pub time: RescalePower,
}

impl RescalePowers {
    /// Validates exponents for the vertical, horizontal, and time dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`UnitScaleError::InvalidRescaleExponent`] for the first
    /// exponent outside `[-300, 300]`.
    pub fn new(vertical: i64, horizontal: i64, time: i64) -> Result<Self, UnitScaleError> {
        Ok(Self {
            vertical: RescalePower::new(Dimension::Vertical, vertical)?,
            horizontal: RescalePower::new(Dimension::Horizontal, horizontal)?,
            time: RescalePower::new(Dimension::Time, time)?,
        })
    }

    /// Reads, logs, and validates the exponents one dimension at a time.
    ///
    /// Each value is logged before it is validated, so the parameter log
    /// records an offending exponent.
    ///
    /// # Errors
    ///
    /// Returns the first parameter source failure or out-of-range exponent.
    pub fn from_params(
        params: &impl ParamSource,
        log: &mut impl ParamLog,
    ) -> Result<Self, UnitScaleError> {
        let mut read = |dimension: Dimension| -> Result<RescalePower, UnitScaleError> {
            let spec = dimension.param();
            let value = params.get_int(spec)?;
            log.log_param(spec, value);
            RescalePower::new(dimension, value)
        };

        Ok(Self {
            vertical: read(Dimension::Vertical)?,
            horizontal: read(Dimension::Horizontal)?,
            time: read(Dimension::Time)?,
        })
    }

    /// Returns the exponent for one dimension.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> RescalePower {
        match dimension {
            Dimension::Vertical => self.vertical,
            Dimension::Horizontal => self.horizontal,
            Dimension::Time => self.time,
        }
    }
}
