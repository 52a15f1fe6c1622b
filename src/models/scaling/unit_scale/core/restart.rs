use serde::{Deserialize, Serialize};

use super::{MAX_RESCALE_POWER, UnitScale, UnitScaleError};

/// The `physical -> internal` factors in effect when model state was saved.
///
/// A zero factor means "unset". Persist this record alongside saved state so
/// a later run can reinterpret that state with [`UnitScale::restart_rescale`],
/// even if it uses different rescale exponents.
///
/// Deserialization rejects any factor that is neither `0.0` nor a power of
/// two a valid rescale exponent could produce (see [`RestartScaling::check`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRestartScaling")]
pub struct RestartScaling {
    /// Meters to internal vertical units when the state was saved.
    pub m_to_z: f64,

    /// Meters to internal horizontal units when the state was saved.
    pub m_to_l: f64,

    /// Seconds to internal time units when the state was saved.
    pub s_to_t: f64,
}

impl RestartScaling {
    /// Checks that every factor is unset (`0.0`) or exactly `2^k` with
    /// `|k| <= MAX_RESCALE_POWER`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitScaleError::InvalidRestartFactor`] naming the first
    /// offending factor.
    #[allow(clippy::float_cmp)]
    pub fn check(&self) -> Result<(), UnitScaleError> {
        for (factor, value) in [
            ("m_to_z", self.m_to_z),
            ("m_to_l", self.m_to_l),
            ("s_to_t", self.s_to_t),
        ] {
            if value != 0.0 && power_of_two_exponent(value).is_none() {
                return Err(UnitScaleError::InvalidRestartFactor { factor, value });
            }
        }
        Ok(())
    }
}

/// Unchecked wire form of [`RestartScaling`].
#[derive(Deserialize)]
struct StoredRestartScaling {
    m_to_z: f64,
    m_to_l: f64,
    s_to_t: f64,
}

impl TryFrom<StoredRestartScaling> for RestartScaling {
    type Error = UnitScaleError;

    fn try_from(stored: StoredRestartScaling) -> Result<Self, Self::Error> {
        let scaling = Self {
            m_to_z: stored.m_to_z,
            m_to_l: stored.m_to_l,
            s_to_t: stored.s_to_t,
        };
        scaling.check()?;
        Ok(scaling)
    }
}

/// Multipliers converting saved internal values into current internal units.
///
/// Each is exactly `1.0` when the saved factor is unset or already matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestartRescale {
    pub vertical: f64,
    pub horizontal: f64,
    pub time: f64,
}

impl UnitScale {
    /// Captures the current `physical -> internal` factors as the restart snapshot.
    ///
    /// Call this before saving model state. Repeated calls are idempotent.
    pub fn fix_restart_scaling(&mut self) {
        self.restart = RestartScaling {
            m_to_z: self.m_to_z,
            m_to_l: self.m_to_l,
            s_to_t: self.s_to_t,
        };
    }

    /// Returns the restart snapshot; all zeros until [`fix_restart_scaling`] is called.
    ///
    /// [`fix_restart_scaling`]: UnitScale::fix_restart_scaling
    #[must_use]
    pub fn restart_scaling(&self) -> RestartScaling {
        self.restart
    }

    #[must_use]
    pub fn m_to_z_restart(&self) -> f64 {
        self.restart.m_to_z
    }

    #[must_use]
    pub fn m_to_l_restart(&self) -> f64 {
        self.restart.m_to_l
    }

    #[must_use]
    pub fn s_to_t_restart(&self) -> f64 {
        self.restart.s_to_t
    }

    /// Returns the multipliers that convert values saved under `saved` into
    /// this scale's internal units.
    ///
    /// Every multiplier is an exact power of two.
    ///
    /// # Errors
    ///
    /// Returns [`UnitScaleError::InvalidRestartFactor`] if `saved` fails
    /// [`RestartScaling::check`].
    pub fn restart_rescale(
        &self,
        saved: &RestartScaling,
    ) -> Result<RestartRescale, UnitScaleError> {
        saved.check()?;

        Ok(RestartRescale {
            vertical: rescale(self.m_to_z, saved.m_to_z),
            horizontal: rescale(self.m_to_l, saved.m_to_l),
            time: rescale(self.s_to_t, saved.s_to_t),
        })
    }
}

#[allow(clippy::float_cmp)]
fn rescale(live: f64, saved: f64) -> f64 {
    if saved == 0.0 || saved == live {
        1.0
    } else {
        live / saved
    }
}

/// Returns `k` if `value` is exactly `2^k` with `|k| <= MAX_RESCALE_POWER`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn power_of_two_exponent(value: f64) -> Option<i32> {
    const MANTISSA_MASK: u64 = (1 << 52) - 1;

    if !value.is_normal() || value.is_sign_negative() {
        return None;
    }

    let bits = value.to_bits();
    if bits & MANTISSA_MASK != 0 {
        return None;
    }

    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1023;
    (exponent.abs() <= MAX_RESCALE_POWER).then_some(exponent)
}
