use tracing::debug;

use crate::support::params::{ParamLog, ParamSource};

use super::{RescalePowers, RestartScaling, UnitScaleError};

/// Module name recorded in the parameter log.
const MODULE: &str = "unit_scale";

/// Description recorded with the module version.
const MODULE_DESCRIPTION: &str = "Parameters for doing unit scaling of variables.";

/// Conversion factors between physical (MKS) units and a model's internal units.
///
/// Three fundamental dimensions are rescaled independently by powers of two:
/// vertical distance (`Z`), horizontal distance (`L`), and time (`T`).
/// Factors for compound quantities are derived from these and are never
/// configured on their own.
///
/// Factor names read as "from `_to_` into": `m_to_z` converts meters into
/// internal vertical units, while `z_to_m` converts back.
/// Every reciprocal pair multiplies to exactly `1.0`.
///
/// A unit scale is immutable once built, apart from the restart snapshot
/// (see [`UnitScale::fix_restart_scaling`]).
///
/// # Example
///
/// ```
/// use unit_scaling::models::scaling::unit_scale::{RescalePowers, UnitScale};
///
/// let scale = UnitScale::from_powers(RescalePowers::new(2, 0, -1).unwrap());
///
/// assert_eq!(scale.z_to_m(), 4.0);
/// assert_eq!(scale.s_to_t(), 2.0);
/// assert_eq!(scale.z2_t_to_m2_s(), 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pub(super) m_to_z: f64,
    pub(super) z_to_m: f64,
    pub(super) m_to_l: f64,
    pub(super) l_to_m: f64,
    pub(super) s_to_t: f64,
    pub(super) t_to_s: f64,

    pub(super) z_to_l: f64,
    pub(super) l_to_z: f64,
    pub(super) l_t_to_m_s: f64,
    pub(super) m_s_to_l_t: f64,
    pub(super) l_t2_to_m_s2: f64,
    pub(super) z2_t_to_m2_s: f64,
    pub(super) m2_s_to_z2_t: f64,

    pub(super) restart: RestartScaling,
}

impl UnitScale {
    /// Builds a unit scale from validated exponents.
    #[must_use]
    pub fn from_powers(powers: RescalePowers) -> Self {
        Self::from_factors(
            powers.vertical.factor(),
            powers.horizontal.factor(),
            powers.time.factor(),
        )
    }

    /// Builds a unit scale in which internal units are MKS units.
    #[must_use]
    pub fn no_scaling() -> Self {
        Self::from_factors(1.0, 1.0, 1.0)
    }

    /// Reads the rescale exponents from `params` and builds a unit scale.
    ///
    /// The module version and every exponent are recorded in `log`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitScaleError::InvalidRescaleExponent`] if any exponent's
    /// magnitude exceeds [`MAX_RESCALE_POWER`](super::MAX_RESCALE_POWER),
    /// or [`UnitScaleError::Param`] if `params` fails.
    pub fn from_params(
        params: &impl ParamSource,
        log: &mut impl ParamLog,
    ) -> Result<Self, UnitScaleError> {
        log.log_version(MODULE, env!("CARGO_PKG_VERSION"), MODULE_DESCRIPTION);

        let powers = RescalePowers::from_params(params, log)?;
        let scale = Self::from_powers(powers);

        debug!(
            z_power = powers.vertical.get(),
            l_power = powers.horizontal.get(),
            t_power = powers.time.get(),
            z_to_l = scale.z_to_l,
            l_t_to_m_s = scale.l_t_to_m_s,
            z2_t_to_m2_s = scale.z2_t_to_m2_s,
            "unit scale resolved"
        );

        Ok(scale)
    }

    /// Builds the fundamental pairs from their `native -> physical` factors,
    /// then derives the compound factors from the finished pairs.
    fn from_factors(z_factor: f64, l_factor: f64, t_factor: f64) -> Self {
        let (z_to_m, m_to_z) = (z_factor, 1.0 / z_factor);
        let (l_to_m, m_to_l) = (l_factor, 1.0 / l_factor);
        let (t_to_s, s_to_t) = (t_factor, 1.0 / t_factor);

        Self {
            m_to_z,
            z_to_m,
            m_to_l,
            l_to_m,
            s_to_t,
            t_to_s,
            z_to_l: z_to_m * m_to_l,
            l_to_z: l_to_m * m_to_z,
            l_t_to_m_s: l_to_m * s_to_t,
            m_s_to_l_t: m_to_l * t_to_s,
            l_t2_to_m_s2: l_to_m * s_to_t.powi(2),
            z2_t_to_m2_s: z_to_m.powi(2) * s_to_t,
            m2_s_to_z2_t: m_to_z.powi(2) * t_to_s,
            restart: RestartScaling::default(),
        }
    }

    /// Meters to internal vertical units, `[Z m-1]`.
    #[must_use]
    pub fn m_to_z(&self) -> f64 {
        self.m_to_z
    }

    /// Internal vertical units to meters, `[m Z-1]`.
    #[must_use]
    pub fn z_to_m(&self) -> f64 {
        self.z_to_m
    }

    /// Meters to internal horizontal units, `[L m-1]`.
    #[must_use]
    pub fn m_to_l(&self) -> f64 {
        self.m_to_l
    }

    /// Internal horizontal units to meters, `[m L-1]`.
    #[must_use]
    pub fn l_to_m(&self) -> f64 {
        self.l_to_m
    }

    /// Seconds to internal time units, `[T s-1]`.
    #[must_use]
    pub fn s_to_t(&self) -> f64 {
        self.s_to_t
    }

    /// Internal time units to seconds, `[s T-1]`.
    #[must_use]
    pub fn t_to_s(&self) -> f64 {
        self.t_to_s
    }

    /// Vertical to horizontal length units, `[L Z-1]`.
    #[must_use]
    pub fn z_to_l(&self) -> f64 {
        self.z_to_l
    }

    /// Horizontal to vertical length units, `[Z L-1]`.
    #[must_use]
    pub fn l_to_z(&self) -> f64 {
        self.l_to_z
    }

    /// Internal velocity units to meters per second, `[m T s-1 L-1]`.
    #[must_use]
    pub fn l_t_to_m_s(&self) -> f64 {
        self.l_t_to_m_s
    }

    /// Meters per second to internal velocity units, `[L s T-1 m-1]`.
    #[must_use]
    pub fn m_s_to_l_t(&self) -> f64 {
        self.m_s_to_l_t
    }

    /// Internal acceleration units to meters per second squared, `[m T2 s-2 L-1]`.
    ///
    /// There is no inverse factor.
    #[must_use]
    pub fn l_t2_to_m_s2(&self) -> f64 {
        self.l_t2_to_m_s2
    }

    /// Internal diffusivity units to square meters per second, `[m2 T s-1 Z-2]`.
    #[must_use]
    pub fn z2_t_to_m2_s(&self) -> f64 {
        self.z2_t_to_m2_s
    }

    /// Square meters per second to internal diffusivity units, `[Z2 s T-1 m-2]`.
    #[must_use]
    pub fn m2_s_to_z2_t(&self) -> f64 {
        self.m2_s_to_z2_t
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::no_scaling()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use crate::models::scaling::unit_scale::core::test_support::{params, scale};
    use crate::support::params::{DocLog, ParamError, ParamFile};

    /// Asserts the exact identities that must hold for any valid exponents.
    fn assert_consistent(us: &UnitScale) {
        assert_eq!(us.m_to_z * us.z_to_m, 1.0);
        assert_eq!(us.m_to_l * us.l_to_m, 1.0);
        assert_eq!(us.s_to_t * us.t_to_s, 1.0);

        assert_eq!(us.z_to_l, us.z_to_m * us.m_to_l);
        assert_eq!(us.l_to_z, us.l_to_m * us.m_to_z);
        assert_eq!(us.z_to_l * us.l_to_z, 1.0);

        assert_eq!(us.l_t_to_m_s * us.m_s_to_l_t, 1.0);
        assert_eq!(us.z2_t_to_m2_s * us.m2_s_to_z2_t, 1.0);
        assert_eq!(us.l_t2_to_m_s2, us.l_to_m * us.s_to_t * us.s_to_t);
    }

    #[test]
    fn fundamental_pairs_are_exact_reciprocals_over_full_range() {
        for p in -300..=300 {
            assert_consistent(&scale(p, 0, 0));
            assert_consistent(&scale(0, p, 0));
            assert_consistent(&scale(0, 0, p));
        }
    }

    #[test]
    fn derived_factors_are_consistent_at_extremes() {
        for z in [-300, -1, 0, 1, 300] {
            for l in [-300, -7, 0, 5, 300] {
                for t in [-300, -2, 0, 3, 300] {
                    assert_consistent(&scale(z, l, t));
                }
            }
        }
    }

    #[test]
    fn no_scaling_is_identity() {
        let us = UnitScale::no_scaling();

        for factor in [
            us.m_to_z, us.z_to_m, us.m_to_l, us.l_to_m, us.s_to_t, us.t_to_s, us.z_to_l,
            us.l_to_z, us.l_t_to_m_s, us.m_s_to_l_t, us.l_t2_to_m_s2, us.z2_t_to_m2_s,
            us.m2_s_to_z2_t,
        ] {
            assert_eq!(factor, 1.0);
        }

        assert_eq!(us, UnitScale::default());
        assert_eq!(us, scale(0, 0, 0));
    }

    #[test]
    fn acceleration_factor_with_nonzero_exponents() {
        let us = scale(0, 3, -2);

        // L_to_m = 8, s_to_T = 4
        assert_eq!(us.l_t2_to_m_s2(), 8.0 * 16.0);
        assert_eq!(us.l_t2_to_m_s2(), us.l_to_m() * us.s_to_t().powi(2));
    }

    #[test]
    fn end_to_end_from_params() {
        let params = params(2, 0, -1);
        let mut log = DocLog::new();

        let us = UnitScale::from_params(&params, &mut log).unwrap();

        assert_eq!(us.z_to_m(), 4.0);
        assert_eq!(us.m_to_z(), 0.25);
        assert_eq!(us.l_to_m(), 1.0);
        assert_eq!(us.m_to_l(), 1.0);
        assert_eq!(us.t_to_s(), 0.5);
        assert_eq!(us.s_to_t(), 2.0);

        assert_eq!(us.z_to_l(), 4.0);
        assert_eq!(us.l_to_z(), 0.25);
        assert_eq!(us.l_t_to_m_s(), 2.0);
        assert_eq!(us.m_s_to_l_t(), 0.5);
        assert_eq!(us.l_t2_to_m_s2(), 4.0);
        assert_eq!(us.z2_t_to_m2_s(), 32.0);
        assert_eq!(us.m2_s_to_z2_t(), 1.0 / 32.0);

        assert!(log.text().starts_with("! === module unit_scale ===\n"));
        assert!(
            log.text()
                .contains(&format!("! version {}\n", env!("CARGO_PKG_VERSION")))
        );
        assert_eq!(log.text().matches("_RESCALE_POWER = ").count(), 3);
    }

    #[test]
    fn rejects_out_of_range_exponents() {
        for (z, l, t, name) in [
            (301, 0, 0, "Z_RESCALE_POWER"),
            (-301, 0, 0, "Z_RESCALE_POWER"),
            (0, 301, 0, "L_RESCALE_POWER"),
            (0, -301, 0, "L_RESCALE_POWER"),
            (0, 0, 301, "T_RESCALE_POWER"),
            (0, 0, -301, "T_RESCALE_POWER"),
        ] {
            let result = UnitScale::from_params(&params(z, l, t), &mut DocLog::new());
            assert!(
                matches!(
                    result,
                    Err(UnitScaleError::InvalidRescaleExponent { param, .. }) if param == name
                ),
                "expected {name} to be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn non_integer_exponent_is_a_param_error() {
        let float_power = ParamFile::from_toml_str("Z_RESCALE_POWER = 2.0").unwrap();
        let mut log = DocLog::new();

        let result = UnitScale::from_params(&float_power, &mut log);

        assert_eq!(
            result,
            Err(UnitScaleError::Param(ParamError::WrongType {
                name: "Z_RESCALE_POWER".into(),
                found: "float".into(),
            }))
        );
        assert!(log.text().starts_with("! === module unit_scale ===\n"));
        assert!(!log.text().contains("_RESCALE_POWER ="));
    }

    #[test]
    fn accepts_boundary_exponents() {
        for (z, l, t) in [(300, -300, 300), (-300, 300, -300)] {
            let us = UnitScale::from_params(&params(z, l, t), &mut DocLog::new()).unwrap();
            assert_consistent(&us);
        }
    }

    #[test]
    fn restart_fields_start_unset() {
        let us = scale(4, -4, 1);
        assert_eq!(us.restart, RestartScaling::default());
    }
}
