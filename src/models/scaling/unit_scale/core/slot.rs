use crate::support::{
    fatal::FatalReporter,
    params::{ParamLog, ParamSource},
};

use super::{UnitScale, UnitScaleError};

/// Caller-owned home for the single [`UnitScale`] of a model run.
///
/// The slot starts empty, is filled once at startup, and is emptied by
/// [`UnitScaleSlot::release`] at shutdown. Consumers borrow the scale from
/// the slot (or from whatever context the caller threads it through).
///
/// # Example
///
/// ```
/// use unit_scaling::{
///     models::scaling::unit_scale::{UnitScaleError, UnitScaleSlot},
///     support::params::{DocLog, ParamFile},
/// };
///
/// let params = ParamFile::from_toml_str("Z_RESCALE_POWER = 2").unwrap();
/// let mut log = DocLog::new();
/// let mut slot = UnitScaleSlot::new();
///
/// let scale = slot.init(&params, &mut log).unwrap();
/// assert_eq!(scale.z_to_m(), 4.0);
///
/// assert_eq!(
///     slot.init(&params, &mut log).unwrap_err(),
///     UnitScaleError::DoubleInitialization,
/// );
///
/// assert!(slot.release().is_some());
/// assert!(!slot.is_initialized());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnitScaleSlot(Option<UnitScale>);

impl UnitScaleSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a unit scale from `params` into this slot.
    ///
    /// # Errors
    ///
    /// Returns [`UnitScaleError::DoubleInitialization`] if the slot is already
    /// filled, or any error from [`UnitScale::from_params`]. The slot is left
    /// unchanged on error.
    pub fn init(
        &mut self,
        params: &impl ParamSource,
        log: &mut impl ParamLog,
    ) -> Result<&UnitScale, UnitScaleError> {
        self.ensure_empty()?;
        let scale = UnitScale::from_params(params, log)?;
        Ok(self.0.insert(scale))
    }

    /// Like [`UnitScaleSlot::init`], but any error ends the run through `fatal`.
    pub fn init_or_fail(
        &mut self,
        params: &impl ParamSource,
        log: &mut impl ParamLog,
        fatal: &impl FatalReporter,
    ) -> &UnitScale {
        match self.init(params, log) {
            Ok(scale) => scale,
            Err(err) => fatal.fail(&format!("unit_scale: {err}")),
        }
    }

    /// Fills this slot with a scale in which internal units are MKS units.
    ///
    /// # Errors
    ///
    /// Returns [`UnitScaleError::DoubleInitialization`] if the slot is already filled.
    pub fn init_no_scaling(&mut self) -> Result<&UnitScale, UnitScaleError> {
        self.ensure_empty()?;
        Ok(self.0.insert(UnitScale::no_scaling()))
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub fn get(&self) -> Option<&UnitScale> {
        self.0.as_ref()
    }

    /// Mutable access, used to take the restart snapshot.
    pub fn get_mut(&mut self) -> Option<&mut UnitScale> {
        self.0.as_mut()
    }

    /// Empties the slot, returning the scale it held.
    ///
    /// Releasing an empty slot is a caller error.
    pub fn release(&mut self) -> Option<UnitScale> {
        debug_assert!(self.0.is_some(), "released an empty unit scale slot");
        self.0.take()
    }

    fn ensure_empty(&self) -> Result<(), UnitScaleError> {
        if self.0.is_some() {
            return Err(UnitScaleError::DoubleInitialization);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use crate::models::scaling::unit_scale::core::test_support::params;
    use crate::support::{
        fatal::PanicOnFatal,
        params::{DocLog, ParamError, ParamFile},
    };

    #[test]
    fn init_fills_an_empty_slot() {
        let mut slot = UnitScaleSlot::new();
        assert!(!slot.is_initialized());
        assert!(slot.get().is_none());

        let scale = *slot.init(&params(1, 2, 3), &mut DocLog::new()).unwrap();

        assert!(slot.is_initialized());
        assert_eq!(slot.get(), Some(&scale));
        assert_eq!(scale.z_to_m(), 2.0);
        assert_eq!(scale.l_to_m(), 4.0);
        assert_eq!(scale.t_to_s(), 8.0);
    }

    #[test]
    fn double_initialization_fails_and_keeps_first_scale() {
        let mut slot = UnitScaleSlot::new();
        let first = *slot.init(&params(1, 0, 0), &mut DocLog::new()).unwrap();

        assert_eq!(
            slot.init(&params(2, 0, 0), &mut DocLog::new()),
            Err(UnitScaleError::DoubleInitialization)
        );
        assert_eq!(
            slot.init_no_scaling(),
            Err(UnitScaleError::DoubleInitialization)
        );
        assert_eq!(slot.get(), Some(&first));
    }

    #[test]
    fn invalid_exponent_leaves_slot_empty() {
        let mut slot = UnitScaleSlot::new();

        let result = slot.init(&params(0, 0, 301), &mut DocLog::new());

        assert!(matches!(
            result,
            Err(UnitScaleError::InvalidRescaleExponent { .. })
        ));
        assert!(!slot.is_initialized());
    }

    #[test]
    fn param_error_leaves_slot_empty() {
        let mut slot = UnitScaleSlot::new();
        let float_power = ParamFile::from_toml_str("Z_RESCALE_POWER = 2.0").unwrap();

        let result = slot.init(&float_power, &mut DocLog::new());

        assert!(matches!(
            result,
            Err(UnitScaleError::Param(ParamError::WrongType { .. }))
        ));
        assert!(!slot.is_initialized());
        assert!(slot.get().is_none());

        let scale = slot.init(&params(2, 0, 0), &mut DocLog::new()).unwrap();
        assert_eq!(scale.z_to_m(), 4.0);
    }

    #[test]
    fn release_allows_reinitialization() {
        let mut slot = UnitScaleSlot::new();
        slot.init(&params(1, 0, 0), &mut DocLog::new()).unwrap();

        let released = slot.release().unwrap();
        assert_eq!(released.z_to_m(), 2.0);
        assert!(!slot.is_initialized());

        let scale = slot.init(&params(-1, 0, 0), &mut DocLog::new()).unwrap();
        assert_eq!(scale.z_to_m(), 0.5);
    }

    #[test]
    fn snapshot_through_slot() {
        let mut slot = UnitScaleSlot::new();
        slot.init(&params(2, 0, -1), &mut DocLog::new()).unwrap();

        if let Some(scale) = slot.get_mut() {
            scale.fix_restart_scaling();
        }

        let scale = slot.get().unwrap();
        assert_eq!(scale.m_to_z_restart(), 0.25);
        assert_eq!(scale.m_to_l_restart(), 1.0);
        assert_eq!(scale.s_to_t_restart(), 2.0);
    }

    #[test]
    fn no_scaling_init() {
        let mut slot = UnitScaleSlot::new();
        let scale = slot.init_no_scaling().unwrap();
        assert_eq!(*scale, UnitScale::no_scaling());
    }

    #[test]
    fn init_or_fail_returns_scale_on_success() {
        let mut slot = UnitScaleSlot::new();
        let scale = slot.init_or_fail(&params(0, 4, 0), &mut DocLog::new(), &PanicOnFatal);
        assert_eq!(scale.l_to_m(), 16.0);
    }

    #[test]
    #[should_panic(expected = "FATAL: unit_scale: unit scale is already initialized")]
    fn init_or_fail_on_double_initialization() {
        let mut slot = UnitScaleSlot::new();
        slot.init_no_scaling().unwrap();
        slot.init_or_fail(&params(0, 0, 0), &mut DocLog::new(), &PanicOnFatal);
    }

    #[test]
    #[should_panic(expected = "L_RESCALE_POWER = -301 is outside of the valid range")]
    fn init_or_fail_on_invalid_exponent() {
        let mut slot = UnitScaleSlot::new();
        slot.init_or_fail(&params(0, -301, 0), &mut DocLog::new(), &PanicOnFatal);
    }
}
