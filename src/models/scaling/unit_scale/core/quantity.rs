//! Conversions between typed physical quantities and internal scalars.

use uom::si::{
    acceleration::meter_per_second_squared,
    area::square_meter,
    f64::{Acceleration, Area, Length, Time, Velocity},
    length::meter,
    time::second,
    velocity::meter_per_second,
};

use crate::support::units::Diffusivity;

use super::UnitScale;

impl UnitScale {
    /// Converts a vertical distance into internal `Z` units.
    #[must_use]
    pub fn z_from_length(&self, length: Length) -> f64 {
        length.get::<meter>() * self.m_to_z
    }

    /// Converts a value in internal `Z` units into a vertical distance.
    #[must_use]
    pub fn z_to_length(&self, z: f64) -> Length {
        Length::new::<meter>(z * self.z_to_m)
    }

    /// Converts a horizontal distance into internal `L` units.
    #[must_use]
    pub fn l_from_length(&self, length: Length) -> f64 {
        length.get::<meter>() * self.m_to_l
    }

    /// Converts a value in internal `L` units into a horizontal distance.
    #[must_use]
    pub fn l_to_length(&self, l: f64) -> Length {
        Length::new::<meter>(l * self.l_to_m)
    }

    #[must_use]
    pub fn t_from_time(&self, time: Time) -> f64 {
        time.get::<second>() * self.s_to_t
    }

    #[must_use]
    pub fn t_to_time(&self, t: f64) -> Time {
        Time::new::<second>(t * self.t_to_s)
    }

    /// Converts a velocity into internal `L T-1` units.
    #[must_use]
    pub fn l_t_from_velocity(&self, velocity: Velocity) -> f64 {
        velocity.get::<meter_per_second>() * self.m_s_to_l_t
    }

    #[must_use]
    pub fn l_t_to_velocity(&self, l_t: f64) -> Velocity {
        Velocity::new::<meter_per_second>(l_t * self.l_t_to_m_s)
    }

    /// Converts a value in internal `L T-2` units into an acceleration.
    ///
    /// Only this direction is provided, matching [`UnitScale::l_t2_to_m_s2`].
    #[must_use]
    pub fn l_t2_to_acceleration(&self, l_t2: f64) -> Acceleration {
        Acceleration::new::<meter_per_second_squared>(l_t2 * self.l_t2_to_m_s2)
    }

    /// Converts a diffusivity into internal `Z2 T-1` units.
    #[must_use]
    pub fn z2_t_from_diffusivity(&self, diffusivity: Diffusivity) -> f64 {
        diffusivity.value * self.m2_s_to_z2_t
    }

    #[must_use]
    pub fn z2_t_to_diffusivity(&self, z2_t: f64) -> Diffusivity {
        Area::new::<square_meter>(z2_t * self.z2_t_to_m2_s) / Time::new::<second>(1.0)
    }
}
