use std::f64::consts::TAU;

use crate::time::Time;

/// Angular velocity in rad/s
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct AngularVelocity(pub f64);

impl AngularVelocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_rad_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_degrees_per_day(value: f64) -> Self {
        Self(value.to_radians() / crate::time::SECONDS_PER_DAY)
    }

    /// Angular velocity of one full revolution per `period`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::{AngularVelocity, Time};
    ///
    /// let earth_spin = AngularVelocity::from_period(Time::from_hours(23.9345));
    /// assert!((earth_spin.to_rad_per_sec() - 7.2921e-5).abs() < 1e-8);
    /// ```
    pub fn from_period(period: Time) -> Self {
        Self(TAU / period.to_seconds())
    }

    pub fn to_rad_per_sec(&self) -> f64 {
        self.0
    }

    /// Time for one full revolution, infinite for a zero rate
    pub fn period(&self) -> Time {
        Time::from_seconds(TAU / self.0.abs())
    }
}
