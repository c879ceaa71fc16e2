use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// IAU 2012 astronomical unit in meters
pub const AU_TO_M: f64 = 1.495978707e11;
pub const KM_TO_M: f64 = 1.0e3;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Nominal solar radius in meters
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct stores meters. Orbital distances reach ~1e11 m
/// for planets, which f64 represents with well under a millimetre of
/// rounding error.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// let lunar_distance = Length::from_km(384_400.0);
///
/// assert!(earth_orbit > lunar_distance);
/// assert_eq!(lunar_distance.to_m(), 3.844e8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_M)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M)
    }

    /// Returns the length in meters.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_M
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS_M
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_M
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Returns the smaller of two lengths
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    /// Returns the larger of two lengths
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
