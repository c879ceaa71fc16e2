//! Keplerian orbit shapes
//!
//! A [`KeplerOrbit`] is the fixed conic a body follows around its parent:
//! size, shape and orientation, plus the parent mass that sets the time
//! scale. Where the body currently is on that conic is an
//! [`OrbitalState`](crate::orbital_state::OrbitalState).

use nalgebra::Matrix3;
use std::f64::consts::TAU;
use units::{Mass, Time};

use crate::error::{OrbitError, Result};
use crate::forces::G;
use crate::forces::gravity::gravitational_parameter;

/// Immutable six-parameter two-body orbit.
///
/// Angles are radians, lengths meters. The semi-major axis is negative for
/// hyperbolic orbits (e > 1). For an exactly parabolic orbit (e = 1) the
/// semi-major axis is unbounded, so `semi_major_axis` holds the periapsis
/// distance instead.
///
/// # Examples
///
/// ```
/// use kepler::orbit::KeplerOrbit;
/// use units::Mass;
///
/// let earth = KeplerOrbit::new(1.496e11, 0.0167, 0.0, 0.0, 0.0, Mass::from_solar_masses(1.0));
///
/// assert!(earth.is_closed());
/// assert!(earth.periapsis() < earth.apoapsis());
/// let days = earth.period().unwrap().to_days();
/// assert!((days - 365.25).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerOrbit {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    longitude_of_ascending_node: f64,
    argument_of_periapsis: f64,
    parent_mass: Mass,
    mu: f64,
}

impl KeplerOrbit {
    /// Build an orbit from its elements without validating them.
    ///
    /// Callers must pass e ≥ 0 and a finite, non-zero semi-major axis whose
    /// sign matches the conic (positive for e ≤ 1, negative for e > 1).
    /// Debug builds assert the eccentricity and axis; use
    /// [`try_new`](Self::try_new) for elements from untrusted input.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
        argument_of_periapsis: f64,
        parent_mass: Mass,
    ) -> Self {
        debug_assert!(
            eccentricity >= 0.0 && eccentricity.is_finite(),
            "eccentricity must be finite and non-negative, got {eccentricity}"
        );
        debug_assert!(
            semi_major_axis.is_finite() && semi_major_axis != 0.0,
            "semi-major axis must be finite and non-zero, got {semi_major_axis}"
        );
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            parent_mass,
            mu: gravitational_parameter(parent_mass),
        }
    }

    /// Build an orbit, rejecting elements that describe no conic.
    ///
    /// # Errors
    ///
    /// [`OrbitError::DegenerateOrbit`] for a negative or non-finite
    /// eccentricity, a zero or non-finite semi-major axis, an axis whose
    /// sign does not match the eccentricity, non-finite angles, or a parent
    /// mass that is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use kepler::orbit::KeplerOrbit;
    /// use units::Mass;
    ///
    /// let sun = Mass::from_solar_masses(1.0);
    /// assert!(KeplerOrbit::try_new(1.5e11, 0.1, 0.0, 0.0, 0.0, sun).is_ok());
    /// assert!(KeplerOrbit::try_new(1.5e11, -0.1, 0.0, 0.0, 0.0, sun).is_err());
    /// assert!(KeplerOrbit::try_new(1.5e11, 1.5, 0.0, 0.0, 0.0, sun).is_err());
    /// ```
    pub fn try_new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
        argument_of_periapsis: f64,
        parent_mass: Mass,
    ) -> Result<Self> {
        let invalid = |reason: String| Err(OrbitError::DegenerateOrbit(reason));

        if !(eccentricity >= 0.0 && eccentricity.is_finite()) {
            return invalid(format!(
                "eccentricity {eccentricity} is not a finite non-negative value"
            ));
        }
        if !(semi_major_axis.is_finite() && semi_major_axis != 0.0) {
            return invalid(format!(
                "semi-major axis {semi_major_axis} is not finite and non-zero"
            ));
        }
        if (eccentricity > 1.0) != (semi_major_axis < 0.0) {
            return invalid(format!(
                "semi-major axis {semi_major_axis} has the wrong sign for eccentricity {eccentricity}"
            ));
        }
        let angles = [inclination, longitude_of_ascending_node, argument_of_periapsis];
        if angles.iter().any(|angle| !angle.is_finite()) {
            return invalid("orientation angles must be finite".to_string());
        }
        let kg = parent_mass.to_kg();
        if !(kg > 0.0 && kg.is_finite()) {
            return invalid(format!("parent mass {kg} kg is not positive"));
        }

        Ok(Self::new(
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            parent_mass,
        ))
    }

    /// Build an orbit from its period instead of the parent mass.
    ///
    /// The parent mass follows from Kepler's third law, M = 4π²a³/(G·T²).
    pub fn from_period(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
        argument_of_periapsis: f64,
        period: Time,
    ) -> Self {
        let t = period.to_seconds();
        let parent_mass = TAU * TAU * semi_major_axis.abs().powi(3) / (G * t * t);
        Self::new(
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            Mass::from_kg(parent_mass),
        )
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn longitude_of_ascending_node(&self) -> f64 {
        self.longitude_of_ascending_node
    }

    pub fn argument_of_periapsis(&self) -> f64 {
        self.argument_of_periapsis
    }

    pub fn parent_mass(&self) -> Mass {
        self.parent_mass
    }

    /// μ = G·M of the parent in m³/s²
    pub fn gravitational_parameter(&self) -> f64 {
        self.mu
    }

    /// True for circles and ellipses
    pub fn is_closed(&self) -> bool {
        self.eccentricity < 1.0
    }

    pub fn is_parabolic(&self) -> bool {
        self.eccentricity == 1.0
    }

    /// Time for one revolution, T = 2π√(a³/μ)
    ///
    /// # Errors
    ///
    /// [`OrbitError::UndefinedPeriod`] for parabolic and hyperbolic orbits.
    pub fn period(&self) -> Result<Time> {
        if !self.is_closed() {
            return Err(OrbitError::UndefinedPeriod {
                eccentricity: self.eccentricity,
            });
        }
        Ok(Time::from_seconds(TAU / self.mean_motion()))
    }

    /// Mean angular rate n = √(μ/|a|³) in rad/s
    pub fn mean_motion(&self) -> f64 {
        (self.mu / self.semi_major_axis.abs().powi(3)).sqrt()
    }

    /// p = a(1 − e²), or 2q for a parabola
    pub fn semilatus_rectum(&self) -> f64 {
        if self.is_parabolic() {
            2.0 * self.semi_major_axis.abs()
        } else {
            self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
        }
    }

    /// Specific angular momentum h = √(μ·p)
    pub fn angular_momentum(&self) -> f64 {
        (self.mu * self.semilatus_rectum()).sqrt()
    }

    /// Closest approach to the parent
    pub fn periapsis(&self) -> f64 {
        self.semilatus_rectum() / (1.0 + self.eccentricity)
    }

    /// Farthest distance from the parent; infinite for open orbits
    pub fn apoapsis(&self) -> f64 {
        if !self.is_closed() {
            return f64::INFINITY;
        }
        self.semilatus_rectum() / (1.0 - self.eccentricity)
    }

    /// Orbital speed at true anomaly `true_anomaly` from the vis-viva
    /// equation, v² = μ(2/r − 1/a)
    pub fn speed_at(&self, true_anomaly: f64) -> f64 {
        let r = self.semilatus_rectum() / (1.0 + self.eccentricity * true_anomaly.cos());
        let inverse_a = if self.is_parabolic() {
            0.0
        } else {
            1.0 / self.semi_major_axis
        };
        (self.mu * (2.0 / r - inverse_a)).sqrt()
    }

    /// Rotation from the perifocal frame (x toward periapsis, z along the
    /// orbit normal) into the parent's reference frame, R_z(Ω)·R_x(i)·R_z(ω)
    pub fn perifocal_to_inertial(&self) -> Matrix3<f64> {
        let (sin_o, cos_o) = self.longitude_of_ascending_node.sin_cos();
        let (sin_i, cos_i) = self.inclination.sin_cos();
        let (sin_w, cos_w) = self.argument_of_periapsis.sin_cos();

        #[rustfmt::skip]
        let rotation = Matrix3::new(
            cos_o * cos_w - sin_o * sin_w * cos_i,
            -cos_o * sin_w - sin_o * cos_w * cos_i,
            sin_o * sin_i,

            sin_o * cos_w + cos_o * sin_w * cos_i,
            -sin_o * sin_w + cos_o * cos_w * cos_i,
            -cos_o * sin_i,

            sin_w * sin_i,
            cos_w * sin_i,
            cos_i,
        );
        rotation
    }
}
