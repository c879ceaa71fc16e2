//! Newtonian two-body gravity
//!
//! Stateless helpers for the inverse-square law. Masses are `units::Mass`,
//! distances and offsets are meters.

use units::Mass;

use crate::forces::{ForceModel, G};
use crate::vector::Vector3D;

/// Standard gravitational parameter μ = G·M in m³/s²
pub fn gravitational_parameter(mass: Mass) -> f64 {
    G * mass.to_kg()
}

/// Magnitude of the acceleration toward `mass` at `distance` meters
///
/// # Examples
///
/// ```
/// use kepler::forces::gravity::acceleration;
/// use units::Mass;
///
/// // Surface gravity of the Earth
/// let g = acceleration(Mass::from_earth_masses(1.0), 6.3781e6);
/// assert!((g - 9.798).abs() < 1e-3);
/// ```
pub fn acceleration(mass: Mass, distance: f64) -> f64 {
    gravitational_parameter(mass) / (distance * distance)
}

/// Acceleration vector on a test particle at `offset` from `mass`.
///
/// Points from the particle back toward the attractor. Zero at the
/// attractor itself rather than NaN.
pub fn acceleration_toward(mass: Mass, offset: Vector3D) -> Vector3D {
    let r2 = offset.magnitude2();
    if r2 == 0.0 {
        return Vector3D::zeros();
    }
    -offset.normalized() * (gravitational_parameter(mass) / r2)
}

/// Magnitude of the mutual attraction between two masses in newtons
pub fn force(m1: Mass, m2: Mass, distance: f64) -> f64 {
    G * m1.to_kg() * m2.to_kg() / (distance * distance)
}

/// Force on `m2` located at `offset` from `m1`
pub fn force_toward(m1: Mass, m2: Mass, offset: Vector3D) -> Vector3D {
    acceleration_toward(m1, offset) * m2.to_kg()
}

/// Compute Hill radius for a body orbiting a much heavier parent
///
/// # Arguments
///
/// * `mass` - Body mass
/// * `semi_major_axis` - Orbital semi-major axis in meters
/// * `parent_mass` - Mass of the body being orbited
///
/// # Returns
///
/// Hill radius in meters
pub fn hill_radius(mass: Mass, semi_major_axis: f64, parent_mass: Mass) -> f64 {
    semi_major_axis * (mass / (parent_mass * 3.0)).cbrt()
}

/// Laplace sphere of influence, r = a·(m/M)^(2/5)
///
/// Inside this radius the body, not its parent, is the better choice of
/// reference frame for a small third body.
///
/// # Examples
///
/// ```
/// use kepler::forces::gravity::sphere_of_influence;
/// use units::Mass;
///
/// let r = sphere_of_influence(
///     Mass::from_earth_masses(1.0),
///     1.496e11,
///     Mass::from_solar_masses(1.0),
/// );
/// // Roughly 925 000 km
/// assert!((r / 9.25e8 - 1.0).abs() < 0.01);
/// ```
pub fn sphere_of_influence(mass: Mass, semi_major_axis: f64, parent_mass: Mass) -> f64 {
    semi_major_axis.abs() * (mass / parent_mass).powf(0.4)
}

/// Acceleration field of a single fixed point mass at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub mass: Mass,
}

impl PointMass {
    pub fn new(mass: Mass) -> Self {
        Self { mass }
    }
}

impl ForceModel for PointMass {
    fn acceleration(&self, position: Vector3D) -> Vector3D {
        acceleration_toward(self.mass, position)
    }

    fn potential(&self, position: Vector3D) -> f64 {
        let r = position.magnitude();
        if r == 0.0 {
            return 0.0;
        }
        -gravitational_parameter(self.mass) / r
    }
}
