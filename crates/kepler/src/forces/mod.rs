//! Force models for numerical propagation
//!
//! The Kepler core never integrates forces; these models feed the
//! step-based integrators for callers that need non-Keplerian motion.

use crate::vector::Vector3D;

pub mod gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::PointMass;

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67408e-11;

/// A source of acceleration on a test particle
///
/// # Examples
///
/// ```
/// use kepler::forces::{ForceModel, PointMass};
/// use kepler::vector::Vector3D;
/// use units::Mass;
///
/// let sun = PointMass::new(Mass::from_solar_masses(1.0));
/// let accel = sun.acceleration(Vector3D::new(1.496e11, 0.0, 0.0));
///
/// // Points back toward the sun
/// assert!(accel.x() < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Acceleration in m/s² on a particle at `position`
    fn acceleration(&self, position: Vector3D) -> Vector3D;

    /// Specific potential energy in J/kg at `position`
    ///
    /// Default implementation returns 0.0. Override for conservative
    /// fields so integrators can be checked for energy drift.
    fn potential(&self, _position: Vector3D) -> f64 {
        0.0
    }
}

/// Combine multiple force models into a single composite force
///
/// # Examples
///
/// ```
/// use kepler::forces::{CompositeForce, ForceModel, PointMass};
/// use kepler::vector::Vector3D;
/// use units::Mass;
///
/// let composite = CompositeForce::new()
///     .with_force(PointMass::new(Mass::from_earth_masses(1.0)));
///
/// let a = composite.acceleration(Vector3D::new(6.3781e6, 0.0, 0.0));
/// assert!(a.magnitude() > 9.7);
/// ```
pub struct CompositeForce {
    models: Vec<Box<dyn ForceModel>>,
}

impl CompositeForce {
    /// Creates an empty composite force
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Adds a force model to the composite
    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.models.push(Box::new(force));
        self
    }
}

impl Default for CompositeForce {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for CompositeForce {
    fn acceleration(&self, position: Vector3D) -> Vector3D {
        self.models.iter().map(|f| f.acceleration(position)).sum()
    }

    fn potential(&self, position: Vector3D) -> f64 {
        self.models.iter().map(|f| f.potential(position)).sum()
    }
}
