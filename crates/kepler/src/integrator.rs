//! Step-based integration for non-Keplerian motion
//!
//! The Kepler core propagates bodies in closed form. These integrators are
//! an alternative strategy for a single test particle in an arbitrary
//! [`ForceModel`] field, where no closed form exists.

use crate::forces::ForceModel;
use crate::vector::Vector3D;

/// Change in position and velocity over one step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KineticStateDelta {
    pub position: Vector3D,
    pub velocity: Vector3D,
}

impl KineticStateDelta {
    pub fn new(position: Vector3D, velocity: Vector3D) -> Self {
        Self { position, velocity }
    }
}

/// A time integrator for a test particle
pub trait Integrator: Send + Sync {
    /// Compute the change over one timestep
    ///
    /// # Arguments
    ///
    /// * `position` - Current position in meters
    /// * `velocity` - Current velocity in m/s
    /// * `dt` - Timestep in seconds
    /// * `force` - Field supplying the acceleration
    fn step(
        &self,
        position: Vector3D,
        velocity: Vector3D,
        dt: f64,
        force: &dyn ForceModel,
    ) -> KineticStateDelta;

    /// Advance by `n_steps` timesteps and return the final position and
    /// velocity
    fn integrate(
        &self,
        mut position: Vector3D,
        mut velocity: Vector3D,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> (Vector3D, Vector3D) {
        for _ in 0..n_steps {
            let delta = self.step(position, velocity, dt, force);
            position += delta.position;
            velocity += delta.velocity;
        }
        (position, velocity)
    }
}

/// Symplectic leapfrog integrator (2nd order)
///
/// The leapfrog integrator keeps the energy error bounded over long runs
/// instead of letting it drift. Kick-drift-kick form:
///
/// 1. Kick: v(t + dt/2) = v(t) + a(t) * dt/2
/// 2. Drift: x(t + dt) = x(t) + v(t + dt/2) * dt
/// 3. Kick: v(t + dt) = v(t + dt/2) + a(t + dt) * dt/2
///
/// # Examples
///
/// ```
/// use kepler::forces::PointMass;
/// use kepler::integrator::{Integrator, Leapfrog};
/// use kepler::vector::Vector3D;
/// use units::Mass;
///
/// let earth = PointMass::new(Mass::from_earth_masses(1.0));
/// let r = Vector3D::new(7.0e6, 0.0, 0.0);
/// let v = Vector3D::new(0.0, 7.546e3, 0.0);
///
/// let delta = Leapfrog::new().step(r, v, 1.0, &earth);
/// assert!(delta.position.y() > 7.5e3);
/// assert!(delta.velocity.x() < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leapfrog {
    /// Use drift-kick-drift instead of kick-drift-kick.
    ///
    /// For position-only forces such as gravity both are second order; DKD
    /// evaluates the field once per step.
    pub use_dkd: bool,
}

impl Leapfrog {
    /// Kick-drift-kick leapfrog
    pub fn new() -> Self {
        Self { use_dkd: false }
    }

    /// Drift-kick-drift leapfrog
    pub fn new_dkd() -> Self {
        Self { use_dkd: true }
    }
}

impl Default for Leapfrog {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for Leapfrog {
    fn step(
        &self,
        position: Vector3D,
        velocity: Vector3D,
        dt: f64,
        force: &dyn ForceModel,
    ) -> KineticStateDelta {
        if self.use_dkd {
            let half_drift = velocity * (0.5 * dt);
            let velocity_delta = force.acceleration(position + half_drift) * dt;
            let position_delta = half_drift + (velocity + velocity_delta) * (0.5 * dt);
            KineticStateDelta::new(position_delta, velocity_delta)
        } else {
            let half_kick = force.acceleration(position) * (0.5 * dt);
            let position_delta = (velocity + half_kick) * dt;
            let next_half_kick = force.acceleration(position + position_delta) * (0.5 * dt);
            KineticStateDelta::new(position_delta, half_kick + next_half_kick)
        }
    }
}

/// Explicit Euler integrator (1st order, for comparison only)
///
/// Energy drifts steadily; use [`Leapfrog`] for anything longer than a
/// few steps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn step(
        &self,
        position: Vector3D,
        velocity: Vector3D,
        dt: f64,
        force: &dyn ForceModel,
    ) -> KineticStateDelta {
        KineticStateDelta::new(velocity * dt, force.acceleration(position) * dt)
    }
}
