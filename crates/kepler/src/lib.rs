//! Closed-form two-body propagation and a hierarchy of orbiting bodies.
//!
//! Each body in a [`SolarSystem`] follows a fixed [`KeplerOrbit`] around its
//! parent. Positions at any time come from solving Kepler's equation, not
//! from integrating forces; [`integrator`] covers the cases where that is
//! not enough.

pub mod body;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod orbit;
pub mod orbital_state;
pub mod position;
pub mod solver;
pub mod system;
pub mod vector;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod orbit_test;
#[cfg(test)]
mod position_test;

pub use body::{Body, BodyId, Rotation};
pub use error::{OrbitError, Result};
pub use orbit::KeplerOrbit;
pub use orbital_state::OrbitalState;
pub use position::Position;
pub use solver::KeplerSolver;
pub use system::SolarSystem;
pub use vector::Vector3D;
