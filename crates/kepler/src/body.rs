use units::{AngularVelocity, Mass};

use crate::vector::Vector3D;

/// Externally assigned identity of a body inside a [`SolarSystem`](crate::system::SolarSystem)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Spin of a body: a rotation axis and an angular rate about it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub axis: Vector3D,
    pub rate: AngularVelocity,
}

impl Rotation {
    pub fn new(axis: Vector3D, rate: AngularVelocity) -> Self {
        Self {
            axis: axis.normalized(),
            rate,
        }
    }
}

impl Default for Rotation {
    /// No spin about the +x axis
    fn default() -> Self {
        Self {
            axis: Vector3D::new(1.0, 0.0, 0.0),
            rate: AngularVelocity::zero(),
        }
    }
}

/// A massive object that can sit anywhere in the body hierarchy.
///
/// Bodies are plain values; where they are and how they move is owned by
/// the system that holds them. Identity and mass are fixed once a body is
/// built: the system keys its table by the id, and every child orbit
/// depends on the mass. Use
/// [`SolarSystem::set_mass`](crate::system::SolarSystem::set_mass) to change
/// the mass of a body already in a system.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    pub name: String,
    mass: Mass,
    pub angular_velocity: Rotation,
}

impl Body {
    /// Creates a non-rotating body
    ///
    /// # Examples
    ///
    /// ```
    /// use kepler::body::{Body, BodyId};
    /// use units::Mass;
    ///
    /// let sun = Body::new(BodyId(0), "Sun", Mass::from_solar_masses(1.0));
    /// assert_eq!(sun.name, "Sun");
    /// assert_eq!(sun.angular_velocity.rate.to_rad_per_sec(), 0.0);
    /// ```
    pub fn new(id: BodyId, name: impl Into<String>, mass: Mass) -> Self {
        Self {
            id,
            name: name.into(),
            mass,
            angular_velocity: Rotation::default(),
        }
    }

    pub fn with_angular_velocity(mut self, rotation: Rotation) -> Self {
        self.angular_velocity = rotation;
        self
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub(crate) fn set_mass(&mut self, mass: Mass) {
        self.mass = mass;
    }
}
