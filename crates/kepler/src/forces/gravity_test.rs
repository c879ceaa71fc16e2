use approx::assert_relative_eq;
use units::Mass;

use crate::forces::gravity::{
    PointMass, acceleration, acceleration_toward, force, force_toward, gravitational_parameter,
    hill_radius, sphere_of_influence,
};
use crate::forces::{CompositeForce, ForceModel, G};
use crate::vector::Vector3D;

const EARTH_RADIUS: f64 = 6.3781e6;
const MOON_DISTANCE: f64 = 3.84399e8;

fn earth() -> Mass {
    Mass::from_earth_masses(1.0)
}

fn moon() -> Mass {
    Mass::from_kg(7.342e22)
}

#[test]
fn test_gravitational_parameter() {
    assert_relative_eq!(
        gravitational_parameter(earth()),
        3.986e14,
        max_relative = 1e-3
    );
    assert_eq!(gravitational_parameter(Mass::from_kg(1.0)), G);
}

#[test]
fn test_surface_acceleration() {
    assert_relative_eq!(
        acceleration(earth(), EARTH_RADIUS),
        9.79812,
        max_relative = 1e-5
    );
}

#[test]
fn test_acceleration_vector_points_at_attractor() {
    let offset = Vector3D::new(0.0, -EARTH_RADIUS, 0.0);
    let a = acceleration_toward(earth(), offset);

    assert!(a.y() > 0.0);
    assert_eq!(a.x(), 0.0);
    assert_relative_eq!(
        a.magnitude(),
        acceleration(earth(), EARTH_RADIUS),
        max_relative = 1e-12
    );
}

#[test]
fn test_acceleration_at_attractor_is_zero() {
    let a = acceleration_toward(earth(), Vector3D::zeros());
    assert!(a.is_valid());
    assert_eq!(a, Vector3D::zeros());
}

#[test]
fn test_earth_moon_force() {
    let f = force(earth(), moon(), MOON_DISTANCE);
    assert_relative_eq!(f, 1.9805e20, max_relative = 1e-4);

    // Newton's third law
    assert_eq!(f, force(moon(), earth(), MOON_DISTANCE));

    let on_moon = force_toward(earth(), moon(), Vector3D::new(MOON_DISTANCE, 0.0, 0.0));
    assert_relative_eq!(on_moon.x(), -f, max_relative = 1e-12);
}

#[test]
fn test_hill_radius() {
    // Earth's Hill sphere is about 0.01 AU
    let r = hill_radius(earth(), 1.496e11, Mass::from_solar_masses(1.0));
    assert_relative_eq!(r, 1.4966e9, max_relative = 1e-3);
}

#[test]
fn test_sphere_of_influence_smaller_than_hill_radius() {
    let sun = Mass::from_solar_masses(1.0);
    let soi = sphere_of_influence(earth(), 1.496e11, sun);
    assert_relative_eq!(soi, 9.246e8, max_relative = 1e-3);
    assert!(soi < hill_radius(earth(), 1.496e11, sun));

    // Scales linearly with the orbit
    assert_relative_eq!(
        sphere_of_influence(earth(), 2.992e11, sun),
        2.0 * soi,
        max_relative = 1e-12
    );
}

#[test]
fn test_point_mass_field() {
    let field = PointMass::new(earth());
    let position = Vector3D::new(EARTH_RADIUS, 0.0, 0.0);

    assert_relative_eq!(field.acceleration(position).x(), -9.79812, max_relative = 1e-5);
    assert_relative_eq!(
        field.potential(position),
        -gravitational_parameter(earth()) / EARTH_RADIUS,
        max_relative = 1e-12
    );
}

#[test]
fn test_composite_force_sums_models() {
    let position = Vector3D::new(0.0, 0.0, 1.0e7);
    let single = PointMass::new(earth());
    let doubled = CompositeForce::new()
        .with_force(PointMass::new(earth()))
        .with_force(PointMass::new(earth()));

    assert_relative_eq!(
        doubled.acceleration(position).z(),
        2.0 * single.acceleration(position).z(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        doubled.potential(position),
        2.0 * single.potential(position),
        max_relative = 1e-12
    );
    assert_eq!(CompositeForce::new().acceleration(position), Vector3D::zeros());
}
