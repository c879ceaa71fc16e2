use approx::assert_relative_eq;
use units::{AngularVelocity, Mass, Time};

use crate::body::{Body, BodyId, Rotation};
use crate::vector::Vector3D;

#[test]
fn test_new_body_does_not_spin() {
    let earth = Body::new(BodyId(3), "Earth", Mass::from_earth_masses(1.0));

    assert_eq!(earth.id(), BodyId(3));
    assert_eq!(earth.name, "Earth");
    assert_eq!(earth.mass().to_kg(), 5.9722e24);
    assert_eq!(earth.angular_velocity, Rotation::default());
    assert_eq!(earth.angular_velocity.axis, Vector3D::new(1.0, 0.0, 0.0));
}

#[test]
fn test_with_angular_velocity() {
    let spin = Rotation::new(
        Vector3D::new(0.0, 0.0, 2.0),
        AngularVelocity::from_period(Time::from_hours(24.0)),
    );
    let earth = Body::new(BodyId(3), "Earth", Mass::from_earth_masses(1.0))
        .with_angular_velocity(spin);

    // Axis is stored as a unit vector
    assert_eq!(earth.angular_velocity.axis, Vector3D::new(0.0, 0.0, 1.0));
    assert_relative_eq!(
        earth.angular_velocity.rate.period().to_hours(),
        24.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_body_ids_order_and_hash() {
    use std::collections::HashSet;

    let ids: HashSet<BodyId> = [BodyId(1), BodyId(2), BodyId(1)].into_iter().collect();
    assert_eq!(ids.len(), 2);
    assert!(BodyId(1) < BodyId(2));
}
