use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::Vector3;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use units::{Mass, Time};

use crate::error::OrbitError;
use crate::forces::G;
use crate::orbit::KeplerOrbit;

fn test_orbit() -> KeplerOrbit {
    KeplerOrbit::new(1e10, 0.5, 0.7, 1.1, 2.1, Mass::from_kg(1e25))
}

#[test]
fn test_getters() {
    let orbit = test_orbit();

    assert_eq!(orbit.semi_major_axis(), 1e10);
    assert_eq!(orbit.eccentricity(), 0.5);
    assert_eq!(orbit.inclination(), 0.7);
    assert_eq!(orbit.longitude_of_ascending_node(), 1.1);
    assert_eq!(orbit.argument_of_periapsis(), 2.1);
    assert_eq!(orbit.parent_mass(), Mass::from_kg(1e25));
    assert_eq!(orbit.gravitational_parameter(), G * 1e25);
}

#[test]
fn test_from_period_recovers_period() {
    let orbit = KeplerOrbit::from_period(1e10, 0.5, 0.7, 1.1, 2.1, Time::from_seconds(1e8));

    assert_relative_eq!(orbit.period().unwrap().to_seconds(), 1e8, max_relative = 1e-12);
    assert_relative_eq!(orbit.parent_mass().to_kg(), 5.91518e25, max_relative = 1e-5);
}

#[test]
fn test_earth_period() {
    let orbit = KeplerOrbit::new(1.496e11, 0.0167, 0.0, 0.0, 0.0, Mass::from_solar_masses(1.0));
    assert_relative_eq!(orbit.period().unwrap().to_days(), 365.26, max_relative = 1e-4);
    assert_relative_eq!(
        orbit.mean_motion() * orbit.period().unwrap().to_seconds(),
        TAU,
        max_relative = 1e-12
    );
}

#[test]
fn test_apsides() {
    let orbit = test_orbit();

    assert_relative_eq!(orbit.semilatus_rectum(), 7.5e9);
    assert_relative_eq!(orbit.periapsis(), 5e9);
    assert_relative_eq!(orbit.apoapsis(), 1.5e10);
    assert!(orbit.periapsis() <= orbit.apoapsis());
}

#[test]
fn test_circular_apsides_match() {
    let orbit = KeplerOrbit::new(7e6, 0.0, 0.0, 0.0, 0.0, Mass::from_earth_masses(1.0));
    assert_eq!(orbit.periapsis(), orbit.apoapsis());
    assert_eq!(orbit.semilatus_rectum(), 7e6);
}

#[test]
fn test_open_orbits_have_no_period() {
    let hyperbola = KeplerOrbit::new(-1e9, 1.5, 0.0, 0.0, 0.0, Mass::from_solar_masses(1.0));

    assert!(!hyperbola.is_closed());
    assert_eq!(hyperbola.apoapsis(), f64::INFINITY);
    assert_relative_eq!(hyperbola.periapsis(), 5e8);
    assert_eq!(
        hyperbola.period(),
        Err(OrbitError::UndefinedPeriod { eccentricity: 1.5 })
    );
}

#[test]
fn test_parabola_uses_periapsis_distance() {
    let parabola = KeplerOrbit::new(4e8, 1.0, 0.0, 0.0, 0.0, Mass::from_solar_masses(1.0));

    assert!(parabola.is_parabolic());
    assert!(!parabola.is_closed());
    assert_eq!(parabola.semilatus_rectum(), 8e8);
    assert_eq!(parabola.periapsis(), 4e8);
    assert!(parabola.period().is_err());

    // Escape speed at periapsis
    let escape = (2.0 * parabola.gravitational_parameter() / 4e8).sqrt();
    assert_relative_eq!(parabola.speed_at(0.0), escape, max_relative = 1e-12);
}

#[test]
fn test_angular_momentum() {
    let orbit = test_orbit();
    let expected = (G * 1e25 * 7.5e9).sqrt();
    assert_relative_eq!(orbit.angular_momentum(), expected, max_relative = 1e-12);
}

#[test]
fn test_speed_circular() {
    let orbit = KeplerOrbit::from_period(1e6, 0.0, 0.0, 0.0, 0.0, Time::from_seconds(1e8));
    let expected = TAU * 1e6 / 1e8;

    for i in 0..256 {
        let true_anomaly = i as f64 * PI / 128.0;
        assert_relative_eq!(orbit.speed_at(true_anomaly), expected, max_relative = 1e-6);
    }
}

#[test]
fn test_speed_earth() {
    let orbit = KeplerOrbit::from_period(
        1.496e11,
        0.01671022,
        7.155_f64.to_radians(),
        (-11.26064_f64).to_radians(),
        0.0,
        Time::from_seconds(31_558_149.763_545_603),
    );

    let speeds: Vec<f64> = (0..256)
        .map(|i| orbit.speed_at(i as f64 / 128.0 * PI))
        .collect();

    for speed in &speeds {
        assert!(*speed < 30_290.0, "speed {speed} above perihelion speed");
        assert!(*speed > 29_290.0, "speed {speed} below aphelion speed");
    }
    let mean = speeds.iter().sum::<f64>() / speeds.len() as f64;
    assert_relative_eq!(mean, 29_780.0, max_relative = 1e-3);
}

#[test]
fn test_speed_is_fastest_at_periapsis() {
    let orbit = test_orbit();
    assert!(orbit.speed_at(0.0) > orbit.speed_at(FRAC_PI_2));
    assert!(orbit.speed_at(FRAC_PI_2) > orbit.speed_at(PI));
}

#[test]
fn test_perifocal_rotation_is_orthonormal() {
    let rotation = test_orbit().perifocal_to_inertial();
    let identity = rotation * rotation.transpose();

    for row in 0..3 {
        for col in 0..3 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(identity[(row, col)], expected, epsilon = 1e-12);
        }
    }
    assert_relative_eq!(rotation.determinant(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_perifocal_rotation_axes() {
    let orbit = test_orbit();
    let rotation = orbit.perifocal_to_inertial();

    // Perifocal z maps onto the orbit normal
    let normal = rotation * Vector3::z();
    let (sin_o, cos_o) = 1.1_f64.sin_cos();
    let (sin_i, cos_i) = 0.7_f64.sin_cos();
    assert_abs_diff_eq!(normal.x, sin_o * sin_i, epsilon = 1e-12);
    assert_abs_diff_eq!(normal.y, -cos_o * sin_i, epsilon = 1e-12);
    assert_abs_diff_eq!(normal.z, cos_i, epsilon = 1e-12);

    // Equatorial orbit with no rotations is the identity
    let plain = KeplerOrbit::new(1e10, 0.1, 0.0, 0.0, 0.0, Mass::from_kg(1e25));
    assert_eq!(plain.perifocal_to_inertial(), nalgebra::Matrix3::identity());
}

#[test]
fn test_try_new_accepts_every_conic() {
    let sun = Mass::from_solar_masses(1.0);
    let ellipse = KeplerOrbit::try_new(1e10, 0.5, 0.7, 1.1, 2.1, sun).unwrap();
    assert_eq!(ellipse, KeplerOrbit::new(1e10, 0.5, 0.7, 1.1, 2.1, sun));

    assert!(KeplerOrbit::try_new(7e6, 0.0, 0.0, 0.0, 0.0, sun).is_ok());
    assert!(KeplerOrbit::try_new(4e8, 1.0, 0.0, 0.0, 0.0, sun).unwrap().is_parabolic());
    assert!(!KeplerOrbit::try_new(-1e9, 1.5, 0.0, 0.0, 0.0, sun).unwrap().is_closed());
}

#[test]
fn test_try_new_rejects_invalid_elements() {
    let sun = Mass::from_solar_masses(1.0);
    let cases = [
        (1e10, -0.1, 0.0, sun),
        (1e10, f64::NAN, 0.0, sun),
        (f64::INFINITY, 0.5, 0.0, sun),
        (0.0, 0.5, 0.0, sun),
        (-1e10, 0.5, 0.0, sun),
        (1e10, 1.5, 0.0, sun),
        (-1e10, 1.0, 0.0, sun),
        (1e10, 0.5, f64::NAN, sun),
        (1e10, 0.5, 0.0, Mass::zero()),
    ];

    for (a, e, i, mass) in cases {
        assert!(
            matches!(
                KeplerOrbit::try_new(a, e, i, 0.0, 0.0, mass),
                Err(OrbitError::DegenerateOrbit(_))
            ),
            "a = {a}, e = {e}, i = {i} accepted"
        );
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "eccentricity must be finite and non-negative")]
fn test_negative_eccentricity_asserts_in_debug() {
    let _ = KeplerOrbit::new(1e10, -0.2, 0.0, 0.0, 0.0, Mass::from_solar_masses(1.0));
}
