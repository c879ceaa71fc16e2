use approx::assert_relative_eq;

use crate::position::Position;
use crate::vector::Vector3D;

#[test]
fn test_split_reconstructs_coordinates() {
    let p = Position::new(123_456.75, -0.5, 1.5e11);

    assert_eq!(p.coarse(), [1, -1, 1_500_000]);
    assert_eq!(p.fine(), Vector3D::new(23_456.75, 99_999.5, 0.0));
    assert_eq!(p.x(), 123_456.75);
    assert_eq!(p.y(), -0.5);
    assert_eq!(p.z(), 1.5e11);
}

#[test]
fn test_fine_offset_stays_inside_cell() {
    let mut p = Position::new(99_999.0, 0.0, 50_000.0);
    p += Vector3D::new(2.0, -1.0, -150_000.0);

    for (i, fine) in p.fine().coords().iter().enumerate() {
        assert!(
            (0.0..Position::COARSE_METERS).contains(fine),
            "axis {i} fine offset {fine} out of range"
        );
    }
    assert_eq!(p.x(), 100_001.0);
    assert_eq!(p.y(), -1.0);
    assert_eq!(p.z(), -100_000.0);
}

#[test]
fn test_tiny_negative_coordinates_stay_inside_cell() {
    for tiny in [-1e-20, -1e-12, -1e-300, -f64::MIN_POSITIVE] {
        let p = Position::new(tiny, 0.0, tiny);
        assert_eq!(p.coarse(), [0, 0, 0]);
        assert_eq!(p.fine(), Vector3D::zeros());

        let mut q = Position::new(5.0, 0.0, 0.0);
        q += Vector3D::new(-5.0 + tiny, tiny, 0.0);
        for (i, fine) in [q.fine().x(), q.fine().y(), q.fine().z()].into_iter().enumerate() {
            assert!(
                (0.0..Position::COARSE_METERS).contains(&fine),
                "axis {i} fine offset {fine} for {tiny:e}"
            );
        }
        assert!(q.x().abs() < 1e-10);
    }
}

#[test]
fn test_add_offset_on_every_axis() {
    // Each axis renormalises from its own remainder
    let mut p = Position::new(1.0e10, 1.0e10, 0.0);
    p += Vector3D::new(1.0e9, 0.0, 0.0);
    assert_eq!(p.x(), 1.1e10);
    assert_eq!(p.y(), 1.0e10);
    assert_eq!(p.z(), 0.0);

    p += Vector3D::new(0.0, 2.5e5, -3.0e5);
    assert_eq!(p.x(), 1.1e10);
    assert_eq!(p.y(), 1.000025e10);
    assert_eq!(p.z(), -3.0e5);
}

#[test]
fn test_subtract_offset() {
    let p = Position::new(5.0, 5.0, 5.0) - Vector3D::new(10.0, 0.0, 5.0);
    assert_eq!(p.to_vector(), Vector3D::new(-5.0, 5.0, 0.0));

    let mut q = Position::new(1.0e6, 0.0, 0.0);
    q -= Vector3D::new(1.0e6, 0.0, 0.0);
    assert_eq!(q, Position::origin());
}

#[test]
fn test_difference_keeps_submeter_precision() {
    // A plain f64 at 1.5e11 m resolves about 3e-5 m
    let far = Position::new(1.5e11, -2.2e11, 7.0e10);
    let near = far + Vector3D::new(0.125, -0.0625, 0.001);

    let offset = near - far;
    assert_relative_eq!(offset.x(), 0.125, epsilon = 1e-9);
    assert_relative_eq!(offset.y(), -0.0625, epsilon = 1e-9);
    assert_relative_eq!(offset.z(), 0.001, epsilon = 1e-9);
    assert_relative_eq!(far.distance(&near), offset.magnitude(), epsilon = 1e-12);
}

#[test]
fn test_accumulating_many_small_steps() {
    let mut p = Position::new(1.0e11, 0.0, 0.0);
    for _ in 0..1000 {
        p += Vector3D::new(0.001, 0.0, 0.0);
    }
    let moved = p - Position::new(1.0e11, 0.0, 0.0);
    assert_relative_eq!(moved.x(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_from_vector_and_display() {
    let p = Position::from(Vector3D::new(-3.0, 0.0, 2.0e5));
    assert_eq!(p.coarse(), [-1, 0, 2]);
    assert_eq!(p.to_string(), "(-3, 0, 200000)");
    assert_eq!(Position::default(), Position::origin());
}

#[test]
fn test_distance_and_polar() {
    let a = Position::new(3.0e10, 0.0, 0.0);
    let b = Position::new(0.0, 4.0e10, 0.0);
    assert_relative_eq!(a.distance(&b), 5.0e10, max_relative = 1e-15);
    assert_relative_eq!(a.distance2(&b), 2.5e21, max_relative = 1e-15);

    let polar = b.to_polar_coordinates();
    assert_relative_eq!(polar.x(), std::f64::consts::FRAC_PI_2);
    assert_relative_eq!(polar.z(), 4.0e10);
}
