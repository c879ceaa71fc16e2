//! Large-scale coordinates split into an integer grid cell and a fine offset
//!
//! Planetary distances reach ~1e11 m, where a bare `f64` keeps only about
//! 1e-5 m of resolution and differences between nearby far-away points lose
//! most of their significant digits. `Position` stores each axis as a coarse
//! cell index plus a small real offset inside the cell, so subtracting two
//! positions cancels the integer parts exactly.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::vector::Vector3D;

/// A point in space stored as `coarse * COARSE_METERS + fine` per axis.
///
/// The fine offset of every axis stays in `[0, COARSE_METERS)` after any
/// arithmetic.
///
/// # Examples
///
/// ```
/// use kepler::position::Position;
/// use kepler::vector::Vector3D;
///
/// let mut p = Position::new(1.0e10, 1.0e10, 0.0);
/// p += Vector3D::new(1.0e9, 0.0, 0.0);
///
/// assert_eq!(p.x(), 1.1e10);
/// assert_eq!(p.y(), 1.0e10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    coarse: [i64; 3],
    fine: Vector3D,
}

/// Split a coordinate into a whole number of cells and the remainder
fn split(value: f64) -> (i64, f64) {
    let mut cells = (value / Position::COARSE_METERS).floor();
    let mut rest = value - cells * Position::COARSE_METERS;

    // Rounding can leave the remainder a hair outside the cell
    if rest < 0.0 {
        cells -= 1.0;
        rest += Position::COARSE_METERS;
    }
    if rest >= Position::COARSE_METERS {
        cells += 1.0;
        rest -= Position::COARSE_METERS;
    }
    (cells as i64, rest)
}

impl Position {
    /// Edge length of one coarse grid cell in meters
    pub const COARSE_METERS: f64 = 1.0e5;

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let (cx, fx) = split(x);
        let (cy, fy) = split(y);
        let (cz, fz) = split(z);
        Self {
            coarse: [cx, cy, cz],
            fine: Vector3D::new(fx, fy, fz),
        }
    }

    pub fn origin() -> Self {
        Self {
            coarse: [0; 3],
            fine: Vector3D::zeros(),
        }
    }

    pub fn from_vector(v: Vector3D) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }

    /// Integer cell index per axis
    pub fn coarse(&self) -> [i64; 3] {
        self.coarse
    }

    /// Offset inside the cell, each component in `[0, COARSE_METERS)`
    pub fn fine(&self) -> Vector3D {
        self.fine
    }

    fn axis(&self, i: usize) -> f64 {
        self.coarse[i] as f64 * Self::COARSE_METERS + self.fine.coords()[i]
    }

    pub fn x(&self) -> f64 {
        self.axis(0)
    }

    pub fn y(&self) -> f64 {
        self.axis(1)
    }

    pub fn z(&self) -> f64 {
        self.axis(2)
    }

    /// Collapse to a plain vector. Loses precision far from the origin.
    pub fn to_vector(&self) -> Vector3D {
        Vector3D::new(self.x(), self.y(), self.z())
    }

    pub fn distance2(&self, other: &Position) -> f64 {
        (*self - *other).magnitude2()
    }

    pub fn distance(&self, other: &Position) -> f64 {
        (*self - *other).magnitude()
    }

    /// Longitude, latitude and radius, see [`Vector3D::to_polar_coordinates`]
    pub fn to_polar_coordinates(&self) -> Vector3D {
        self.to_vector().to_polar_coordinates()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<Vector3D> for Position {
    fn from(v: Vector3D) -> Self {
        Self::from_vector(v)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_vector(), f)
    }
}

impl AddAssign<Vector3D> for Position {
    fn add_assign(&mut self, offset: Vector3D) {
        let mut fine = [0.0; 3];
        for (i, slot) in fine.iter_mut().enumerate() {
            let (cells, remainder) = split(offset.coords()[i]);
            let (carry, rest) = split(self.fine.coords()[i] + remainder);
            self.coarse[i] += cells + carry;
            *slot = rest;
        }
        self.fine = Vector3D::new(fine[0], fine[1], fine[2]);
    }
}

impl SubAssign<Vector3D> for Position {
    fn sub_assign(&mut self, offset: Vector3D) {
        *self += -offset;
    }
}

impl Add<Vector3D> for Position {
    type Output = Position;

    fn add(mut self, rhs: Vector3D) -> Position {
        self += rhs;
        self
    }
}

impl Sub<Vector3D> for Position {
    type Output = Position;

    fn sub(mut self, rhs: Vector3D) -> Position {
        self -= rhs;
        self
    }
}

/// The offset between two positions; integer parts cancel exactly
impl Sub for Position {
    type Output = Vector3D;

    fn sub(self, rhs: Position) -> Vector3D {
        let cells = Vector3D::new(
            (self.coarse[0] - rhs.coarse[0]) as f64,
            (self.coarse[1] - rhs.coarse[1]) as f64,
            (self.coarse[2] - rhs.coarse[2]) as f64,
        );
        cells * Self::COARSE_METERS + (self.fine - rhs.fine)
    }
}
