//! Three dimensional vectors with a cached squared magnitude

use nalgebra::Vector3;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// An immutable 3D vector of `f64` components.
///
/// Wraps an `nalgebra::Vector3<f64>` and caches its squared magnitude,
/// which the orbit code queries far more often than it builds vectors.
/// Every constructor and mutating operator recomputes the cache, so
/// `magnitude2()` always equals `x² + y² + z²`.
///
/// # Examples
///
/// ```
/// use kepler::vector::Vector3D;
///
/// let v = Vector3D::new(3.0, 4.0, 0.0);
/// assert_eq!(v.magnitude2(), 25.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// let w = v + Vector3D::new(0.0, 0.0, 12.0);
/// assert_eq!(w.magnitude(), 13.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vector3D {
    coords: Vector3<f64>,
    magnitude2: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from(Vector3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self {
            coords: Vector3::zeros(),
            magnitude2: 0.0,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// Borrow the underlying nalgebra vector
    pub fn coords(&self) -> &Vector3<f64> {
        &self.coords
    }

    /// Squared magnitude (cached)
    #[inline]
    pub fn magnitude2(&self) -> f64 {
        self.magnitude2
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude2.sqrt()
    }

    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.coords.dot(&other.coords)
    }

    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        Vector3D::from(self.coords.cross(&other.coords))
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalized(&self) -> Vector3D {
        if self.magnitude2 > 0.0 {
            *self / self.magnitude()
        } else {
            Vector3D::zeros()
        }
    }

    pub fn distance2(&self, other: &Vector3D) -> f64 {
        (*self - *other).magnitude2()
    }

    pub fn distance(&self, other: &Vector3D) -> f64 {
        self.distance2(other).sqrt()
    }

    /// Polar form packed into a vector: x = longitude, y = latitude,
    /// z = distance from the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use kepler::vector::Vector3D;
    ///
    /// let polar = Vector3D::new(0.0, 0.0, 2.0).to_polar_coordinates();
    /// assert_eq!(polar.y(), std::f64::consts::FRAC_PI_2);
    /// assert_eq!(polar.z(), 2.0);
    /// ```
    pub fn to_polar_coordinates(&self) -> Vector3D {
        let r = self.magnitude();
        let longitude = self.y().atan2(self.x());
        let latitude = if r > 0.0 { (self.z() / r).asin() } else { 0.0 };
        Vector3D::new(longitude, latitude, r)
    }

    /// True when no component is NaN or infinite
    pub fn is_valid(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl Default for Vector3D {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<Vector3<f64>> for Vector3D {
    fn from(coords: Vector3<f64>) -> Self {
        Self {
            magnitude2: coords.norm_squared(),
            coords,
        }
    }
}

impl From<Vector3D> for Vector3<f64> {
    fn from(v: Vector3D) -> Self {
        v.coords
    }
}

impl PartialEq for Vector3D {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "({:.*e}, {:.*e}, {:.*e})",
                p,
                self.x(),
                p,
                self.y(),
                p,
                self.z()
            ),
            None => write!(f, "({}, {}, {})", self.x(), self.y(), self.z()),
        }
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D::from(self.coords + rhs.coords)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Vector3D {
        Vector3D::from(self.coords - rhs.coords)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D {
            coords: -self.coords,
            magnitude2: self.magnitude2,
        }
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Vector3D {
        Vector3D::from(self.coords * rhs)
    }
}

/// Allow f64 * Vector3D (commutative multiplication)
impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Vector3D {
        rhs * self
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, rhs: f64) -> Vector3D {
        Vector3D::from(self.coords / rhs)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3D {
    fn sub_assign(&mut self, rhs: Vector3D) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector3D {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Sum for Vector3D {
    fn sum<I: Iterator<Item = Vector3D>>(iter: I) -> Self {
        iter.fold(Vector3D::zeros(), |acc, v| acc + v)
    }
}
