//! Where a body is on its orbit
//!
//! An [`OrbitalState`] pairs a fixed [`KeplerOrbit`] with the three anomaly
//! angles and the time since periapsis passage. The anomalies are kept
//! mutually consistent with Kepler's equation after every mutation.

use nalgebra::Vector3;
use tracing::trace;
use units::Mass;

use crate::error::{OrbitError, Result};
use crate::forces::gravity::gravitational_parameter;
use crate::orbit::KeplerOrbit;
use crate::solver::{KeplerSolver, wrap_angle};
use crate::vector::Vector3D;

/// Relative size below which the angular momentum counts as zero
const RECTILINEAR_TOLERANCE: f64 = 1e-10;
/// Relative size below which the specific orbital energy counts as zero
const PARABOLIC_TOLERANCE: f64 = 1e-12;
/// Relative size of the node vector below which an orbit is equatorial
const EQUATORIAL_TOLERANCE: f64 = 1e-12;

/// Time-varying position of a body on a fixed orbit.
///
/// Time is measured in seconds from periapsis passage. For open orbits
/// the value reported as the eccentric anomaly is the hyperbolic anomaly F
/// (e > 1) or Barker's parameter D = tan(ν/2) (e = 1).
///
/// # Examples
///
/// ```
/// use kepler::orbit::KeplerOrbit;
/// use kepler::orbital_state::OrbitalState;
/// use units::Mass;
///
/// let orbit = KeplerOrbit::new(1.496e11, 0.0167, 0.0, 0.0, 0.0, Mass::from_solar_masses(1.0));
/// let mut state = OrbitalState::new(orbit, 0.0).unwrap();
/// assert_eq!(state.distance(), orbit.periapsis());
///
/// let half_year = orbit.period().unwrap().to_seconds() / 2.0;
/// state.set_time(half_year).unwrap();
/// assert!((state.distance() / orbit.apoapsis() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    orbit: KeplerOrbit,
    true_anomaly: f64,
    eccentric_anomaly: f64,
    mean_anomaly: f64,
    time: f64,
}

impl OrbitalState {
    /// Place a body on `orbit` at true anomaly `true_anomaly`.
    ///
    /// The anomaly is wrapped into (−π, π]. On a closed orbit the time is
    /// then in (−T/2, T/2].
    ///
    /// # Errors
    ///
    /// [`OrbitError::DegenerateOrbit`] for a non-finite anomaly, or when an
    /// open orbit never reaches it: |ν| ≥ acos(−1/e), the asymptote.
    pub fn new(orbit: KeplerOrbit, true_anomaly: f64) -> Result<Self> {
        if !true_anomaly.is_finite() {
            return Err(degenerate("true anomaly is not finite"));
        }
        let nu = wrap_angle(true_anomaly);
        let e = orbit.eccentricity();
        let (sin_nu, cos_nu) = nu.sin_cos();
        if !orbit.is_closed() && 1.0 + e * cos_nu <= 0.0 {
            return Err(degenerate("true anomaly lies beyond the asymptote"));
        }

        let (eccentric_anomaly, mean_anomaly, time) = if orbit.is_closed() {
            let ecc = ((1.0 - e * e).sqrt() * sin_nu).atan2(e + cos_nu);
            let mean = ecc - e * ecc.sin();
            (ecc, mean, mean / orbit.mean_motion())
        } else if orbit.is_parabolic() {
            let d = (nu / 2.0).tan();
            let mean = d + d * d * d / 3.0;
            let p = orbit.semilatus_rectum();
            let time = 0.5 * (p * p * p / orbit.gravitational_parameter()).sqrt() * mean;
            (d, mean, time)
        } else {
            let hyp = ((e * e - 1.0).sqrt() * sin_nu / (1.0 + e * cos_nu)).asinh();
            let mean = e * hyp.sinh() - hyp;
            (hyp, mean, mean / orbit.mean_motion())
        };

        Ok(Self {
            orbit,
            true_anomaly: nu,
            eccentric_anomaly,
            mean_anomaly,
            time,
        })
    }

    /// Derive the orbit from a position and velocity relative to a parent
    /// of mass `parent_mass`, and place the body on it.
    ///
    /// # Errors
    ///
    /// [`OrbitError::DegenerateOrbit`] when the vectors do not describe a
    /// conic with a finite semi-major axis: non-finite components, zero
    /// position or velocity, radial (rectilinear) motion, exactly parabolic
    /// energy, or a massless parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use kepler::orbital_state::OrbitalState;
    /// use kepler::vector::Vector3D;
    /// use units::Mass;
    ///
    /// let r = Vector3D::new(0.0, 1.47095e11, 0.0);
    /// let v = Vector3D::new(3.029e4, 0.0, 0.0);
    /// let state = OrbitalState::from_vectors(r, v, Mass::from_kg(1.9885e30)).unwrap();
    ///
    /// assert!(state.orbit().is_closed());
    /// assert!((state.position() - r).magnitude() / r.magnitude() < 1e-9);
    /// ```
    pub fn from_vectors(position: Vector3D, velocity: Vector3D, parent_mass: Mass) -> Result<Self> {
        if !position.is_valid() || !velocity.is_valid() {
            return Err(degenerate("state vector is not finite"));
        }
        let mu = gravitational_parameter(parent_mass);
        if !(mu > 0.0 && mu.is_finite()) {
            return Err(degenerate("parent mass must be positive"));
        }

        let r = position.magnitude();
        let v2 = velocity.magnitude2();
        if r == 0.0 {
            return Err(degenerate("position coincides with the parent"));
        }
        if v2 == 0.0 {
            return Err(degenerate("velocity is zero"));
        }

        let h_vec = position.cross(&velocity);
        let h = h_vec.magnitude();
        if h <= RECTILINEAR_TOLERANCE * r * v2.sqrt() {
            return Err(degenerate("motion is radial, angular momentum vanishes"));
        }

        let energy = 0.5 * v2 - mu / r;
        if energy.abs() < PARABOLIC_TOLERANCE * mu / r {
            return Err(degenerate("parabolic trajectory has no finite semi-major axis"));
        }

        let a = -mu / (2.0 * energy);
        let e = (1.0 - h * h / (a * mu)).max(0.0).sqrt();
        let inclination = (h_vec.z() / h).clamp(-1.0, 1.0).acos();

        // Equatorial orbits have no ascending node; measure from +x
        let node_length = h_vec.x().hypot(h_vec.y());
        let raan = if node_length < EQUATORIAL_TOLERANCE * h {
            0.0
        } else {
            h_vec.x().atan2(-h_vec.y())
        };

        let (sin_raan, cos_raan) = raan.sin_cos();
        let node = Vector3D::new(cos_raan, sin_raan, 0.0);
        let normal = h_vec / h;
        let argument_of_latitude = node.cross(&position).dot(&normal).atan2(node.dot(&position));

        let true_anomaly =
            (h * position.dot(&velocity) / (mu * r)).atan2(h * h / (mu * r) - 1.0);
        let argument_of_periapsis = wrap_angle(argument_of_latitude - true_anomaly);

        trace!(
            semi_major_axis = a,
            eccentricity = e,
            inclination,
            raan,
            argument_of_periapsis,
            true_anomaly,
            "derived orbit from state vectors"
        );

        let orbit = KeplerOrbit::new(a, e, inclination, raan, argument_of_periapsis, parent_mass);
        Self::new(orbit, true_anomaly)
    }

    pub fn orbit(&self) -> &KeplerOrbit {
        &self.orbit
    }

    pub fn true_anomaly(&self) -> f64 {
        self.true_anomaly
    }

    pub fn eccentric_anomaly(&self) -> f64 {
        self.eccentric_anomaly
    }

    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Seconds since periapsis passage
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Move the body to absolute time `time` (seconds since periapsis)
    /// using the default solver limits.
    ///
    /// # Errors
    ///
    /// [`OrbitError::UndefinedPeriod`] on open orbits; the state is left
    /// untouched.
    pub fn set_time(&mut self, time: f64) -> Result<()> {
        self.set_time_with(time, &KeplerSolver::default())
    }

    /// [`set_time`](Self::set_time) with explicit solver limits
    pub fn set_time_with(&mut self, time: f64, solver: &KeplerSolver) -> Result<()> {
        let period = self.orbit.period()?.to_seconds();
        let e = self.orbit.eccentricity();

        let mean_anomaly = wrap_angle(std::f64::consts::TAU * time / period);
        let solution = solver.solve(mean_anomaly, e);
        let half = 0.5 * solution.eccentric_anomaly;

        self.time = time;
        self.mean_anomaly = mean_anomaly;
        self.eccentric_anomaly = solution.eccentric_anomaly;
        self.true_anomaly =
            2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos());
        Ok(())
    }

    /// Distance from the parent
    pub fn distance(&self) -> f64 {
        let e = self.orbit.eccentricity();
        if self.orbit.is_closed() {
            self.orbit.semi_major_axis() * (1.0 - e * self.eccentric_anomaly.cos())
        } else {
            self.orbit.semilatus_rectum() / (1.0 + e * self.true_anomaly.cos())
        }
    }

    /// Position relative to the parent in the parent's frame
    pub fn position(&self) -> Vector3D {
        let r = self.distance();
        let (sin_raan, cos_raan) = self.orbit.longitude_of_ascending_node().sin_cos();
        let (sin_i, cos_i) = self.orbit.inclination().sin_cos();
        let (sin_u, cos_u) = (self.orbit.argument_of_periapsis() + self.true_anomaly).sin_cos();

        Vector3D::new(
            r * (cos_raan * cos_u - sin_raan * sin_u * cos_i),
            r * (sin_raan * cos_u + cos_raan * sin_u * cos_i),
            r * (sin_i * sin_u),
        )
    }

    /// Velocity relative to the parent in the parent's frame
    pub fn velocity(&self) -> Vector3D {
        let e = self.orbit.eccentricity();
        let scale = (self.orbit.gravitational_parameter() / self.orbit.semilatus_rectum()).sqrt();
        let (sin_nu, cos_nu) = self.true_anomaly.sin_cos();
        let perifocal = Vector3::new(-sin_nu, e + cos_nu, 0.0) * scale;

        Vector3D::from(self.orbit.perifocal_to_inertial() * perifocal)
    }

    /// Orbital speed, equal to `velocity().magnitude()`
    pub fn speed(&self) -> f64 {
        self.orbit.speed_at(self.true_anomaly)
    }
}

fn degenerate(reason: &str) -> OrbitError {
    OrbitError::DegenerateOrbit(reason.to_string())
}
