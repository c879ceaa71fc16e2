//! Error types for orbit construction and body hierarchy operations

use thiserror::Error;

use crate::body::BodyId;

/// Errors surfaced by orbit derivation, propagation and the body tree.
///
/// Every variant describes a programming or input error detected
/// synchronously; none of them are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    /// An operation referenced a body that is not part of the system
    #[error("unknown body {0:?}")]
    UnknownBody(BodyId),

    /// A body with this identity is already part of the system
    #[error("body {0:?} is already part of the system")]
    DuplicateBody(BodyId),

    /// The operation is not allowed on this body (e.g. removing the root)
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Elements, state vectors or an anomaly that do not describe a point
    /// on a conic (zero position or velocity, rectilinear or parabolic
    /// motion, invalid elements, a true anomaly beyond the asymptote)
    #[error("degenerate orbit: {0}")]
    DegenerateOrbit(String),

    /// Period or time-based propagation requested on an open orbit
    #[error("orbit with eccentricity {eccentricity} is open and has no period")]
    UndefinedPeriod { eccentricity: f64 },
}

pub type Result<T> = std::result::Result<T, OrbitError>;
