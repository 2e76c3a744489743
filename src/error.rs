//! Error types for scene construction and configuration.

use core::fmt;

/// Errors raised at the API boundary. The per-step loops never fail; they
/// skip degenerate numerics instead.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Constraint index is out of bounds.
    ConstraintOutOfBounds { index: usize, count: usize },
    /// Polygon index is out of bounds.
    PolygonOutOfBounds { index: usize, count: usize },
    /// The two particles of a new constraint coincide, so the rest length
    /// would be zero.
    ZeroRestLength { a: usize, b: usize },
    /// A polygon needs at least 3 vertices.
    TooFewVertices { count: usize },
    /// A polygon must cache exactly one normal per edge.
    NormalCountMismatch { vertices: usize, normals: usize },
    /// Friction must be in [0, 1].
    InvalidFriction,
    /// Stiffness must be in [0, 1].
    InvalidStiffness,
    /// Bounce must be non-negative.
    InvalidBounce,
    /// Domain width and height must be positive.
    InvalidBounds,
    /// At least one solver iteration per step.
    InvalidAccuracy,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::ConstraintOutOfBounds { index, count } => {
                write!(f, "constraint index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::PolygonOutOfBounds { index, count } => {
                write!(f, "polygon index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::ZeroRestLength { a, b } => {
                write!(f, "particles {} and {} coincide; rest length would be zero", a, b)
            }
            PhysicsError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {}", count)
            }
            PhysicsError::NormalCountMismatch { vertices, normals } => {
                write!(f, "polygon has {} vertices but {} normals", vertices, normals)
            }
            PhysicsError::InvalidFriction => write!(f, "friction must be in [0, 1]"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be in [0, 1]"),
            PhysicsError::InvalidBounce => write!(f, "bounce must be non-negative"),
            PhysicsError::InvalidBounds => write!(f, "width and height must be positive"),
            PhysicsError::InvalidAccuracy => write!(f, "accuracy must be at least 1 iteration"),
        }
    }
}

impl core::error::Error for PhysicsError {}

/// Bounds-checked particle lookup shared by the stores.
pub(crate) fn check_particle(index: usize, count: usize) -> Result<(), PhysicsError> {
    if index < count {
        Ok(())
    } else {
        Err(PhysicsError::ParticleOutOfBounds { index, count })
    }
}
