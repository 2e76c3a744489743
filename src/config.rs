//! World parameters threaded into every step.

use crate::collision::Bounds;
use crate::error::PhysicsError;
use crate::float::Float;

/// Scene-wide simulation parameters.
///
/// # Builder Pattern
/// ```
/// use verlet2d::config::WorldConfig;
///
/// let config: WorldConfig<f64> = WorldConfig::new()
///     .with_bounds(800.0, 600.0)
///     .with_gravity(0.5)
///     .with_friction(0.99)
///     .with_accuracy(8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig<F: Float> {
    /// Added to `y` every integration. Default: 0.8.
    pub gravity: F,
    /// Multiplier on the implicit velocity each integration, [0, 1].
    /// 1.0 = no damping. Default: 1.0.
    pub friction: F,
    /// Scale of each constraint correction, [0, 1]. Default: 1.0.
    pub stiffness: F,
    /// Restitution on boundary impact. Default: 0.9.
    pub bounce: F,
    /// Velocity damping before boundary reflection. Default: 0.98.
    pub boundary_damping: F,
    /// Domain width. Default: 100.
    pub width: F,
    /// Domain height. Default: 100.
    pub height: F,
    /// Relaxation passes per step. More = stiffer constraints, higher cost.
    /// Default: 4.
    pub accuracy: usize,
}

impl<F: Float> WorldConfig<F> {
    pub fn new() -> Self {
        WorldConfig {
            gravity: F::from_f32(0.8),
            friction: F::one(),
            stiffness: F::one(),
            bounce: F::from_f32(0.9),
            boundary_damping: F::from_f32(0.98),
            width: F::from_f32(100.0),
            height: F::from_f32(100.0),
            accuracy: 4,
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_boundary_damping(mut self, damping: F) -> Self {
        self.boundary_damping = damping;
        self
    }

    pub fn with_bounds(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_accuracy(mut self, accuracy: usize) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Check every parameter is within its documented range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let zero = F::zero();
        let one = F::one();
        if !(self.friction >= zero && self.friction <= one) {
            return Err(PhysicsError::InvalidFriction);
        }
        if !(self.stiffness >= zero && self.stiffness <= one) {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !(self.bounce >= zero) {
            return Err(PhysicsError::InvalidBounce);
        }
        if !(self.width > zero && self.height > zero) {
            return Err(PhysicsError::InvalidBounds);
        }
        if self.accuracy == 0 {
            return Err(PhysicsError::InvalidAccuracy);
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds<F> {
        Bounds {
            width: self.width,
            height: self.height,
            bounce: self.bounce,
            damping: self.boundary_damping,
        }
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
