//! Distance constraints between pairs of particles.

use crate::error::{check_particle, PhysicsError};
use crate::float::Float;
use crate::particle::Particle;

/// Keeps particles `a` and `b` at `rest_length` apart.
///
/// The constraint refers to particles by index into the store and never owns
/// them. `rest_length` is measured once when the constraint is created and is
/// never recomputed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    /// Render hint; hidden constraints are still solved.
    pub hidden: bool,
}

impl<F: Float> DistanceConstraint<F> {
    /// Build a constraint whose rest length is the current separation of
    /// `a` and `b`.
    pub fn between(a: usize, b: usize, particles: &[Particle<F>]) -> Result<Self, PhysicsError> {
        check_particle(a, particles.len())?;
        check_particle(b, particles.len())?;
        let rest_length = particles[a].pos.distance(particles[b].pos);
        if !(rest_length > F::zero()) {
            return Err(PhysicsError::ZeroRestLength { a, b });
        }
        Ok(DistanceConstraint { a, b, rest_length, hidden: false })
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn touches(&self, particle: usize) -> bool {
        self.a == particle || self.b == particle
    }

    /// Current separation divided by rest length: 1 at rest, >1 stretched.
    pub fn stretch(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos) / self.rest_length
    }

    /// One relaxation of this constraint.
    ///
    /// Each non-pinned endpoint moves by half the length error scaled by
    /// `stiffness`. Coincident endpoints are skipped for this pass.
    pub fn solve(&self, particles: &mut [Particle<F>], stiffness: F) {
        let p0 = particles[self.a].pos;
        let p1 = particles[self.b].pos;
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist == F::zero() {
            return;
        }

        let difference = (dist - self.rest_length) / dist;
        let adjust_x = dx * F::half() * difference * stiffness;
        let adjust_y = dy * F::half() * difference * stiffness;

        let first = &mut particles[self.a];
        if !first.pinned {
            first.pos.x = first.pos.x + adjust_x;
            first.pos.y = first.pos.y + adjust_y;
        }
        let second = &mut particles[self.b];
        if !second.pinned {
            second.pos.x = second.pos.x - adjust_x;
            second.pos.y = second.pos.y - adjust_y;
        }
    }
}
