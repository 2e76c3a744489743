//! Headless point picking and dragging.
//!
//! Input handling lives with the caller; these helpers only apply the
//! resulting edits to particle state between steps.

use crate::error::{check_particle, PhysicsError};
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Highest-index particle strictly closer than `radius` to `point`.
pub fn nearest_within<F: Float>(particles: &[Particle<F>], point: Vec2<F>, radius: F) -> Option<usize> {
    let radius_sq = radius * radius;
    particles
        .iter()
        .enumerate()
        .rev()
        .find(|(_, p)| p.pos.distance_sq(point) < radius_sq)
        .map(|(i, _)| i)
}

/// A particle held by the cursor. The particle is pinned while held so the
/// solver does not fight the drag.
#[derive(Clone, Debug, PartialEq)]
pub struct Grab<F: Float> {
    index: usize,
    offset: Vec2<F>,
    was_pinned: bool,
}

impl<F: Float> Grab<F> {
    pub fn begin(particles: &mut [Particle<F>], index: usize, cursor: Vec2<F>) -> Result<Self, PhysicsError> {
        check_particle(index, particles.len())?;
        let particle = &mut particles[index];
        let grab = Grab {
            index,
            offset: cursor - particle.pos,
            was_pinned: particle.pinned,
        };
        particle.pin();
        Ok(grab)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the held particle with the cursor, keeping the grab offset.
    pub fn drag(&self, particles: &mut [Particle<F>], cursor: Vec2<F>) -> Result<(), PhysicsError> {
        check_particle(self.index, particles.len())?;
        particles[self.index].move_to(cursor - self.offset);
        Ok(())
    }

    /// Let go. The particle is unpinned unless it was pinned before the grab.
    pub fn release(self, particles: &mut [Particle<F>]) -> Result<(), PhysicsError> {
        check_particle(self.index, particles.len())?;
        if !self.was_pinned {
            particles[self.index].unpin();
        }
        Ok(())
    }
}
