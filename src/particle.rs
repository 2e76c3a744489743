//! Verlet point masses with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass. Velocity is implicit: `pos - prev_pos`.
///
/// A pinned particle is an anchor: integration, constraint relaxation and
/// collision response never move it. Interaction code may still reposition
/// it directly with [`Particle::move_to`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub pinned: bool,
    /// Render hint (0xRRGGBBAA). Physics never reads it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<u32>,
}

impl<F: Float> Particle<F> {
    /// A particle at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, pinned: false, color: None }
    }

    /// A particle that starts moving by `velocity` per step.
    pub fn with_velocity(pos: Vec2<F>, velocity: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos - velocity, pinned: false, color: None }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, pinned: true, color: None }
    }

    pub fn with_color(mut self, rgba: u32) -> Self {
        self.color = Some(rgba);
        self
    }

    /// One Verlet step: damp the implicit velocity by `friction`, advance by
    /// it, then add `gravity` to `y`.
    pub fn integrate(&mut self, gravity: F, friction: F) {
        if self.pinned {
            return;
        }
        let vx = (self.pos.x - self.prev_pos.x) * friction;
        let vy = (self.pos.y - self.prev_pos.y) * friction;
        self.prev_pos = self.pos;
        self.pos.x = self.pos.x + vx;
        self.pos.y = self.pos.y + vy;
        self.pos.y = self.pos.y + gravity;
    }

    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.pinned = true;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Teleport without inheriting velocity.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }
}
