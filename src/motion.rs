//! Kinematic drivers that move particles along trigonometric paths.
//!
//! These write positions directly and are meant for pinned anchors animated
//! by the caller, e.g. `oscillate_x(&mut p, frame as f64 * 0.05, 2.0)` once
//! per frame.

use crate::float::Float;
use crate::particle::Particle;

pub fn oscillate_x<F: Float>(particle: &mut Particle<F>, phase: F, size: F) {
    particle.pos.x = particle.pos.x + phase.cos() * size;
}

pub fn oscillate_y<F: Float>(particle: &mut Particle<F>, phase: F, size: F) {
    particle.pos.y = particle.pos.y + phase.sin() * size;
}

/// Step around a circle. `prev_pos` follows so no velocity is inherited.
pub fn circular<F: Float>(particle: &mut Particle<F>, phase: F, size: F) {
    particle.pos.x = particle.pos.x + phase.cos() * size;
    particle.pos.y = particle.pos.y + phase.sin() * size;
    particle.prev_pos = particle.pos;
}

/// Horizontal wobble whose amplitude grows with `phase`.
pub fn wave<F: Float>(particle: &mut Particle<F>, phase: F, size: F) {
    let degrees = F::from_f32(180.0);
    let swing = phase * (phase.cos() / F::pi() * degrees).sin();
    particle.pos.x = particle.pos.x + swing * size;
}
