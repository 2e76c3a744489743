//! Verlet integration over the whole particle store.

use crate::float::Float;
use crate::particle::Particle;

/// Advance every non-pinned particle by its damped implicit velocity plus
/// `gravity` on the y axis. Pinned particles are left untouched.
pub fn integrate<F: Float>(particles: &mut [Particle<F>], gravity: F, friction: F) {
    for p in particles.iter_mut() {
        p.integrate(gravity, friction);
    }
}
