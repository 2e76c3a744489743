//! Gauss-Seidel relaxation of distance constraints.

use crate::constraint::DistanceConstraint;
use crate::float::Float;
use crate::particle::Particle;

/// One relaxation pass over `constraints`, in order.
///
/// Corrections are written in place, so later constraints in the same pass
/// see the positions produced by earlier ones. Run this `accuracy` times per
/// step; more passes converge closer to the rest lengths.
///
/// Constraint indices must be valid for `particles`; [`crate::World`]
/// guarantees this for the constraints it owns.
pub fn relax<F: Float>(
    particles: &mut [Particle<F>],
    constraints: &[DistanceConstraint<F>],
    stiffness: F,
) {
    for constraint in constraints.iter() {
        constraint.solve(particles, stiffness);
    }
}
