//! Scalar geometry primitives shared by the solver and collision code.

use crate::float::Float;
use crate::vec::Vec2;

/// Euclidean distance between two points.
pub fn distance<F: Float>(p0: Vec2<F>, p1: Vec2<F>) -> F {
    let dx = p0.x - p1.x;
    let dy = p0.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn dot<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
    a.x * b.x + a.y * b.y
}

/// Unit vector perpendicular to `edge`: `(dy, -dx) / |edge|`.
///
/// The edge must have non-zero length. A zero edge trips a debug assertion;
/// release builds return NaN components.
pub fn unit_perpendicular<F: Float>(edge: Vec2<F>) -> Vec2<F> {
    let len = edge.length();
    debug_assert!(
        len > F::zero(),
        "unit_perpendicular: zero-length edge (duplicate adjacent vertices)"
    );
    edge.perp().scale(F::one() / len)
}
