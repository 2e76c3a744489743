//! Boundary clamping and circular obstacle response.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Rectangular domain `[0, width] x [0, height]` with restitution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
    /// Fraction of the incoming velocity reflected on impact.
    pub bounce: F,
    /// Applied to the velocity estimate before reflection so repeated
    /// clamping inside one step cannot add energy.
    pub damping: F,
}

/// Clip every non-pinned particle into the domain and reflect its implicit
/// velocity on each axis it crossed.
///
/// Reflection rewrites `prev_pos` to `clipped + velocity * bounce`, so the
/// next integration reads the reversed velocity. Run this inside every
/// solver iteration, since relaxation can push particles back out.
pub fn clamp_to_bounds<F: Float>(particles: &mut [Particle<F>], bounds: &Bounds<F>) {
    let zero = F::zero();
    for p in particles.iter_mut() {
        if p.pinned {
            continue;
        }
        let vx = (p.pos.x - p.prev_pos.x) * bounds.damping;
        let vy = (p.pos.y - p.prev_pos.y) * bounds.damping;

        if p.pos.x > bounds.width {
            p.pos.x = bounds.width;
            p.prev_pos.x = p.pos.x + vx * bounds.bounce;
        } else if p.pos.x < zero {
            p.pos.x = zero;
            p.prev_pos.x = p.pos.x + vx * bounds.bounce;
        }

        if p.pos.y > bounds.height {
            p.pos.y = bounds.height;
            p.prev_pos.y = p.pos.y + vy * bounds.bounce;
        } else if p.pos.y < zero {
            p.pos.y = zero;
            p.prev_pos.y = p.pos.y + vy * bounds.bounce;
        }
    }
}

/// Direction of a circle obstacle's response.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CircleMode {
    /// Push particles inside the circle out to its rim.
    Blow,
    /// Pull particles inside the circle further towards the center.
    Suck,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleObstacle<F: Float> {
    pub center: Vec2<F>,
    pub radius: F,
    pub mode: CircleMode,
}

impl<F: Float> CircleObstacle<F> {
    pub fn blow(center: Vec2<F>, radius: F) -> Self {
        CircleObstacle { center, radius, mode: CircleMode::Blow }
    }

    pub fn suck(center: Vec2<F>, radius: F) -> Self {
        CircleObstacle { center, radius, mode: CircleMode::Suck }
    }

    pub fn resolve(&self, particles: &mut [Particle<F>]) {
        resolve_circle(particles, self.center, self.radius, self.mode);
    }
}

/// Reposition every particle strictly inside the circle.
///
/// With `depth = sqrt(radius^2 / d^2)` the center-to-particle offset is
/// scaled by `depth` (blow) or `1 / depth` (suck). The new position is set
/// absolutely and `prev_pos` is left alone, so the particle leaves with the
/// displacement as velocity on the next integration.
///
/// Pinned particles and particles exactly on the center are skipped.
pub fn resolve_circle<F: Float>(
    particles: &mut [Particle<F>],
    center: Vec2<F>,
    radius: F,
    mode: CircleMode,
) {
    let radius_sq = radius * radius;
    for p in particles.iter_mut() {
        if p.pinned {
            continue;
        }
        let offset = p.pos - center;
        let dist_sq = offset.length_sq();
        if dist_sq == F::zero() || !(dist_sq < radius_sq) {
            continue;
        }
        let depth = (radius_sq / dist_sq).sqrt();
        let factor = match mode {
            CircleMode::Blow => depth,
            CircleMode::Suck => F::one() / depth,
        };
        p.pos = center + offset.scale(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds<f64> {
        Bounds { width: 100.0, height: 50.0, bounce: 0.5, damping: 1.0 }
    }

    #[test]
    fn reflects_velocity_on_floor() {
        let mut particles = [Particle::with_velocity(Vec2::new(20.0f64, 54.0), Vec2::new(0.0, 6.0))];
        clamp_to_bounds(&mut particles, &bounds());
        let p = &particles[0];
        assert_eq!(p.pos.y, 50.0);
        // prev = 50 + 6 * 0.5, so the implicit velocity now points up.
        assert_eq!(p.prev_pos.y, 53.0);
        assert_eq!(p.velocity().y, -3.0);
        assert_eq!(p.pos.x, 20.0);
    }

    #[test]
    fn clamps_left_and_top() {
        let mut particles = [Particle::new(Vec2::new(-3.0f64, -4.0))];
        clamp_to_bounds(&mut particles, &bounds());
        assert_eq!(particles[0].pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn inside_particle_untouched() {
        let original = Particle::with_velocity(Vec2::new(30.0f64, 30.0), Vec2::new(1.0, 1.0));
        let mut particles = [original.clone()];
        clamp_to_bounds(&mut particles, &bounds());
        assert_eq!(particles[0], original);
    }

    #[test]
    fn blow_pushes_to_rim_without_touching_prev() {
        let mut particles = [Particle::new(Vec2::new(3.0f64, 4.0))];
        resolve_circle(&mut particles, Vec2::zero(), 10.0, CircleMode::Blow);
        let p = &particles[0];
        assert!(libm::fabs(p.pos.length() - 10.0) < 1e-9);
        assert!(libm::fabs(p.pos.x - 6.0) < 1e-9);
        assert!(libm::fabs(p.pos.y - 8.0) < 1e-9);
        // The jump becomes velocity on the next step.
        assert_eq!(p.prev_pos, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn suck_pulls_towards_center() {
        let mut particles = [Particle::new(Vec2::new(3.0f64, 4.0))];
        resolve_circle(&mut particles, Vec2::zero(), 10.0, CircleMode::Suck);
        let p = &particles[0];
        assert!(libm::fabs(p.pos.length() - 2.5) < 1e-9);
    }

    #[test]
    fn outside_and_center_particles_untouched() {
        let mut particles = [
            Particle::new(Vec2::new(20.0f64, 0.0)),
            Particle::new(Vec2::new(10.0f64, 0.0)),
            Particle::new(Vec2::new(0.0f64, 0.0)),
        ];
        resolve_circle(&mut particles, Vec2::zero(), 10.0, CircleMode::Blow);
        assert_eq!(particles[0].pos, Vec2::new(20.0, 0.0));
        assert_eq!(particles[1].pos, Vec2::new(10.0, 0.0));
        assert_eq!(particles[2].pos, Vec2::new(0.0, 0.0));
    }
}
