//! Ropes and beams built from chained distance constraints.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::shapes::Body;
use crate::vec::Vec2;
use crate::world::World;

/// Configuration for [`rope`].
#[derive(Clone, Debug)]
pub struct RopeConfig<F: Float> {
    /// The first particle sits at `origin + (gap, 0)`.
    pub origin: Vec2<F>,
    pub segments: usize,
    pub gap: F,
    /// Initial velocity of every particle.
    pub velocity: Vec2<F>,
    pub pin_first: bool,
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        RopeConfig {
            origin: Vec2::new(F::from_f32(100.0), F::from_f32(100.0)),
            segments: 15,
            gap: F::from_f32(20.0),
            velocity: Vec2::zero(),
            pin_first: true,
        }
    }
}

/// A horizontal rope of `segments` particles spaced `gap` apart, each joined
/// to the next. On error nothing is added to the world.
pub fn rope<F: Float>(world: &mut World<F>, config: &RopeConfig<F>) -> Result<Body, PhysicsError> {
    world.build(|world| {
        let start = Body::start(world);
        let base = start.0;

        for i in 0..config.segments {
            let x = config.origin.x + config.gap * F::from_usize(i + 1);
            let mut particle = Particle::with_velocity(Vec2::new(x, config.origin.y), config.velocity);
            if i == 0 && config.pin_first {
                particle.pin();
            }
            world.add_particle(particle);
        }

        for i in 1..config.segments {
            world.add_constraint(base + i - 1, base + i)?;
        }

        Ok(Body::finish(world, start, None))
    })
}

/// Configuration for [`beam`].
#[derive(Clone, Debug)]
pub struct BeamConfig<F: Float> {
    pub origin: Vec2<F>,
    /// Particles per row.
    pub segments: usize,
    /// Horizontal spacing.
    pub width: F,
    /// Vertical spacing between the two rows.
    pub height: F,
}

impl<F: Float> Default for BeamConfig<F> {
    fn default() -> Self {
        BeamConfig {
            origin: Vec2::new(F::from_f32(100.0), F::from_f32(100.0)),
            segments: 6,
            width: F::from_f32(50.0),
            height: F::from_f32(50.0),
        }
    }
}

/// Two parallel rows joined by rungs and braced by a diagonal in every cell,
/// forming a truss for bridges.
///
/// Particle `(row, col)` has index `base + row * segments + col`. Constraint
/// order is the top chain, then the diagonals from bottom `col` to top
/// `col + 1`, then the rungs, then the bottom chain.
pub fn beam<F: Float>(world: &mut World<F>, config: &BeamConfig<F>) -> Result<Body, PhysicsError> {
    world.build(|world| {
        let start = Body::start(world);
        let base = start.0;
        let cols = config.segments;

        for row in 0..2 {
            for col in 0..cols {
                let x = config.origin.x + config.width * F::from_usize(col);
                let y = config.origin.y + config.height * F::from_usize(row);
                world.add_particle(Particle::new(Vec2::new(x, y)));
            }
        }

        // Top chain
        for col in 1..cols {
            world.add_constraint(base + col - 1, base + col)?;
        }
        // Braces
        for col in 1..cols {
            world.add_constraint(base + cols + col - 1, base + col)?;
        }
        // Rungs
        for col in 0..cols {
            world.add_constraint(base + col, base + cols + col)?;
        }
        // Bottom chain
        for col in 1..cols {
            world.add_constraint(base + cols + col - 1, base + cols + col)?;
        }

        Ok(Body::finish(world, start, None))
    })
}
