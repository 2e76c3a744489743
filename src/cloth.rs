//! Square cloth grid with structural and optional shear constraints.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::shapes::Body;
use crate::vec::Vec2;
use crate::world::World;

/// Configuration for a cloth grid.
#[derive(Clone, Debug)]
pub struct ClothConfig<F: Float> {
    /// Top-left particle position.
    pub origin: Vec2<F>,
    /// Particles per row and per column.
    pub segments: usize,
    pub gap: F,
    /// Pin every `pin_every`-th particle of the top row. The last column of
    /// the top row is always pinned. 0 pins only the last column.
    pub pin_every: usize,
    /// Add hidden diagonal constraints in every cell.
    pub shear: bool,
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        ClothConfig {
            origin: Vec2::new(F::from_f32(100.0), F::from_f32(100.0)),
            segments: 15,
            gap: F::from_f32(20.0),
            pin_every: 7,
            shear: false,
        }
    }
}

/// Build a cloth. Particle at `(col, row)` has index
/// `base + row * segments + col`.
///
/// Constraint order is every horizontal link row by row, then every vertical
/// link, then shear diagonals. On error nothing is added to the world.
pub fn cloth<F: Float>(world: &mut World<F>, config: &ClothConfig<F>) -> Result<Body, PhysicsError> {
    world.build(|world| {
        let n = config.segments;
        let start = Body::start(world);
        let base = start.0;
        let index = |col: usize, row: usize| base + row * n + col;

        for row in 0..n {
            for col in 0..n {
                let x = config.origin.x + F::from_usize(col) * config.gap;
                let y = config.origin.y + F::from_usize(row) * config.gap;
                let mut particle = Particle::new(Vec2::new(x, y));
                let pinned_column = (config.pin_every > 0 && col % config.pin_every == 0) || col + 1 == n;
                if row == 0 && pinned_column {
                    particle.pin();
                }
                world.add_particle(particle);
            }
        }

        // Structural: horizontal
        for row in 0..n {
            for col in 0..n.saturating_sub(1) {
                world.add_constraint(index(col, row), index(col + 1, row))?;
            }
        }

        // Structural: vertical
        for row in 0..n.saturating_sub(1) {
            for col in 0..n {
                world.add_constraint(index(col, row), index(col, row + 1))?;
            }
        }

        if config.shear {
            for row in 0..n.saturating_sub(1) {
                for col in 0..n.saturating_sub(1) {
                    world.add_hidden_constraint(index(col, row), index(col + 1, row + 1))?;
                    world.add_hidden_constraint(index(col + 1, row), index(col, row + 1))?;
                }
            }
        }

        Ok(Body::finish(world, start, None))
    })
}
