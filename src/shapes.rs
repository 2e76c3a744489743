//! Rigid-ish shapes made of particles, edge constraints and cross braces.
//!
//! Every builder appends to a [`World`] and registers the outline as a SAT
//! polygon so shapes can be tested against each other.

use alloc::vec::Vec;
use core::ops::Range;

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use crate::world::World;

/// Index ranges of what a builder appended to the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    pub particles: Range<usize>,
    pub constraints: Range<usize>,
    /// Outline polygon, if the builder registered one.
    pub polygon: Option<usize>,
}

impl Body {
    pub(crate) fn start<F: Float>(world: &World<F>) -> (usize, usize) {
        (world.particle_count(), world.constraint_count())
    }

    pub(crate) fn finish<F: Float>(world: &World<F>, start: (usize, usize), polygon: Option<usize>) -> Body {
        Body {
            particles: start.0..world.particle_count(),
            constraints: start.1..world.constraint_count(),
            polygon,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Axis-aligned box with top-left corner `origin`, four edges and two hidden
/// diagonal braces. The top-left corner starts moving with `velocity`
/// (`prev_pos = origin - velocity`). On error nothing is added to the world.
pub fn rectangle<F: Float>(
    world: &mut World<F>,
    origin: Vec2<F>,
    width: F,
    height: F,
    velocity: Vec2<F>,
) -> Result<Body, PhysicsError> {
    world.build(|world| {
        let start = Body::start(world);
        let base = start.0;
        world.add_particle(Particle::with_velocity(origin, velocity));
        world.add_particle(Particle::new(Vec2::new(origin.x + width, origin.y)));
        world.add_particle(Particle::new(Vec2::new(origin.x + width, origin.y + height)));
        world.add_particle(Particle::new(Vec2::new(origin.x, origin.y + height)));

        for i in 0..4 {
            world.add_constraint(base + i, base + (i + 1) % 4)?;
        }
        world.add_hidden_constraint(base, base + 2)?;
        world.add_hidden_constraint(base + 1, base + 3)?;

        let polygon = world.add_polygon((base..base + 4).collect())?;
        Ok(Body::finish(world, start, Some(polygon)))
    })
}

/// Triangle with its base from `origin` to `origin + (width, 0)` and apex
/// `height` below the middle of the base.
pub fn triangle<F: Float>(
    world: &mut World<F>,
    origin: Vec2<F>,
    width: F,
    height: F,
) -> Result<Body, PhysicsError> {
    world.build(|world| {
        let start = Body::start(world);
        let base = start.0;
        world.add_particle(Particle::new(origin));
        world.add_particle(Particle::new(Vec2::new(origin.x + width, origin.y)));
        world.add_particle(Particle::new(Vec2::new(origin.x + width * F::half(), origin.y + height)));

        world.add_constraint(base, base + 1)?;
        world.add_constraint(base + 1, base + 2)?;
        world.add_constraint(base, base + 2)?;

        let polygon = world.add_polygon((base..base + 3).collect())?;
        Ok(Body::finish(world, start, Some(polygon)))
    })
}

/// Configuration for [`regular_polygon`].
#[derive(Clone, Debug)]
pub struct NgonConfig<F: Float> {
    pub center: Vec2<F>,
    pub radius: F,
    pub sides: usize,
    /// Each rim point `i` is joined to `(i + slice1) % sides`.
    pub slice1: usize,
    /// And to `(i + slice2) % sides`, which braces the shape.
    pub slice2: usize,
    /// Add a hub particle at the center joined to every rim point.
    pub center_point: bool,
}

impl<F: Float> Default for NgonConfig<F> {
    fn default() -> Self {
        NgonConfig {
            center: Vec2::new(F::from_f32(100.0), F::from_f32(100.0)),
            radius: F::from_f32(50.0),
            sides: 8,
            slice1: 1,
            slice2: 6,
            center_point: false,
        }
    }
}

/// Regular polygon (hexagon by default when `sides = 6`). Rim points start at
/// angle `2*pi/sides` and advance by the same step.
pub fn regular_polygon<F: Float>(world: &mut World<F>, config: &NgonConfig<F>) -> Result<Body, PhysicsError> {
    let n = config.sides;
    if n < 3 {
        return Err(PhysicsError::TooFewVertices { count: n });
    }
    world.build(|world| {
        let start = Body::start(world);
        let base = start.0;
        let step = F::two() * F::pi() / F::from_usize(n);

        for i in 0..n {
            let angle = step * F::from_usize(i + 1);
            let pos = Vec2::new(
                config.center.x + angle.cos() * config.radius,
                config.center.y + angle.sin() * config.radius,
            );
            world.add_particle(Particle::new(pos));
        }

        for i in 0..n {
            for slice in [config.slice1, config.slice2] {
                let j = (i + slice) % n;
                // A slice that is a multiple of `n` would join a point to itself.
                if j != i {
                    world.add_constraint(base + i, base + j)?;
                }
            }
        }

        if config.center_point {
            let hub = world.add_particle(Particle::new(config.center));
            for i in 0..n {
                world.add_constraint(hub, base + i)?;
            }
        }

        let outline: Vec<usize> = (base..base + n).collect();
        let polygon = world.add_polygon(outline)?;
        Ok(Body::finish(world, start, Some(polygon)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_layout() {
        let mut world: World<f64> = World::new();
        let body = rectangle(&mut world, Vec2::new(10.0, 10.0), 20.0, 30.0, Vec2::zero()).unwrap();
        assert_eq!(body.particles, 0..4);
        assert_eq!(body.constraints, 0..6);
        assert_eq!(world.constraints().iter().filter(|c| c.hidden).count(), 2);
        assert_eq!(world.particle(2).unwrap().pos, Vec2::new(30.0, 40.0));
        assert_eq!(body.polygon, Some(0));
    }

    #[test]
    fn rectangle_corner_moves_with_velocity() {
        let mut world: World<f64> = World::new();
        rectangle(&mut world, Vec2::new(10.0, 10.0), 20.0, 30.0, Vec2::new(3.0, -1.0)).unwrap();
        let corner = world.particle(0).unwrap();
        assert_eq!(corner.velocity(), Vec2::new(3.0, -1.0));
        assert_eq!(corner.prev_pos, Vec2::new(7.0, 11.0));
        assert_eq!(world.particle(1).unwrap().velocity(), Vec2::zero());
    }

    #[test]
    fn flat_rectangle_leaves_world_untouched() {
        let mut world: World<f64> = World::new();
        triangle(&mut world, Vec2::new(0.0, 0.0), 10.0, 10.0).unwrap();
        let result = rectangle(&mut world, Vec2::new(10.0, 10.0), 20.0, 0.0, Vec2::zero());
        assert_eq!(result, Err(PhysicsError::ZeroRestLength { a: 4, b: 5 }));
        assert_eq!(world.particle_count(), 3);
        assert_eq!(world.constraint_count(), 3);
        assert_eq!(world.polygons().len(), 1);
    }

    #[test]
    fn second_shape_offsets_indices() {
        let mut world: World<f64> = World::new();
        triangle(&mut world, Vec2::new(0.0, 0.0), 10.0, 10.0).unwrap();
        let body = triangle(&mut world, Vec2::new(50.0, 0.0), 10.0, 10.0).unwrap();
        assert_eq!(body.particles, 3..6);
        assert_eq!(body.constraints, 3..6);
        assert_eq!(world.polygon(1).unwrap().vertices(), &[3, 4, 5]);
    }

    #[test]
    fn hexagon_with_hub() {
        let mut world: World<f64> = World::new();
        let config = NgonConfig {
            center: Vec2::new(0.0, 0.0),
            radius: 10.0,
            sides: 6,
            slice1: 1,
            slice2: 3,
            center_point: true,
        };
        let body = regular_polygon(&mut world, &config).unwrap();
        assert_eq!(body.len(), 7);
        // 6 rim edges, 6 cross braces, 6 spokes.
        assert_eq!(body.constraints.len(), 18);
        for p in &world.particles()[..6] {
            assert!(libm::fabs(p.pos.length() - 10.0) < 1e-9);
        }
    }

    #[test]
    fn too_few_sides() {
        let mut world: World<f64> = World::new();
        let config = NgonConfig { sides: 2, ..NgonConfig::default() };
        assert_eq!(
            regular_polygon(&mut world, &config),
            Err(PhysicsError::TooFewVertices { count: 2 })
        );
    }
}
