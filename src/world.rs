//! Scene container: particle, constraint, polygon and obstacle stores plus
//! the per-frame step driver.

use alloc::vec::Vec;

use crate::collision::{clamp_to_bounds, CircleObstacle};
use crate::config::WorldConfig;
use crate::constraint::DistanceConstraint;
use crate::error::{check_particle, PhysicsError};
use crate::float::Float;
use crate::integrator::integrate;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::sat::Polygon;
use crate::solver::relax;
use crate::vec::Vec2;

/// A simulated scene.
///
/// Constraints and polygons refer to particles by index. Particles are never
/// removed, so every index handed out stays valid for the life of the world.
/// A world is advanced by one caller at a time; separate worlds share
/// nothing and may be stepped on separate threads.
#[derive(Clone, Debug, Default)]
pub struct World<F: Float> {
    particles: Vec<Particle<F>>,
    constraints: Vec<DistanceConstraint<F>>,
    polygons: Vec<Polygon<F>>,
    obstacles: Vec<CircleObstacle<F>>,
}

impl<F: Float> World<F> {
    pub fn new() -> Self {
        World {
            particles: Vec::new(),
            constraints: Vec::new(),
            polygons: Vec::new(),
            obstacles: Vec::new(),
        }
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Connect `a` and `b` at their current separation.
    pub fn add_constraint(&mut self, a: usize, b: usize) -> Result<usize, PhysicsError> {
        let constraint = DistanceConstraint::between(a, b, &self.particles)?;
        Ok(self.push_constraint(constraint))
    }

    /// Like [`World::add_constraint`] but flagged hidden for renderers.
    pub fn add_hidden_constraint(&mut self, a: usize, b: usize) -> Result<usize, PhysicsError> {
        let constraint = DistanceConstraint::between(a, b, &self.particles)?.hidden();
        Ok(self.push_constraint(constraint))
    }

    fn push_constraint(&mut self, constraint: DistanceConstraint<F>) -> usize {
        let idx = self.constraints.len();
        self.constraints.push(constraint);
        idx
    }

    pub fn add_polygon(&mut self, vertices: Vec<usize>) -> Result<usize, PhysicsError> {
        let polygon = Polygon::new(vertices, &self.particles)?;
        let idx = self.polygons.len();
        self.polygons.push(polygon);
        Ok(idx)
    }

    pub fn add_obstacle(&mut self, obstacle: CircleObstacle<F>) -> usize {
        let idx = self.obstacles.len();
        self.obstacles.push(obstacle);
        idx
    }

    /// Run a scene builder. If it fails, every particle, constraint and
    /// polygon it appended is dropped again so the world is left as it was.
    pub(crate) fn build<T>(
        &mut self,
        builder: impl FnOnce(&mut Self) -> Result<T, PhysicsError>,
    ) -> Result<T, PhysicsError> {
        let mark = (self.particles.len(), self.constraints.len(), self.polygons.len());
        let result = builder(self);
        if result.is_err() {
            self.particles.truncate(mark.0);
            self.constraints.truncate(mark.1);
            self.polygons.truncate(mark.2);
        }
        result
    }

    /// Advance one frame.
    ///
    /// Integrates once, then runs `config.accuracy` passes of boundary
    /// clamping followed by constraint relaxation, then resolves each circle
    /// obstacle. Polygon normals are not touched; call
    /// [`World::refresh_normals`] before collision tests.
    pub fn step<O: StepObserver>(&mut self, config: &WorldConfig<F>, observer: &mut O) {
        integrate(&mut self.particles, config.gravity, config.friction);
        observer.on_integrate();

        let bounds = config.bounds();
        for i in 0..config.accuracy {
            clamp_to_bounds(&mut self.particles, &bounds);
            relax(&mut self.particles, &self.constraints, config.stiffness);
            observer.on_relax_iteration(i);
        }

        if !self.obstacles.is_empty() {
            for obstacle in self.obstacles.iter() {
                obstacle.resolve(&mut self.particles);
            }
            observer.on_obstacles();
        }

        observer.on_step_complete();
    }

    /// Recompute every polygon's normals from current positions.
    pub fn refresh_normals(&mut self) {
        for polygon in self.polygons.iter_mut() {
            polygon.update_normals(&self.particles);
        }
    }

    /// SAT overlap test between two registered polygons.
    pub fn polygons_overlap(&self, a: usize, b: usize) -> Result<bool, PhysicsError> {
        let first = self.polygon(a)?;
        let second = self.polygon(b)?;
        Ok(first.overlaps(second, &self.particles))
    }

    /// Remove every constraint attached to `particle`. Remaining constraints
    /// keep their relative order. Returns how many were removed.
    pub fn tear_at(&mut self, particle: usize) -> Result<usize, PhysicsError> {
        check_particle(particle, self.particles.len())?;
        let before = self.constraints.len();
        self.constraints.retain(|c| !c.touches(particle));
        Ok(before - self.constraints.len())
    }

    /// Remove one constraint, shifting later ones down to keep solve order.
    pub fn remove_constraint(&mut self, index: usize) -> Result<DistanceConstraint<F>, PhysicsError> {
        if index >= self.constraints.len() {
            return Err(PhysicsError::ConstraintOutOfBounds { index, count: self.constraints.len() });
        }
        Ok(self.constraints.remove(index))
    }

    pub fn particle(&self, index: usize) -> Result<&Particle<F>, PhysicsError> {
        check_particle(index, self.particles.len())?;
        Ok(&self.particles[index])
    }

    pub fn particle_mut(&mut self, index: usize) -> Result<&mut Particle<F>, PhysicsError> {
        check_particle(index, self.particles.len())?;
        Ok(&mut self.particles[index])
    }

    pub fn constraint(&self, index: usize) -> Result<&DistanceConstraint<F>, PhysicsError> {
        self.constraints
            .get(index)
            .ok_or(PhysicsError::ConstraintOutOfBounds { index, count: self.constraints.len() })
    }

    pub fn polygon(&self, index: usize) -> Result<&Polygon<F>, PhysicsError> {
        self.polygons
            .get(index)
            .ok_or(PhysicsError::PolygonOutOfBounds { index, count: self.polygons.len() })
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    /// Direct access for interaction code. Length cannot change through it.
    pub fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }
    pub fn polygons(&self) -> &[Polygon<F>] { &self.polygons }
    pub fn obstacles(&self) -> &[CircleObstacle<F>] { &self.obstacles }
    pub fn obstacles_mut(&mut self) -> &mut [CircleObstacle<F>] { &mut self.obstacles }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StepCounter;
    use alloc::vec;

    #[test]
    fn lookups_report_bounds() {
        let mut world: World<f64> = World::new();
        world.add_particle(Particle::new(Vec2::new(0.0, 0.0)));
        assert_eq!(
            world.particle(3).err(),
            Some(PhysicsError::ParticleOutOfBounds { index: 3, count: 1 })
        );
        assert_eq!(
            world.constraint(0).err(),
            Some(PhysicsError::ConstraintOutOfBounds { index: 0, count: 0 })
        );
        assert_eq!(
            world.polygons_overlap(0, 1).err(),
            Some(PhysicsError::PolygonOutOfBounds { index: 0, count: 0 })
        );
        assert_eq!(
            world.add_constraint(0, 1).err(),
            Some(PhysicsError::ParticleOutOfBounds { index: 1, count: 1 })
        );
    }

    #[test]
    fn observer_sees_every_pass() {
        let mut world: World<f64> = World::new();
        world.add_particle(Particle::new(Vec2::new(10.0, 10.0)));
        world.add_obstacle(CircleObstacle::blow(Vec2::new(50.0, 50.0), 5.0));
        let config = WorldConfig::new().with_accuracy(6);
        let mut counter = StepCounter::default();
        world.step(&config, &mut counter);
        world.step(&config, &mut counter);
        assert_eq!(
            counter,
            StepCounter { integrations: 2, relax_iterations: 12, obstacle_passes: 2, steps: 2 }
        );
    }

    #[test]
    fn tear_keeps_order_of_survivors() {
        let mut world: World<f64> = World::new();
        for i in 0..4 {
            world.add_particle(Particle::new(Vec2::new(i as f64 * 10.0, 0.0)));
        }
        world.add_constraint(0, 1).unwrap();
        world.add_constraint(1, 2).unwrap();
        world.add_constraint(2, 3).unwrap();
        world.add_hidden_constraint(0, 3).unwrap();

        assert_eq!(world.tear_at(1), Ok(2));
        let pairs: Vec<(usize, usize)> = world.constraints().iter().map(|c| (c.a, c.b)).collect();
        assert_eq!(pairs, vec![(2, 3), (0, 3)]);
        assert!(world.constraint(1).unwrap().hidden);
    }

    #[test]
    fn remove_constraint_shifts() {
        let mut world: World<f64> = World::new();
        for i in 0..3 {
            world.add_particle(Particle::new(Vec2::new(i as f64, 0.0)));
        }
        world.add_constraint(0, 1).unwrap();
        world.add_constraint(1, 2).unwrap();
        let removed = world.remove_constraint(0).unwrap();
        assert_eq!((removed.a, removed.b), (0, 1));
        assert_eq!(world.constraint_count(), 1);
        assert_eq!(world.constraint(0).unwrap().a, 1);
        assert!(world.remove_constraint(5).is_err());
    }
}
