//! Separating Axis Theorem overlap test for convex polygons.
//!
//! A [`Polygon`] is an ordered list of particle indices; edge `i` runs from
//! vertex `i` to vertex `(i + 1) % n`. Its unit edge normals are cached and
//! only recomputed when the caller asks for it (usually once per frame, after
//! the step and before testing).
//!
//! Both polygons must be convex with consistent winding and no duplicate
//! adjacent vertices. Concave input gives unreliable answers.

use alloc::vec::Vec;

use crate::error::{check_particle, PhysicsError};
use crate::float::Float;
use crate::geometry::{dot, unit_perpendicular};
use crate::particle::Particle;
use crate::vec::Vec2;

/// Deserialized polygons are checked for vertex and normal counts. Their
/// vertex indices can only be checked against a particle store, so they are
/// trusted like any index handed to the slice-level functions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PolygonData<F>"))]
pub struct Polygon<F: Float> {
    vertices: Vec<usize>,
    normals: Vec<Vec2<F>>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PolygonData<F: Float> {
    vertices: Vec<usize>,
    normals: Vec<Vec2<F>>,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<PolygonData<F>> for Polygon<F> {
    type Error = PhysicsError;

    fn try_from(data: PolygonData<F>) -> Result<Self, PhysicsError> {
        if data.vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices { count: data.vertices.len() });
        }
        if data.normals.len() != data.vertices.len() {
            return Err(PhysicsError::NormalCountMismatch {
                vertices: data.vertices.len(),
                normals: data.normals.len(),
            });
        }
        Ok(Polygon { vertices: data.vertices, normals: data.normals })
    }
}

impl<F: Float> Polygon<F> {
    /// Build a polygon over existing particles and compute its normals.
    pub fn new(vertices: Vec<usize>, particles: &[Particle<F>]) -> Result<Self, PhysicsError> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices { count: vertices.len() });
        }
        for &v in &vertices {
            check_particle(v, particles.len())?;
        }
        let mut polygon = Polygon { vertices, normals: Vec::new() };
        polygon.update_normals(particles);
        Ok(polygon)
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Normals as of the last [`Polygon::update_normals`].
    pub fn normals(&self) -> &[Vec2<F>] {
        &self.normals
    }

    /// Recompute the cached normals from current vertex positions.
    pub fn update_normals(&mut self, particles: &[Particle<F>]) {
        self.normals = self.compute_normals(particles);
    }

    /// Unit normal of each edge: perpendicular of `vertex[i] - vertex[i + 1]`.
    pub fn compute_normals(&self, particles: &[Particle<F>]) -> Vec<Vec2<F>> {
        let n = self.vertices.len();
        let mut normals = Vec::with_capacity(n);
        for i in 0..n {
            let current = particles[self.vertices[i]].pos;
            let next = particles[self.vertices[(i + 1) % n]].pos;
            normals.push(unit_perpendicular(current - next));
        }
        normals
    }

    /// `(min, max)` of the vertices projected onto `axis`.
    pub fn project(&self, particles: &[Particle<F>], axis: Vec2<F>) -> (F, F) {
        let mut min = F::infinity();
        let mut max = -F::infinity();
        for &v in &self.vertices {
            let projection = dot(particles[v].pos, axis);
            if projection < min {
                min = projection;
            }
            if projection > max {
                max = projection;
            }
        }
        (min, max)
    }

    /// Whether this polygon and `other` overlap, using both polygons' cached
    /// normals as candidate axes. Touching edges count as overlapping.
    pub fn overlaps(&self, other: &Polygon<F>, particles: &[Particle<F>]) -> bool {
        overlaps(self, other, particles)
    }

    /// Signed area by the shoelace formula. Positive for counter-clockwise
    /// winding in a y-up frame (clockwise on screen).
    pub fn signed_area(&self, particles: &[Particle<F>]) -> F {
        let n = self.vertices.len();
        let mut sum = F::zero();
        for i in 0..n {
            let a = particles[self.vertices[i]].pos;
            let b = particles[self.vertices[(i + 1) % n]].pos;
            sum = sum + a.cross(b);
        }
        sum * F::half()
    }

    /// Average vertex position.
    pub fn centroid(&self, particles: &[Particle<F>]) -> Vec2<F> {
        let mut sum = Vec2::zero();
        for &v in &self.vertices {
            sum += particles[v].pos;
        }
        sum.scale(F::one() / F::from_usize(self.vertices.len()))
    }
}

/// SAT test. Every normal of `a` and then of `b` is tried; the first axis
/// whose projections do not intersect proves separation. Shared axes are
/// tested twice.
pub fn overlaps<F: Float>(a: &Polygon<F>, b: &Polygon<F>, particles: &[Particle<F>]) -> bool {
    a.normals.iter().chain(b.normals.iter()).all(|&axis| {
        let (min_a, max_a) = a.project(particles, axis);
        let (min_b, max_b) = b.project(particles, axis);
        !(max_a < min_b || max_b < min_a)
    })
}
