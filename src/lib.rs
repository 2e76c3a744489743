//! 2D point-mass physics with Verlet integration.
//!
//! `verlet2d` animates ropes, cloth, beams and braced shapes built from
//! particles and distance constraints, with boundary and circle collision and
//! a Separating Axis Theorem overlap test for convex polygons.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity (`pos - prev_pos`), friction
//!   and gravity per step
//! - **Constraint relaxation**: in-place Gauss-Seidel passes; `accuracy`
//!   trades cost for stiffness
//! - **Collision**: domain clamping with restitution, blow/suck circles
//! - **SAT**: yes/no overlap between convex polygons
//! - **Builders**: rope, cloth, beam, box, triangle, regular polygon
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use verlet2d::{rope, NoOpStepObserver, RopeConfig, World, WorldConfig};
//!
//! let mut world: World<f64> = World::new();
//! rope(&mut world, &RopeConfig::default()).unwrap();
//! let config = WorldConfig::new().with_bounds(800.0, 600.0);
//! for _ in 0..60 {
//!     world.step(&config, &mut NoOpStepObserver);
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod geometry;
pub mod particle;
pub mod constraint;
pub mod integrator;
pub mod solver;
pub mod collision;
pub mod sat;
pub mod world;
pub mod shapes;
pub mod rope;
pub mod cloth;
pub mod motion;
pub mod interact;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use geometry::{distance, dot, unit_perpendicular};
pub use particle::Particle;
pub use constraint::DistanceConstraint;
pub use integrator::integrate;
pub use solver::relax;
pub use collision::{clamp_to_bounds, resolve_circle, Bounds, CircleMode, CircleObstacle};
pub use sat::{overlaps, Polygon};
pub use world::World;
pub use shapes::{rectangle, regular_polygon, triangle, Body, NgonConfig};
pub use rope::{beam, rope, BeamConfig, RopeConfig};
pub use cloth::{cloth, ClothConfig};
pub use interact::{nearest_within, Grab};
pub use config::WorldConfig;
pub use observer::{NoOpStepObserver, StepCounter, StepObserver};
pub use error::PhysicsError;
