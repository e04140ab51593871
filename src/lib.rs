#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Rigid2D
//!
//! A small 2D rigid-body physics core: static half-planes, circles, and
//! convex polygons advanced through time with contact detection and
//! impulse-based resolution.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`Body`] carries the shared rigid-body state (pose,
//!     velocity, inverse mass properties, material) and a [`Shape`] tag for
//!     the per-kind geometry. Validated factories compute and freeze mass
//!     properties at construction.
//! -   **Collision:** the [`collision`] module holds one narrow-phase
//!     routine per shape pair (SAT with clipping for polygon pairs) and the
//!     sequential-impulse resolver with Coulomb friction and positional
//!     correction.
//! -   **Scene:** [`Scene`] owns the body list and gravity and runs the
//!     fixed per-step pipeline: integrate, AABB broad phase, narrow phase,
//!     resolve. The step is single-threaded and deterministic for a fixed
//!     timestep.
//!
//! ## Usage
//!
//! ```rust
//! use rigid2d::{Body, Scene, Vec2};
//!
//! let mut scene = Scene::default();
//! scene.spawn(Body::plane(Vec2::ZERO, Vec2::new(0.0, 1.0)).unwrap());
//! scene.spawn(Body::circle(Vec2::new(0.0, 5.0), 1.0).unwrap());
//!
//! let dt = 1.0 / 60.0;
//! for _ in 0..60 {
//!     scene.step(dt);
//! }
//! ```

pub mod body;
pub mod builder;
pub mod collision;
pub mod error;
pub mod math;
pub mod scene;
pub mod types;

pub use body::{Body, PolygonShape, Shape};
pub use builder::regular_polygon;
pub use collision::{Collision, Manifold};
pub use error::PhysicsError;
pub use math::{Rot2, Vec2};
pub use scene::{Scene, DEFAULT_GRAVITY};
pub use types::{Aabb, Material};
