//! # Scene Orchestration
//!
//! The scene owns the body list and gravity and drives the fixed per-step
//! pipeline: integrate, broad-phase pair generation, narrow phase, resolve.
//! Bodies are stored in insertion order and never removed; both the pair
//! order and the per-manifold contact order are deterministic, and the
//! single-pass solver depends on that order by design.

use crate::body::Body;
use crate::collision::{self, Collision};
use crate::math::Vec2;

/// Default gravity used by [`Scene::default`].
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, -9.8);

/// A simulated world of rigid bodies.
pub struct Scene {
    pub bodies: Vec<Body>,
    pub gravity: Vec2,
    paused: bool,
    collisions: Vec<Collision>,
}

impl Scene {
    /// Create an empty scene with the given gravity.
    #[must_use]
    pub const fn new(gravity: Vec2) -> Self {
        Self {
            bodies: Vec::new(),
            gravity,
            paused: false,
            collisions: Vec::new(),
        }
    }

    /// Append a body, returning its index. Bodies are never removed, so the
    /// index stays valid for the lifetime of the scene.
    pub fn spawn(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Manifolds produced by the most recent step, retained for inspection
    /// (e.g. a debug overlay drawn by an external render loop).
    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Advance the simulation by `dt`, or do nothing while paused.
    ///
    /// Returns the manifolds generated this step, `None` when paused. A
    /// fixed `dt` keeps the simulation reproducible; a variable `dt` works
    /// but degrades reproducibility.
    pub fn step(&mut self, dt: f32) -> Option<&[Collision]> {
        if self.paused {
            return None;
        }
        self.advance(dt);
        Some(&self.collisions)
    }

    /// Advance exactly one step regardless of the pause flag.
    pub fn step_once(&mut self, dt: f32) -> &[Collision] {
        self.advance(dt);
        &self.collisions
    }

    fn advance(&mut self, dt: f32) {
        self.integrate(dt);
        self.detect_collisions();
        self.resolve_collisions();
        tracing::trace!(
            bodies = self.bodies.len(),
            manifolds = self.collisions.len(),
            "scene step"
        );
    }

    /// Integrate every body in insertion order.
    fn integrate(&mut self, dt: f32) {
        for body in &mut self.bodies {
            body.step(dt, self.gravity);
        }
    }

    /// Run every unordered pair, in index order, through the AABB gate and
    /// the narrow phase.
    fn detect_collisions(&mut self) {
        self.collisions.clear();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if let Some(collision) = collision::detect(i, j, &self.bodies[i], &self.bodies[j]) {
                    self.collisions.push(collision);
                }
            }
        }
    }

    /// Resolve manifolds in generation order. Each manifold touches only its
    /// two bodies, so a split borrow is all the aliasing control needed.
    fn resolve_collisions(&mut self) {
        for k in 0..self.collisions.len() {
            let Collision { a, b, ref manifold } = self.collisions[k];
            let (body_a, body_b) = pair_mut(&mut self.bodies, a, b);
            collision::resolve_collision(body_a, body_b, manifold);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

/// Mutable references to two distinct slice elements.
fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
