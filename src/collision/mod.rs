//! # Collision Detection and Response
//!
//! Narrow-phase routines, one module per unordered shape-kind pair, each
//! producing at most one contact manifold, plus the impulse-based resolver.
//! Dispatch gives every pair exactly one canonical implementation: planes
//! author the plane-X routines and polygons author the polygon-X routines,
//! so mixed pairs may swap their scene indices into canonical order.

mod circle_circle;
mod circle_polygon;
mod plane_circle;
mod plane_polygon;
mod polygon_polygon;
pub mod response;

pub use circle_circle::detect_circle_circle_collision;
pub use circle_polygon::detect_circle_polygon_collision;
pub use plane_circle::detect_plane_circle_collision;
pub use plane_polygon::detect_plane_polygon_collision;
pub use polygon_polygon::detect_polygon_polygon_collision;
pub use response::resolve_collision;

use crate::body::{Body, Shape};
use crate::math::Vec2;

/// One overlapping pair: unit normal pointing A to B, positive penetration
/// depth, and the ordered world-space contact points. Built fresh each step
/// and consumed immediately; never cached across steps.
#[derive(Clone, Debug)]
pub struct Manifold {
    pub normal: Vec2,
    pub depth: f32,
    pub contacts: Vec<Vec2>,
}

/// A manifold paired with the scene indices of its two bodies, in the
/// canonical routine order (`manifold.normal` points from `a` to `b`).
#[derive(Clone, Debug)]
pub struct Collision {
    pub a: usize,
    pub b: usize,
    pub manifold: Manifold,
}

/// Detect a collision between bodies `a` and `b` at scene indices
/// `index_a`/`index_b`.
///
/// Two static bodies never collide (this also breaks the plane-plane case,
/// which would otherwise have no well-defined normal). Every remaining pair
/// is gated by the AABB overlap test; planes carry the infinite default box,
/// so the gate never rejects them.
#[must_use]
pub fn detect(index_a: usize, index_b: usize, a: &Body, b: &Body) -> Option<Collision> {
    if a.is_static() && b.is_static() {
        return None;
    }
    if !a.aabb.overlaps(&b.aabb) {
        return None;
    }

    let (first, second, manifold) = match (&a.shape, &b.shape) {
        (Shape::Plane { .. }, Shape::Plane { .. }) => return None,
        (Shape::Circle { .. }, Shape::Circle { .. }) => {
            (index_a, index_b, detect_circle_circle_collision(a, b))
        }
        (Shape::Plane { .. }, Shape::Circle { .. }) => {
            (index_a, index_b, detect_plane_circle_collision(a, b))
        }
        (Shape::Circle { .. }, Shape::Plane { .. }) => {
            (index_b, index_a, detect_plane_circle_collision(b, a))
        }
        (Shape::Plane { .. }, Shape::Polygon(_)) => {
            (index_a, index_b, detect_plane_polygon_collision(a, b))
        }
        (Shape::Polygon(_), Shape::Plane { .. }) => {
            (index_b, index_a, detect_plane_polygon_collision(b, a))
        }
        (Shape::Polygon(_), Shape::Circle { .. }) => {
            (index_a, index_b, detect_circle_polygon_collision(a, b))
        }
        (Shape::Circle { .. }, Shape::Polygon(_)) => {
            (index_b, index_a, detect_circle_polygon_collision(b, a))
        }
        (Shape::Polygon(_), Shape::Polygon(_)) => {
            (index_a, index_b, detect_polygon_polygon_collision(a, b))
        }
    };

    let manifold = manifold?;

    let finite = manifold.depth.is_finite()
        && manifold.normal.x.is_finite()
        && manifold.normal.y.is_finite();
    debug_assert!(finite, "narrow phase produced a non-finite manifold");
    if !finite {
        tracing::debug!(a = first, b = second, "dropping non-finite manifold");
        return None;
    }

    Some(Collision {
        a: first,
        b: second,
        manifold,
    })
}
