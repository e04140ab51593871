//! Plane-polygon collision detection. The plane is always body A.

use super::Manifold;
use crate::body::{Body, Shape};
use crate::math::Vec2;

/// Detect collision between a half-plane and a convex polygon.
///
/// Every vertex behind the plane becomes a contact point, so the manifold is
/// variable-length rather than capped at two; depth is the deepest vertex's
/// penetration.
#[must_use]
pub fn detect_plane_polygon_collision(plane: &Body, polygon: &Body) -> Option<Manifold> {
    let &Shape::Plane { normal } = &plane.shape else {
        return None;
    };
    let Shape::Polygon(poly) = &polygon.shape else {
        return None;
    };

    let mut min_distance = 0.0f32;
    let mut contacts: Vec<Vec2> = Vec::new();
    for &point in poly.world_points() {
        let distance = (point - plane.pos).dot(normal);
        if distance < min_distance {
            min_distance = distance;
        }
        if distance < 0.0 {
            contacts.push(point);
        }
    }

    if min_distance < 0.0 {
        Some(Manifold {
            normal,
            depth: -min_distance,
            contacts,
        })
    } else {
        None
    }
}
