//! Plane-circle collision detection. The plane is always body A.

use super::Manifold;
use crate::body::{Body, Shape};

/// Detect collision between a half-plane and a circle.
///
/// Two contact points are reported, the circle center's projection onto the
/// plane and the deepest point of the circle surface, so the resolver gets a
/// torque lever even from a single circular contact.
#[must_use]
pub fn detect_plane_circle_collision(plane: &Body, circle: &Body) -> Option<Manifold> {
    let &Shape::Plane { normal } = &plane.shape else {
        return None;
    };
    let &Shape::Circle { radius } = &circle.shape else {
        return None;
    };

    let distance = (circle.pos - plane.pos).dot(normal);
    if distance >= radius {
        return None;
    }

    let depth = radius - distance;
    let contacts = vec![circle.pos - normal * distance, circle.pos - normal * radius];

    Some(Manifold {
        normal,
        depth,
        contacts,
    })
}
