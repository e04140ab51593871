//! Circle-circle collision detection.

use super::Manifold;
use crate::body::{Body, Shape};

/// Detect collision between two circles.
///
/// The single contact point sits on A's surface along the normal. Concentric
/// centers fall back to the `(0, 1)` normal from `normalized`, a defined
/// degenerate case rather than a division by zero.
#[must_use]
pub fn detect_circle_circle_collision(a: &Body, b: &Body) -> Option<Manifold> {
    let &Shape::Circle { radius: radius_a } = &a.shape else {
        return None;
    };
    let &Shape::Circle { radius: radius_b } = &b.shape else {
        return None;
    };

    let delta = b.pos - a.pos;
    let min_distance = radius_a + radius_b;
    let distance_squared = delta.squared_length();
    if distance_squared >= min_distance * min_distance {
        return None;
    }

    let distance = distance_squared.sqrt();
    let normal = delta.normalized();
    let depth = min_distance - distance;
    let contact = a.pos + normal * radius_a;

    Some(Manifold {
        normal,
        depth,
        contacts: vec![contact],
    })
}
