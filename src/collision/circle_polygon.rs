//! Circle-polygon collision detection. The polygon is always body A.

use super::Manifold;
use crate::body::{Body, Shape};
use crate::math::Vec2;

/// Detect collision between a convex polygon and a circle.
///
/// Each polygon edge whose closest point (clamped to the segment) lies within
/// the circle radius contributes its outward normal as a candidate axis; the
/// axis with minimum penetration wins. Two contact points are derived from
/// the winning axis: the deepest point of the circle surface and the circle
/// center's projection onto the edge line.
#[must_use]
pub fn detect_circle_polygon_collision(polygon: &Body, circle: &Body) -> Option<Manifold> {
    let Shape::Polygon(poly) = &polygon.shape else {
        return None;
    };
    let &Shape::Circle { radius } = &circle.shape else {
        return None;
    };

    let center = circle.pos;
    let points = poly.world_points();
    let num_points = points.len();

    let mut best: Option<(f32, Vec2, f32)> = None;
    for i in 0..num_points {
        let p1 = points[i];
        let p2 = points[(i + 1) % num_points];

        let closest = closest_point_on_segment(center, p1, p2);
        if (center - closest).squared_length() >= radius * radius {
            continue;
        }

        // Outward unit normal of this edge; local points are centroid
        // relative, so the body position is the polygon's interior.
        let mut axis = (p2 - p1).perpendicular().normalized();
        if axis.dot(p1 - polygon.pos) < 0.0 {
            axis = -axis;
        }

        let distance = (center - p1).dot(axis);
        let depth = radius - distance;
        match best {
            Some((best_depth, _, _)) if best_depth <= depth => {}
            _ => best = Some((depth, axis, distance)),
        }
    }

    let (depth, normal, distance) = best?;
    let contacts = vec![center - normal * radius, center - normal * distance];

    Some(Manifold {
        normal,
        depth,
        contacts,
    })
}

/// Closest point to `point` on the segment `p1..p2`.
fn closest_point_on_segment(point: Vec2, p1: Vec2, p2: Vec2) -> Vec2 {
    let edge = p2 - p1;
    let length_squared = edge.squared_length();
    if length_squared == 0.0 {
        return p1;
    }
    let t = ((point - p1).dot(edge) / length_squared).clamp(0.0, 1.0);
    p1 + edge * t
}
