//! Polygon-polygon collision detection: separating axis test over both edge
//! sets, then reference/incident face selection and segment clipping.

use super::Manifold;
use crate::body::{Body, Shape};
use crate::math::Vec2;

struct Projection {
    min: f32,
    min_index: usize,
    max: f32,
    max_index: usize,
}

/// Project a vertex set onto a unit axis, tracking the extremal vertices.
fn project(points: &[Vec2], axis: Vec2) -> Projection {
    let mut proj = Projection {
        min: f32::INFINITY,
        min_index: 0,
        max: f32::NEG_INFINITY,
        max_index: 0,
    };
    for (i, &point) in points.iter().enumerate() {
        let distance = point.dot(axis);
        if distance < proj.min {
            proj.min = distance;
            proj.min_index = i;
        }
        if distance > proj.max {
            proj.max = distance;
            proj.max_index = i;
        }
    }
    proj
}

/// From the support vertex, pick whichever of its two adjacent edges lies
/// flatter against the normal; that edge best approximates the contact face.
/// Returns the edge's start-vertex index, the edge vector, and its alignment.
fn flatter_adjacent_edge(edges: &[Vec2], support: usize, normal: Vec2) -> (usize, Vec2, f32) {
    let n = edges.len();
    let next = edges[support];
    let prev = edges[(support + n - 1) % n];
    let dp_next = next.dot(normal).abs();
    let dp_prev = prev.dot(normal).abs();
    if dp_next > dp_prev {
        ((support + n - 1) % n, prev, dp_prev)
    } else {
        (support, next, dp_next)
    }
}

/// Clip the segment `p1..p2` against the side-plane through `pos` facing
/// `direction`, keeping the part on the facing side. Returns `None` when the
/// whole segment is clipped away.
fn clip(p1: Vec2, p2: Vec2, pos: Vec2, direction: Vec2) -> Option<(Vec2, Vec2)> {
    let dp1 = (p1 - pos).dot(direction);
    let dp2 = (p2 - pos).dot(direction);

    if dp1 < 0.0 && dp2 < 0.0 {
        return None;
    }
    if dp1 >= 0.0 && dp2 >= 0.0 {
        return Some((p1, p2));
    }

    let along = (p2 - p1).normalized();
    let t = (pos - p1).dot(direction) / along.dot(direction);
    let clipped = p1 + along * t;

    if dp1 <= 0.0 {
        Some((clipped, p2))
    } else {
        Some((p1, clipped))
    }
}

/// Detect collision between two convex polygons.
///
/// Classic SAT with clipping: any axis with disjoint projections proves
/// separation; otherwise the minimum-overlap axis is the contact normal
/// candidate, oriented A to B by the center-to-center vector. The polygon
/// whose support edge lies flatter against the normal contributes the
/// reference face; the other polygon's edge is clipped against the reference
/// side-planes and only penetrating clip points survive as contacts.
#[must_use]
pub fn detect_polygon_polygon_collision(a: &Body, b: &Body) -> Option<Manifold> {
    let Shape::Polygon(poly_a) = &a.shape else {
        return None;
    };
    let Shape::Polygon(poly_b) = &b.shape else {
        return None;
    };

    let points_a = poly_a.world_points();
    let points_b = poly_b.world_points();
    let edges_a = poly_a.edges();
    let edges_b = poly_b.edges();

    let mut depth = f32::INFINITY;
    let mut normal = Vec2::ZERO;
    let mut support_a = 0usize;
    let mut support_b = 0usize;

    for edge in edges_a.iter().chain(edges_b.iter()) {
        let axis = edge.perpendicular().normalized();
        let proj_a = project(points_a, axis);
        let proj_b = project(points_b, axis);

        if proj_a.max < proj_b.min || proj_a.min > proj_b.max {
            return None;
        }

        let (overlap, index_a, index_b) = if proj_a.max < proj_b.max {
            (proj_a.max - proj_b.min, proj_a.max_index, proj_b.min_index)
        } else {
            (proj_b.max - proj_a.min, proj_a.min_index, proj_b.max_index)
        };

        if overlap < depth {
            depth = overlap;
            normal = axis;
            support_a = index_a;
            support_b = index_b;
        }
    }

    if normal.dot(b.pos - a.pos) < 0.0 {
        normal = -normal;
    }

    let num_a = points_a.len();
    let num_b = points_b.len();
    let (support_a, edge_a, dp_a) = flatter_adjacent_edge(edges_a, support_a, normal);
    let (support_b, edge_b, dp_b) = flatter_adjacent_edge(edges_b, support_b, normal);

    // The flatter of the two candidate edges is the reference face. When B's
    // edge wins the normal is flipped for clipping and flipped back before
    // the manifold is emitted; manifold normals are always A to B.
    let (ref_p1, ref_p2, ref_edge, inc_p1, inc_p2, flip) = if dp_a < dp_b {
        (
            points_a[support_a],
            points_a[(support_a + 1) % num_a],
            edge_a.normalized(),
            points_b[support_b],
            points_b[(support_b + 1) % num_b],
            false,
        )
    } else {
        normal = -normal;
        (
            points_b[support_b],
            points_b[(support_b + 1) % num_b],
            edge_b.normalized(),
            points_a[support_a],
            points_a[(support_a + 1) % num_a],
            true,
        )
    };

    let (inc_p1, inc_p2) = clip(inc_p1, inc_p2, ref_p1, ref_edge)?;
    let (inc_p1, inc_p2) = clip(inc_p1, inc_p2, ref_p2, -ref_edge)?;

    let mut contacts = Vec::new();
    if (inc_p1 - ref_p1).dot(normal) < 0.0 {
        contacts.push(inc_p1);
    }
    if (inc_p2 - ref_p2).dot(normal) < 0.0 {
        contacts.push(inc_p2);
    }
    if contacts.is_empty() {
        return None;
    }

    if flip {
        normal = -normal;
    }

    Some(Manifold {
        normal,
        depth,
        contacts,
    })
}
