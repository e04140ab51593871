//! # Rigid Bodies
//!
//! The kind-tagged body shared by every shape: pose, velocity, frozen inverse
//! mass properties, material, and the per-step bounding box. A body is static
//! exactly when `inv_mass == 0`; there is no separate flag, and construction
//! keeps `inv_mass == 0 <=> inv_inertia == 0` so the impulse math stays sound.

use std::f32::consts::PI;

use crate::error::PhysicsError;
use crate::math::{Rot2, Vec2};
use crate::types::{Aabb, Material};

/// Collision geometry attached to a [`Body`].
#[derive(Clone, Debug)]
pub enum Shape {
    /// Infinite half-plane through the body position with a unit normal.
    Plane { normal: Vec2 },
    /// Disk of the given radius.
    Circle { radius: f32 },
    /// Simple convex polygon, stored relative to its centroid.
    Polygon(PolygonShape),
}

/// Convex polygon geometry plus the world-space caches rebuilt by `bound()`.
#[derive(Clone, Debug)]
pub struct PolygonShape {
    /// Local vertices, recentred on the centroid at construction.
    points: Vec<Vec2>,
    /// Vertices rotated and translated into world space.
    world_points: Vec<Vec2>,
    /// World-space edge vectors, `world_points[i+1] - world_points[i]`.
    edges: Vec<Vec2>,
}

impl PolygonShape {
    /// Local centroid-relative vertices. Immutable after construction.
    #[must_use]
    pub fn local_points(&self) -> &[Vec2] {
        &self.points
    }

    /// World-space vertices as of the last `bound()`.
    #[must_use]
    pub fn world_points(&self) -> &[Vec2] {
        &self.world_points
    }

    /// World-space edge vectors as of the last `bound()`.
    #[must_use]
    pub fn edges(&self) -> &[Vec2] {
        &self.edges
    }
}

/// A rigid body in the scene.
#[derive(Clone, Debug)]
pub struct Body {
    pub shape: Shape,
    /// World position of the center of mass.
    pub pos: Vec2,
    /// Orientation angle in radians.
    pub ang: f32,
    pub vel: Vec2,
    pub ang_vel: f32,
    /// Inverse mass; zero means immovable.
    pub inv_mass: f32,
    /// Inverse of the scalar 2D moment of inertia; zero iff `inv_mass` is zero.
    pub inv_inertia: f32,
    pub material: Material,
    pub aabb: Aabb,
}

impl Body {
    fn new(shape: Shape, pos: Vec2, ang: f32, inv_mass: f32, inv_inertia: f32) -> Self {
        let mut body = Self {
            shape,
            pos,
            ang,
            vel: Vec2::ZERO,
            ang_vel: 0.0,
            inv_mass,
            inv_inertia,
            material: Material::default(),
            aabb: Aabb::default(),
        };
        body.bound();
        body
    }

    /// Static half-plane through `pos` facing along `normal`.
    ///
    /// The normal is normalized here; the stored angle is derived from it for
    /// display purposes only and plays no part in collision math.
    pub fn plane(pos: Vec2, normal: Vec2) -> Result<Self, PhysicsError> {
        if normal.squared_length() == 0.0 {
            return Err(PhysicsError::InvalidGeometry("plane normal has zero length"));
        }
        let normal = normal.normalized();
        let ang = normal.y.atan2(normal.x);
        Ok(Self::new(Shape::Plane { normal }, pos, ang, 0.0, 0.0))
    }

    /// Circle of unit areal density.
    pub fn circle(pos: Vec2, radius: f32) -> Result<Self, PhysicsError> {
        Self::circle_with_density(pos, radius, 1.0)
    }

    /// Circle with an explicit inverse density; zero makes the body static.
    pub fn circle_with_density(pos: Vec2, radius: f32, inv_density: f32) -> Result<Self, PhysicsError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidGeometry("circle radius must be positive"));
        }
        if inv_density < 0.0 {
            return Err(PhysicsError::InvalidGeometry("inverse density must be non-negative"));
        }
        let (inv_mass, inv_inertia) = if inv_density == 0.0 {
            (0.0, 0.0)
        } else {
            (inv_density / (radius * radius), 4.0 / (PI * radius.powi(4)))
        };
        Ok(Self::new(Shape::Circle { radius }, pos, 0.0, inv_mass, inv_inertia))
    }

    /// Convex polygon from an ordered vertex loop around `pos`.
    pub fn polygon(pos: Vec2, points: &[Vec2]) -> Result<Self, PhysicsError> {
        Self::polygon_with_density(pos, points, 1.0)
    }

    /// Convex polygon with an explicit inverse density; zero makes it static.
    ///
    /// Vertices are recentred on their shoelace centroid so the local origin
    /// is the center of mass. Area and second moment are computed once from
    /// the recentred vertices and frozen.
    pub fn polygon_with_density(
        pos: Vec2,
        points: &[Vec2],
        inv_density: f32,
    ) -> Result<Self, PhysicsError> {
        let num_points = points.len();
        if num_points < 3 {
            return Err(PhysicsError::InvalidGeometry("polygon needs at least 3 vertices"));
        }
        if inv_density < 0.0 {
            return Err(PhysicsError::InvalidGeometry("inverse density must be non-negative"));
        }

        let mut area = 0.0f32;
        let mut centroid = Vec2::ZERO;
        for i in 0..num_points {
            let p1 = points[i];
            let p2 = points[(i + 1) % num_points];
            let cross = p1.cross(p2);
            area += cross;
            centroid += (p1 + p2) * cross;
        }
        area /= 2.0;
        if area.abs() <= f32::EPSILON {
            return Err(PhysicsError::InvalidGeometry("polygon has zero area"));
        }
        let centroid = centroid / (6.0 * area);
        let area = area.abs();

        let local: Vec<Vec2> = points.iter().map(|&p| p - centroid).collect();

        // Consecutive edge cross products must not change sign; this rejects
        // concave and self-intersecting loops in one pass.
        let mut winding = 0.0f32;
        for i in 0..num_points {
            let e1 = local[(i + 1) % num_points] - local[i];
            let e2 = local[(i + 2) % num_points] - local[(i + 1) % num_points];
            let turn = e1.cross(e2);
            if turn != 0.0 {
                if winding == 0.0 {
                    winding = turn.signum();
                } else if turn.signum() != winding {
                    return Err(PhysicsError::InvalidGeometry("polygon is not convex"));
                }
            }
        }

        let mut inertia = 0.0f32;
        for i in 0..num_points {
            let p1 = local[i];
            let p2 = local[(i + 1) % num_points];
            inertia += p1.cross(p2) * (p1.dot(p1) + p1.dot(p2) + p2.dot(p2));
        }
        let inertia = (inertia / 12.0).abs();

        let (inv_mass, inv_inertia) = if inv_density == 0.0 {
            (0.0, 0.0)
        } else {
            (inv_density / area, 1.0 / inertia)
        };

        let shape = Shape::Polygon(PolygonShape {
            world_points: Vec::with_capacity(num_points),
            edges: Vec::with_capacity(num_points),
            points: local,
        });
        Ok(Self::new(shape, pos, 0.0, inv_mass, inv_inertia))
    }

    /// Set the initial linear velocity.
    #[must_use]
    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Set the initial angular velocity.
    #[must_use]
    pub fn with_angular_velocity(mut self, ang_vel: f32) -> Self {
        self.ang_vel = ang_vel;
        self
    }

    /// Set the initial orientation and refresh the bounds.
    #[must_use]
    pub fn with_rotation(mut self, ang: f32) -> Self {
        self.ang = ang;
        self.bound();
        self
    }

    /// Replace the default material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Whether the body is immovable.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Advance the body by `dt` under `gravity`: semi-implicit Euler, gravity
    /// folded into velocity before the position update. Static bodies are a
    /// no-op. Refreshes the bounding box and polygon world-space caches.
    pub fn step(&mut self, dt: f32, gravity: Vec2) {
        if self.inv_mass == 0.0 {
            return;
        }
        self.vel += gravity * dt;
        self.pos += self.vel * dt;
        self.ang += self.ang_vel * dt;
        self.bound();
    }

    /// Velocity of the material point at `offset` from the center of mass.
    #[must_use]
    pub fn vel_at(&self, offset: Vec2) -> Vec2 {
        self.vel + offset.perpendicular() * self.ang_vel
    }

    /// Apply an impulse at `offset` from the center of mass.
    pub fn apply_impulse(&mut self, impulse: Vec2, offset: Vec2) {
        self.vel += impulse * self.inv_mass;
        self.ang_vel += offset.cross(impulse) * self.inv_inertia;
    }

    /// Positional correction only; never used by the velocity solver.
    pub fn correct_position(&mut self, push: Vec2) {
        self.pos += push * self.inv_mass;
    }

    /// Recompute the bounding box (and, for polygons, the transformed vertex
    /// and edge caches) from the current pose. Planes keep the infinite
    /// default box so they always pass the broad-phase gate.
    pub fn bound(&mut self) {
        match &mut self.shape {
            Shape::Plane { .. } => {}
            Shape::Circle { radius } => {
                let extent = Vec2::new(*radius, *radius);
                self.aabb = Aabb::new(self.pos - extent, self.pos + extent);
            }
            Shape::Polygon(poly) => {
                let rot = Rot2::new(self.ang);
                let pos = self.pos;

                poly.world_points.clear();
                poly.world_points.extend(poly.points.iter().map(|&p| rot.apply(p) + pos));

                let num_points = poly.world_points.len();
                poly.edges.clear();
                let mut min = poly.world_points[0];
                let mut max = min;
                for i in 0..num_points {
                    let p1 = poly.world_points[i];
                    let p2 = poly.world_points[(i + 1) % num_points];
                    poly.edges.push(p2 - p1);
                    min.x = min.x.min(p1.x);
                    min.y = min.y.min(p1.y);
                    max.x = max.x.max(p1.x);
                    max.y = max.y.max(p1.y);
                }
                self.aabb = Aabb::new(min, max);
            }
        }
    }
}
