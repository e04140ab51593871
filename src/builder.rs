//! # Scene Builders
//!
//! Convenience methods for adding validated bodies to a [`Scene`], plus the
//! regular-polygon vertex helper used by interaction layers that spawn
//! shapes on demand.

use std::f32::consts::PI;

use crate::body::Body;
use crate::error::PhysicsError;
use crate::math::Vec2;
use crate::types::Material;
use crate::Scene;

/// Builder methods for adding rigid bodies to the scene.
impl Scene {
    /// Add a static half-plane through `pos` facing `normal`.
    pub fn add_plane(&mut self, pos: Vec2, normal: Vec2) -> Result<usize, PhysicsError> {
        Ok(self.spawn(Body::plane(pos, normal)?))
    }

    /// Add a static half-plane with a custom material.
    pub fn add_plane_with_material(
        &mut self,
        pos: Vec2,
        normal: Vec2,
        material: Material,
    ) -> Result<usize, PhysicsError> {
        Ok(self.spawn(Body::plane(pos, normal)?.with_material(material)))
    }

    /// Add a circle with default density and material.
    pub fn add_circle(&mut self, pos: Vec2, radius: f32) -> Result<usize, PhysicsError> {
        Ok(self.spawn(Body::circle(pos, radius)?))
    }

    /// Add a circle with a custom material.
    pub fn add_circle_with_material(
        &mut self,
        pos: Vec2,
        radius: f32,
        material: Material,
    ) -> Result<usize, PhysicsError> {
        Ok(self.spawn(Body::circle(pos, radius)?.with_material(material)))
    }

    /// Add a convex polygon with default density and material.
    pub fn add_polygon(&mut self, pos: Vec2, points: &[Vec2]) -> Result<usize, PhysicsError> {
        Ok(self.spawn(Body::polygon(pos, points)?))
    }

    /// Add a convex polygon with a custom material.
    pub fn add_polygon_with_material(
        &mut self,
        pos: Vec2,
        points: &[Vec2],
        material: Material,
    ) -> Result<usize, PhysicsError> {
        Ok(self.spawn(Body::polygon(pos, points)?.with_material(material)))
    }
}

/// Vertex loop of a regular polygon with `sides` vertices on a circle of
/// `radius`, wound clockwise.
#[must_use]
pub fn regular_polygon(radius: f32, sides: usize) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let theta = i as f32 * 2.0 * PI / sides as f32;
            Vec2::new(radius * theta.cos(), -radius * theta.sin())
        })
        .collect()
}
