//! Shared value types: surface materials and axis-aligned bounding boxes.

use crate::math::Vec2;

/// Surface properties combined by the resolver when two bodies touch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Restitution `e`: fraction of normal relative velocity kept (0 = dead, 1 = elastic).
    pub restitution: f32,
    /// Static friction coefficient `mu_s`.
    pub static_friction: f32,
    /// Dynamic friction coefficient `mu_d`.
    pub dynamic_friction: f32,
}

impl Material {
    #[must_use]
    pub const fn new(restitution: f32, static_friction: f32, dynamic_friction: f32) -> Self {
        Self {
            restitution,
            static_friction,
            dynamic_friction,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(0.8, 0.5, 0.4)
    }
}

/// World-space axis-aligned bounding box, the broad-phase filter.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Open-interval overlap test: boxes that merely touch do not overlap.
    ///
    /// A false positive only costs a narrow-phase call; bounds are refreshed
    /// every step so a false negative cannot occur. The default infinite box
    /// overlaps every finite box, which is how planes pass this gate.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

impl Default for Aabb {
    /// The maximal box, used before the first `bound()` and kept by planes.
    fn default() -> Self {
        Self::new(
            Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
            Vec2::new(f32::INFINITY, f32::INFINITY),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric() {
        let boxes = [
            Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0)),
            Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0)),
            Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0)),
            Aabb::default(),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.overlaps(b), b.overlaps(a));
            }
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn default_box_overlaps_everything_finite() {
        let infinite = Aabb::default();
        let finite = Aabb::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        assert!(infinite.overlaps(&finite));
        assert!(finite.overlaps(&infinite));
        assert!(infinite.overlaps(&infinite));
    }

    #[test]
    fn disjoint_on_one_axis_is_enough() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 10.0));
        let b = Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(3.0, 10.0));
        assert!(!a.overlaps(&b));
    }
}
