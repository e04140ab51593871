//! # 2D Vector and Rotation Math
//!
//! Value types for the planar algebra the engine is built on: [`Vec2`] with
//! dot and wedge (2D cross) products, and [`Rot2`], the 2x2 rotation matrix
//! used to transform polygon vertices into world space.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (wedge), a scalar: the z component of the 3D cross.
    #[must_use]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotation by +90 degrees.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.squared_length().sqrt()
    }

    #[must_use]
    pub fn squared_length(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Normalize in place.
    ///
    /// The zero vector becomes the unit vector `(0, 1)` rather than dividing
    /// by zero; callers treat that as a defined degenerate result.
    pub fn normalize(&mut self) {
        let d = self.length();
        if d == 0.0 {
            self.x = 0.0;
            self.y = 1.0;
        } else {
            self.x /= d;
            self.y /= d;
        }
    }

    /// Normalized copy, with the same `(0, 1)` zero-vector fallback.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut tmp = self;
        tmp.normalize();
        tmp
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, vector: Vec2) -> Vec2 {
        vector * self
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

/// A 2D rotation, stored as the sine and cosine of its angle.
#[derive(Copy, Clone, Debug)]
pub struct Rot2 {
    sin: f32,
    cos: f32,
}

impl Rot2 {
    #[must_use]
    pub fn new(theta: f32) -> Self {
        Self {
            sin: theta.sin(),
            cos: theta.cos(),
        }
    }

    /// Rotate a vector counterclockwise by this rotation's angle.
    #[must_use]
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(self.cos * v.x - self.sin * v.y, self.sin * v.x + self.cos * v.y)
    }

    /// The opposite rotation, reusing the stored sine and cosine.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            sin: -self.sin,
            cos: self.cos,
        }
    }
}
