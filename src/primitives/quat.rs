//! Quaternion type for rotations.

use super::Vec3;
use num_traits::Float;
use std::ops::Mul;

/// A quaternion `w + xi + yj + zk`.
///
/// Unit quaternions represent rotations; conversions to and from matrices
/// live in [`rotation`](super::rotation). No normalization is performed
/// implicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<F> {
    pub w: F,
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Quaternion<F> {
    /// Creates a new quaternion.
    #[inline]
    pub fn new(w: F, x: F, y: F, z: F) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::zero())
    }

    /// Rotation of `angle` radians about the unit-length `axis`.
    pub fn from_axis_angle(axis: Vec3<F>, angle: F) -> Self {
        let half = angle / (F::one() + F::one());
        let (s, c) = half.sin_cos();
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// Returns the vector part `(x, y, z)`.
    #[inline]
    pub fn vector(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the four-dimensional dot product.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the conjugate, which inverts a unit quaternion.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the length.
    #[inline]
    pub fn magnitude(self) -> F {
        self.dot(self).sqrt()
    }

    /// Returns a unit-length copy, or `None` for a (near) zero quaternion.
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            let inv = F::one() / mag;
            Some(Self::new(self.w * inv, self.x * inv, self.y * inv, self.z * inv))
        } else {
            None
        }
    }

    /// Rotates `v` by this unit quaternion (`q v q*`).
    pub fn rotate(self, v: Vec3<F>) -> Vec3<F> {
        let u = self.vector();
        let two = F::one() + F::one();
        let t = u.cross(v) * two;
        v + t * self.w + u.cross(t)
    }
}

impl<F: Float> Default for Quaternion<F> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Hamilton product; `a * b` rotates by `b` first, then `a`.
impl<F: Float> Mul for Quaternion<F> {
    type Output = Self;

    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}
