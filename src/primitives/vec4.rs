//! Homogeneous 4D vector type.

use super::{Point3, Vec3};
use num_traits::Float;
use std::ops::{Add, Mul, Sub};

/// A homogeneous 4-vector `(x, y, z, w)`.
///
/// Points embed with `w = 1`, directions with `w = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4<F> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Vec4<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F, w: F) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero(), F::zero(), F::zero())
    }

    /// Embeds a point with `w = 1`.
    #[inline]
    pub fn from_point(p: Point3<F>) -> Self {
        Self::new(p.x, p.y, p.z, F::one())
    }

    /// Embeds a direction with `w = 0`.
    #[inline]
    pub fn from_vec(v: Vec3<F>) -> Self {
        Self::new(v.x, v.y, v.z, F::zero())
    }

    /// Creates a vector from an `[x, y, z, w]` array.
    #[inline]
    pub fn from_array(a: [F; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Returns the components as an `[x, y, z, w]` array.
    #[inline]
    pub fn to_array(self) -> [F; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops `w` without dividing by it.
    #[inline]
    pub fn xyz(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl<F: Float> Add for Vec4<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<F: Float> Sub for Vec4<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<F: Float> Mul<F> for Vec4<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl<F: Float> Default for Vec4<F> {
    fn default() -> Self {
        Self::zero()
    }
}
