//! 3D point type.

use super::Vec3;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 3D point with x, y, and z coordinates.
///
/// Unlike [`Vec3`], a point is affected by the translation part of a
/// transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a point at the origin (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }
}

// Point - Point = Vec3
impl<F: Float> Sub for Point3<F> {
    type Output = Vec3<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec3<F> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

// Point + Vec3 = Point
impl<F: Float> Add<Vec3<F>> for Point3<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec3<F>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

// Point - Vec3 = Point
impl<F: Float> Sub<Vec3<F>> for Point3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec3<F>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<F: Float> Default for Point3<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<Vec3<F>> for Point3<F> {
    fn from(v: Vec3<F>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
