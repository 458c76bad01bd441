//! 3D vector type for directions, offsets, translations and scales.

use num_traits::Float;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A 3D vector representing a direction or offset.
///
/// Also used for the translation and per-axis scale channels of a transform.
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(F::zero())
    }

    /// Creates a vector with every component set to one.
    #[inline]
    pub fn one() -> Self {
        Self::splat(F::one())
    }

    /// Creates a vector with every component set to `value`.
    #[inline]
    pub fn splat(value: F) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::one(), F::zero(), F::zero())
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::zero(), F::one(), F::zero())
    }

    /// Creates a unit vector along the Z axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(F::zero(), F::zero(), F::one())
    }

    /// Creates a vector from an `[x, y, z]` array.
    #[inline]
    pub fn from_array(a: [F; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns the components as an `[x, y, z]` array.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Multiplies component-wise.
    #[inline]
    pub fn mul_elem(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Returns true if any component is exactly zero.
    #[inline]
    pub fn has_zero(self) -> bool {
        self.x == F::zero() || self.y == F::zero() || self.z == F::zero()
    }

    /// Returns the largest absolute component.
    #[inline]
    pub fn max_abs(self) -> F {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized (unit length) vector.
    ///
    /// Returns `None` if the vector is zero or too small to normalize reliably.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<F: Float> AddAssign for Vec3<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<F: Float> Default for Vec3<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_splat_and_one() {
        let v: Vec3<f64> = Vec3::one();
        assert_eq!(v, Vec3::splat(1.0));
        assert_eq!(Vec3::<f64>::zero(), Vec3::splat(0.0));
    }

    #[test]
    fn test_array_conversion() {
        let v: Vec3<f64> = Vec3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_dot_and_cross() {
        let x: Vec3<f64> = Vec3::unit_x();
        let y = Vec3::unit_y();
        assert_eq!(x.dot(y), 0.0);

        let z = x.cross(y);
        assert_relative_eq!(z.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y.cross(x).z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mul_elem() {
        let a: Vec3<f64> = Vec3::new(1.0, 2.0, 3.0);
        let s = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(a.mul_elem(s), Vec3::new(2.0, 6.0, 12.0));
    }

    #[test]
    fn test_has_zero() {
        assert!(Vec3::new(1.0, 0.0, 2.0).has_zero());
        assert!(!Vec3::new(1.0, -1.0, 2.0).has_zero());
    }

    #[test]
    fn test_max_abs() {
        let v: Vec3<f64> = Vec3::new(1.0, -5.0, 3.0);
        assert_eq!(v.max_abs(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vec3::new(2.0_f64, 3.0, 6.0).normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert!(Vec3::<f64>::zero().normalize().is_none());
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec3<f64> = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }
}
