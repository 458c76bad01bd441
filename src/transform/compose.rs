//! Composition of affine transforms, and products with plain vectors and
//! matrices.

use super::affine3::{AffineTransform3, Linear};
use crate::primitives::{Mat4, Point3, Vec3, Vec4};
use num_traits::Float;
use std::ops::Mul;
use tracing::trace;

impl<F: Float> AffineTransform3<F> {
    /// Composes this transform with another (`self * other`).
    ///
    /// The resulting transform applies `other` first, then `self`.
    ///
    /// When both sides are rotation-scale and `self` has a uniform scale,
    /// the product is again rotation-scale:
    /// ```text
    /// <Ra, sa, Ta> * <Rb, Sb, Tb> = <Ra * Rb, sa * Sb, sa * Ra * Tb + Ta>
    /// ```
    /// Every other combination produces a general matrix, even when the
    /// product could be refactored as a rotation-scale.
    pub fn compose(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        if let Linear::Uniform {
            rotation: ra,
            scale: sa,
        } = self.linear
        {
            let linear = match other.linear {
                Linear::Uniform {
                    rotation: rb,
                    scale: sb,
                } => Some(Linear::Uniform {
                    rotation: ra * rb,
                    scale: sa * sb,
                }),
                Linear::Nonuniform {
                    rotation: rb,
                    scale: sb,
                } => Some(Linear::Nonuniform {
                    rotation: ra * rb,
                    scale: sb * sa,
                }),
                _ => None,
            };
            if let Some(linear) = linear {
                let translation = (ra * other.translation) * sa + self.translation;
                return Self::from_parts(linear, translation);
            }
        }

        trace!(
            lhs = ?self.classification(),
            rhs = ?other.classification(),
            "composing through general matrix"
        );
        let ma = self.linear.block();
        let mb = other.linear.block();
        Self::from_parts(
            Linear::General(ma * mb),
            ma * other.translation + self.translation,
        )
    }

    /// Returns a transform that applies `self` first, then `other`.
    ///
    /// Equivalent to `other.compose(self)`.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        other.compose(self)
    }
}

impl<F: Float> Mul for AffineTransform3<F> {
    type Output = Self;

    /// The result applies `rhs` first, then `self`.
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<F: Float> Mul<&AffineTransform3<F>> for &AffineTransform3<F> {
    type Output = AffineTransform3<F>;

    fn mul(self, rhs: &AffineTransform3<F>) -> AffineTransform3<F> {
        self.compose(rhs)
    }
}

/// `H * v` with `v` as a homogeneous column vector.
impl<F: Float> Mul<Vec4<F>> for &AffineTransform3<F> {
    type Output = Vec4<F>;

    fn mul(self, v: Vec4<F>) -> Vec4<F> {
        *self.h() * v
    }
}

/// `vᵀ * H` with `v` as a homogeneous row vector.
impl<F: Float> Mul<&AffineTransform3<F>> for Vec4<F> {
    type Output = Vec4<F>;

    fn mul(self, t: &AffineTransform3<F>) -> Vec4<F> {
        self * *t.h()
    }
}

/// Plain 4x4 product `H * m`; the decomposition is not preserved.
impl<F: Float> Mul<Mat4<F>> for &AffineTransform3<F> {
    type Output = Mat4<F>;

    fn mul(self, m: Mat4<F>) -> Mat4<F> {
        *self.h() * m
    }
}

/// Plain 4x4 product `m * H`; the decomposition is not preserved.
impl<F: Float> Mul<&AffineTransform3<F>> for Mat4<F> {
    type Output = Mat4<F>;

    fn mul(self, t: &AffineTransform3<F>) -> Mat4<F> {
        self * *t.h()
    }
}

impl<F: Float> Mul<Point3<F>> for &AffineTransform3<F> {
    type Output = Point3<F>;

    fn mul(self, p: Point3<F>) -> Point3<F> {
        self.apply_point(p)
    }
}

impl<F: Float> Mul<Vec3<F>> for &AffineTransform3<F> {
    type Output = Vec3<F>;

    fn mul(self, v: Vec3<F>) -> Vec3<F> {
        self.apply_vec(v)
    }
}
