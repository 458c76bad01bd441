//! Inversion: the cached inverse homogeneous matrix and the inverse
//! transform.

use super::affine3::{AffineTransform3, Linear};
use crate::error::TransformError;
use crate::primitives::{Mat3, Mat4, Point3, Vec3, Vec4};
use num_traits::Float;
use tracing::trace;

impl<F: Float> AffineTransform3<F> {
    /// Returns `H⁻¹`, recomputing it only if a mutation happened since the
    /// last call.
    ///
    /// Rotation-scale transforms invert in closed form: `Rᵀ / s` for a
    /// uniform scale, `S⁻¹ Rᵀ` for a nonuniform one. A general matrix goes
    /// through the generic 3x3 inverse and fails with
    /// [`TransformError::SingularMatrix`] if it has none, leaving the cache
    /// stale.
    pub fn inverse_h(&self) -> Result<Mat4<F>, TransformError> {
        if let Some(cached) = self.inverse.get() {
            return Ok(cached);
        }

        trace!(classification = ?self.classification(), "recomputing inverse");
        let inverse = if self.is_identity() {
            Mat4::identity()
        } else {
            let block = self.inverse_block()?;
            Mat4::from_affine(&block, -(block * self.translation))
        };

        self.inverse.set(Some(inverse));
        Ok(inverse)
    }

    /// Returns the inverse transform.
    ///
    /// A uniform rotation-scale inverts to a uniform rotation-scale
    /// `<Rᵀ, 1/s, -(1/s) Rᵀ T>`. Nonuniform and general transforms invert
    /// the 3x3 block of H generically and yield a general matrix.
    pub fn inverse(&self) -> Result<Self, TransformError> {
        match self.linear {
            Linear::Identity => Ok(Self::identity()),
            Linear::Uniform { rotation, scale } => {
                let inv_rotation = rotation.transpose();
                let inv_scale = F::one() / scale;
                let inv_translation = (inv_rotation * self.translation) * -inv_scale;
                Ok(Self::from_parts(
                    Linear::Uniform {
                        rotation: inv_rotation,
                        scale: inv_scale,
                    },
                    inv_translation,
                ))
            }
            Linear::Nonuniform { .. } | Linear::General(_) => {
                let inv = self
                    .h
                    .upper_left3()
                    .inverse()
                    .ok_or(TransformError::SingularMatrix)?;
                Ok(Self::from_parts(
                    Linear::General(inv),
                    -(inv * self.translation),
                ))
            }
        }
    }

    /// Maps a point back through the transform using the cached `H⁻¹`.
    pub fn inverse_apply_point(&self, p: Point3<F>) -> Result<Point3<F>, TransformError> {
        let v = self.inverse_h()? * Vec4::from_point(p);
        Ok(Point3::new(v.x, v.y, v.z))
    }

    /// Maps a vector back through the linear part using the cached `H⁻¹`.
    pub fn inverse_apply_vec(&self, v: Vec3<F>) -> Result<Vec3<F>, TransformError> {
        Ok(self.inverse_h()?.upper_left3() * v)
    }

    /// Upper-left block of `H⁻¹`.
    fn inverse_block(&self) -> Result<Mat3<F>, TransformError> {
        match self.linear {
            Linear::Identity => Ok(Mat3::identity()),
            Linear::Uniform { rotation, scale } => Ok(rotation.transpose() * (F::one() / scale)),
            Linear::Nonuniform { rotation, scale } => {
                // One reciprocal and six multiplies instead of three
                // reciprocals.
                let s01 = scale.x * scale.y;
                let s02 = scale.x * scale.z;
                let s12 = scale.y * scale.z;
                let inv_s012 = F::one() / (s01 * scale.z);
                let inv_scale = Vec3::new(s12 * inv_s012, s02 * inv_s012, s01 * inv_s012);
                Ok(rotation.transpose().scale_rows(inv_scale))
            }
            Linear::General(m) => m.inverse().ok_or(TransformError::SingularMatrix),
        }
    }
}
