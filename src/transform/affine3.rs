//! 3D affine transform with a tracked decomposition.

use crate::error::TransformError;
use crate::primitives::{AxisAngle, EulerAngles, EulerOrder, Mat3, Mat4, Point3, Quaternion, Vec3};
use num_traits::Float;
use std::cell::Cell;
use std::fmt;
use tracing::debug;

/// The linear part of an [`AffineTransform3`], tagged with the
/// decomposition it currently has.
///
/// The rotation-scale variants store `M = R * S` as its factors; `S` is
/// diagonal with nonzero entries. `General` stores an arbitrary (assumed
/// invertible) matrix and has no scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Linear<F> {
    /// `M = I`, and the owning transform has zero translation.
    Identity,
    /// `M = R * s * I`.
    Uniform { rotation: Mat3<F>, scale: F },
    /// `M = R * diag(scale)`.
    Nonuniform { rotation: Mat3<F>, scale: Vec3<F> },
    /// Any invertible `M`.
    General(Mat3<F>),
}

impl<F: Float> Linear<F> {
    /// Returns the 3x3 block this variant represents. Rotation-scale
    /// variants scale column `c` of `R` by the `c`-th scale.
    pub fn block(&self) -> Mat3<F> {
        match self {
            Linear::Identity => Mat3::identity(),
            Linear::Uniform { rotation, scale } => rotation.mul_diagonal(Vec3::splat(*scale)),
            Linear::Nonuniform { rotation, scale } => rotation.mul_diagonal(*scale),
            Linear::General(m) => *m,
        }
    }

    /// Returns the classification without the payload.
    pub fn classification(&self) -> Classification {
        match self {
            Linear::Identity => Classification::Identity,
            Linear::Uniform { .. } => Classification::UniformScale,
            Linear::Nonuniform { .. } => Classification::NonuniformScale,
            Linear::General(_) => Classification::General,
        }
    }

    fn rotation(&self) -> Option<Mat3<F>> {
        match self {
            Linear::Identity => Some(Mat3::identity()),
            Linear::Uniform { rotation, .. } | Linear::Nonuniform { rotation, .. } => {
                Some(*rotation)
            }
            Linear::General(_) => None,
        }
    }
}

/// Which algebraic shortcuts a transform admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Identity,
    UniformScale,
    NonuniformScale,
    General,
}

/// A 3D affine transformation `Y = M * X + T`.
///
/// The linear part `M` is kept either as a rotation times a diagonal scale
/// or as a general matrix (see [`Linear`]), which lets composition and
/// inversion pick cheap closed forms. The 4x4 homogeneous matrix
/// ```text
/// | M  T |
/// | 0  1 |
/// ```
/// is rebuilt on every mutation; its inverse is computed on the first
/// [`inverse_h`](Self::inverse_h) call after a mutation and cached.
///
/// The cache uses interior mutability, so a transform is `Send` but not
/// `Sync`.
///
/// # Example
///
/// ```
/// use affinum::{AffineTransform3, Point3};
/// use affinum::primitives::Mat3;
/// use std::f64::consts::FRAC_PI_2;
///
/// let mut t: AffineTransform3<f64> = AffineTransform3::identity();
/// t.set_rotation(Mat3::rotation_z(FRAC_PI_2));
/// t.set_uniform_scale(2.0).unwrap();
/// t.set_translation(1.0, 0.0, 0.0);
///
/// // Scale, then rotate, then translate.
/// let p = t.apply_point(Point3::new(1.0, 0.0, 0.0));
/// assert!((p.x - 1.0).abs() < 1e-12);
/// assert!((p.y - 2.0).abs() < 1e-12);
/// ```
pub struct AffineTransform3<F> {
    pub(super) linear: Linear<F>,
    pub(super) translation: Vec3<F>,
    pub(super) h: Mat4<F>,
    pub(super) inverse: Cell<Option<Mat4<F>>>,
}

impl<F: Float> AffineTransform3<F> {
    /// Creates the identity transform.
    pub fn identity() -> Self {
        Self {
            linear: Linear::Identity,
            translation: Vec3::zero(),
            h: Mat4::identity(),
            inverse: Cell::new(Some(Mat4::identity())),
        }
    }

    /// Creates a transform from a decomposition and a translation. Callers
    /// are trusted to pass nonzero scales.
    ///
    /// An `Identity` linear part with nonzero translation is stored as a
    /// unit uniform scale.
    pub(crate) fn from_parts(linear: Linear<F>, translation: Vec3<F>) -> Self {
        let linear = match linear {
            Linear::Identity if translation != Vec3::zero() => Linear::Uniform {
                rotation: Mat3::identity(),
                scale: F::one(),
            },
            other => other,
        };
        let mut out = Self {
            linear,
            translation,
            h: Mat4::identity(),
            inverse: Cell::new(None),
        };
        out.update_h();
        out
    }

    /// Creates a pure rotation.
    pub fn from_rotation(rotation: Mat3<F>) -> Self {
        let mut out = Self::identity();
        out.set_rotation(rotation);
        out
    }

    /// Creates a transform whose linear part is the general matrix `m`.
    pub fn from_matrix(m: Mat3<F>) -> Self {
        let mut out = Self::identity();
        out.set_matrix(m);
        out
    }

    /// Creates a pure translation.
    pub fn from_translation(t: Vec3<F>) -> Self {
        let mut out = Self::identity();
        out.set_translation_vec(t);
        out
    }

    /// Resets to the identity transform.
    pub fn make_identity(&mut self) {
        *self = Self::identity();
    }

    /// Sets all scales to one.
    ///
    /// Fails with [`TransformError::NotRotationScale`] on a general matrix.
    pub fn make_unit_scale(&mut self) -> Result<(), TransformError> {
        match self.linear {
            Linear::Identity => {}
            Linear::Uniform { rotation, .. } | Linear::Nonuniform { rotation, .. } => {
                self.linear = Linear::Uniform {
                    rotation,
                    scale: F::one(),
                };
            }
            Linear::General(_) => return Err(self.reject(TransformError::NotRotationScale)),
        }
        self.update_h();
        Ok(())
    }

    // Hints about the structure of the transformation.

    /// `M = I` and `T = 0`.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self.linear, Linear::Identity)
    }

    /// `M = R * S`.
    #[inline]
    pub fn is_rs_matrix(&self) -> bool {
        !self.is_general_matrix()
    }

    /// Rotation-scale with `S = s * I`.
    #[inline]
    pub fn is_uniform_scale(&self) -> bool {
        matches!(self.linear, Linear::Identity | Linear::Uniform { .. })
    }

    /// Rotation-scale with per-axis scales (which may still happen to be
    /// equal).
    #[inline]
    pub fn is_nonuniform_scale(&self) -> bool {
        matches!(self.linear, Linear::Nonuniform { .. })
    }

    /// General (invertible) `M`.
    #[inline]
    pub fn is_general_matrix(&self) -> bool {
        matches!(self.linear, Linear::General(_))
    }

    /// Returns the current classification.
    #[inline]
    pub fn classification(&self) -> Classification {
        self.linear.classification()
    }

    /// Returns the decomposition of the linear part.
    #[inline]
    pub fn linear(&self) -> &Linear<F> {
        &self.linear
    }

    /// Installs a general matrix as the linear part. Any scale is dropped.
    ///
    /// Invertibility is not checked here; a singular `m` surfaces later as
    /// [`TransformError::SingularMatrix`] from the inversion functions.
    pub fn set_matrix(&mut self, m: Mat3<F>) {
        self.linear = Linear::General(m);
        self.update_h();
    }

    /// Returns the M channel: the rotation for rotation-scale transforms,
    /// the general matrix otherwise.
    pub fn matrix(&self) -> Mat3<F> {
        match self.linear {
            Linear::Identity => Mat3::identity(),
            Linear::Uniform { rotation, .. } | Linear::Nonuniform { rotation, .. } => rotation,
            Linear::General(m) => m,
        }
    }

    /// Installs a rotation matrix. No check is made that it is one.
    ///
    /// An existing rotation-scale keeps its scale; coming from the identity
    /// or a general matrix, the scale is one.
    pub fn set_rotation(&mut self, rotation: Mat3<F>) {
        self.linear = match self.linear {
            Linear::Uniform { scale, .. } => Linear::Uniform { rotation, scale },
            Linear::Nonuniform { scale, .. } => Linear::Nonuniform { rotation, scale },
            Linear::Identity | Linear::General(_) => Linear::Uniform {
                rotation,
                scale: F::one(),
            },
        };
        self.update_h();
    }

    /// Installs the rotation of a unit quaternion.
    pub fn set_rotation_quaternion(&mut self, q: Quaternion<F>) {
        self.set_rotation(Mat3::from_quaternion(q));
    }

    /// Installs the rotation of an axis-angle pair with a unit axis.
    pub fn set_rotation_axis_angle(&mut self, aa: &AxisAngle<F>) {
        self.set_rotation(Mat3::from_axis_angle(aa));
    }

    /// Installs the rotation of a set of Euler angles.
    pub fn set_rotation_euler(&mut self, e: &EulerAngles<F>) {
        self.set_rotation(Mat3::from_euler(e));
    }

    /// Returns the rotation; fails on a general matrix.
    pub fn rotation(&self) -> Result<Mat3<F>, TransformError> {
        self.linear
            .rotation()
            .ok_or(TransformError::NotRotationScale)
    }

    /// Returns the rotation as a unit quaternion.
    pub fn rotation_quaternion(&self) -> Result<Quaternion<F>, TransformError> {
        Ok(Quaternion::from_matrix(&self.rotation()?))
    }

    /// Returns the rotation as an axis-angle pair.
    pub fn rotation_axis_angle(&self) -> Result<AxisAngle<F>, TransformError> {
        Ok(AxisAngle::from_matrix(&self.rotation()?))
    }

    /// Returns the rotation factored as Euler angles in `order`.
    pub fn rotation_euler(&self, order: EulerOrder) -> Result<EulerAngles<F>, TransformError> {
        Ok(EulerAngles::from_matrix(&self.rotation()?, order))
    }

    /// Sets the translation.
    ///
    /// On the identity, a zero translation changes nothing; any other
    /// translation makes the transform a unit-scale rotation-scale.
    pub fn set_translation(&mut self, x: F, y: F, z: F) {
        self.set_translation_vec(Vec3::new(x, y, z));
    }

    /// Sets the translation from a vector.
    pub fn set_translation_vec(&mut self, t: Vec3<F>) {
        if matches!(self.linear, Linear::Identity) && t != Vec3::zero() {
            self.linear = Linear::Uniform {
                rotation: Mat3::identity(),
                scale: F::one(),
            };
        }
        self.translation = t;
        self.update_h();
    }

    /// Returns the translation.
    #[inline]
    pub fn translation(&self) -> Vec3<F> {
        self.translation
    }

    /// Sets per-axis scales.
    ///
    /// The result is nonuniform even if the three values are equal. Fails
    /// on a general matrix or if any scale is zero; the transform is left
    /// unchanged on failure.
    pub fn set_scale(&mut self, s0: F, s1: F, s2: F) -> Result<(), TransformError> {
        self.set_scale_vec(Vec3::new(s0, s1, s2))
    }

    /// Sets per-axis scales from a vector.
    pub fn set_scale_vec(&mut self, scale: Vec3<F>) -> Result<(), TransformError> {
        let rotation = self.scalable_rotation()?;
        if scale.has_zero() {
            return Err(self.reject(TransformError::ZeroScale));
        }
        self.linear = Linear::Nonuniform { rotation, scale };
        self.update_h();
        Ok(())
    }

    /// Returns the per-axis scales; all ones for the identity.
    pub fn scale(&self) -> Result<Vec3<F>, TransformError> {
        match self.linear {
            Linear::Identity => Ok(Vec3::one()),
            Linear::Uniform { scale, .. } => Ok(Vec3::splat(scale)),
            Linear::Nonuniform { scale, .. } => Ok(scale),
            Linear::General(_) => Err(TransformError::NotRotationScale),
        }
    }

    /// Sets a single scale for all three axes.
    ///
    /// Fails on a general matrix or if `scale` is zero; the transform is
    /// left unchanged on failure.
    pub fn set_uniform_scale(&mut self, scale: F) -> Result<(), TransformError> {
        let rotation = self.scalable_rotation()?;
        if scale == F::zero() {
            return Err(self.reject(TransformError::ZeroScale));
        }
        self.linear = Linear::Uniform { rotation, scale };
        self.update_h();
        Ok(())
    }

    /// Returns the uniform scale.
    pub fn uniform_scale(&self) -> Result<F, TransformError> {
        match self.linear {
            Linear::Identity => Ok(F::one()),
            Linear::Uniform { scale, .. } => Ok(scale),
            Linear::Nonuniform { .. } => Err(TransformError::NotUniformScale),
            Linear::General(_) => Err(TransformError::NotRotationScale),
        }
    }

    /// Returns a measure of the largest scale the transform applies.
    ///
    /// For `M = R * S` this is the largest absolute scale. For a general
    /// `M` it is the max-row-sum norm, an upper bound on the spectral norm.
    pub fn norm(&self) -> F {
        match self.linear {
            Linear::Identity => F::one(),
            Linear::Uniform { scale, .. } => scale.abs(),
            Linear::Nonuniform { scale, .. } => scale.max_abs(),
            Linear::General(m) => m.max_row_sum_norm(),
        }
    }

    /// Returns the homogeneous matrix `H = [[M, T], [0, 1]]`.
    #[inline]
    pub fn h(&self) -> &Mat4<F> {
        &self.h
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn apply_point(&self, p: Point3<F>) -> Point3<F> {
        let v = self.apply_vec(p.to_vec()) + self.translation;
        Point3::from(v)
    }

    /// Applies this transform to a vector (no translation).
    #[inline]
    pub fn apply_vec(&self, v: Vec3<F>) -> Vec3<F> {
        self.h.upper_left3() * v
    }

    /// Applies this transform to multiple points.
    pub fn apply_points(&self, points: &[Point3<F>]) -> Vec<Point3<F>> {
        points.iter().map(|p| self.apply_point(*p)).collect()
    }

    /// Returns true if the homogeneous matrices agree element-wise to within
    /// `epsilon`, regardless of decomposition.
    pub fn approx_eq(&self, other: &Self, epsilon: F) -> bool {
        self.h.approx_eq(&other.h, epsilon)
    }

    /// Rotation to keep when a scale setter runs; fails on a general matrix.
    fn scalable_rotation(&self) -> Result<Mat3<F>, TransformError> {
        self.linear
            .rotation()
            .ok_or_else(|| self.reject(TransformError::NotRotationScale))
    }

    fn reject(&self, err: TransformError) -> TransformError {
        debug!(classification = ?self.classification(), %err, "rejected transform mutation");
        err
    }

    /// Rebuilds H from the channels and invalidates the cached inverse.
    /// The last row of H is never touched.
    pub(super) fn update_h(&mut self) {
        self.h.set_upper_left3(&self.linear.block());
        self.h.set_translation(self.translation);
        self.inverse.set(None);
    }
}

impl<F: Float> Default for AffineTransform3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Clone for AffineTransform3<F> {
    fn clone(&self) -> Self {
        Self {
            linear: self.linear,
            translation: self.translation,
            h: self.h,
            inverse: Cell::new(self.inverse.get()),
        }
    }
}

/// Compares decomposition and translation; the inverse cache is ignored.
impl<F: Float> PartialEq for AffineTransform3<F> {
    fn eq(&self, other: &Self) -> bool {
        self.linear == other.linear && self.translation == other.translation
    }
}

impl<F: Float + fmt::Debug> fmt::Debug for AffineTransform3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffineTransform3")
            .field("linear", &self.linear)
            .field("translation", &self.translation)
            .field("inverse_cached", &self.inverse.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn shear() -> Mat3<f64> {
        Mat3::from_rows([[1.0, 0.5, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    #[test]
    fn test_default_is_identity() {
        let t: AffineTransform3<f64> = AffineTransform3::default();
        assert!(t.is_identity());
        assert!(t.is_rs_matrix());
        assert!(t.is_uniform_scale());
        assert!(!t.is_nonuniform_scale());
        assert!(!t.is_general_matrix());
        assert_eq!(*t.h(), Mat4::identity());
        assert_eq!(t.scale().unwrap(), Vec3::one());
        assert_eq!(t.uniform_scale().unwrap(), 1.0);
    }

    #[test]
    fn test_scale_then_rotate_then_translate() {
        let mut t: AffineTransform3<f64> = AffineTransform3::identity();
        t.set_rotation(Mat3::rotation_z(FRAC_PI_2));
        t.set_uniform_scale(2.0).unwrap();
        t.set_translation(1.0, 0.0, 0.0);

        let p = t.apply_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_h_scales_rotation_columns() {
        let r = Mat3::rotation_x(0.4);
        let mut t: AffineTransform3<f64> = AffineTransform3::from_rotation(r);
        t.set_scale(2.0, 3.0, 5.0).unwrap();
        t.set_translation(7.0, 8.0, 9.0);

        let h = t.h();
        for row in 0..3 {
            assert_eq!(h.m[row][0], r.m[row][0] * 2.0);
            assert_eq!(h.m[row][1], r.m[row][1] * 3.0);
            assert_eq!(h.m[row][2], r.m[row][2] * 5.0);
        }
        assert_eq!(h.translation(), Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(h.m[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_h_copies_general_matrix() {
        let t: AffineTransform3<f64> = AffineTransform3::from_matrix(shear());
        assert_eq!(t.h().upper_left3(), shear());
        assert!(t.is_general_matrix());
        assert!(!t.is_identity());
    }

    #[test]
    fn test_set_translation_on_identity() {
        let mut t: AffineTransform3<f64> = AffineTransform3::identity();
        t.set_translation(0.0, 0.0, 0.0);
        assert!(t.is_identity());

        t.set_translation(0.0, 1.0, 0.0);
        assert!(!t.is_identity());
        assert!(t.is_uniform_scale());
        assert_eq!(t.rotation().unwrap(), Mat3::identity());
    }

    #[test]
    fn test_rotation_keeps_scale() {
        let mut t: AffineTransform3<f64> = AffineTransform3::identity();
        t.set_scale(1.0, 2.0, 3.0).unwrap();
        t.set_rotation(Mat3::rotation_y(0.2));
        assert_eq!(t.scale().unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert!(t.is_nonuniform_scale());
    }

    #[test]
    fn test_rotation_after_general_resets_scale() {
        let mut t: AffineTransform3<f64> = AffineTransform3::identity();
        t.set_uniform_scale(4.0).unwrap();
        t.set_matrix(shear());
        t.set_rotation(Mat3::rotation_z(0.3));
        assert_eq!(t.uniform_scale().unwrap(), 1.0);
    }

    #[test]
    fn test_equal_per_axis_scales_are_nonuniform() {
        let mut t: AffineTransform3<f64> = AffineTransform3::identity();
        t.set_scale(2.0, 2.0, 2.0).unwrap();
        assert!(t.is_nonuniform_scale());
        assert_eq!(t.uniform_scale(), Err(TransformError::NotUniformScale));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut t: AffineTransform3<f64> = AffineTransform3::identity();
        assert_eq!(t.set_scale(0.0, 1.0, 1.0), Err(TransformError::ZeroScale));
        assert_eq!(t.set_uniform_scale(0.0), Err(TransformError::ZeroScale));
        assert!(t.is_identity());
    }

    #[test]
    fn test_scale_on_general_rejected_without_mutation() {
        let mut t: AffineTransform3<f64> = AffineTransform3::from_matrix(shear());
        t.set_translation(1.0, 2.0, 3.0);
        let before = t.clone();
        let h_before = *t.h();

        assert_eq!(
            t.set_scale(1.0, 2.0, 3.0),
            Err(TransformError::NotRotationScale)
        );
        assert_eq!(
            t.set_uniform_scale(2.0),
            Err(TransformError::NotRotationScale)
        );
        assert_eq!(t.make_unit_scale(), Err(TransformError::NotRotationScale));
        assert_eq!(t, before);
        assert_eq!(*t.h(), h_before);
    }

    #[test]
    fn test_general_has_no_rotation_or_scale() {
        let t: AffineTransform3<f64> = AffineTransform3::from_matrix(shear());
        assert_eq!(t.rotation(), Err(TransformError::NotRotationScale));
        assert_eq!(
            t.rotation_quaternion(),
            Err(TransformError::NotRotationScale)
        );
        assert_eq!(t.scale(), Err(TransformError::NotRotationScale));
        assert_eq!(t.uniform_scale(), Err(TransformError::NotRotationScale));
        assert_eq!(t.matrix(), shear());
    }

    #[test]
    fn test_make_unit_scale() {
        let mut t: AffineTransform3<f64> = AffineTransform3::from_rotation(Mat3::rotation_x(1.0));
        t.set_scale(2.0, 3.0, 4.0).unwrap();
        t.make_unit_scale().unwrap();
        assert!(t.is_uniform_scale());
        assert_eq!(t.uniform_scale().unwrap(), 1.0);
        assert!(t.h().upper_left3().approx_eq(&Mat3::rotation_x(1.0), 1e-15));

        let mut id: AffineTransform3<f64> = AffineTransform3::identity();
        id.make_unit_scale().unwrap();
        assert!(id.is_identity());
    }

    #[test]
    fn test_make_identity() {
        let mut t: AffineTransform3<f64> = AffineTransform3::from_matrix(shear());
        t.set_translation(1.0, 1.0, 1.0);
        t.make_identity();
        assert!(t.is_identity());
        assert_eq!(t.translation(), Vec3::zero());
        assert_eq!(*t.h(), Mat4::identity());
    }

    #[test]
    fn test_rotation_forms_agree() {
        let axis = Vec3::new(1.0, 1.0, 0.0).normalize().unwrap();
        let aa = AxisAngle::new(axis, 0.8);

        let mut a: AffineTransform3<f64> = AffineTransform3::identity();
        a.set_rotation_axis_angle(&aa);
        let mut b: AffineTransform3<f64> = AffineTransform3::identity();
        b.set_rotation_quaternion(Quaternion::from_axis_angle(axis, 0.8));
        let mut c: AffineTransform3<f64> = AffineTransform3::identity();
        c.set_rotation_euler(&a.rotation_euler(EulerOrder::Zyx).unwrap());
        let mut d: AffineTransform3<f64> = AffineTransform3::identity();
        d.set_rotation_euler(&a.rotation_euler(EulerOrder::Zxz).unwrap());

        assert!(a.approx_eq(&b, 1e-12));
        assert!(a.approx_eq(&c, 1e-10));
        assert!(a.approx_eq(&d, 1e-10));

        let back = a.rotation_axis_angle().unwrap();
        assert_relative_eq!(back.angle, 0.8, epsilon = 1e-12);
        assert_relative_eq!(back.axis.x, axis.x, epsilon = 1e-12);
    }

    #[test]
    fn test_norm() {
        let mut t: AffineTransform3<f64> = AffineTransform3::identity();
        assert_eq!(t.norm(), 1.0);
        t.set_scale(1.0, -4.0, 2.0).unwrap();
        assert_eq!(t.norm(), 4.0);
        t.set_uniform_scale(-3.0).unwrap();
        assert_eq!(t.norm(), 3.0);
        t.set_matrix(Mat3::from_rows([[1.0, -2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]));
        assert_eq!(t.norm(), 3.0);
    }

    #[test]
    fn test_apply_vec_ignores_translation() {
        let t: AffineTransform3<f64> = AffineTransform3::from_translation(Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(t.apply_vec(Vec3::unit_x()), Vec3::unit_x());
        assert_eq!(
            t.apply_points(&[Point3::origin()]),
            vec![Point3::new(5.0, 5.0, 5.0)]
        );
    }

    #[test]
    fn test_from_parts_promotes_translated_identity() {
        let t: AffineTransform3<f64> =
            AffineTransform3::from_parts(Linear::Identity, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(t.classification(), Classification::UniformScale);
        assert_eq!(t.h().translation(), Vec3::new(0.0, 0.0, 1.0));
    }
}
