//! 3x3 matrix type.

use super::Vec3;
use num_traits::Float;
use std::ops::Mul;

/// A 3x3 matrix stored in row-major order.
///
/// Matrices act on column vectors: `m * v` transforms `v`. Rotation
/// matrices are counter-clockwise for positive angles when looking down the
/// rotation axis toward the origin.
///
/// # Example
///
/// ```
/// use affinum::primitives::{Mat3, Vec3};
/// use std::f64::consts::FRAC_PI_2;
///
/// let r: Mat3<f64> = Mat3::rotation_z(FRAC_PI_2);
/// let v = r * Vec3::unit_x();
/// assert!((v.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3<F> {
    /// Rows of the matrix; `m[row][col]`.
    pub m: [[F; 3]; 3],
}

impl<F: Float> Mat3<F> {
    /// Creates a matrix from rows.
    #[inline]
    pub fn from_rows(m: [[F; 3]; 3]) -> Self {
        Self { m }
    }

    /// Creates a matrix whose columns are `c0`, `c1` and `c2`.
    #[inline]
    pub fn from_cols(c0: Vec3<F>, c1: Vec3<F>, c2: Vec3<F>) -> Self {
        Self::from_rows([[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]])
    }

    /// Creates the zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::from_rows([[F::zero(); 3]; 3])
    }

    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(Vec3::one())
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub fn from_diagonal(d: Vec3<F>) -> Self {
        let z = F::zero();
        Self::from_rows([[d.x, z, z], [z, d.y, z], [z, z, d.z]])
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: F) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (F::one(), F::zero());
        Self::from_rows([[o, z, z], [z, c, -s], [z, s, c]])
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: F) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (F::one(), F::zero());
        Self::from_rows([[c, z, s], [z, o, z], [-s, z, c]])
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: F) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (F::one(), F::zero());
        Self::from_rows([[c, -s, z], [s, c, z], [z, z, o]])
    }

    /// Rotation about coordinate axis `axis` (0 = X, 1 = Y, 2 = Z).
    pub(crate) fn rotation_about(axis: usize, angle: F) -> Self {
        match axis {
            0 => Self::rotation_x(angle),
            1 => Self::rotation_y(angle),
            _ => Self::rotation_z(angle),
        }
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<F> {
        Vec3::from_array(self.m[i])
    }

    /// Returns column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3<F> {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Computes `self * diag(d)`: column `c` is scaled by the `c`-th
    /// component of `d`.
    pub fn mul_diagonal(&self, d: Vec3<F>) -> Self {
        let d = d.to_array();
        let mut out = *self;
        for row in out.m.iter_mut() {
            for (entry, s) in row.iter_mut().zip(d) {
                *entry = *entry * s;
            }
        }
        out
    }

    /// Computes `diag(d) * self`: row `r` is scaled by the `r`-th component
    /// of `d`.
    pub fn scale_rows(&self, d: Vec3<F>) -> Self {
        let d = d.to_array();
        let mut out = *self;
        for (row, s) in out.m.iter_mut().zip(d) {
            for entry in row.iter_mut() {
                *entry = *entry * s;
            }
        }
        out
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Returns the determinant.
    pub fn determinant(&self) -> F {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the inverse via the adjugate, if it exists.
    ///
    /// Returns `None` if the matrix is singular relative to its own scale:
    /// `|det|` at most `F::epsilon()` times the product of the row lengths
    /// (Hadamard's bound on `|det|`). Uniformly tiny or huge matrices invert
    /// as well as unit-sized ones.
    pub fn inverse(&self) -> Option<Self> {
        let m = &self.m;
        let c00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
        let c01 = m[1][2] * m[2][0] - m[1][0] * m[2][2];
        let c02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];

        let det = m[0][0] * c00 + m[0][1] * c01 + m[0][2] * c02;
        let bound = self.row(0).magnitude() * self.row(1).magnitude() * self.row(2).magnitude();
        if !det.is_finite() || det.abs() <= F::epsilon() * bound {
            return None;
        }
        let inv_det = F::one() / det;

        Some(Self::from_rows([
            [
                c00 * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                c01 * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                c02 * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Returns the max-row-sum norm: the largest sum of absolute values in
    /// any row. Bounds the spectral norm from above.
    pub fn max_row_sum_norm(&self) -> F {
        self.m
            .iter()
            .map(|row| row[0].abs() + row[1].abs() + row[2].abs())
            .fold(F::zero(), F::max)
    }

    /// Returns true if this is a proper rotation: orthonormal columns and
    /// determinant +1, each within `epsilon`.
    pub fn is_rotation(&self, epsilon: F) -> bool {
        let product = *self * self.transpose();
        product.approx_eq(&Self::identity(), epsilon)
            && (self.determinant() - F::one()).abs() <= epsilon
    }

    /// Returns true if every element differs from `other` by at most
    /// `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: F) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }
}

impl<F: Float> Default for Mat3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Mat3<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zero();
        for r in 0..3 {
            for c in 0..3 {
                out.m[r][c] =
                    self.m[r][0] * rhs.m[0][c] + self.m[r][1] * rhs.m[1][c] + self.m[r][2] * rhs.m[2][c];
            }
        }
        out
    }
}

impl<F: Float> Mul<Vec3<F>> for Mat3<F> {
    type Output = Vec3<F>;

    #[inline]
    fn mul(self, v: Vec3<F>) -> Vec3<F> {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

impl<F: Float> Mul<F> for Mat3<F> {
    type Output = Self;

    fn mul(self, scalar: F) -> Self {
        let mut out = self;
        for entry in out.m.iter_mut().flatten() {
            *entry = *entry * scalar;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn shear() -> Mat3<f64> {
        Mat3::from_rows([[1.0, 0.5, 0.0], [0.0, 1.0, 0.25], [0.0, 0.0, 2.0]])
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let r: Mat3<f64> = Mat3::rotation_z(FRAC_PI_2);
        let v = r * Vec3::unit_x();
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
        assert!(r.is_rotation(1e-12));
    }

    #[test]
    fn test_axis_rotations_are_right_handed() {
        let rx: Mat3<f64> = Mat3::rotation_x(FRAC_PI_2);
        let ry: Mat3<f64> = Mat3::rotation_y(FRAC_PI_2);
        // Y -> Z about X, Z -> X about Y
        assert!((rx * Vec3::unit_y()).z > 0.999);
        assert!((ry * Vec3::unit_z()).x > 0.999);
    }

    #[test]
    fn test_mul_diagonal_scales_columns() {
        let m = shear();
        let d = Vec3::new(2.0, 3.0, 4.0);
        let scaled = m.mul_diagonal(d);
        assert_eq!(scaled, m * Mat3::from_diagonal(d));
        assert_eq!(scaled.col(1), m.col(1) * 3.0);
    }

    #[test]
    fn test_scale_rows() {
        let m = shear();
        let d = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(m.scale_rows(d), Mat3::from_diagonal(d) * m);
    }

    #[test]
    fn test_from_cols_matches_col() {
        let m = Mat3::from_cols(
            Vec3::new(1.0_f64, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.col(2), Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(m.transpose().row(2), m.col(2));
    }

    #[test]
    fn test_determinant() {
        assert_relative_eq!(shear().determinant(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(Mat3::<f64>::identity().determinant(), 1.0);
    }

    #[test]
    fn test_inverse() {
        let m = shear();
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Mat3::identity(), 1e-12));
        assert!((inv * m).approx_eq(&Mat3::identity(), 1e-12));
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let m: Mat3<f64> = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_rounded_singular_has_no_inverse() {
        // Rank 2; the computed determinant may round to a tiny nonzero value.
        let m: Mat3<f64> = Mat3::from_rows([[0.1, 0.2, 0.3], [0.4, 0.5, 0.6], [0.7, 0.8, 0.9]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_small_magnitude_inverse() {
        let m: Mat3<f32> = Mat3::from_diagonal(Vec3::new(0.004, 0.004, 0.004));
        let inv = m.inverse().unwrap();
        assert_relative_eq!(inv.m[0][0], 250.0, max_relative = 1e-5);
        assert!((m * inv).approx_eq(&Mat3::identity(), 1e-5));

        let r = Mat3::rotation_z(0.7_f64) * Mat3::rotation_x(-0.2);
        let m = r.mul_diagonal(Vec3::new(1e-6, 2e-6, 1e-7));
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Mat3::identity(), 1e-9));
    }

    #[test]
    fn test_zero_row_has_no_inverse() {
        let m: Mat3<f64> = Mat3::from_rows([[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_max_row_sum_norm() {
        let m: Mat3<f64> = Mat3::from_rows([[1.0, -2.0, 0.0], [0.0, 0.5, 0.5], [-3.0, 0.0, 1.5]]);
        assert_eq!(m.max_row_sum_norm(), 4.5);
    }

    #[test]
    fn test_shear_is_not_rotation() {
        assert!(!shear().is_rotation(1e-6));
    }
}
