//! 4x4 homogeneous matrix type.

use super::{Mat3, Vec3, Vec4};
use num_traits::Float;
use std::ops::Mul;

/// A 4x4 matrix stored in row-major order.
///
/// For affine maps the layout is
/// ```text
/// | M  T |
/// | 0  1 |
/// ```
/// with `M` the 3x3 linear block and `T` the translation column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4<F> {
    /// Rows of the matrix; `m[row][col]`.
    pub m: [[F; 4]; 4],
}

impl<F: Float> Mat4<F> {
    /// Creates a matrix from rows.
    #[inline]
    pub fn from_rows(m: [[F; 4]; 4]) -> Self {
        Self { m }
    }

    /// Creates the zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::from_rows([[F::zero(); 4]; 4])
    }

    /// Creates the identity matrix.
    pub fn identity() -> Self {
        let mut out = Self::zero();
        for i in 0..4 {
            out.m[i][i] = F::one();
        }
        out
    }

    /// Creates the affine matrix `[[block, translation], [0, 0, 0, 1]]`.
    pub fn from_affine(block: &Mat3<F>, translation: Vec3<F>) -> Self {
        let mut out = Self::identity();
        out.set_upper_left3(block);
        out.set_translation(translation);
        out
    }

    /// Returns the upper-left 3x3 block.
    pub fn upper_left3(&self) -> Mat3<F> {
        let m = &self.m;
        Mat3::from_rows([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// Overwrites the upper-left 3x3 block, leaving the rest untouched.
    pub(crate) fn set_upper_left3(&mut self, block: &Mat3<F>) {
        for (dst, src) in self.m.iter_mut().zip(block.m.iter()) {
            dst[..3].copy_from_slice(src);
        }
    }

    /// Returns the top three entries of the last column.
    #[inline]
    pub fn translation(&self) -> Vec3<F> {
        Vec3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// Overwrites the top three entries of the last column.
    #[inline]
    pub(crate) fn set_translation(&mut self, t: Vec3<F>) {
        self.m[0][3] = t.x;
        self.m[1][3] = t.y;
        self.m[2][3] = t.z;
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4<F> {
        Vec4::from_array(self.m[i])
    }

    /// Returns column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4<F> {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                out.m[c][r] = self.m[r][c];
            }
        }
        out
    }

    /// Returns the inverse using Gauss-Jordan elimination with partial
    /// pivoting.
    ///
    /// Returns `None` if elimination meets an exactly zero pivot or the
    /// result is not finite. No absolute threshold is applied, so the
    /// homogeneous matrix of a tiny but well-conditioned transform still
    /// inverts.
    pub fn inverse(&self) -> Option<Self> {
        let mut a = self.m;
        let mut inv = Self::identity().m;

        for col in 0..4 {
            let pivot = (col..4)
                .max_by(|&i, &j| {
                    a[i][col]
                        .abs()
                        .partial_cmp(&a[j][col].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(col);
            if a[pivot][col] == F::zero() {
                return None;
            }
            a.swap(col, pivot);
            inv.swap(col, pivot);

            let inv_pivot = F::one() / a[col][col];
            for k in 0..4 {
                a[col][k] = a[col][k] * inv_pivot;
                inv[col][k] = inv[col][k] * inv_pivot;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == F::zero() {
                    continue;
                }
                for k in 0..4 {
                    a[row][k] = a[row][k] - factor * a[col][k];
                    inv[row][k] = inv[row][k] - factor * inv[col][k];
                }
            }
        }

        if inv.iter().flatten().all(|x| x.is_finite()) {
            Some(Self::from_rows(inv))
        } else {
            None
        }
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

impl<F: Float> Default for Mat4<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Mat4<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                out.m[r][c] = self.row(r).dot(rhs.col(c));
            }
        }
        out
    }
}

/// `M * v` with `v` as a column vector.
impl<F: Float> Mul<Vec4<F>> for Mat4<F> {
    type Output = Vec4<F>;

    fn mul(self, v: Vec4<F>) -> Vec4<F> {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

/// `vᵀ * M` with `v` as a row vector.
impl<F: Float> Mul<Mat4<F>> for Vec4<F> {
    type Output = Vec4<F>;

    fn mul(self, m: Mat4<F>) -> Vec4<F> {
        Vec4::new(
            self.dot(m.col(0)),
            self.dot(m.col(1)),
            self.dot(m.col(2)),
            self.dot(m.col(3)),
        )
    }
}
