//! Rotation representations and conversions to and from rotation matrices.
//!
//! All conversions assume their input is a valid rotation (unit quaternion,
//! unit axis, orthonormal matrix); nothing is validated.

use super::{Mat3, Quaternion, Vec3};
use num_traits::Float;

/// A rotation of `angle` radians about a unit-length `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle<F> {
    /// Rotation axis; expected to be unit length.
    pub axis: Vec3<F>,
    /// Counter-clockwise angle in radians.
    pub angle: F,
}

impl<F: Float> AxisAngle<F> {
    /// Creates a new axis-angle pair. The axis is not normalized.
    #[inline]
    pub fn new(axis: Vec3<F>, angle: F) -> Self {
        Self { axis, angle }
    }

    /// Extracts the axis-angle pair of a rotation matrix.
    ///
    /// The angle is in `[0, π]`. For the identity rotation the axis is
    /// reported as +X.
    pub fn from_matrix(m: &Mat3<F>) -> Self {
        let q = Quaternion::from_matrix(m);
        let v = q.vector();
        let sin_half = v.magnitude();
        match v.normalize() {
            Some(axis) => {
                let two = F::one() + F::one();
                Self::new(axis, two * sin_half.atan2(q.w))
            }
            None => Self::new(Vec3::unit_x(), F::zero()),
        }
    }
}

/// Order in which the three elemental rotations of [`EulerAngles`] compose.
///
/// `Xyz` means `R = Rx(a0) * Ry(a1) * Rz(a2)`: applied to a column vector,
/// the Z rotation acts first. The first six orders use three distinct axes
/// (Tait-Bryan); the last six repeat the first axis (proper Euler), so
/// `Zyz` means `R = Rz(a0) * Ry(a1) * Rz(a2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
    Xyx,
    Xzx,
    Yxy,
    Yzy,
    Zxz,
    Zyz,
}

impl EulerOrder {
    /// Axis indices (0 = X, 1 = Y, 2 = Z) in product order.
    pub fn axes(self) -> [usize; 3] {
        match self {
            EulerOrder::Xyz => [0, 1, 2],
            EulerOrder::Xzy => [0, 2, 1],
            EulerOrder::Yxz => [1, 0, 2],
            EulerOrder::Yzx => [1, 2, 0],
            EulerOrder::Zxy => [2, 0, 1],
            EulerOrder::Zyx => [2, 1, 0],
            EulerOrder::Xyx => [0, 1, 0],
            EulerOrder::Xzx => [0, 2, 0],
            EulerOrder::Yxy => [1, 0, 1],
            EulerOrder::Yzy => [1, 2, 1],
            EulerOrder::Zxz => [2, 0, 2],
            EulerOrder::Zyz => [2, 1, 2],
        }
    }

    /// True if the first axis is repeated as the last.
    pub fn is_proper(self) -> bool {
        let [i, _, k] = self.axes();
        i == k
    }

    /// True if the first two axes are in cyclic order (X→Y, Y→Z, Z→X).
    fn is_cyclic(self) -> bool {
        let [i, j, _] = self.axes();
        j == (i + 1) % 3
    }
}

/// Euler angles in radians, composed in the given [`EulerOrder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles<F> {
    /// Axis order of the three elemental rotations.
    pub order: EulerOrder,
    /// Angles of the first, middle and last rotation.
    pub angles: [F; 3],
}

impl<F: Float> EulerAngles<F> {
    /// Creates a new set of Euler angles.
    #[inline]
    pub fn new(order: EulerOrder, a0: F, a1: F, a2: F) -> Self {
        Self {
            order,
            angles: [a0, a1, a2],
        }
    }

    /// Factors a rotation matrix into angles of the requested order.
    ///
    /// The middle angle lies in `[-π/2, π/2]` for Tait-Bryan orders and in
    /// `[0, π]` for proper Euler orders. At gimbal lock (middle angle at
    /// ±π/2, or at 0 or π respectively) the factorization is not unique;
    /// the last angle is then reported as zero.
    pub fn from_matrix(m: &Mat3<F>, order: EulerOrder) -> Self {
        let [i, j, _] = order.axes();
        // The axis not used by the first two rotations.
        let k = 3 - i - j;
        let r = &m.m;
        let one = F::one();
        let threshold = F::epsilon().sqrt();
        let sign = if order.is_cyclic() { one } else { -one };

        let b = if order.is_proper() {
            let sin_b = r[i][j].hypot(r[i][k]);
            if sin_b > threshold {
                let a = r[j][i].atan2(-sign * r[k][i]);
                let c = r[i][j].atan2(sign * r[i][k]);
                return Self::new(order, a, sin_b.atan2(r[i][i]), c);
            }
            sin_b.atan2(r[i][i])
        } else {
            let sin_b = (sign * r[i][k]).max(-one).min(one);
            let cos_b = (one - sin_b * sin_b).max(F::zero()).sqrt();
            if cos_b > threshold {
                let a = (-sign * r[j][k]).atan2(r[k][k]);
                let c = (-sign * r[i][j]).atan2(r[i][i]);
                return Self::new(order, a, sin_b.asin(), c);
            }
            sin_b.asin()
        };

        // Gimbal lock: with the last angle zero, R = Ri(a) * Rj(b), so
        // R * Rj(b)ᵀ is a pure rotation about axis i.
        let ri = *m * Mat3::rotation_about(j, b).transpose();
        let (p, q) = ((i + 1) % 3, (i + 2) % 3);
        let a = ri.m[q][p].atan2(ri.m[p][p]);
        Self::new(order, a, b, F::zero())
    }
}

impl<F: Float> Mat3<F> {
    /// Rotation matrix of a unit quaternion.
    pub fn from_quaternion(q: Quaternion<F>) -> Self {
        let two = F::one() + F::one();
        let one = F::one();
        let (w, x, y, z) = (q.w, q.x, q.y, q.z);
        Self::from_rows([
            [
                one - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
            ],
            [
                two * (x * y + w * z),
                one - two * (x * x + z * z),
                two * (y * z - w * x),
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                one - two * (x * x + y * y),
            ],
        ])
    }

    /// Rotation matrix of an axis-angle pair.
    pub fn from_axis_angle(aa: &AxisAngle<F>) -> Self {
        Self::from_quaternion(Quaternion::from_axis_angle(aa.axis, aa.angle))
    }

    /// Rotation matrix of a set of Euler angles.
    pub fn from_euler(e: &EulerAngles<F>) -> Self {
        let [i, j, k] = e.order.axes();
        Self::rotation_about(i, e.angles[0])
            * Self::rotation_about(j, e.angles[1])
            * Self::rotation_about(k, e.angles[2])
    }
}

impl<F: Float> Quaternion<F> {
    /// Unit quaternion of a rotation matrix, with `w >= 0`.
    pub fn from_matrix(m: &Mat3<F>) -> Self {
        let r = &m.m;
        let one = F::one();
        let two = one + one;
        let four = two * two;
        let trace = r[0][0] + r[1][1] + r[2][2];

        let q = if trace > F::zero() {
            let s = (trace + one).sqrt() * two;
            Self::new(
                s / four,
                (r[2][1] - r[1][2]) / s,
                (r[0][2] - r[2][0]) / s,
                (r[1][0] - r[0][1]) / s,
            )
        } else if r[0][0] > r[1][1] && r[0][0] > r[2][2] {
            let s = (one + r[0][0] - r[1][1] - r[2][2]).sqrt() * two;
            Self::new(
                (r[2][1] - r[1][2]) / s,
                s / four,
                (r[0][1] + r[1][0]) / s,
                (r[0][2] + r[2][0]) / s,
            )
        } else if r[1][1] > r[2][2] {
            let s = (one + r[1][1] - r[0][0] - r[2][2]).sqrt() * two;
            Self::new(
                (r[0][2] - r[2][0]) / s,
                (r[0][1] + r[1][0]) / s,
                s / four,
                (r[1][2] + r[2][1]) / s,
            )
        } else {
            let s = (one + r[2][2] - r[0][0] - r[1][1]).sqrt() * two;
            Self::new(
                (r[1][0] - r[0][1]) / s,
                (r[0][2] + r[2][0]) / s,
                (r[1][2] + r[2][1]) / s,
                s / four,
            )
        };

        if q.w < F::zero() {
            Self::new(-q.w, -q.x, -q.y, -q.z)
        } else {
            q
        }
    }
}
