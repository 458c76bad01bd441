//! Batches of four 3D points and their affine transformation.

use wide::f32x4;

use crate::primitives::{Mat4, Point3, Vec4};
use crate::transform::AffineTransform3;

/// A batch of 4 3D points using SIMD.
#[derive(Clone, Copy, Debug)]
pub struct Point3x4 {
    pub x: f32x4,
    pub y: f32x4,
    pub z: f32x4,
}

impl Point3x4 {
    /// Creates a new batch of points.
    #[inline]
    pub fn new(x: f32x4, y: f32x4, z: f32x4) -> Self {
        Self { x, y, z }
    }

    /// Creates a batch from 4 individual points.
    #[inline]
    pub fn from_points(points: [Point3<f32>; 4]) -> Self {
        let [p0, p1, p2, p3] = points;
        Self {
            x: f32x4::new([p0.x, p1.x, p2.x, p3.x]),
            y: f32x4::new([p0.y, p1.y, p2.y, p3.y]),
            z: f32x4::new([p0.z, p1.z, p2.z, p3.z]),
        }
    }

    /// Creates a batch where all 4 points are the same.
    #[inline]
    pub fn splat(p: Point3<f32>) -> Self {
        Self {
            x: f32x4::splat(p.x),
            y: f32x4::splat(p.y),
            z: f32x4::splat(p.z),
        }
    }

    /// Applies the affine part of `h` (its top three rows) to every lane.
    #[inline]
    pub fn transform(self, h: &Mat4<f32>) -> Self {
        let row = |r: usize| {
            let m = h.m[r];
            self.x * f32x4::splat(m[0])
                + self.y * f32x4::splat(m[1])
                + self.z * f32x4::splat(m[2])
                + f32x4::splat(m[3])
        };
        Self {
            x: row(0),
            y: row(1),
            z: row(2),
        }
    }

    /// Extracts the 4 points as an array.
    #[inline]
    pub fn to_array(self) -> [Point3<f32>; 4] {
        let x = self.x.to_array();
        let y = self.y.to_array();
        let z = self.z.to_array();
        [
            Point3::new(x[0], y[0], z[0]),
            Point3::new(x[1], y[1], z[1]),
            Point3::new(x[2], y[2], z[2]),
            Point3::new(x[3], y[3], z[3]),
        ]
    }
}

/// Transforms `points` by the affine matrix `h`, four at a time.
///
/// Trailing points that do not fill a batch go through the scalar path.
pub fn transform_points_x4(h: &Mat4<f32>, points: &[Point3<f32>]) -> Vec<Point3<f32>> {
    let mut out = Vec::with_capacity(points.len());

    let chunks = points.chunks_exact(4);
    let tail = chunks.remainder();
    for chunk in chunks {
        let batch = Point3x4::from_points([chunk[0], chunk[1], chunk[2], chunk[3]]);
        out.extend_from_slice(&batch.transform(h).to_array());
    }
    for p in tail {
        let v = *h * Vec4::from_point(*p);
        out.push(Point3::new(v.x, v.y, v.z));
    }

    out
}

impl AffineTransform3<f32> {
    /// Applies this transform to many points using SIMD lanes.
    pub fn apply_points_x4(&self, points: &[Point3<f32>]) -> Vec<Point3<f32>> {
        transform_points_x4(self.h(), points)
    }
}
