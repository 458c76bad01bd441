//! affinum - 3D affine transforms for transform hierarchies
//!
//! Composing transforms along every root-to-leaf path of a scene graph each
//! frame is cheap when each transform remembers whether it is a rotation
//! with uniform scale, a rotation with nonuniform scale, or a general
//! matrix. This library keeps that decomposition, composes through closed
//! forms where it can, and computes inverses only on request.

pub mod error;
pub mod primitives;
#[cfg(feature = "simd")]
pub mod simd;
pub mod transform;

pub use error::TransformError;
pub use primitives::{Mat3, Mat4, Point3, Quaternion, Vec3, Vec4};
pub use transform::{AffineTransform3, Classification, Linear, TransformChain};
