//! Floating-point vector, matrix and rotation primitives.
//!
//! These are deliberately small: just the arithmetic the affine transform
//! needs (products, transpose, generic inverse) and the rotation
//! conversions its setters accept.

mod mat3;
mod mat4;
mod point3;
mod quat;
pub mod rotation;
mod vec3;
mod vec4;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use point3::Point3;
pub use quat::Quaternion;
pub use rotation::{AxisAngle, EulerAngles, EulerOrder};
pub use vec3::Vec3;
pub use vec4::Vec4;
