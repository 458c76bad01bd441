//! SIMD-accelerated batch transforms.
//!
//! Transforming many points through the same matrix (mesh vertices under a
//! node's world transform, for instance) processes four points per step.
//!
//! Enable with the `simd` feature flag (on by default):
//! ```toml
//! affinum = { version = "0.1", features = ["simd"] }
//! ```

mod point;

pub use point::{transform_points_x4, Point3x4};
