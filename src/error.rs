//! Error types for affine transform operations.

use thiserror::Error;

/// Errors that can occur when querying, mutating or inverting a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The linear channel holds a general matrix, not a rotation-scale pair.
    #[error("transform is not rotation-scale")]
    NotRotationScale,

    /// The scale channel is not a single uniform value.
    #[error("transform is not uniform scale")]
    NotUniformScale,

    /// A scale component was zero.
    #[error("scales must be nonzero")]
    ZeroScale,

    /// The linear part has no inverse.
    #[error("matrix is singular")]
    SingularMatrix,
}
