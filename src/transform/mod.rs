//! Affine transforms that track their rotation-scale decomposition.
//!
//! An [`AffineTransform3`] is always in one of four states (see
//! [`Classification`]); composition and inversion pick the cheapest formula
//! the states of their operands allow.

mod affine3;
mod chain;
mod compose;
mod inverse;

pub use affine3::{AffineTransform3, Classification, Linear};
pub use chain::TransformChain;
