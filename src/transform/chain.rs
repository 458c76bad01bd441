//! Root-to-leaf products of local transforms, as in a scene-graph update.

use super::AffineTransform3;
use crate::error::TransformError;
use crate::primitives::Point3;
use num_traits::Float;
use std::fmt;
use tracing::trace;

/// A path of local transforms from a root node down to a leaf.
///
/// The world transform of node `k` is `locals[0] * locals[1] * ... *
/// locals[k]`. Keeping interior nodes at uniform scale lets every product
/// along the path stay rotation-scale; only the leaf may carry a
/// nonuniform scale without degrading to a general matrix.
///
/// # Example
///
/// ```
/// use affinum::{AffineTransform3, TransformChain, Vec3};
///
/// let mut chain: TransformChain<f64> = TransformChain::new();
/// chain.push(AffineTransform3::from_translation(Vec3::new(1.0, 0.0, 0.0)));
/// chain.push(AffineTransform3::from_translation(Vec3::new(0.0, 2.0, 0.0)));
///
/// assert_eq!(chain.world().translation(), Vec3::new(1.0, 2.0, 0.0));
/// ```
pub struct TransformChain<F> {
    locals: Vec<AffineTransform3<F>>,
}

impl<F: Float> TransformChain<F> {
    /// Creates an empty chain whose world transform is the identity.
    pub fn new() -> Self {
        Self { locals: Vec::new() }
    }

    /// Appends a child below the current leaf.
    pub fn push(&mut self, local: AffineTransform3<F>) {
        self.locals.push(local);
    }

    /// Removes and returns the leaf.
    pub fn pop(&mut self) -> Option<AffineTransform3<F>> {
        self.locals.pop()
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.locals.len()
    }

    /// Returns true if the chain has no nodes.
    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }

    /// Local transforms from root to leaf.
    pub fn locals(&self) -> &[AffineTransform3<F>] {
        &self.locals
    }

    /// Mutable access to the local transform at `depth`.
    pub fn local_mut(&mut self, depth: usize) -> Option<&mut AffineTransform3<F>> {
        self.locals.get_mut(depth)
    }

    /// World transform of the leaf.
    pub fn world(&self) -> AffineTransform3<F> {
        self.locals
            .iter()
            .fold(AffineTransform3::identity(), |acc, local| acc.compose(local))
    }

    /// World transform of every node, root first.
    pub fn world_transforms(&self) -> Vec<AffineTransform3<F>> {
        let mut out: Vec<AffineTransform3<F>> = Vec::with_capacity(self.locals.len());
        for local in &self.locals {
            let world = match out.last() {
                Some(parent) => parent.compose(local),
                None => local.clone(),
            };
            trace!(depth = out.len(), classification = ?world.classification(), "world transform");
            out.push(world);
        }
        out
    }

    /// Transforms leaf-local points into world space.
    pub fn world_points(&self, points: &[Point3<F>]) -> Vec<Point3<F>> {
        self.world().apply_points(points)
    }

    /// Transforms world-space points into the leaf's local space.
    pub fn local_points(&self, points: &[Point3<F>]) -> Result<Vec<Point3<F>>, TransformError> {
        let world = self.world();
        points.iter().map(|p| world.inverse_apply_point(*p)).collect()
    }
}

impl<F: Float> Default for TransformChain<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Clone for TransformChain<F> {
    fn clone(&self) -> Self {
        Self {
            locals: self.locals.clone(),
        }
    }
}

impl<F: Float + fmt::Debug> fmt::Debug for TransformChain<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.locals.iter()).finish()
    }
}
