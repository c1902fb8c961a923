//! 2D layout for rendering the tree.
//!
//! Layout is a pure function of the tree depth and per-level horizontal
//! spread factors. It is display-only; no invariant depends on coordinates.

use crate::error::{KraftTreeError, Result};
use crate::node::NodeId;
use crate::tree::CodeTree;

/// A 2D point in layout space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Coordinates for every node of a [`CodeTree`].
///
/// The root sits at `x = 0`. Each step from a node at level `l` to its
/// children moves left or right by `spread[l]`, so subtrees separate
/// without overlap as long as the factors shrink fast enough. `y` grows
/// by `vertical_step` per level.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeLayout {
    tree: CodeTree,
    spread: Vec<f64>,
    vertical_step: f64,
}

impl TreeLayout {
    /// Create a layout with explicit per-level spread factors.
    ///
    /// `spread` must contain exactly one factor per level, i.e.
    /// `tree.max_depth()` entries; `spread[l]` is the horizontal offset
    /// applied when stepping from level `l` to level `l + 1`.
    pub fn new(tree: &CodeTree, spread: Vec<f64>) -> Result<Self> {
        let expected = tree.max_depth() as usize;
        if spread.len() != expected {
            return Err(KraftTreeError::SpreadFactorMismatch {
                expected,
                got: spread.len(),
            });
        }
        Ok(Self {
            tree: *tree,
            spread,
            vertical_step: 1.0,
        })
    }

    /// Create a layout whose spread halves at every level, starting from
    /// `base`. Halving guarantees sibling subtrees never overlap.
    pub fn uniform(tree: &CodeTree, base: f64) -> Self {
        let spread = (0..tree.max_depth())
            .map(|level| base / f64::powi(2.0, level as i32))
            .collect();
        Self {
            tree: *tree,
            spread,
            vertical_step: 1.0,
        }
    }

    /// Set the vertical distance between adjacent levels (default 1.0).
    pub fn with_vertical_step(mut self, step: f64) -> Self {
        self.vertical_step = step;
        self
    }

    /// Coordinates of a node, or `None` if the node is outside the tree
    /// this layout was built for.
    pub fn position_of(&self, node: NodeId) -> Option<Point> {
        if !self.tree.contains(node) {
            return None;
        }
        let mut x = 0.0;
        for level in 0..node.depth() {
            let bit = (node.position() >> (node.depth() - 1 - level)) & 1;
            if bit == 1 {
                x += self.spread[level as usize];
            } else {
                x -= self.spread[level as usize];
            }
        }
        Some(Point {
            x,
            y: f64::from(node.depth()) * self.vertical_step,
        })
    }

    /// Coordinates for every node, in breadth-first order.
    pub fn points(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.tree.nodes().map(move |n| {
            // nodes() only yields in-tree nodes
            let p = self.position_of(n).unwrap_or(Point { x: 0.0, y: 0.0 });
            (n, p)
        })
    }
}
