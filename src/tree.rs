//! The complete binary tree over which codes are placed.
//!
//! The tree is a fixed, immutable structure determined entirely by its
//! depth; it is built once and never mutated. Only the codeword marking
//! (see [`crate::CodeSet`]) carries mutable state.

use crate::error::{KraftTreeError, Result};
use crate::node::{NodeId, DEFAULT_MAX_DEPTH, MAX_DEPTH};

/// A complete binary tree of fixed depth.
///
/// Every node at depth `< max_depth` has exactly two children; nodes at
/// `max_depth` are the leaves. Since node relations are pure arithmetic on
/// [`NodeId`], the tree only needs to remember its depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeTree {
    max_depth: u8,
}

impl Default for CodeTree {
    fn default() -> Self {
        // DEFAULT_MAX_DEPTH is always in range
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodeTree {
    /// Create a complete binary tree of the given depth.
    ///
    /// `max_depth` must be in `1..=MAX_DEPTH`.
    pub fn new(max_depth: u8) -> Result<Self> {
        if max_depth == 0 || max_depth > MAX_DEPTH {
            return Err(KraftTreeError::DepthOutOfRange {
                depth: max_depth,
                limit: MAX_DEPTH,
            });
        }
        Ok(Self { max_depth })
    }

    /// Depth of the tree's leaves.
    pub const fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Total number of nodes, `2^(max_depth+1) - 1`.
    pub const fn node_count(&self) -> u64 {
        (1u64 << (self.max_depth + 1)) - 1
    }

    /// Number of leaves, `2^max_depth`.
    pub const fn leaf_count(&self) -> u64 {
        1u64 << self.max_depth
    }

    /// Whether the given node lies within this tree.
    pub const fn contains(&self, node: NodeId) -> bool {
        node.depth() <= self.max_depth
    }

    /// Whether the given node is a leaf of this tree.
    pub const fn is_leaf(&self, node: NodeId) -> bool {
        node.depth() == self.max_depth
    }

    /// Children of a node within this tree; `None` for leaves.
    pub fn children_of(&self, node: NodeId) -> Option<(NodeId, NodeId)> {
        if node.depth() >= self.max_depth {
            return None;
        }
        node.children()
    }

    /// Iterate over all nodes in breadth-first order (level by level,
    /// left-to-right within a level).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        let max_depth = self.max_depth;
        (0..=max_depth)
            .flat_map(|depth| (0..1u32 << depth).map(move |pos| NodeId::new_unchecked(depth, pos)))
    }

    /// Iterate over the leaves, left-to-right.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> {
        let max_depth = self.max_depth;
        (0..1u32 << max_depth).map(move |pos| NodeId::new_unchecked(max_depth, pos))
    }
}
