//! Node identifiers for the complete binary tree.
//!
//! Nodes are addressed by `(depth, position)` where `position < 2^depth`,
//! rather than by pointer-linked structs. All ancestor/descendant relations
//! reduce to shifts on `position`:
//!
//! - parent of `(d, p)` is `(d-1, p >> 1)`
//! - children of `(d, p)` are `(d+1, 2p)` and `(d+1, 2p+1)`
//! - `(d, p)` is an ancestor of `(d', p')` iff `d < d'` and `p' >> (d'-d) == p`
//!
//! The bits of `position`, read most-significant first, spell the binary
//! codeword on the root-to-node path.

use std::fmt;

use crate::error::{KraftTreeError, Result};

/// Default tree depth used by the interactive explorer.
pub const DEFAULT_MAX_DEPTH: u8 = 4;

/// Deepest supported tree. Keeps `position` comfortably inside `u32` and
/// every Kraft term `2^-depth` exactly representable in `f64`.
pub const MAX_DEPTH: u8 = 24;

/// Identifier of a node in a complete binary tree.
///
/// Ordering is `(depth, position)`, so sorted iteration visits nodes in
/// breadth-first order: shallowest first, then left-to-right. The code
/// improvement heuristic relies on exactly this order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
    depth: u8,
    position: u32,
}

impl NodeId {
    /// Create a node identifier, validating that the position exists at the
    /// given depth.
    pub fn new(depth: u8, position: u32) -> Result<Self> {
        if depth > MAX_DEPTH {
            return Err(KraftTreeError::DepthOutOfRange {
                depth,
                limit: MAX_DEPTH,
            });
        }
        if position >= 1u32 << depth {
            return Err(KraftTreeError::InvalidPosition { depth, position });
        }
        Ok(Self { depth, position })
    }

    /// Create a node identifier without validation.
    ///
    /// Callers must guarantee `depth <= MAX_DEPTH` and `position < 2^depth`.
    pub(crate) fn new_unchecked(depth: u8, position: u32) -> Self {
        debug_assert!(depth <= MAX_DEPTH);
        debug_assert!(position < 1u32 << depth);
        Self { depth, position }
    }

    /// The root node `(0, 0)`.
    pub const fn root() -> Self {
        Self {
            depth: 0,
            position: 0,
        }
    }

    /// Depth of this node (0 = root).
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Position within the level, `0..2^depth`, counted left-to-right.
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Whether this is the root node.
    pub const fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Parent node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.depth == 0 {
            return None;
        }
        Some(Self {
            depth: self.depth - 1,
            position: self.position >> 1,
        })
    }

    /// The other child of this node's parent, or `None` for the root.
    pub fn sibling(&self) -> Option<Self> {
        if self.depth == 0 {
            return None;
        }
        Some(Self {
            depth: self.depth,
            position: self.position ^ 1,
        })
    }

    /// Left child `(depth+1, 2*position)`, or `None` at [`MAX_DEPTH`].
    pub fn left_child(&self) -> Option<Self> {
        if self.depth >= MAX_DEPTH {
            return None;
        }
        Some(Self {
            depth: self.depth + 1,
            position: self.position << 1,
        })
    }

    /// Right child `(depth+1, 2*position+1)`, or `None` at [`MAX_DEPTH`].
    pub fn right_child(&self) -> Option<Self> {
        if self.depth >= MAX_DEPTH {
            return None;
        }
        Some(Self {
            depth: self.depth + 1,
            position: (self.position << 1) | 1,
        })
    }

    /// Both children, or `None` at [`MAX_DEPTH`].
    pub fn children(&self) -> Option<(Self, Self)> {
        Some((self.left_child()?, self.right_child()?))
    }

    /// The ancestor of this node at the given shallower depth.
    ///
    /// Returns the node itself when `depth == self.depth()` and `None` when
    /// `depth > self.depth()`.
    pub fn ancestor_at(&self, depth: u8) -> Option<Self> {
        if depth > self.depth {
            return None;
        }
        Some(Self {
            depth,
            position: self.position >> (self.depth - depth),
        })
    }

    /// Iterate over proper ancestors, from parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeId> {
        std::iter::successors(self.parent(), |n| n.parent())
    }

    /// Whether this node is a proper ancestor of `other`.
    pub fn is_ancestor_of(&self, other: NodeId) -> bool {
        self.depth < other.depth
            && (other.position >> (other.depth - self.depth)) == self.position
    }

    /// Whether this node is a proper descendant of `other`.
    pub fn is_descendant_of(&self, other: NodeId) -> bool {
        other.is_ancestor_of(*self)
    }

    /// The binary codeword spelled by the root-to-node path.
    ///
    /// The root has the empty codeword.
    pub fn codeword(&self) -> String {
        (0..self.depth)
            .map(|level| {
                let bit = (self.position >> (self.depth - 1 - level)) & 1;
                if bit == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}, {})", self.depth, self.position)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "ε")
        } else {
            write!(f, "{}", self.codeword())
        }
    }
}
