//! The code set and its mutation engine.
//!
//! A [`CodeSet`] is the set of tree nodes currently marked as codewords of a
//! binary prefix-free code. The engine maintains the prefix-free invariant
//! across every mutation: no element is ever an ancestor or descendant of
//! another element.
//!
//! Mutations that cannot proceed (toggling a node under an existing
//! codeword, improving a code with no slack) are silent no-ops; the `bool`
//! return reports whether the set changed.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::node::NodeId;
use crate::tree::CodeTree;

/// A prefix-free set of codeword nodes.
///
/// Backed by a `BTreeSet<NodeId>`, so iteration is breadth-first
/// (shallowest first, then left-to-right). The improvement heuristic's
/// "leftmost codeword in a subtree" tie-break falls directly out of this
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeSet {
    nodes: BTreeSet<NodeId>,
}

impl CodeSet {
    /// Create an empty code set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the node is currently a codeword.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Number of codewords.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no codewords are marked.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over codewords in breadth-first order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Whether some proper ancestor of `node` is a codeword.
    ///
    /// Disabled nodes cannot be toggled: they sit underneath an existing
    /// codeword, so marking them would break the prefix-free property.
    pub fn is_disabled(&self, node: NodeId) -> bool {
        node.ancestors().any(|a| self.nodes.contains(&a))
    }

    /// The first codeword at or below `root`, in breadth-first order.
    pub fn first_code_in_subtree(&self, root: NodeId) -> Option<NodeId> {
        self.nodes
            .iter()
            .copied()
            .find(|&n| n == root || root.is_ancestor_of(n))
    }

    /// Diagnostic check of the prefix-free invariant.
    ///
    /// Every mutation preserves the invariant by construction; this exists
    /// for tests and debug assertions.
    pub fn is_prefix_free(&self) -> bool {
        self.nodes.iter().all(|&n| !self.is_disabled(n))
    }

    /// Toggle a node's codeword marking.
    ///
    /// - A node outside the tree, or disabled under an existing codeword,
    ///   is left alone (returns `false`).
    /// - A current codeword is unmarked.
    /// - Otherwise the node is marked, first unmarking every codeword in
    ///   its subtree (a codeword subsumes its descendants).
    ///
    /// Returns whether the set changed. The set is prefix-free afterwards.
    pub fn toggle(&mut self, tree: &CodeTree, node: NodeId) -> bool {
        if !tree.contains(node) {
            trace!(%node, "toggle ignored: node outside tree");
            return false;
        }
        if self.nodes.remove(&node) {
            debug!(%node, remaining = self.nodes.len(), "codeword removed");
            return true;
        }
        if self.is_disabled(node) {
            trace!(%node, "toggle ignored: node disabled by ancestor codeword");
            return false;
        }

        let subsumed: Vec<NodeId> = self
            .nodes
            .iter()
            .copied()
            .filter(|&c| node.is_ancestor_of(c))
            .collect();
        for c in &subsumed {
            self.nodes.remove(c);
        }
        self.nodes.insert(node);
        debug_assert!(self.is_prefix_free());
        debug!(%node, subsumed = subsumed.len(), "codeword added");
        true
    }

    /// One greedy step toward Kraft equality.
    ///
    /// Finds the leftmost free leaf (a leaf with no codeword at itself or
    /// any ancestor) and walks from it toward the root. At each step it
    /// inspects the sibling of the current node:
    ///
    /// - sibling is itself a codeword: the sibling is replaced by the
    ///   shared parent, shortening that code by one bit;
    /// - sibling's subtree holds codewords deeper inside: the leftmost one
    ///   (breadth-first) is relocated to the current node, shortening it to
    ///   the current level.
    ///
    /// At most one change is made per call. Whenever the set changes, the
    /// Kraft sum strictly increases; when no free leaf exists or the walk
    /// reaches the root without a candidate, the call is a no-op.
    ///
    /// Returns whether the set changed.
    pub fn improve(&mut self, tree: &CodeTree) -> bool {
        let Some(free_leaf) = self.free_leaf(tree) else {
            trace!("improve ignored: no free leaf");
            return false;
        };

        // Walking up from the free leaf, the current node's whole subtree
        // is codeword-free: it contains the free leaf, and every sibling
        // subtree passed on the way up was just checked. Its ancestors are
        // ancestors of the free leaf, also codeword-free. So inserting at
        // `current` (or at its parent after removing the sibling) always
        // preserves the prefix-free invariant.
        let mut current = free_leaf;
        while let (Some(sibling), Some(parent)) = (current.sibling(), current.parent()) {
            if self.nodes.remove(&sibling) {
                self.nodes.insert(parent);
                debug_assert!(self.is_prefix_free());
                debug!(from = %sibling, to = %parent, "codeword merged with free sibling");
                return true;
            }
            if let Some(deep) = self.first_code_in_subtree(sibling) {
                self.nodes.remove(&deep);
                self.nodes.insert(current);
                debug_assert!(self.is_prefix_free());
                debug!(from = %deep, to = %current, "codeword relocated to shorter position");
                return true;
            }
            current = parent;
        }

        trace!(%free_leaf, "improve ignored: no codeword reachable from free leaf");
        false
    }

    /// Clear all codewords.
    pub fn reset(&mut self) {
        let cleared = self.nodes.len();
        self.nodes.clear();
        debug!(cleared, "code set reset");
    }

    /// The leftmost leaf with no codeword at itself or any ancestor, if any.
    fn free_leaf(&self, tree: &CodeTree) -> Option<NodeId> {
        tree.leaves()
            .find(|&leaf| !self.nodes.contains(&leaf) && !self.is_disabled(leaf))
    }
}

impl<'a> IntoIterator for &'a CodeSet {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
