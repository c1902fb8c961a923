//! Derived per-node state.
//!
//! State is computed fresh from the tree and the current code set; it is
//! never stored. Recomputing after every mutation is idempotent and cheap
//! at interactive tree sizes.

use std::collections::HashMap;

use crate::code::CodeSet;
use crate::node::NodeId;
use crate::tree::CodeTree;

/// Derived state of a single node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    /// The node is currently a codeword.
    pub is_code: bool,
    /// Some proper ancestor is a codeword, so this node cannot be toggled.
    pub is_disabled: bool,
}

/// Compute the derived state of every node in the tree.
///
/// The mapping is total: every node of `tree` appears exactly once. A node
/// is never both a codeword and disabled, since the code set is prefix-free.
pub fn resolve_node_states(tree: &CodeTree, codes: &CodeSet) -> HashMap<NodeId, NodeState> {
    tree.nodes()
        .map(|node| {
            let state = NodeState {
                is_code: codes.contains(node),
                is_disabled: codes.is_disabled(node),
            };
            (node, state)
        })
        .collect()
}
