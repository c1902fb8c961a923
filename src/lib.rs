//! # kraft-tree
//!
//! Interactive prefix-code tree manager: the model behind a Kraft-inequality
//! explorer for binary prefix-free codes.
//!
//! The crate models a complete binary tree of fixed depth on which nodes are
//! marked as codewords. Key pieces:
//!
//! - **Arithmetic node ids**: nodes are `(depth, position)` pairs, so
//!   ancestor/descendant relations are bit shifts, not pointer walks
//! - **Prefix-free by construction**: every mutation preserves the invariant
//!   that no codeword is an ancestor or descendant of another
//! - **Kraft evaluation**: `Σ 2^(-depth)` with an exact verdict against 1
//! - **Greedy improvement**: a single-step relocation heuristic that trades
//!   unused leaf capacity for shorter codes, the constructive argument
//!   behind Kraft's inequality
//!
//! ## Typical use
//!
//! ```
//! use kraft_tree::{kraft_status, resolve_node_states, CodeSet, CodeTree, NodeId};
//!
//! let tree = CodeTree::new(4)?;
//! let mut codes = CodeSet::new();
//!
//! codes.toggle(&tree, NodeId::new(4, 0)?);
//! while codes.improve(&tree) {}
//!
//! assert_eq!(kraft_status(&codes).sum, 1.0);
//! let states = resolve_node_states(&tree, &codes);
//! assert!(states[&NodeId::root()].is_code);
//! # Ok::<(), kraft_tree::KraftTreeError>(())
//! ```
//!
//! All operations are synchronous and single-threaded; a rendering layer is
//! expected to own a `CodeTree` plus a `CodeSet`, dispatch clicks to
//! [`CodeSet::toggle`], and redraw from [`resolve_node_states`] and a
//! [`TreeLayout`].

mod code;
mod error;
mod kraft;
mod layout;
mod node;
mod state;
mod tree;

pub use code::CodeSet;
pub use error::{KraftTreeError, Result};
pub use kraft::{kraft_status, kraft_sum, KraftStatus};
pub use layout::{Point, TreeLayout};
pub use node::{NodeId, DEFAULT_MAX_DEPTH, MAX_DEPTH};
pub use state::{resolve_node_states, NodeState};
pub use tree::CodeTree;
