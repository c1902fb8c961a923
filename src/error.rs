//! Error types for the kraft-tree crate.
//!
//! Errors only arise from construction-time validation. Interactive
//! operations that cannot proceed (toggling a disabled node, improving a
//! full code) are silent no-ops reported through `bool` returns, not errors.

use thiserror::Error;

/// Errors that can occur while building trees and layouts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KraftTreeError {
    /// Requested tree depth is outside the supported range.
    #[error("tree depth {depth} out of range (supported: 1..={limit})")]
    DepthOutOfRange { depth: u8, limit: u8 },

    /// Node position does not exist at the given depth.
    #[error("position {position} does not exist at depth {depth}")]
    InvalidPosition { depth: u8, position: u32 },

    /// Layout spread factors do not cover every tree level.
    #[error("expected {expected} spread factors (one per level), got {got}")]
    SpreadFactorMismatch { expected: usize, got: usize },
}

/// Result type alias for kraft-tree operations.
pub type Result<T> = std::result::Result<T, KraftTreeError>;
