//! Kraft sum evaluation.
//!
//! For codeword depths `d_1..d_k`, the Kraft sum is `Σ 2^(-d_i)`. A binary
//! prefix-free code satisfies `Σ 2^(-d_i) <= 1` (Kraft's inequality), with
//! equality for a full code.
//!
//! With depths capped at [`crate::MAX_DEPTH`] every term is a dyadic
//! rational with at most 24 fractional bits and the set holds fewer than
//! 2^25 codewords, so all partial sums are exact in `f64` and comparison
//! against 1.0 is exact, not approximate.

use crate::code::CodeSet;

/// Kraft sum of a code set together with the inequality verdict.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KraftStatus {
    /// `Σ 2^(-depth)` over all codewords.
    pub sum: f64,
    /// Whether `sum <= 1`, i.e. Kraft's inequality holds.
    pub satisfied: bool,
}

/// Compute `Σ 2^(-depth)` over all codewords.
///
/// The empty set sums to 0. The sum is informational: mutations are never
/// blocked for violating Kraft's inequality, only by the prefix-free rule
/// (under which a violation is in fact impossible).
pub fn kraft_sum(codes: &CodeSet) -> f64 {
    codes
        .iter()
        .map(|node| f64::powi(0.5, i32::from(node.depth())))
        .sum()
}

/// Evaluate the Kraft sum and check it against 1.
pub fn kraft_status(codes: &CodeSet) -> KraftStatus {
    let sum = kraft_sum(codes);
    KraftStatus {
        sum,
        satisfied: sum <= 1.0,
    }
}
