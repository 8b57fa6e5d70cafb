//! Error types raised while configuring the heuristic matcher.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by [`MatchWeights::validate`](crate::MatchWeights::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchWeightsError {
    /// The "near" date window is wider than the "far" one.
    #[error("near date window of {near} days exceeds far window of {far} days")]
    InvertedDateWindows {
        /// Configured near window in days.
        near: u32,
        /// Configured far window in days.
        far: u32,
    },
    /// Keywords were allowed to be zero characters long.
    #[error("minimum keyword length must be at least one character")]
    ZeroKeywordLength,
}
