use thiserror::Error;

/// Failures surfaced by the core pipeline.
///
/// Only the runtime propagates these to callers. Extraction and compilation
/// recover from per-record problems locally and report them as skip counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("hand evaluation needs 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("malformed game state: {0}")]
    MalformedGameState(String),

    #[error("no action could be resolved: {0}")]
    UnresolvableDecision(String),

    #[error("invalid card: {0}")]
    InvalidCard(String),
}
