use crate::Probability;
use crate::Utility;
use crate::gameplay::Edge;
use crate::patterns::Key;

/// Where a decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// A rule compiled for exactly this fingerprint.
    Exact(Key),
    /// A rule compiled for a broader prefix of the fingerprint.
    Prefix(Key),
    /// No rule matched; hand strength and pot odds decided.
    Heuristic,
}

impl From<Key> for Source {
    fn from(key: Key) -> Self {
        match key.is_full() {
            true => Source::Exact(key),
            false => Source::Prefix(key),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Exact(key) => write!(f, "exact {}", key),
            Source::Prefix(key) => write!(f, "prefix {}", key),
            Source::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// What the runtime recommends at one decision point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Decision {
    pub action: Edge,
    pub confidence: Probability,
    /// Expected value of the action in chips.
    pub ev: Utility,
    pub source: Source,
    /// Version of the rule set consulted.
    pub version: u64,
}

impl Decision {
    /// Check if possible, else fold. What a caller plays when no decision
    /// could be made.
    pub fn safe(facing: bool) -> Self {
        Self {
            action: Edge::safe(facing),
            confidence: 0.,
            ev: 0.,
            source: Source::Heuristic,
            version: 0,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {:.2} (ev {:+.2}, {}, v{})",
            self.action, self.confidence, self.ev, self.source, self.version
        )
    }
}
