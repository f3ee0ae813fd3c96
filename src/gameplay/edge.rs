use super::action::Action;

/// An abstracted decision, stripped of its chip amount.
///
/// Histograms, templates and rules are all keyed by Edge so that decisions
/// of different sizes in the same situation aggregate together. Blinds are
/// forced and never become edges.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Fold,
    Check,
    Call,
    Raise,
    Shove,
}

impl Edge {
    pub const fn all() -> [Self; 5] {
        [Edge::Fold, Edge::Check, Edge::Call, Edge::Raise, Edge::Shove]
    }
    /// True if this is aggressive (raise or shove).
    pub fn is_aggro(&self) -> bool {
        matches!(self, Edge::Raise | Edge::Shove)
    }
    /// True if this keeps a player in the hand without adding pressure.
    pub fn is_passive(&self) -> bool {
        matches!(self, Edge::Check | Edge::Call)
    }
    /// The safe default when nothing else can be decided.
    pub fn safe(facing: bool) -> Self {
        if facing { Edge::Fold } else { Edge::Check }
    }
}

impl TryFrom<Action> for Edge {
    type Error = &'static str;
    fn try_from(action: Action) -> Result<Self, Self::Error> {
        match action {
            Action::Fold => Ok(Edge::Fold),
            Action::Check => Ok(Edge::Check),
            Action::Call(_) => Ok(Edge::Call),
            Action::Raise(_) => Ok(Edge::Raise),
            Action::Shove(_) => Ok(Edge::Shove),
            Action::Blind(_) => Err("blinds are not decisions"),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Edge::Fold => write!(f, "fold"),
            Edge::Check => write!(f, "check"),
            Edge::Call => write!(f, "call"),
            Edge::Raise => write!(f, "raise"),
            Edge::Shove => write!(f, "shove"),
        }
    }
}
