use super::action::Action;
use crate::Seat;
use crate::cards::Street;

/// One entry of a hand's action history: who did what, on which street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Ply {
    pub street: Street,
    pub actor: Seat,
    pub action: Action,
}

impl From<(Street, Seat, Action)> for Ply {
    fn from((street, actor, action): (Street, Seat, Action)) -> Self {
        Self {
            street,
            actor,
            action,
        }
    }
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<8}P{} {}", self.street, self.actor, self.action)
    }
}
