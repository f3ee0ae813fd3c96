use super::*;
use crate::Seat;
use std::collections::BTreeMap;

/// Unique identifier of a recorded hand.
pub type HandId = u64;

/// One decision of a recorded hand: the state the actor saw and what they did.
/// The actor is the state's deciding seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Step {
    pub state: GameState,
    pub action: Action,
}

impl Step {
    pub fn actor(&self) -> Seat {
        self.state.seat()
    }
}

impl From<(GameState, Action)> for Step {
    fn from((state, action): (GameState, Action)) -> Self {
        Self { state, action }
    }
}

/// A completed hand as supplied by hand-history ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub id: HandId,
    /// Player identifiers by seat.
    #[serde(default)]
    pub players: BTreeMap<Seat, String>,
    pub steps: Vec<Step>,
    pub outcome: Outcome,
}

impl Record {
    /// The seat a named player occupied in this hand.
    pub fn seat_of(&self, player: &str) -> Option<Seat> {
        self.players
            .iter()
            .find(|(_, name)| name.as_str() == player)
            .map(|(&seat, _)| seat)
    }
    /// Steps taken by one seat, in order.
    pub fn steps_of(&self, seat: Seat) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().filter(move |s| s.actor() == seat)
    }
}
