use crate::*;
use crate::cards::*;
use crate::gameplay::*;
use std::collections::BTreeMap;

/// What we have learned about one opponent.
///
/// Every tendency is an exponentially weighted average, so with a decay of
/// 0.9 roughly the last twenty relevant actions dominate. A profile is a
/// value: observing a hand returns the next version and leaves this one
/// untouched for whoever still holds it.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Profile {
    /// Share of voluntary actions that bet, raise or shove.
    pub aggression: Probability,
    /// Share of showdown bets and raises made with below-median holdings.
    pub bluffing: Probability,
    /// Share of decisions facing a wager that ended in a fold.
    pub folding: Probability,
    /// Aggression split by table position.
    #[serde(default)]
    pub positions: BTreeMap<Position, Probability>,
    pub hands: u64,
    pub actions: u64,
    pub version: u64,
}

impl Default for Profile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Profile {
    /// Prior for an opponent we have never seen.
    pub fn neutral() -> Self {
        Self {
            aggression: NEUTRAL_AGGRESSION,
            bluffing: 0.,
            folding: NEUTRAL_FOLDING,
            positions: BTreeMap::new(),
            hands: 0,
            actions: 0,
            version: 0,
        }
    }
    /// Aggression from one position, the overall figure if never seen there.
    pub fn aggression_at(&self, position: &Position) -> Probability {
        self.positions
            .get(position)
            .copied()
            .unwrap_or(self.aggression)
    }
    pub fn is_neutral(&self) -> bool {
        self.hands == 0
    }

    /// The profile after watching `seat` play through `record`.
    pub fn observe(&self, seat: Seat, record: &Record, decay: Probability) -> Self {
        let ewma = |old: Probability, hit: bool| decay * old + (1. - decay) * hit as u8 as f32;
        let revealed = record
            .outcome
            .revealed
            .get(&seat)
            .filter(|_| record.outcome.showdown);
        let mut next = self.clone();
        for step in record.steps_of(seat).filter(|s| s.action.is_choice()) {
            let aggro = step.action.is_aggro();
            next.actions += 1;
            if let Some(position) = step.state.position() {
                let prior = next.aggression_at(&position);
                next.positions.insert(position, ewma(prior, aggro));
            }
            next.aggression = ewma(next.aggression, aggro);
            if step.state.is_facing() {
                next.folding = ewma(next.folding, step.action.is_fold());
            }
            if let (true, Some(hole)) = (aggro, revealed) {
                let observation = Observation::from((*hole, *step.state.board()));
                match observation.equity() {
                    Ok(equity) => next.bluffing = ewma(next.bluffing, equity < 0.5),
                    Err(e) => log::debug!("{:<32}{:<32}", "skipping    bluff check", e),
                }
            }
        }
        next.hands += 1;
        next.version += 1;
        next
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "aggr {:.2} bluff {:.2} fold {:.2} ({} hands, v{})",
            self.aggression, self.bluffing, self.folding, self.hands, self.version
        )
    }
}
