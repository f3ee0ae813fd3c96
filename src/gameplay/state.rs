use super::*;
use crate::Chips;
use crate::Error;
use crate::Seat;
use crate::cards::*;
use std::collections::BTreeMap;

/// Largest table the model accepts.
const MAX_SEATS: usize = 10;

/// An immutable snapshot of one decision point.
///
/// The deciding player sits at `seat` (button-relative). History covers the
/// whole hand so far, every street included, and the pot already contains
/// every chip in that history. Nothing mutates a state after construction;
/// the `with_*` methods only assemble a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GameState {
    street: Street,
    seat: Seat,
    seats: usize,
    stack: Chips,
    pot: Chips,
    #[serde(default)]
    board: Board,
    #[serde(default)]
    hole: Option<Hole>,
    #[serde(default)]
    history: Vec<Ply>,
}

impl GameState {
    pub fn new(street: Street, seat: Seat, seats: usize, stack: Chips, pot: Chips) -> Self {
        Self {
            street,
            seat,
            seats,
            stack,
            pot,
            board: Board::empty(),
            hole: None,
            history: Vec::new(),
        }
    }
    pub fn with_board(self, board: Board) -> Self {
        Self { board, ..self }
    }
    pub fn with_hole(self, hole: Hole) -> Self {
        Self {
            hole: Some(hole),
            ..self
        }
    }
    pub fn with_history(self, history: Vec<Ply>) -> Self {
        Self { history, ..self }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn seats(&self) -> usize {
        self.seats
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn hole(&self) -> Option<&Hole> {
        self.hole.as_ref()
    }
    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    /// Stack-to-pot ratio of the deciding player.
    pub fn spr(&self) -> f32 {
        self.stack as f32 / self.pot.max(1) as f32
    }
    pub fn position(&self) -> Option<Position> {
        Position::bucket(self.seat, self.seats)
    }
    /// The hole cards and board together, when the hole cards are known.
    pub fn observation(&self) -> Option<Observation> {
        self.hole.map(|hole| Observation::from((hole, self.board)))
    }
    /// Plies of the current street, in order.
    pub fn current(&self) -> impl Iterator<Item = &Ply> + '_ {
        self.history.iter().filter(|p| p.street == self.street)
    }
    /// Chips the deciding player must add to continue.
    pub fn to_call(&self) -> Chips {
        let committed = self
            .current()
            .fold(BTreeMap::<Seat, Chips>::new(), |mut map, ply| {
                *map.entry(ply.actor).or_default() += ply.action.amount();
                map
            });
        let highest = committed.values().copied().max().unwrap_or(0);
        let mine = committed.get(&self.seat).copied().unwrap_or(0);
        (highest - mine).max(0)
    }
    /// True if someone bet or raised into the deciding player this street.
    pub fn is_facing(&self) -> bool {
        self.to_call() > 0
    }
    /// Pot before the ply at `index` in history was added.
    pub fn pot_before(&self, index: usize) -> Chips {
        let after = self.history[index..]
            .iter()
            .map(|p| p.action.amount())
            .sum::<Chips>();
        (self.pot - after).max(1)
    }

    /// Checks every structural requirement extraction and lookup rely on.
    pub fn validate(&self) -> Result<(), Error> {
        let malformed = |reason: String| Err(Error::MalformedGameState(reason));
        if self.seats < 2 || self.seats > MAX_SEATS {
            return malformed(format!("table of {} seats", self.seats));
        }
        if self.seat >= self.seats {
            return malformed(format!("seat {} at {}-handed table", self.seat, self.seats));
        }
        if self.pot <= 0 {
            return malformed(format!("pot of {}", self.pot));
        }
        if self.stack < 0 {
            return malformed(format!("stack of {}", self.stack));
        }
        if self.board.street() != Some(self.street) {
            return malformed(format!("{} board cards on {}", self.board.size(), self.street));
        }
        if let Some(hole) = self.hole {
            if Hand::from(hole).overlaps(&Hand::from(self.board)) {
                return malformed(format!("hole {} overlaps board {}", hole, self.board));
            }
        }
        if let Some(ply) = self
            .history
            .iter()
            .find(|p| p.actor >= self.seats || p.action.amount() < 0 || p.street > self.street)
        {
            return malformed(format!("impossible ply {}", ply));
        }
        if let Some(ply) = self.history.iter().find(|p| {
            matches!(p.action, Action::Call(0) | Action::Raise(0) | Action::Shove(0))
        }) {
            return malformed(format!("empty wager {}", ply));
        }
        Ok(())
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} P{}/{} stack {} pot {} [{}]",
            self.street, self.seat, self.seats, self.stack, self.pot, self.board
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flop() -> GameState {
        GameState::new(Street::Flop, 0, 2, 180, 20)
            .with_board(Board::try_from("Ah 7c 2d").unwrap())
            .with_hole(Hole::try_from("As Kd").unwrap())
            .with_history(vec![
                Ply::from((Street::Pref, 0, Action::Blind(1))),
                Ply::from((Street::Pref, 1, Action::Blind(2))),
                Ply::from((Street::Pref, 0, Action::Call(1))),
                Ply::from((Street::Pref, 1, Action::Check)),
                Ply::from((Street::Flop, 1, Action::Raise(16))),
            ])
    }

    #[test]
    fn valid_state() {
        assert_eq!(flop().validate(), Ok(()));
        assert_eq!(flop().position(), Some(Position::Btn));
    }

    #[test]
    fn facing_a_bet() {
        let state = flop();
        assert_eq!(state.to_call(), 16);
        assert!(state.is_facing());
        assert_eq!(state.pot_before(4), 4);
    }

    #[test]
    fn board_must_match_street() {
        let state = flop().with_board(Board::try_from("Ah 7c").unwrap());
        assert!(matches!(state.validate(), Err(Error::MalformedGameState(_))));
    }

    #[test]
    fn hole_cannot_overlap_board() {
        let state = flop().with_hole(Hole::try_from("Ah Kd").unwrap());
        assert!(matches!(state.validate(), Err(Error::MalformedGameState(_))));
    }

    #[test]
    fn seat_must_exist() {
        let state = GameState::new(Street::Pref, 4, 3, 100, 3);
        assert!(matches!(state.validate(), Err(Error::MalformedGameState(_))));
    }
}
