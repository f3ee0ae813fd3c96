#![allow(dead_code)]
use pokerbot::Chips;
use pokerbot::Seat;
use pokerbot::cards::*;
use pokerbot::gameplay::*;
use std::collections::BTreeMap;

pub const STACK: Chips = 100;

/// Heads-up hand builder. Seat 0 is the button and posts the small blind.
pub struct Table {
    id: HandId,
    holes: [Hole; 2],
    board: Vec<Card>,
    street: Street,
    stacks: [Chips; 2],
    invested: [Chips; 2],
    history: Vec<Ply>,
    steps: Vec<Step>,
}

impl Table {
    pub fn new(id: HandId, holes: [&str; 2], board: &str) -> Self {
        let mut table = Self {
            id,
            holes: holes.map(|h| Hole::try_from(h).unwrap()),
            board: Card::parse(board).unwrap(),
            street: Street::Pref,
            stacks: [STACK; 2],
            invested: [0; 2],
            history: Vec::new(),
            steps: Vec::new(),
        };
        table.post(0, Action::Blind(1));
        table.post(1, Action::Blind(2));
        table
    }

    fn post(&mut self, seat: Seat, action: Action) {
        self.history.push(Ply::from((self.street, seat, action)));
        self.stacks[seat] -= action.amount();
        self.invested[seat] += action.amount();
    }

    pub fn state(&self, seat: Seat) -> GameState {
        let board = Hand::from(&self.board[..self.street.n_observed()]);
        GameState::new(self.street, seat, 2, self.stacks[seat], self.invested.iter().sum())
            .with_board(Board::try_from(board).unwrap())
            .with_hole(self.holes[seat])
            .with_history(self.history.clone())
    }

    pub fn act(mut self, seat: Seat, action: Action) -> Self {
        self.steps.push(Step::from((self.state(seat), action)));
        self.post(seat, action);
        self
    }

    pub fn deal(mut self) -> Self {
        self.street = match self.street {
            Street::Pref => Street::Flop,
            Street::Flop => Street::Turn,
            _ => Street::Rive,
        };
        self
    }

    /// The hand ends with everyone but `winner` folded.
    pub fn folded(self, winner: Seat) -> Record {
        let pot = self.invested.iter().sum();
        self.finish(BTreeMap::from([(winner, pot)]), false)
    }

    /// The hand goes to showdown; `None` splits the pot.
    pub fn showdown(self, winner: Option<Seat>) -> Record {
        let pot: Chips = self.invested.iter().sum();
        let payouts = match winner {
            Some(seat) => BTreeMap::from([(seat, pot)]),
            None => BTreeMap::from([(0, pot / 2), (1, pot - pot / 2)]),
        };
        self.finish(payouts, true)
    }

    fn finish(self, payouts: BTreeMap<Seat, Chips>, showdown: bool) -> Record {
        let board = Hand::from(&self.board[..self.street.n_observed()]);
        Record {
            id: self.id,
            players: BTreeMap::from([(0, "hero".to_string()), (1, "villain".to_string())]),
            steps: self.steps,
            outcome: Outcome {
                invested: BTreeMap::from([(0, self.invested[0]), (1, self.invested[1])]),
                payouts,
                showdown,
                board: Board::try_from(board).unwrap(),
                revealed: match showdown {
                    true => BTreeMap::from([(0, self.holes[0]), (1, self.holes[1])]),
                    false => BTreeMap::new(),
                },
            },
        }
    }
}

const DRY_BOARDS: [&str; 4] = [
    "Kh 7c 2d 9s 4h",
    "Qs 8h 3c Td 5s",
    "Jd 6s 2h 9c Ks",
    "Ks 8d 3h 5c Jh",
];

/// Button limps, both check to the flop bet, big blind folds.
pub fn flop_steal(id: HandId) -> Record {
    Table::new(id, ["Ac Tc", "5d 4d"], DRY_BOARDS[id as usize % DRY_BOARDS.len()])
        .act(0, Action::Call(1))
        .act(1, Action::Check)
        .deal()
        .act(1, Action::Check)
        .act(0, Action::Raise(3))
        .act(1, Action::Fold)
        .folded(0)
}

/// Raised preflop, checked down to a showdown the big blind wins.
pub fn checked_down(id: HandId) -> Record {
    Table::new(id, ["7h 6h", "Qc Qd"], DRY_BOARDS[id as usize % DRY_BOARDS.len()])
        .act(0, Action::Raise(5))
        .act(1, Action::Call(4))
        .deal()
        .act(1, Action::Check)
        .act(0, Action::Check)
        .deal()
        .act(1, Action::Raise(4))
        .act(0, Action::Call(4))
        .deal()
        .act(1, Action::Check)
        .act(0, Action::Check)
        .showdown(Some(1))
}

/// A hand that never reaches a flop: the button shoves, the big blind calls.
pub fn preflop_flip(id: HandId) -> Record {
    Table::new(id, ["Ad Kd", "Th Tc"], DRY_BOARDS[id as usize % DRY_BOARDS.len()])
        .act(0, Action::Shove(99))
        .act(1, Action::Call(98))
        .deal()
        .deal()
        .deal()
        .showdown(None)
}
