use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::Error;

/// The community cards visible to all players.
///
/// A well-formed board holds 0, 3, 4 or 5 cards. Parsing only rejects
/// more than five; whether the count matches the street is checked where
/// game states are validated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board(Hand);

impl Board {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// The street implied by the number of cards, if the count is legal.
    pub fn street(&self) -> Option<Street> {
        Street::all()
            .into_iter()
            .find(|s| s.n_observed() == self.size())
    }
    pub fn cards(&self) -> Vec<Card> {
        Vec::<Card>::from(self.0)
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<Hand> for Board {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            0..=5 => Ok(Self(hand)),
            _ => Err(Error::InvalidCard(format!("board exceeds five cards: {}", hand))),
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Hand::try_from(s).and_then(Self::try_from)
    }
}
impl TryFrom<String> for Board {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
