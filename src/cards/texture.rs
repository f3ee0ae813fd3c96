use super::board::Board;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;

/// Board texture class, coarse enough that most boards share one.
///
/// Suit-specific and rank-specific detail is deliberately thrown away:
/// two boards with the same flush potential, pairing and connectivity
/// land in the same class.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    /// No board yet.
    Blank,
    /// Rainbow, unpaired, disconnected.
    Dry,
    /// At least one pair on board.
    Paired,
    /// Either a flush draw or a straight draw is possible.
    SemiWet,
    /// Both flush and straight draws are possible.
    Wet,
    /// Three or more cards of one suit.
    Monotone,
}

impl Texture {
    pub const fn all() -> [Self; 6] {
        [
            Self::Blank,
            Self::Dry,
            Self::Paired,
            Self::SemiWet,
            Self::Wet,
            Self::Monotone,
        ]
    }
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Dry => "dry",
            Self::Paired => "paired",
            Self::SemiWet => "semi",
            Self::Wet => "wet",
            Self::Monotone => "mono",
        }
    }
    /// Most ranks of the board inside any five-rank window, ace playing low too.
    fn connectivity(ranks: u16) -> u32 {
        let ranks = ranks as u32;
        let wheel = ((ranks >> 12) & 1) | (ranks << 1);
        (0..10)
            .map(|lo| (wheel >> lo) & 0b11111)
            .map(|window| window.count_ones())
            .max()
            .unwrap_or(0)
    }
}

impl From<Board> for Texture {
    fn from(board: Board) -> Self {
        let hand = Hand::from(board);
        if hand.size() == 0 {
            return Self::Blank;
        }
        let suited = Suit::all()
            .iter()
            .map(|s| hand.of(s).size())
            .max()
            .unwrap_or(0);
        let paired = Rank::all().into_iter().any(|r| hand.count_of(r) >= 2);
        let flushy = suited == 2;
        let straighty = Self::connectivity(u16::from(hand)) >= 3;
        match (suited >= 3, paired, flushy, straighty) {
            (true, _, _, _) => Self::Monotone,
            (_, true, _, _) => Self::Paired,
            (_, _, true, true) => Self::Wet,
            (_, _, true, false) | (_, _, false, true) => Self::SemiWet,
            _ => Self::Dry,
        }
    }
}

impl TryFrom<&str> for Texture {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|t| t.symbol() == s)
            .ok_or_else(|| format!("invalid texture: {}", s))
    }
}

impl std::fmt::Display for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
