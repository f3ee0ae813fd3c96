use crate::Seat;

/// Named table position, the bucket a button-relative seat falls into.
///
/// Seat 0 is the button. Heads-up the button also posts the small blind,
/// so the two seats map to `Btn` and `Bb`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Sb,
    Bb,
    Utg,
    Mp,
    Co,
    Btn,
}

impl Position {
    pub const fn all() -> [Self; 6] {
        [
            Position::Sb,
            Position::Bb,
            Position::Utg,
            Position::Mp,
            Position::Co,
            Position::Btn,
        ]
    }
    /// Bucket for a seat at a table of `seats` players. None if the seat
    /// does not exist at that table.
    pub fn bucket(seat: Seat, seats: usize) -> Option<Self> {
        match (seat, seats) {
            (s, n) if n < 2 || s >= n => None,
            (0, _) => Some(Position::Btn),
            (1, 2) => Some(Position::Bb),
            (1, _) => Some(Position::Sb),
            (2, _) => Some(Position::Bb),
            (s, n) if s == n - 1 => Some(Position::Co),
            (3, _) => Some(Position::Utg),
            _ => Some(Position::Mp),
        }
    }
    /// True for the seats that act last postflop.
    pub fn is_late(&self) -> bool {
        matches!(self, Position::Co | Position::Btn)
    }
    pub const fn symbol(&self) -> &'static str {
        match self {
            Position::Sb => "sb",
            Position::Bb => "bb",
            Position::Utg => "utg",
            Position::Mp => "mp",
            Position::Co => "co",
            Position::Btn => "btn",
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|p| p.symbol() == s.to_lowercase())
            .ok_or_else(|| format!("invalid position: {}", s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
