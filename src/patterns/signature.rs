use crate::config::Resolution;
use crate::gameplay::*;

/// Most recent actions kept in a signature.
const SIGNATURE_LENGTH: usize = 4;
/// Largest raise sizing class.
const MAX_SIZING: u32 = 3;

/// Abbreviated action sequence of the current street.
///
/// Each voluntary ply becomes a 4-bit token, oldest in the low nibble, and
/// only the last few survive. Raises carry a sizing class relative to the
/// pot they were made into, so a half-pot bet and a third-pot bet collapse
/// together while an overbet does not. Blinds never appear.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Signature(u32);

impl Signature {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn len(&self) -> usize {
        self.tokens().count()
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    fn tokens(&self) -> impl Iterator<Item = u32> + '_ {
        (0..SIGNATURE_LENGTH)
            .map(move |i| (self.0 >> (4 * i)) & 0xF)
            .take_while(|&t| t != 0)
    }
    fn pack(tokens: &[u32]) -> Self {
        let skip = tokens.len().saturating_sub(SIGNATURE_LENGTH);
        Self(
            tokens[skip..]
                .iter()
                .enumerate()
                .fold(0, |bits, (i, &t)| bits | t << (4 * i)),
        )
    }
    /// Sizing class of a wager relative to the pot it went into.
    fn sizing(amount: crate::Chips, pot: crate::Chips, resolution: &Resolution) -> u32 {
        let ratio = amount as f32 / pot.max(1) as f32 / resolution.pot;
        (ratio.ceil() as u32).clamp(1, MAX_SIZING)
    }
    fn symbol(token: u32) -> &'static str {
        match token {
            1 => "f",
            2 => "x",
            3 => "c",
            4 => "r1",
            5 => "r2",
            6 => "r3",
            7 => "s",
            _ => unreachable!("invalid signature token"),
        }
    }
    fn token(symbol: &str) -> Option<u32> {
        match symbol {
            "f" => Some(1),
            "x" => Some(2),
            "c" => Some(3),
            "r1" => Some(4),
            "r2" => Some(5),
            "r3" => Some(6),
            "s" => Some(7),
            _ => None,
        }
    }
}

impl From<(&GameState, &Resolution)> for Signature {
    fn from((state, resolution): (&GameState, &Resolution)) -> Self {
        let tokens = state
            .history()
            .iter()
            .enumerate()
            .filter(|(_, ply)| ply.street == state.street())
            .filter(|(_, ply)| ply.action.is_choice())
            .map(|(i, ply)| match ply.action {
                Action::Fold => 1,
                Action::Check => 2,
                Action::Call(_) => 3,
                Action::Raise(n) => 3 + Self::sizing(n, state.pot_before(i), resolution),
                Action::Shove(_) => 7,
                Action::Blind(_) => unreachable!("blinds are filtered"),
            })
            .collect::<Vec<u32>>();
        Self::pack(&tokens)
    }
}

impl TryFrom<&str> for Signature {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s == "_" {
            return Ok(Self::empty());
        }
        let tokens = s
            .split('-')
            .map(|t| Self::token(t).ok_or_else(|| format!("invalid signature token: {}", t)))
            .collect::<Result<Vec<u32>, _>>()?;
        if tokens.len() > SIGNATURE_LENGTH {
            return Err(format!("signature too long: {}", s));
        }
        Ok(Self::pack(&tokens))
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "_");
        }
        let symbols = self.tokens().map(Self::symbol).collect::<Vec<_>>();
        write!(f, "{}", symbols.join("-"))
    }
}
