use super::*;
use crate::Error;
use crate::cards::*;
use crate::config::Resolution;
use crate::gameplay::*;

/// The decision situation a game state reduces to.
///
/// Two states with equal fingerprints are treated as the same spot by the
/// extractor and the runtime. Exact pot and stack sizes, the specific board
/// cards and earlier streets' actions are all abstracted away.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fingerprint {
    pub street: Street,
    pub position: Position,
    pub depth: Depth,
    pub texture: Texture,
    pub signature: Signature,
}

impl Fingerprint {
    /// Fingerprint of a validated state.
    pub fn of(state: &GameState, resolution: &Resolution) -> Result<Self, Error> {
        state.validate()?;
        let position = state.position().ok_or_else(|| {
            Error::MalformedGameState(format!("no position for seat {}", state.seat()))
        })?;
        Ok(Self {
            street: state.street(),
            position,
            depth: Depth::from((state.spr(), resolution)),
            texture: Texture::from(*state.board()),
            signature: Signature::from((state, resolution)),
        })
    }
}

/// Only a full key names a fingerprint.
impl TryFrom<Key> for Fingerprint {
    type Error = String;
    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match (key.position(), key.depth(), key.texture(), key.signature()) {
            (Some(position), Some(depth), Some(texture), Some(signature)) => Ok(Self {
                street: key.street(),
                position,
                depth,
                texture,
                signature,
            }),
            _ => Err(format!("partial key: {}", key)),
        }
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Key::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flop(board: &str, stack: crate::Chips, pot: crate::Chips) -> GameState {
        GameState::new(Street::Flop, 0, 6, stack, pot)
            .with_board(Board::try_from(board).unwrap())
            .with_history(vec![
                Ply::from((Street::Pref, 1, Action::Blind(1))),
                Ply::from((Street::Pref, 2, Action::Blind(2))),
                Ply::from((Street::Pref, 0, Action::Raise(5))),
                Ply::from((Street::Pref, 2, Action::Call(3))),
                Ply::from((Street::Flop, 2, Action::Check)),
            ])
    }

    #[test]
    fn stable_under_irrelevant_detail() {
        let resolution = Resolution::default();
        let a = Fingerprint::of(&flop("Kh 7c 2d", 60, 11), &resolution).unwrap();
        let b = Fingerprint::of(&flop("Qs 8h 3c", 62, 11), &resolution).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "flop.btn.d1.dry.x");
    }

    #[test]
    fn texture_separates_boards() {
        let resolution = Resolution::default();
        let dry = Fingerprint::of(&flop("Kh 7c 2d", 60, 11), &resolution).unwrap();
        let wet = Fingerprint::of(&flop("9h 8h 7c", 60, 11), &resolution).unwrap();
        assert_ne!(dry, wet);
    }

    #[test]
    fn rejects_malformed_states() {
        let state = GameState::new(Street::Flop, 0, 6, 60, 11);
        assert!(matches!(
            Fingerprint::of(&state, &Resolution::default()),
            Err(Error::MalformedGameState(_))
        ));
    }
}
