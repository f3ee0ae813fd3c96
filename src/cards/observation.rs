use super::*;
use crate::Error;
use crate::Probability;

/// A player's view of the cards: hole cards plus visible board.
///
/// Strength is computed on demand from the current cards every time it is
/// requested, so a board update can never leave a stale score behind.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Observation {
    pocket: Hole,
    public: Board,
}

impl Observation {
    pub fn pocket(&self) -> &Hole {
        &self.pocket
    }
    pub fn public(&self) -> &Board {
        &self.public
    }
    /// Evaluated strength of hole plus board. Needs at least a flop.
    pub fn strength(&self) -> Result<Strength, Error> {
        evaluate(Hand::from(*self))
    }
    /// Normalized hand strength in [0, 1], 0.5 being a median holding.
    ///
    /// Preflop uses the Chen starting hand score; afterwards the made hand's
    /// percentile among random 7-card hands.
    pub fn equity(&self) -> Result<Probability, Error> {
        match self.public.size() {
            0 => Ok(Self::chen(self.pocket)),
            _ => self.strength().map(|s| s.percentile()),
        }
    }

    /// Chen formula score mapped piecewise linearly so that 5.5 sits at 0.5.
    fn chen(hole: Hole) -> Probability {
        let (hi, lo) = hole.cards();
        let points = |r: Rank| match r {
            Rank::Ace => 10.,
            Rank::King => 8.,
            Rank::Queen => 7.,
            Rank::Jack => 6.,
            r => r.pip() as f32 / 2.,
        };
        let paired = hi.rank() == lo.rank();
        let suited = hi.suit() == lo.suit();
        let gap = hi.rank().pip() - lo.rank().pip();
        let mut score = points(hi.rank());
        if paired {
            score = (score * 2.).max(5.);
        } else {
            score -= match gap {
                1 => 0.,
                2 => 1.,
                3 => 2.,
                4 => 4.,
                _ => 5.,
            };
            if gap <= 2 && hi.rank() < Rank::Queen {
                score += 1.;
            }
        }
        if suited {
            score += 2.;
        }
        let score = score.ceil();
        if score <= 5.5 {
            (0.5 * (score + 1.) / 6.5).clamp(0., 0.5)
        } else {
            (0.5 + 0.5 * (score - 5.5) / 14.5).clamp(0.5, 1.)
        }
    }
}

impl From<(Hole, Board)> for Observation {
    fn from((pocket, public): (Hole, Board)) -> Self {
        Self { pocket, public }
    }
}

impl From<Observation> for Hand {
    fn from(obs: Observation) -> Self {
        Hand::from(u64::from(Hand::from(obs.pocket)) | u64::from(Hand::from(obs.public)))
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.pocket, self.public)
    }
}
