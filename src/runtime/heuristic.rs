use crate::Chips;
use crate::Probability;
use crate::Utility;
use crate::config::Blending;
use crate::gameplay::Edge;

/// Strength and pot-odds play for spots no rule covers.
///
/// Unopened: bet with equity above `raise_equity`, otherwise check.
/// Facing a wager: raise above `raise_equity`, call when equity covers the
/// price, otherwise fold. Confidence grows with the distance from whichever
/// threshold decided the action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heuristic {
    pub equity: Probability,
    pub pot: Chips,
    pub to_call: Chips,
}

impl Heuristic {
    /// Share of the final pot a call has to win to break even.
    pub fn pot_odds(&self) -> Probability {
        match self.to_call {
            0 => 0.,
            call => call as Probability / (self.pot + call) as Probability,
        }
    }
    /// Chips expected from taking `edge`, valuing showdown by raw equity.
    pub fn ev(&self, edge: Edge) -> Utility {
        let pot = self.pot as Utility;
        let call = self.to_call as Utility;
        match edge {
            Edge::Fold => 0.,
            Edge::Check => self.equity * pot,
            Edge::Call | Edge::Raise | Edge::Shove => self.equity * (pot + call) - call,
        }
    }
    /// Action and confidence.
    pub fn decide(&self, blending: &Blending) -> (Edge, Probability) {
        let margin = |threshold: Probability| (0.5 + (self.equity - threshold).abs()).min(1.);
        match self.to_call {
            0 if self.equity > blending.raise_equity => (Edge::Raise, margin(blending.raise_equity)),
            0 => (Edge::Check, margin(blending.raise_equity)),
            _ if self.equity > blending.raise_equity => (Edge::Raise, margin(blending.raise_equity)),
            _ if self.equity >= self.pot_odds() => (Edge::Call, margin(self.pot_odds())),
            _ => (Edge::Fold, margin(self.pot_odds())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(equity: Probability, pot: Chips, to_call: Chips) -> Heuristic {
        Heuristic {
            equity,
            pot,
            to_call,
        }
    }

    #[test]
    fn bets_strength_checks_the_rest() {
        let blending = Blending::default();
        assert_eq!(spot(0.9, 10, 0).decide(&blending).0, Edge::Raise);
        assert_eq!(spot(0.4, 10, 0).decide(&blending).0, Edge::Check);
    }

    #[test]
    fn calls_on_price() {
        let blending = Blending::default();
        let priced = spot(0.3, 30, 10);
        assert_eq!(priced.pot_odds(), 0.25);
        assert_eq!(priced.decide(&blending).0, Edge::Call);
        assert_eq!(spot(0.2, 30, 10).decide(&blending).0, Edge::Fold);
        assert_eq!(spot(0.95, 30, 10).decide(&blending).0, Edge::Raise);
    }

    #[test]
    fn ev_in_chips() {
        let spot = spot(0.5, 30, 10);
        assert_eq!(spot.ev(Edge::Fold), 0.);
        assert_eq!(spot.ev(Edge::Call), 10.);
        let (_, confidence) = spot.decide(&Blending::default());
        assert!((0. ..=1.).contains(&confidence));
    }
}
