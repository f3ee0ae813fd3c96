use crate::Probability;
use crate::config::Blending;
use crate::gameplay::Edge;
use crate::opponents::Profile;

/// Marginal value band: strong enough to bet, too weak to get paid by a
/// passive opponent who only continues with better.
const MARGINAL: std::ops::Range<Probability> = 0.5..0.7;

/// Adjusts a recommended action for the hand we hold and who we face.
#[derive(Debug, Clone, Copy)]
pub struct Blend<'a> {
    pub equity: Option<Probability>,
    pub pot_odds: Probability,
    pub facing: bool,
    pub profile: &'a Profile,
    pub weights: &'a Blending,
}

impl Blend<'_> {
    pub fn apply(&self, action: Edge, confidence: Probability) -> (Edge, Probability) {
        let (action, confidence) = self.strength(action, confidence);
        let (action, confidence) = self.exploit(action, confidence);
        (action, confidence.clamp(0., 1.))
    }

    /// Pull confidence toward how well our holding supports the action.
    fn strength(&self, action: Edge, confidence: Probability) -> (Edge, Probability) {
        let Some(equity) = self.equity else {
            return (action, confidence);
        };
        let support = match action {
            Edge::Fold | Edge::Check => 1. - equity,
            Edge::Call | Edge::Raise | Edge::Shove => equity,
        };
        let w = self.weights.strength_weight;
        (action, (1. - w) * confidence + w * support)
    }

    /// Deviate from the compiled line against known leaks.
    fn exploit(&self, action: Edge, confidence: Probability) -> (Edge, Probability) {
        if self.profile.is_neutral() {
            return (action, confidence);
        }
        let w = self.weights.exploit_weight;
        let bluffer = self.profile.bluffing - self.weights.bluff_threshold;
        let passive = self.weights.passive_threshold - self.profile.aggression;
        let priced = self.equity.is_some_and(|e| e >= self.pot_odds);
        let marginal = self.equity.is_some_and(|e| MARGINAL.contains(&e));
        match action {
            Edge::Fold if self.facing && bluffer > 0. && priced => {
                (Edge::Call, (0.5 + w * bluffer).min(1.))
            }
            Edge::Call if self.facing && bluffer > 0. => (Edge::Call, confidence + w * bluffer),
            a if a.is_aggro() && marginal && passive > 0. => (a, confidence - w * passive),
            _ => (action, confidence),
        }
    }
}
