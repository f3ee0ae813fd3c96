use crate::Utility;
use crate::compiler::Published;
use crate::gameplay::*;
use crate::runtime::Runtime;

/// Composite weights of win rate, EV, decision quality and bluff efficiency.
const WEIGHTS: [f32; 4] = [0.4, 0.3, 0.2, 0.1];

/// How a rule set fares when replayed over held-out hands.
///
/// Each recorded decision is re-decided and compared with what was actually
/// played. Agreement with a decision that won chips counts as a win, and the
/// realized net of agreed decisions, normalized by pot size, measures EV.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Scorecard {
    pub decisions: usize,
    /// Share of winning recorded decisions the runtime would also make.
    pub win_rate: f32,
    /// Mean net of agreed decisions in units of the pot, squashed to [-1, 1].
    pub expected_value: f32,
    /// Share of all recorded decisions the runtime agrees with.
    pub decision_quality: f32,
    /// Share of recommended aggression that the recorded hand shows to win.
    pub bluff_efficiency: f32,
}

impl Scorecard {
    pub fn score(&self) -> f32 {
        WEIGHTS[0] * self.win_rate
            + WEIGHTS[1] * self.expected_value
            + WEIGHTS[2] * self.decision_quality
            + WEIGHTS[3] * self.bluff_efficiency
    }

    /// Replay `hands` through `runtime` against one rule set snapshot.
    /// Decisions the runtime cannot resolve count as disagreement.
    pub fn evaluate(runtime: &Runtime, published: &Published, hands: &[Record]) -> Self {
        let mut decisions = 0usize;
        let mut agreed = 0usize;
        let mut winners = 0usize;
        let mut won = 0usize;
        let mut aggression = 0usize;
        let mut paid = 0usize;
        let mut value = 0f32;
        for hand in hands.iter().filter(|h| h.outcome.check().is_ok()) {
            for step in hand.steps.iter().filter(|s| s.action.is_choice()) {
                let Ok(played) = Edge::try_from(step.action) else {
                    continue;
                };
                let net = hand.outcome.net(step.actor());
                let opponent = Self::opponent(hand, step.actor());
                decisions += 1;
                winners += (net > 0) as usize;
                let Ok(decided) = runtime
                    .decide_with(published, &step.state, opponent)
                    .map(|d| d.action)
                else {
                    continue;
                };
                if decided.is_aggro() {
                    aggression += 1;
                    paid += (net > 0 && played.is_aggro()) as usize;
                }
                if decided == played {
                    agreed += 1;
                    won += (net > 0) as usize;
                    value += net as Utility / hand.outcome.pot().max(1) as Utility;
                }
            }
        }
        let ratio = |a: usize, b: usize| if b == 0 { 0. } else { a as f32 / b as f32 };
        Self {
            decisions,
            win_rate: ratio(won, winners),
            expected_value: if agreed == 0 { 0. } else { (value / agreed as f32).tanh() },
            decision_quality: ratio(agreed, decisions),
            bluff_efficiency: ratio(paid, aggression),
        }
    }

    /// Somebody else at the table, for the profile lookup.
    fn opponent(hand: &Record, seat: crate::Seat) -> &str {
        hand.players
            .iter()
            .find(|(s, _)| **s != seat)
            .map(|(_, name)| name.as_str())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Scorecard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "score {:.3} (win {:.2} ev {:+.2} quality {:.2} bluff {:.2} over {})",
            self.score(),
            self.win_rate,
            self.expected_value,
            self.decision_quality,
            self.bluff_efficiency,
            self.decisions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_weights() {
        let card = Scorecard {
            decisions: 10,
            win_rate: 1.,
            expected_value: 1.,
            decision_quality: 1.,
            bluff_efficiency: 1.,
        };
        assert!((card.score() - 1.).abs() < 1e-6);
        let card = Scorecard {
            win_rate: 0.5,
            ..Scorecard::default()
        };
        assert!((card.score() - 0.2).abs() < 1e-6);
    }
}
