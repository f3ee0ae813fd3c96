use crate::Probability;
use crate::Utility;
use crate::gameplay::Edge;
use crate::patterns::Pattern;

/// Recommended action for one key.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Rule {
    pub action: Edge,
    /// n / (n + smoothing) for n samples behind the key.
    pub confidence: Probability,
    /// Mean EV of the recommended action in chips.
    pub ev: Utility,
    pub samples: u64,
}

impl Rule {
    /// The action with the highest mean EV. Ties go to the more frequently
    /// taken action, then to the lower edge. None if nothing was observed.
    pub fn derive(pattern: &Pattern, smoothing: f32) -> Option<Self> {
        let (action, tally) = pattern
            .histogram
            .iter()
            .filter(|(_, t)| t.count > 0)
            .max_by(|(e1, t1), (e2, t2)| {
                t1.mean()
                    .total_cmp(&t2.mean())
                    .then(t1.count.cmp(&t2.count))
                    .then(e2.cmp(e1))
            })?;
        let n = pattern.samples as f32;
        Some(Self {
            action: *action,
            confidence: n / (n + smoothing),
            ev: tally.mean(),
            samples: pattern.samples,
        })
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {:.3} (ev {:+.2}, n {})",
            self.action, self.confidence, self.ev, self.samples
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::units;

    #[test]
    fn highest_mean_ev_wins() {
        let mut pattern = Pattern::default();
        (0..8).for_each(|_| pattern.add(Edge::Call, units(1.)));
        (0..2).for_each(|_| pattern.add(Edge::Raise, units(4.)));
        let rule = Rule::derive(&pattern, 10.).unwrap();
        assert_eq!(rule.action, Edge::Raise);
        assert_eq!(rule.ev, 4.);
        assert_eq!(rule.samples, 10);
        assert_eq!(rule.confidence, 0.5);
    }

    #[test]
    fn ties_prefer_frequency_then_order() {
        let mut pattern = Pattern::default();
        pattern.add(Edge::Check, units(0.));
        pattern.add(Edge::Fold, units(0.));
        pattern.add(Edge::Fold, units(0.));
        assert_eq!(Rule::derive(&pattern, 0.).unwrap().action, Edge::Fold);
        let mut pattern = Pattern::default();
        pattern.add(Edge::Raise, units(2.));
        pattern.add(Edge::Call, units(2.));
        assert_eq!(Rule::derive(&pattern, 0.).unwrap().action, Edge::Call);
    }

    #[test]
    fn nothing_observed() {
        assert_eq!(Rule::derive(&Pattern::default(), 10.), None);
    }
}
