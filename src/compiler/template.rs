use crate::Probability;
use crate::gameplay::Edge;
use crate::patterns::Pattern;
use std::collections::BTreeMap;

/// Observed action frequencies of one spot, normalized to sum to one.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Template(BTreeMap<Edge, Probability>);

impl Template {
    pub fn probability(&self, edge: &Edge) -> Probability {
        self.0.get(edge).copied().unwrap_or(0.)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Edge, &Probability)> {
        self.0.iter()
    }
    /// Most frequent action, the lowest edge on ties.
    pub fn mode(&self) -> Option<Edge> {
        self.0
            .iter()
            .rev()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(edge, _)| *edge)
    }
}

impl From<&Pattern> for Template {
    fn from(pattern: &Pattern) -> Self {
        let total = pattern.histogram.values().map(|t| t.count).sum::<u64>();
        Self(
            pattern
                .histogram
                .iter()
                .filter(|(_, t)| t.count > 0)
                .map(|(edge, t)| (*edge, t.count as Probability / total as Probability))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::units;

    #[test]
    fn normalizes_counts() {
        let mut pattern = Pattern::default();
        pattern.add(Edge::Call, units(1.));
        pattern.add(Edge::Call, units(1.));
        pattern.add(Edge::Fold, units(0.));
        pattern.add(Edge::Raise, units(5.));
        let template = Template::from(&pattern);
        assert_eq!(template.probability(&Edge::Call), 0.5);
        assert_eq!(template.probability(&Edge::Shove), 0.);
        assert_eq!(template.iter().map(|(_, p)| p).sum::<f32>(), 1.);
        assert_eq!(template.mode(), Some(Edge::Call));
    }
}
