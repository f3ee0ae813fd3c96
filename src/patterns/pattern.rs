use super::*;
use crate::Utility;
use crate::config::Resolution;
use crate::gameplay::Edge;
use std::collections::BTreeMap;

/// Outcome statistics of one decision situation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Pattern {
    pub samples: u64,
    pub histogram: BTreeMap<Edge, Tally>,
    pub ev: Units,
}

impl Pattern {
    /// Record one decision and the EV attributed to it.
    pub fn add(&mut self, edge: Edge, ev: Units) {
        self.samples += 1;
        self.ev += ev;
        self.histogram.entry(edge).or_default().add(ev);
    }
    /// Sum another pattern into this one.
    pub fn merge(&mut self, other: &Self) {
        self.samples += other.samples;
        self.ev += other.ev;
        for (edge, tally) in other.histogram.iter() {
            self.histogram.entry(*edge).or_default().merge(tally);
        }
    }
    /// Mean EV over every decision in chips.
    pub fn mean(&self) -> Utility {
        Tally {
            count: self.samples,
            ev: self.ev,
        }
        .mean()
    }
}

/// Every pattern of one extraction pass, keyed by fingerprint, along with
/// the bucket widths those fingerprints were cut with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patterns {
    resolution: Resolution,
    patterns: BTreeMap<Fingerprint, Pattern>,
}

impl Patterns {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            patterns: BTreeMap::new(),
        }
    }
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
    pub fn len(&self) -> usize {
        self.patterns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&Pattern> {
        self.patterns.get(fingerprint)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &Pattern)> {
        self.patterns.iter()
    }
    /// Total decisions across every fingerprint.
    pub fn samples(&self) -> u64 {
        self.patterns.values().map(|p| p.samples).sum()
    }
    pub fn add(&mut self, fingerprint: Fingerprint, edge: Edge, ev: Units) {
        self.patterns.entry(fingerprint).or_default().add(edge, ev);
    }
}

/// Collected patterns are taken to use the default resolution.
impl FromIterator<(Fingerprint, Pattern)> for Patterns {
    fn from_iter<T: IntoIterator<Item = (Fingerprint, Pattern)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::default(), |mut patterns, (fingerprint, pattern)| {
                patterns.patterns.entry(fingerprint).or_default().merge(&pattern);
                patterns
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_a_sum() {
        let mut a = Pattern::default();
        a.add(Edge::Raise, units(10.));
        a.add(Edge::Fold, units(-1.));
        let mut b = Pattern::default();
        b.add(Edge::Raise, units(-4.));
        a.merge(&b);
        assert_eq!(a.samples, 3);
        assert_eq!(a.histogram[&Edge::Raise].count, 2);
        assert_eq!(a.histogram[&Edge::Raise].mean(), 3.);
        assert!((a.mean() - 5. / 3.).abs() < 1e-6);
    }
}
