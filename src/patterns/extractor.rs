use super::*;
use crate::config::Config;
use crate::config::Resolution;
use crate::gameplay::*;
use std::collections::BTreeSet;

/// Decisions pulled out of one hand, before they are merged.
#[derive(Debug, Default)]
struct Digest {
    decisions: Vec<(Fingerprint, Edge, Units)>,
    malformed: usize,
    skipped: bool,
}

/// Incremental, deduplicating pattern extraction.
///
/// One extractor spans one pass. Batches can be fed in any grouping or order
/// and the accumulated patterns come out identical, since every hand is
/// digested independently and EV is summed in integer units. A hand id seen
/// earlier in the pass is ignored.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    patterns: Patterns,
    seen: BTreeSet<HandId>,
    report: Report,
}

impl Extractor {
    pub fn new(config: &Config) -> Self {
        Self {
            patterns: Patterns::new(config.resolution),
            ..Self::default()
        }
    }
    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }
    pub fn into_patterns(self) -> Patterns {
        self.patterns
    }
    /// Totals over every batch since the last reset.
    pub fn report(&self) -> Report {
        self.report
    }
    /// Start a new pass.
    pub fn reset(&mut self) {
        self.patterns = Patterns::new(self.patterns.resolution());
        self.seen.clear();
        self.report = Report::default();
    }

    /// Fold a batch of hands into the patterns.
    ///
    /// Only accepted hands are remembered, so a hand skipped for a broken
    /// outcome can be sent again once corrected.
    pub fn extend(&mut self, hands: &[Record]) -> Report {
        let mut report = Report::default();
        let mut batch = BTreeSet::new();
        let fresh = hands
            .iter()
            .filter(|hand| match !self.seen.contains(&hand.id) && batch.insert(hand.id) {
                true => true,
                false => {
                    report.duplicates += 1;
                    false
                }
            })
            .collect::<Vec<&Record>>();
        let digests = self.digest(&fresh);
        for (hand, digest) in fresh.iter().zip(digests) {
            report.malformed += digest.malformed;
            if digest.skipped {
                report.skipped += 1;
                continue;
            }
            self.seen.insert(hand.id);
            report.accepted += 1;
            report.states += digest.decisions.len();
            for (fingerprint, edge, ev) in digest.decisions {
                self.patterns.add(fingerprint, edge, ev);
            }
        }
        log::info!("{:<32}{:<32}", "extracted   batch", report);
        self.report += report;
        report
    }

    #[cfg(feature = "native")]
    fn digest(&self, hands: &[&Record]) -> Vec<Digest> {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        let resolution = self.patterns.resolution();
        hands
            .par_iter()
            .map(|hand| Self::digest_one(hand, &resolution))
            .collect()
    }

    #[cfg(not(feature = "native"))]
    fn digest(&self, hands: &[&Record]) -> Vec<Digest> {
        let resolution = self.patterns.resolution();
        hands
            .iter()
            .map(|hand| Self::digest_one(hand, &resolution))
            .collect()
    }

    fn digest_one(hand: &Record, resolution: &Resolution) -> Digest {
        let evs = match attribute(hand) {
            Ok(evs) => evs,
            Err(reason) => {
                log::debug!("{:<32}{:<32}", format!("skipping    hand {}", hand.id), reason);
                return Digest {
                    skipped: true,
                    ..Digest::default()
                };
            }
        };
        let mut digest = Digest::default();
        for (step, ev) in hand.steps.iter().zip(evs) {
            let edge = match Edge::try_from(step.action) {
                Ok(edge) => edge,
                Err(reason) => {
                    log::debug!("{:<32}{:<32}", format!("skipping    step of {}", hand.id), reason);
                    digest.malformed += 1;
                    continue;
                }
            };
            match Fingerprint::of(&step.state, resolution) {
                Ok(fingerprint) => digest.decisions.push((fingerprint, edge, ev)),
                Err(e) => {
                    log::debug!("{:<32}{:<32}", format!("skipping    step of {}", hand.id), e);
                    digest.malformed += 1;
                }
            }
        }
        digest
    }
}

/// Extract a single pass over `hands`.
pub fn extract(hands: &[Record], config: &Config) -> Patterns {
    let mut extractor = Extractor::new(config);
    extractor.extend(hands);
    extractor.into_patterns()
}
