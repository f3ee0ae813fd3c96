use super::*;
use crate::config::Resolution;
use crate::patterns::Fingerprint;
use crate::patterns::Key;
use std::collections::BTreeMap;

/// A compiled rule with the frequencies it was compiled from.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub rule: Rule,
    pub template: Template,
}

/// Immutable mapping from keys to compiled entries.
///
/// Lookups try the full fingerprint first and then each shorter prefix, so
/// a rare spot borrows the rule of the broader situation it belongs to.
/// The set remembers the bucket widths its keys were cut with, and the
/// runtime fingerprints live states the same way.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    resolution: Resolution,
    rules: BTreeMap<Key, Entry>,
}

impl RuleSet {
    pub fn with_resolution(self, resolution: Resolution) -> Self {
        Self { resolution, ..self }
    }
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
    pub fn len(&self) -> usize {
        self.rules.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
    pub fn get(&self, key: &Key) -> Option<&Entry> {
        self.rules.get(key)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Entry)> {
        self.rules.iter()
    }
    /// Exact match, then the longest prefix that has a rule.
    pub fn lookup(&self, fingerprint: &Fingerprint) -> Option<(Key, &Entry)> {
        Key::from(*fingerprint)
            .prefixes(1)
            .find_map(|key| self.rules.get(&key).map(|entry| (key, entry)))
    }
}

impl FromIterator<(Key, Entry)> for RuleSet {
    fn from_iter<T: IntoIterator<Item = (Key, Entry)>>(iter: T) -> Self {
        Self {
            resolution: Resolution::default(),
            rules: iter.into_iter().collect(),
        }
    }
}

impl crate::save::Disk for RuleSet {
    fn name() -> &'static str {
        "rules"
    }
}
