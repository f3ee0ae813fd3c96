use super::*;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

/// One published rule set and its version number.
#[derive(Debug, Default)]
pub struct Published {
    pub version: u64,
    pub rules: RuleSet,
}

/// Holds the live rule set.
///
/// Publishing swaps in a whole new snapshot. A reader clones the `Arc` it
/// found and keeps using that version until it asks again, so it never sees
/// a mix of two rule sets.
#[derive(Debug, Default)]
pub struct Library {
    current: RwLock<Arc<Published>>,
}

impl Library {
    pub fn new(rules: RuleSet) -> Self {
        let library = Self::default();
        library.publish(rules);
        library
    }
    /// The rule set in force right now.
    pub fn snapshot(&self) -> Arc<Published> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
    /// Replace the live rule set and return its version.
    pub fn publish(&self, rules: RuleSet) -> u64 {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let version = current.version + 1;
        log::info!(
            "{:<32}{:<32}",
            "publishing  rules",
            format!("v{} ({} rules)", version, rules.len())
        );
        *current = Arc::new(Published { version, rules });
        version
    }
    pub fn version(&self) -> u64 {
        self.snapshot().version
    }
}
