use super::*;
use crate::config::Config;
use crate::gameplay::Record;
use crate::save::Disk;
use crate::Probability;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::RwLock;

/// Persisted form of the store: opponent id to latest profile.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Profiles(pub BTreeMap<String, Profile>);

impl Disk for Profiles {
    fn name() -> &'static str {
        "profiles"
    }
}

/// One opponent's current profile. Writers queue on `writer`, readers only
/// touch `current` long enough to clone the `Arc`.
#[derive(Debug, Default)]
struct Slot {
    writer: Mutex<()>,
    current: RwLock<Arc<Profile>>,
}

impl Slot {
    fn new(profile: Profile) -> Self {
        Self {
            writer: Mutex::new(()),
            current: RwLock::new(Arc::new(profile)),
        }
    }
    fn snapshot(&self) -> Arc<Profile> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Versioned store of opponent profiles.
///
/// Updates to one opponent are serialized; updates to different opponents
/// run concurrently. A reader gets an immutable snapshot that stays valid
/// however many hands are observed after it was taken.
#[derive(Debug)]
pub struct Tendencies {
    decay: Probability,
    slots: RwLock<BTreeMap<String, Arc<Slot>>>,
}

impl Default for Tendencies {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Tendencies {
    pub fn new(config: &Config) -> Self {
        Self {
            decay: config.decay_factor,
            slots: RwLock::new(BTreeMap::new()),
        }
    }

    fn slot(&self, opponent: &str) -> Arc<Slot> {
        if let Some(slot) = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(opponent)
        {
            return slot.clone();
        }
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(opponent.to_string())
            .or_default()
            .clone()
    }

    /// Latest profile of an opponent, neutral if never observed.
    pub fn profile(&self, opponent: &str) -> Arc<Profile> {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(opponent)
            .map(|slot| slot.snapshot())
            .unwrap_or_else(|| Arc::new(Profile::neutral()))
    }

    /// Fold a completed hand into an opponent's profile. Returns the new
    /// version, or None if the opponent did not play the hand.
    pub fn observe(&self, opponent: &str, record: &Record) -> Option<u64> {
        let seat = record.seat_of(opponent)?;
        let slot = self.slot(opponent);
        let _guard = slot.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let next = slot.snapshot().observe(seat, record, self.decay);
        let version = next.version;
        log::debug!("{:<32}{:<32}", format!("observed    {}", opponent), next);
        *slot.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(next);
        Some(version)
    }

    /// Observe every named player of a hand.
    pub fn observe_all(&self, record: &Record) {
        for player in record.players.values() {
            self.observe(player, record);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.read().unwrap_or_else(PoisonError::into_inner).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consistent copy of every profile.
    pub fn profiles(&self) -> Profiles {
        Profiles(
            self.slots
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .map(|(id, slot)| (id.clone(), slot.snapshot().as_ref().clone()))
                .collect(),
        )
    }
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.profiles().save(path)
    }
    pub fn load(path: impl AsRef<Path>, config: &Config) -> anyhow::Result<Self> {
        Ok(Self::from((Profiles::load(path)?, config)))
    }
}

impl From<(Profiles, &Config)> for Tendencies {
    fn from((profiles, config): (Profiles, &Config)) -> Self {
        Self {
            decay: config.decay_factor,
            slots: RwLock::new(
                profiles
                    .0
                    .into_iter()
                    .map(|(id, profile)| (id, Arc::new(Slot::new(profile))))
                    .collect(),
            ),
        }
    }
}
