use crate::EV_SCALE;
use crate::Utility;

/// Fixed-point EV units, `EV_SCALE` per chip.
pub type Units = i64;

/// Convert a chip-denominated EV into fixed-point units.
pub fn units(ev: f64) -> Units {
    (ev * EV_SCALE).round() as Units
}

/// Count and cumulative EV of one action in one spot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tally {
    pub count: u64,
    pub ev: Units,
}

impl Tally {
    pub fn add(&mut self, ev: Units) {
        self.count += 1;
        self.ev += ev;
    }
    pub fn merge(&mut self, other: &Self) {
        self.count += other.count;
        self.ev += other.ev;
    }
    /// Mean EV per observation in chips.
    pub fn mean(&self) -> Utility {
        match self.count {
            0 => 0.,
            n => (self.ev as f64 / EV_SCALE / n as f64) as Utility,
        }
    }
}
