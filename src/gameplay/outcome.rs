use crate::Chips;
use crate::Seat;
use crate::cards::*;
use std::collections::BTreeMap;

/// How a completed hand distributed its pot.
///
/// `invested` counts every chip a seat put in over the whole hand, blinds
/// included; `payouts` what each seat took back. Chips are conserved, so
/// both maps sum to the final pot. Hole cards appear in `revealed` only for
/// players who showed at showdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    pub invested: BTreeMap<Seat, Chips>,
    pub payouts: BTreeMap<Seat, Chips>,
    #[serde(default)]
    pub showdown: bool,
    #[serde(default)]
    pub board: Board,
    #[serde(default)]
    pub revealed: BTreeMap<Seat, Hole>,
}

impl Outcome {
    pub fn pot(&self) -> Chips {
        self.invested.values().sum()
    }
    /// Payout minus investment.
    pub fn net(&self, seat: Seat) -> Chips {
        self.payouts.get(&seat).copied().unwrap_or(0)
            - self.invested.get(&seat).copied().unwrap_or(0)
    }
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.invested.keys().chain(self.payouts.keys()).copied()
    }
    /// Conservation and sign checks. Returns the reason it failed.
    pub fn check(&self) -> Result<(), String> {
        if self.invested.values().chain(self.payouts.values()).any(|&c| c < 0) {
            return Err("negative chip amount".into());
        }
        if self.pot() <= 0 {
            return Err("empty pot".into());
        }
        if self.payouts.values().sum::<Chips>() != self.pot() {
            return Err(format!(
                "paid {} out of a pot of {}",
                self.payouts.values().sum::<Chips>(),
                self.pot()
            ));
        }
        Ok(())
    }
}
