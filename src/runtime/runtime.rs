use super::*;
use crate::Error;
use crate::Probability;
use crate::compiler::Library;
use crate::compiler::Published;
use crate::config::Config;
use crate::gameplay::*;
use crate::opponents::Tendencies;
use crate::patterns::Fingerprint;
use std::sync::Arc;

/// Decides actions from published rules, hand strength and opponent history.
///
/// Every call works against one rule set snapshot and one opponent profile
/// snapshot, so concurrent publication or observation never changes a
/// decision halfway through.
#[derive(Debug, Clone)]
pub struct Runtime {
    library: Arc<Library>,
    opponents: Arc<Tendencies>,
    config: Config,
}

impl Runtime {
    pub fn new(library: Arc<Library>, opponents: Arc<Tendencies>, config: Config) -> Self {
        Self {
            library,
            opponents,
            config,
        }
    }
    pub fn library(&self) -> &Library {
        &self.library
    }
    pub fn opponents(&self) -> &Tendencies {
        &self.opponents
    }

    /// Decide against the rule set published right now.
    pub fn decide(&self, state: &GameState, opponent: &str) -> Result<Decision, Error> {
        let snapshot = self.library.snapshot();
        self.decide_with(&snapshot, state, opponent)
    }

    /// Decide against a rule set snapshot the caller already holds.
    pub fn decide_with(
        &self,
        published: &Published,
        state: &GameState,
        opponent: &str,
    ) -> Result<Decision, Error> {
        let fingerprint = Fingerprint::of(state, &published.rules.resolution()).map_err(|e| {
            log::warn!("{:<32}{:<32}", "unresolvable decision", e);
            Error::UnresolvableDecision(e.to_string())
        })?;
        let equity = state
            .observation()
            .map(|o| o.equity())
            .transpose()
            .map_err(|e| {
                log::warn!("{:<32}{:<32}", "unresolvable decision", e);
                Error::UnresolvableDecision(e.to_string())
            })?;
        let facing = state.is_facing();
        let heuristic = Heuristic {
            equity: equity.unwrap_or(0.),
            pot: state.pot(),
            to_call: state.to_call(),
        };
        let (action, confidence, ev, source) = match published.rules.lookup(&fingerprint) {
            Some((key, entry)) => {
                let action = Self::legal(entry.rule.action, facing, equity, heuristic.pot_odds());
                let ev = match action == entry.rule.action {
                    true => entry.rule.ev,
                    false => heuristic.ev(action),
                };
                (action, entry.rule.confidence, ev, Source::from(key))
            }
            None if equity.is_none() => {
                log::warn!("{:<32}{:<32}", "unresolvable decision", fingerprint);
                return Err(Error::UnresolvableDecision(format!(
                    "no rule for {} and no hole cards",
                    fingerprint
                )));
            }
            None => {
                let (action, confidence) = heuristic.decide(&self.config.runtime);
                (action, confidence, heuristic.ev(action), Source::Heuristic)
            }
        };
        let profile = self.opponents.profile(opponent);
        let blend = Blend {
            equity,
            pot_odds: heuristic.pot_odds(),
            facing,
            profile: &profile,
            weights: &self.config.runtime,
        };
        let (blended, confidence) = blend.apply(action, confidence);
        let ev = match blended == action {
            true => ev,
            false => heuristic.ev(blended),
        };
        let decision = Decision {
            action: blended,
            confidence,
            ev,
            source,
            version: published.version,
        };
        log::debug!("{:<32}{:<32}", format!("deciding    {}", fingerprint), decision);
        Ok(decision)
    }

    /// Map a compiled action onto what is legal in this state.
    fn legal(action: Edge, facing: bool, equity: Option<Probability>, odds: Probability) -> Edge {
        match (action, facing) {
            (Edge::Check, true) if equity.is_some_and(|e| e >= odds) => Edge::Call,
            (Edge::Check, true) => Edge::Fold,
            (Edge::Fold | Edge::Call, false) => Edge::Check,
            (action, _) => action,
        }
    }
}
