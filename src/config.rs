use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Bucket widths used when a game state is reduced to a fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    /// Stack-to-pot ratio covered by one depth bucket.
    pub stack: f32,
    /// Bet-to-pot ratio covered by one sizing class.
    pub pot: f32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            stack: STACK_RESOLUTION,
            pot: POT_RESOLUTION,
        }
    }
}

/// Weights the runtime uses when blending a rule with hand strength and
/// the opponent's profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blending {
    pub strength_weight: Probability,
    pub raise_equity: Probability,
    pub bluff_threshold: Probability,
    pub passive_threshold: Probability,
    pub exploit_weight: Probability,
}

impl Default for Blending {
    fn default() -> Self {
        Self {
            strength_weight: STRENGTH_WEIGHT,
            raise_equity: RAISE_EQUITY,
            bluff_threshold: BLUFF_THRESHOLD,
            passive_threshold: PASSIVE_THRESHOLD,
            exploit_weight: EXPLOIT_WEIGHT,
        }
    }
}

/// The full configuration surface of the pipeline.
///
/// Every field falls back to the crate-level constant when missing, so a
/// JSON file only needs to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_samples: usize,
    pub smoothing_constant: f32,
    pub min_confidence: Probability,
    pub fallback_depth: usize,
    pub decay_factor: Probability,
    pub resolution: Resolution,
    pub runtime: Blending,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_samples: MIN_SAMPLES,
            smoothing_constant: SMOOTHING_CONSTANT,
            min_confidence: MIN_CONFIDENCE,
            fallback_depth: FALLBACK_DEPTH,
            decay_factor: DECAY_FACTOR,
            resolution: Resolution::default(),
            runtime: Blending::default(),
        }
    }
}

impl Config {
    /// Reads a JSON config file and checks its values.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("{:<32}{:<32}", "loading     config", path.display());
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<Self>(&text)?;
        config.check()?;
        Ok(config)
    }
    /// Rejects values that would make compilation or decay meaningless.
    pub fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.min_samples > 0, "min_samples must be positive");
        anyhow::ensure!(
            self.smoothing_constant >= 0.,
            "smoothing_constant must be non-negative"
        );
        anyhow::ensure!(
            (0. ..=1.).contains(&self.min_confidence),
            "min_confidence must lie in [0, 1]"
        );
        anyhow::ensure!(
            (1..=5).contains(&self.fallback_depth),
            "fallback_depth must lie in 1..=5"
        );
        anyhow::ensure!(
            self.decay_factor > 0. && self.decay_factor < 1.,
            "decay_factor must lie in (0, 1)"
        );
        anyhow::ensure!(
            self.resolution.stack > 0. && self.resolution.pot > 0.,
            "bucket resolutions must be positive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = serde_json::from_str::<Config>(r#"{ "min_samples": 5, "resolution": { "stack": 2.0 } }"#).unwrap();
        assert_eq!(config.min_samples, 5);
        assert_eq!(config.resolution.stack, 2.0);
        assert_eq!(config.resolution.pot, POT_RESOLUTION);
        assert_eq!(config.smoothing_constant, SMOOTHING_CONSTANT);
        assert!(config.check().is_ok());
    }

    #[test]
    fn rejects_bad_decay() {
        let config = Config {
            decay_factor: 1.5,
            ..Config::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "smoothing_constant": 4.0 }"#).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.smoothing_constant, 4.0);
        assert_eq!(config.min_samples, MIN_SAMPLES);
    }
}
