use super::*;
use crate::compiler::Library;
use crate::compiler::compile;
use crate::config::Config;
use crate::gameplay::Record;
use crate::opponents::Tendencies;
use crate::patterns::Extractor;
use crate::runtime::Runtime;
use std::sync::Arc;

/// Compiler settings to try, every combination of the two axes.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Grid {
    pub min_samples: Vec<usize>,
    pub smoothing_constant: Vec<f32>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            min_samples: vec![10, 30, 100],
            smoothing_constant: vec![1., 10., 50.],
        }
    }
}

impl Grid {
    /// Every combination, layered over `base`.
    pub fn configs(&self, base: &Config) -> Vec<Config> {
        self.min_samples
            .iter()
            .flat_map(|&min_samples| {
                self.smoothing_constant
                    .iter()
                    .map(move |&smoothing_constant| Config {
                        min_samples,
                        smoothing_constant,
                        ..*base
                    })
            })
            .collect()
    }
}

/// One compiled and scored configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Trial {
    pub config: Config,
    pub rules: usize,
    pub scorecard: Scorecard,
}

/// Every trial of a sweep and the best scoring one.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Sweep {
    pub trials: Vec<Trial>,
    pub best: Option<Trial>,
}

impl crate::save::Disk for Sweep {
    fn name() -> &'static str {
        "sweep"
    }
}

/// Extract `train` once, then compile and score against `valid` for each
/// grid point. Opponent profiles are learned from the training hands.
/// The first of equally scoring trials is kept as best.
pub fn sweep(train: &[Record], valid: &[Record], base: &Config, grid: &Grid) -> Sweep {
    let mut extractor = Extractor::new(base);
    extractor.extend(train);
    let patterns = extractor.into_patterns();
    let opponents = Arc::new(Tendencies::new(base));
    train.iter().for_each(|hand| opponents.observe_all(hand));
    let mut sweep = Sweep::default();
    for config in grid.configs(base) {
        let library = Arc::new(Library::new(compile(&patterns, &config)));
        let runtime = Runtime::new(library.clone(), opponents.clone(), config);
        let published = library.snapshot();
        let scorecard = Scorecard::evaluate(&runtime, &published, valid);
        let trial = Trial {
            config,
            rules: published.rules.len(),
            scorecard,
        };
        log::info!(
            "{:<32}{:<32}",
            format!("trial       n{} s{}", config.min_samples, config.smoothing_constant),
            scorecard
        );
        if sweep
            .best
            .as_ref()
            .is_none_or(|best| trial.scorecard.score() > best.scorecard.score())
        {
            sweep.best = Some(trial);
        }
        sweep.trials.push(trial);
    }
    sweep
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_a_product() {
        let grid = Grid {
            min_samples: vec![5, 50],
            smoothing_constant: vec![1., 2., 3.],
        };
        let configs = grid.configs(&Config::default());
        assert_eq!(configs.len(), 6);
        assert_eq!(configs[0].min_samples, 5);
        assert_eq!(configs[2].smoothing_constant, 3.);
        assert_eq!(configs[5].min_samples, 50);
    }

    #[test]
    fn empty_data_still_sweeps() {
        let sweep = sweep(&[], &[], &Config::default(), &Grid::default());
        assert_eq!(sweep.trials.len(), 9);
        assert!(sweep.best.is_some());
        assert!(sweep.trials.iter().all(|t| t.rules == 0));
    }
}
