mod common;

use common::*;
use pokerbot::compiler::*;
use pokerbot::config::Config;
use pokerbot::gameplay::*;
use pokerbot::opponents::Tendencies;
use pokerbot::patterns::*;
use pokerbot::runtime::Runtime;
use pokerbot::save::Disk;
use pokerbot::tuning::*;
use std::sync::Arc;

fn train() -> Vec<Record> {
    (0..200).map(flop_steal).collect()
}

fn valid() -> Vec<Record> {
    (200..260).map(flop_steal).collect()
}

fn grid() -> Grid {
    Grid {
        min_samples: vec![10, 1000],
        smoothing_constant: vec![10.],
    }
}

#[test]
fn replay_scores_compiled_rules() {
    let config = Config::default();
    let rules = compile(&extract(&train(), &config), &config);
    let library = Arc::new(Library::new(rules));
    let runtime = Runtime::new(library.clone(), Arc::new(Tendencies::default()), config);
    let valid = valid();
    let card = Scorecard::evaluate(&runtime, &library.snapshot(), &valid);
    assert_eq!(card.decisions, 5 * valid.len());
    assert!(card.decision_quality > 0.);
    assert!(card.win_rate >= 0.5);
    assert!(card.expected_value.abs() <= 1.);
    assert!(card.score() > 0.);
}

#[test]
fn replay_skips_broken_outcomes() {
    let config = Config::default();
    let runtime = Runtime::new(
        Arc::new(Library::default()),
        Arc::new(Tendencies::default()),
        config,
    );
    let mut broken = flop_steal(0);
    broken.outcome.payouts.insert(1, 50);
    let card = Scorecard::evaluate(&runtime, &runtime.library().snapshot(), &[broken]);
    assert_eq!(card, Scorecard::default());
}

#[test]
fn sweep_keeps_the_best_trial() {
    let sweep = sweep(&train(), &valid(), &Config::default(), &grid());
    assert_eq!(sweep.trials.len(), 2);
    assert!(sweep.trials[0].rules > 0);
    assert_eq!(sweep.trials[1].rules, 0);
    assert!(sweep.trials.iter().all(|t| t.scorecard.decisions == 300));
    let top = sweep
        .trials
        .iter()
        .map(|t| t.scorecard.score())
        .fold(f32::MIN, f32::max);
    let first = sweep
        .trials
        .iter()
        .find(|t| t.scorecard.score() == top)
        .copied();
    assert_eq!(sweep.best, first);
}

#[test]
fn sweep_persists_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.json");
    let sweep = sweep(&train(), &valid(), &Config::default(), &grid());
    assert!(!Sweep::done(&path));
    sweep.save(&path).unwrap();
    assert!(Sweep::done(&path));
    assert_eq!(Sweep::load(&path).unwrap(), sweep);
}
