//! Compiles recorded poker decisions into a compact runtime strategy.
//!
//! Hand histories flow one way through the offline pipeline:
//! [`patterns`] fingerprints every decision point and aggregates outcome
//! statistics, [`compiler`] turns those statistics into immutable rule sets.
//! At play time [`runtime`] converges the published rules with the
//! [`cards`] evaluator and the [`opponents`] tendency store into one decision.
pub mod cards;
pub mod compiler;
pub mod config;
pub mod error;
pub mod gameplay;
pub mod opponents;
pub mod patterns;
pub mod runtime;
pub mod save;
pub mod tuning;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot sizes, stacks and bet amounts in chips.
pub type Chips = i32;
/// Seat index relative to the button (0 = button).
pub type Seat = usize;
/// Expected values and payoffs.
pub type Utility = f32;
/// Action frequencies, confidences and equities.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// COMPILER DEFAULTS
// ============================================================================
/// Fingerprints seen fewer times than this never produce a rule.
pub const MIN_SAMPLES: usize = 30;
/// Pseudocount in confidence = n / (n + smoothing).
pub const SMOOTHING_CONSTANT: f32 = 10.0;
/// Rules whose confidence falls below this are pruned.
pub const MIN_CONFIDENCE: Probability = 0.5;
/// Shortest key prefix (in components) that still compiles into a fallback rule.
pub const FALLBACK_DEPTH: usize = 2;
/// Stack-to-pot ratio width of one depth bucket.
pub const STACK_RESOLUTION: f32 = 4.0;
/// Bet-to-pot ratio width of one sizing class in action signatures.
pub const POT_RESOLUTION: f32 = 0.75;
/// Fixed-point scale for cumulative EV so accumulation is exactly associative.
pub const EV_SCALE: f64 = 1e4;

// ============================================================================
// OPPONENT MODEL DEFAULTS
// ============================================================================
/// Weight kept by the old estimate per observed action. 0.9 lets ~20 actions dominate.
pub const DECAY_FACTOR: Probability = 0.9;
/// Aggression prior for unseen opponents.
pub const NEUTRAL_AGGRESSION: Probability = 0.5;
/// Fold-to-aggression prior for unseen opponents.
pub const NEUTRAL_FOLDING: Probability = 0.5;

// ============================================================================
// RUNTIME DEFAULTS
// ============================================================================
/// Share of the final confidence contributed by raw hand strength.
pub const STRENGTH_WEIGHT: Probability = 0.25;
/// Equity above which the fallback heuristic bets or raises.
pub const RAISE_EQUITY: Probability = 0.75;
/// Bluff frequency above which bluff catching gains confidence.
pub const BLUFF_THRESHOLD: Probability = 0.3;
/// Aggression below which an opponent counts as passive.
pub const PASSIVE_THRESHOLD: Probability = 0.35;
/// Scale of opponent-driven confidence adjustments.
pub const EXPLOIT_WEIGHT: Probability = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "native")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
