//! Seeded batch evaluation.
//!
//! Runs one trial per seed, strictly in sequence, and summarises the
//! profits. Each trial builds its own generator from its seed, so trials
//! share nothing but the read-only instance.

use std::ops::RangeInclusive;

use serde::Serialize;

/// Number of seeds in a default batch.
pub const DEFAULT_TRIALS: u64 = 30;

/// Profit obtained by one seeded run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trial {
    /// Seed the run was started from.
    pub seed: u64,
    /// Profit it returned.
    pub profit: f64,
}

/// Summary of a batch of seeded runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSummary {
    /// Every trial, in execution order.
    pub trials: Vec<Trial>,
    /// First trial reaching the maximum profit.
    pub best: Trial,
    /// Mean profit over all trials.
    pub average_profit: f64,
}

impl TrialSummary {
    /// Seeds `1..=DEFAULT_TRIALS`.
    pub fn default_seeds() -> RangeInclusive<u64> {
        1..=DEFAULT_TRIALS
    }
}

/// Runs `trial` once per seed and summarises the results.
///
/// Returns `None` when `seeds` is empty.
///
/// # Examples
///
/// ```
/// use u_sukp::batch::{run_trials, TrialSummary};
/// use u_sukp::constructive::randomized;
/// use u_sukp::models::SukpInstance;
///
/// let inst = SukpInstance::new(
///     2.0,
///     vec![5.0, 3.0],
///     vec![1.0, 1.0, 1.0],
///     vec![vec![0, 1], vec![1, 2]],
/// )
/// .unwrap();
///
/// let summary = run_trials(TrialSummary::default_seeds(), |seed| {
///     randomized(&inst, inst.capacity(), seed).1
/// })
/// .unwrap();
/// assert_eq!(summary.trials.len(), 30);
/// assert!(summary.best.profit >= summary.average_profit);
/// ```
pub fn run_trials<I, F>(seeds: I, mut trial: F) -> Option<TrialSummary>
where
    I: IntoIterator<Item = u64>,
    F: FnMut(u64) -> f64,
{
    let trials: Vec<Trial> = seeds
        .into_iter()
        .map(|seed| {
            let profit = trial(seed);
            log::debug!("trial seed {seed}: profit {profit}");
            Trial { seed, profit }
        })
        .collect();

    let mut best = *trials.first()?;
    for t in &trials[1..] {
        if t.profit > best.profit {
            best = *t;
        }
    }
    let average_profit = trials.iter().map(|t| t.profit).sum::<f64>() / trials.len() as f64;

    log::info!(
        "{} trials: best seed {} (profit {}), average {}",
        trials.len(),
        best.seed,
        best.profit,
        average_profit
    );

    Some(TrialSummary {
        trials,
        best,
        average_profit,
    })
}
