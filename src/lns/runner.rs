//! LNS execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use u_metaheur::alns::{DestroyOperator, RepairOperator};
use u_numflow::random::create_rng;

use crate::constructive::greedy_in_order;
use crate::evaluation::SelectionEvaluator;
use crate::models::{Selection, SukpInstance};
use crate::ranking::rank_by_efficiency;

use super::config::LnsConfig;
use super::destroy::RandomElementRemoval;
use super::repair::ProbabilisticRepair;

/// Result of an LNS run.
#[derive(Debug, Clone, Serialize)]
pub struct LnsResult {
    /// The best selection found.
    pub best: Selection,

    /// Profit of the best selection (sum over complete items).
    pub best_profit: f64,

    /// Completeness re-scan of the greedy starting selection. Can exceed
    /// the greedy pass's own profit, which skips zero-marginal items.
    pub initial_profit: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Number of accepted improvements.
    pub improvements: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best profit after each iteration; index 0 is the starting profit.
    pub profit_history: Vec<f64>,
}

/// Executes the destroy/repair loop.
///
/// Starts from the greedy selection and, every iteration, destroys a copy
/// of the best selection with [`RandomElementRemoval`], repairs it with
/// [`ProbabilisticRepair`], and keeps it only if its profit is strictly
/// higher.
pub struct LnsRunner;

impl LnsRunner {
    /// Runs LNS with a generator seeded from `config.seed`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`LnsConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_sukp::models::SukpInstance;
    /// use u_sukp::lns::{LnsConfig, LnsRunner};
    ///
    /// let inst = SukpInstance::new(
    ///     2.0,
    ///     vec![5.0, 3.0],
    ///     vec![1.0, 1.0, 1.0],
    ///     vec![vec![0, 1], vec![1, 2]],
    /// )
    /// .unwrap();
    /// let config = LnsConfig::default()
    ///     .with_destroy_rate(0.5)
    ///     .with_max_iterations(50)
    ///     .with_seed(1);
    ///
    /// let result = LnsRunner::run(&inst, inst.capacity(), &config);
    /// assert!(result.best_profit >= 5.0);
    /// assert_eq!(result.profit_history.len(), 51);
    /// ```
    pub fn run(instance: &SukpInstance, capacity: f64, config: &LnsConfig) -> LnsResult {
        Self::run_with_cancel(instance, capacity, config, None)
    }

    /// Runs LNS with an optional cancellation token.
    pub fn run_with_cancel(
        instance: &SukpInstance,
        capacity: f64,
        config: &LnsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> LnsResult {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(instance, capacity, config, &mut rng, cancel)
    }

    /// Runs LNS drawing from a caller-supplied generator.
    pub fn run_with_rng<R: Rng>(
        instance: &SukpInstance,
        capacity: f64,
        config: &LnsConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> LnsResult {
        if let Err(msg) = config.validate() {
            panic!("invalid LnsConfig: {msg}");
        }

        let evaluator = SelectionEvaluator::new(instance);
        let order = rank_by_efficiency(instance);

        let (mut best, _) = greedy_in_order(instance, &order, capacity);
        let mut best_profit = evaluator.profit(&best);
        let initial_profit = best_profit;

        let destroy_op = RandomElementRemoval;
        let repair_op = ProbabilisticRepair::with_order(instance, order, capacity)
            .with_probability(config.repair_probability);

        let mut profit_history = Vec::with_capacity(config.max_iterations + 1);
        profit_history.push(best_profit);
        let mut improvements = 0usize;
        let mut iterations = 0usize;
        let mut cancelled = false;

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let destroyed = destroy_op.destroy(&best, config.destroy_rate, rng);
            let candidate = repair_op.repair(&destroyed, rng);
            let candidate_profit = evaluator.profit(&candidate);

            if candidate_profit > best_profit {
                log::debug!(
                    "lns iteration {iteration}: profit {best_profit} -> {candidate_profit}"
                );
                best = candidate;
                best_profit = candidate_profit;
                improvements += 1;
            } else {
                log::trace!("lns iteration {iteration}: rejected profit {candidate_profit}");
            }

            iterations += 1;
            profit_history.push(best_profit);
        }

        log::debug!(
            "lns finished after {iterations} iterations: profit {initial_profit} -> {best_profit}"
        );

        LnsResult {
            best,
            best_profit,
            initial_profit,
            iterations,
            improvements,
            cancelled,
            profit_history,
        }
    }
}

/// Runs LNS from `seed` and returns the best selection and its profit.
///
/// `destroy_rate` must lie in [0, 1].
///
/// # Examples
///
/// ```
/// use u_sukp::models::SukpInstance;
/// use u_sukp::lns::optimize;
///
/// let inst = SukpInstance::new(
///     2.0,
///     vec![5.0, 3.0],
///     vec![1.0, 1.0, 1.0],
///     vec![vec![0, 1], vec![1, 2]],
/// )
/// .unwrap();
///
/// let (selection, profit) = optimize(&inst, inst.capacity(), 3, 1.0, 1);
/// assert!(profit >= 5.0);
/// assert_eq!(selection.len(), 3);
/// ```
pub fn optimize(
    instance: &SukpInstance,
    capacity: f64,
    seed: u64,
    destroy_rate: f64,
    max_iterations: usize,
) -> (Selection, f64) {
    let config = LnsConfig::default()
        .with_destroy_rate(destroy_rate)
        .with_max_iterations(max_iterations)
        .with_seed(seed);
    let result = LnsRunner::run(instance, capacity, &config);
    (result.best, result.best_profit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::greedy;

    fn two_item() -> SukpInstance {
        SukpInstance::new(
            2.0,
            vec![5.0, 3.0],
            vec![1.0, 1.0, 1.0],
            vec![vec![0, 1], vec![1, 2]],
        )
        .unwrap()
    }

    fn medium() -> SukpInstance {
        SukpInstance::new(
            6.0,
            vec![9.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0],
            vec![2.0, 1.0, 3.0, 1.0, 2.0, 1.0, 2.0, 1.0],
            vec![
                vec![0, 1, 2],
                vec![1, 3],
                vec![2, 4],
                vec![3, 5],
                vec![5, 6, 7],
                vec![0, 7],
                vec![],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_full_destroy_single_iteration() {
        let inst = two_item();
        for seed in 0..20 {
            let (_, profit) = optimize(&inst, 2.0, seed, 1.0, 1);
            assert!(profit >= 5.0);
        }
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let inst = medium();
        let config = LnsConfig::default()
            .with_destroy_rate(0.4)
            .with_max_iterations(200)
            .with_seed(17);
        let a = LnsRunner::run(&inst, 6.0, &config);
        let b = LnsRunner::run(&inst, 6.0, &config);
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_profit.to_bits(), b.best_profit.to_bits());
        assert_eq!(a.profit_history, b.profit_history);
    }

    #[test]
    fn test_monotone_and_bounded_by_greedy() {
        let inst = medium();
        let (_, greedy_profit) = greedy(&inst, 6.0);
        let config = LnsConfig::default()
            .with_destroy_rate(0.5)
            .with_max_iterations(300)
            .with_seed(5);
        let result = LnsRunner::run(&inst, 6.0, &config);
        assert!(result.initial_profit >= greedy_profit);
        assert!(result.profit_history.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(result.profit_history.len(), 301);
        assert_eq!(result.iterations, 300);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_result_is_feasible_and_rescanned() {
        let inst = medium();
        let eval = SelectionEvaluator::new(&inst);
        for seed in 0..10 {
            let (sel, profit) = optimize(&inst, 6.0, seed, 0.3, 100);
            assert!(eval.is_feasible(&sel, 6.0));
            assert!((profit - eval.profit(&sel)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_zero_iterations_returns_rescanned_greedy() {
        // greedy reports 10 (item 1 has zero marginal weight), the re-scan 14
        let inst = SukpInstance::new(
            2.0,
            vec![10.0, 4.0],
            vec![1.0, 1.0],
            vec![vec![0, 1], vec![0]],
        )
        .unwrap();
        let (greedy_sel, _) = greedy(&inst, 2.0);
        let (sel, profit) = optimize(&inst, 2.0, 1, 0.5, 0);
        assert_eq!(sel, greedy_sel);
        assert!((profit - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_improves_on_poor_greedy_start() {
        // greedy takes item 0 (best ratio) and blocks the pair 1 + 2
        let inst = SukpInstance::new(
            4.0,
            vec![8.0, 5.0, 5.0],
            vec![3.0, 2.0, 2.0],
            vec![vec![0], vec![1], vec![2]],
        )
        .unwrap();
        let (_, greedy_profit) = greedy(&inst, 4.0);
        assert!((greedy_profit - 8.0).abs() < 1e-10);

        let config = LnsConfig::default()
            .with_destroy_rate(1.0)
            .with_max_iterations(200)
            .with_seed(3);
        let result = LnsRunner::run(&inst, 4.0, &config);
        assert!((result.best_profit - 10.0).abs() < 1e-10);
        assert!(result.improvements >= 1);
    }

    #[test]
    fn test_optimize_matches_runner() {
        let inst = medium();
        let config = LnsConfig::default()
            .with_destroy_rate(0.3)
            .with_max_iterations(50)
            .with_seed(11);
        let result = LnsRunner::run(&inst, 6.0, &config);
        let (sel, profit) = optimize(&inst, 6.0, 11, 0.3, 50);
        assert_eq!(sel, result.best);
        assert_eq!(profit.to_bits(), result.best_profit.to_bits());
    }

    #[test]
    fn test_cancelled_before_start() {
        let inst = medium();
        let flag = Arc::new(AtomicBool::new(true));
        let config = LnsConfig::default().with_max_iterations(100).with_seed(1);
        let result = LnsRunner::run_with_cancel(&inst, 6.0, &config, Some(flag));
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.profit_history.len(), 1);
    }

    #[test]
    #[should_panic(expected = "invalid LnsConfig")]
    fn test_invalid_config_panics() {
        let inst = two_item();
        let config = LnsConfig::default().with_destroy_rate(2.0);
        LnsRunner::run(&inst, 2.0, &config);
    }
}
