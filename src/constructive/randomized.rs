//! Randomized single-pass construction.
//!
//! # Algorithm
//!
//! Visits items in descending profit-per-weight order and attempts each one
//! with probability [`INCLUSION_PROBABILITY`], using the same feasibility
//! test as [`greedy`](super::greedy). Skipped items are skipped regardless
//! of whether they would fit.
//!
//! Profit is not accumulated during the pass. Afterwards every item is
//! re-scanned and credited if its whole union is selected, which also
//! counts items completed incidentally by other items' elements.

use rand::Rng;
use u_numflow::random::create_rng;

use crate::evaluation::SelectionEvaluator;
use crate::models::{Selection, SukpInstance};
use crate::ranking::rank_by_efficiency;

/// Probability that an item is attempted.
pub const INCLUSION_PROBABILITY: f64 = 0.7;

/// Builds a selection with a randomized pass seeded by `seed`.
///
/// Identical seeds on an identical instance and capacity reproduce the
/// same selection and profit.
///
/// # Examples
///
/// ```
/// use u_sukp::models::SukpInstance;
/// use u_sukp::constructive::randomized;
///
/// let inst = SukpInstance::new(
///     2.0,
///     vec![5.0, 3.0],
///     vec![1.0, 1.0, 1.0],
///     vec![vec![0, 1], vec![1, 2]],
/// )
/// .unwrap();
///
/// let (a, pa) = randomized(&inst, inst.capacity(), 7);
/// let (b, pb) = randomized(&inst, inst.capacity(), 7);
/// assert_eq!(a, b);
/// assert_eq!(pa, pb);
/// ```
pub fn randomized(instance: &SukpInstance, capacity: f64, seed: u64) -> (Selection, f64) {
    let mut rng = create_rng(seed);
    randomized_with_rng(instance, capacity, &mut rng)
}

/// Randomized pass drawing from a caller-supplied generator.
pub fn randomized_with_rng<R: Rng>(
    instance: &SukpInstance,
    capacity: f64,
    rng: &mut R,
) -> (Selection, f64) {
    let evaluator = SelectionEvaluator::new(instance);
    let mut selection = Selection::empty(instance.num_elements());
    let mut current_weight = 0.0;

    for id in rank_by_efficiency(instance) {
        if rng.random::<f64>() >= INCLUSION_PROBABILITY {
            continue;
        }
        let item = &instance.items()[id];
        match evaluator.fitting_marginal(item, &selection, current_weight, capacity) {
            Some(marginal) if marginal > 0.0 => {
                evaluator.select_item(item, &mut selection);
                current_weight += marginal;
            }
            _ => {}
        }
    }

    let total_profit = evaluator.profit(&selection);
    log::debug!("randomized: profit {total_profit}, weight {current_weight}/{capacity}");
    (selection, total_profit)
}
