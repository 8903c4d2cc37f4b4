//! Deterministic greedy construction.
//!
//! # Algorithm
//!
//! Visits items in descending profit-per-weight order. An item is taken when
//! its missing elements fit in the remaining capacity and at least one
//! element is actually missing; taking it selects those elements and adds
//! its profit.
//!
//! An item whose union is already fully selected (zero marginal weight) is
//! skipped and its profit is not added, even though it is complete. The
//! returned profit therefore counts only items that paid for new elements.
//!
//! # Complexity
//!
//! O(m log m + m·k) where m = number of items and k = average union size.

use crate::evaluation::SelectionEvaluator;
use crate::models::{Selection, SukpInstance};
use crate::ranking::rank_by_efficiency;

/// Builds a selection with a single greedy pass.
///
/// Returns the selection and the profit accumulated during the pass.
///
/// # Examples
///
/// ```
/// use u_sukp::models::SukpInstance;
/// use u_sukp::constructive::greedy;
///
/// let inst = SukpInstance::new(
///     2.0,
///     vec![5.0, 3.0],
///     vec![1.0, 1.0, 1.0],
///     vec![vec![0, 1], vec![1, 2]],
/// )
/// .unwrap();
///
/// let (selection, profit) = greedy(&inst, inst.capacity());
/// assert_eq!(profit, 5.0);
/// assert_eq!(selection.selected_ids(), vec![0, 1]);
/// ```
pub fn greedy(instance: &SukpInstance, capacity: f64) -> (Selection, f64) {
    let order = rank_by_efficiency(instance);
    greedy_in_order(instance, &order, capacity)
}

/// Greedy pass over an explicit item order.
pub(crate) fn greedy_in_order(
    instance: &SukpInstance,
    order: &[usize],
    capacity: f64,
) -> (Selection, f64) {
    let evaluator = SelectionEvaluator::new(instance);
    let mut selection = Selection::empty(instance.num_elements());
    let mut current_weight = 0.0;
    let mut total_profit = 0.0;

    for &id in order {
        let item = &instance.items()[id];
        match evaluator.fitting_marginal(item, &selection, current_weight, capacity) {
            Some(marginal) if marginal > 0.0 => {
                evaluator.select_item(item, &mut selection);
                current_weight += marginal;
                total_profit += item.profit();
            }
            _ => {}
        }
    }

    log::debug!(
        "greedy: profit {total_profit}, weight {current_weight}/{capacity}, {} elements selected",
        selection.count()
    );
    (selection, total_profit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_item() -> SukpInstance {
        SukpInstance::new(
            2.0,
            vec![5.0, 3.0],
            vec![1.0, 1.0, 1.0],
            vec![vec![0, 1], vec![1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_greedy_rejects_overflowing_item() {
        let inst = two_item();
        let (sel, profit) = greedy(&inst, 2.0);
        assert!((profit - 5.0).abs() < 1e-10);
        assert_eq!(sel.as_flags(), &[true, true, false]);
    }

    #[test]
    fn test_greedy_takes_everything_with_room() {
        let inst = two_item();
        let (sel, profit) = greedy(&inst, 3.0);
        assert!((profit - 8.0).abs() < 1e-10);
        assert_eq!(sel.count(), 3);
    }

    #[test]
    fn test_greedy_skips_zero_marginal_item() {
        // item 1's union {0} is covered once item 0 is taken
        let inst = SukpInstance::new(
            2.0,
            vec![10.0, 4.0],
            vec![1.0, 1.0],
            vec![vec![0, 1], vec![0]],
        )
        .unwrap();
        let (sel, profit) = greedy(&inst, 2.0);
        assert_eq!(sel.count(), 2);
        assert!((profit - 10.0).abs() < 1e-10);
        let rescan = SelectionEvaluator::new(&inst).profit(&sel);
        assert!((rescan - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_greedy_skips_item_with_weightless_missing_elements() {
        let inst = SukpInstance::new(1.0, vec![5.0], vec![0.0, 1.0], vec![vec![0]]).unwrap();
        let (sel, profit) = greedy(&inst, 1.0);
        assert_eq!(sel.count(), 0);
        assert_eq!(profit, 0.0);
    }

    #[test]
    fn test_greedy_skips_degenerate_item() {
        let inst =
            SukpInstance::new(1.0, vec![3.0, 2.0], vec![1.0], vec![vec![0], vec![]]).unwrap();
        let (_, profit) = greedy(&inst, 1.0);
        assert!((profit - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_greedy_zero_capacity() {
        let inst = two_item();
        let (sel, profit) = greedy(&inst, 0.0);
        assert_eq!(sel.count(), 0);
        assert_eq!(profit, 0.0);
    }

    #[test]
    fn test_greedy_is_deterministic() {
        let inst = two_item();
        let a = greedy(&inst, 2.5);
        let b = greedy(&inst, 2.5);
        assert_eq!(a.0, b.0);
        assert_eq!(a.1.to_bits(), b.1.to_bits());
    }

    #[test]
    fn test_greedy_respects_capacity() {
        let inst = SukpInstance::new(
            4.0,
            vec![6.0, 5.0, 4.0, 3.0],
            vec![2.0, 1.0, 3.0, 1.0, 2.0],
            vec![vec![0, 1], vec![2, 3], vec![1, 4], vec![3]],
        )
        .unwrap();
        let (sel, _) = greedy(&inst, 4.0);
        assert!(SelectionEvaluator::new(&inst).is_feasible(&sel, 4.0));
    }
}
