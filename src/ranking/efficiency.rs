//! Profit-per-weight item ordering.

use std::cmp::Ordering;

use crate::models::SukpInstance;

/// Returns item IDs ordered by descending profit per weight.
///
/// Ties are broken by ascending item ID, so the order is fully determined
/// by the instance.
///
/// # Examples
///
/// ```
/// use u_sukp::models::SukpInstance;
/// use u_sukp::ranking::rank_by_efficiency;
///
/// let inst = SukpInstance::new(
///     10.0,
///     vec![3.0, 5.0, 5.0],
///     vec![1.0, 1.0, 1.0],
///     vec![vec![1, 2], vec![0, 1], vec![2]],
/// )
/// .unwrap();
/// assert_eq!(rank_by_efficiency(&inst), vec![2, 1, 0]);
/// ```
pub fn rank_by_efficiency(instance: &SukpInstance) -> Vec<usize> {
    let items = instance.items();
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .profit_per_weight()
            .partial_cmp(&items[a].profit_per_weight())
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        let inst = SukpInstance::new(
            2.0,
            vec![5.0, 3.0],
            vec![1.0, 1.0, 1.0],
            vec![vec![0, 1], vec![1, 2]],
        )
        .unwrap();
        assert_eq!(rank_by_efficiency(&inst), vec![0, 1]);
    }

    #[test]
    fn test_ties_break_by_id() {
        let inst = SukpInstance::new(
            10.0,
            vec![2.0, 4.0, 2.0, 4.0],
            vec![1.0, 1.0, 1.0, 1.0],
            vec![vec![0], vec![1, 2], vec![3], vec![0, 3]],
        )
        .unwrap();
        // every item has profit per weight 2.0
        assert_eq!(rank_by_efficiency(&inst), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_degenerate_items_rank_last() {
        let inst = SukpInstance::new(
            10.0,
            vec![100.0, 1.0, 50.0],
            vec![1.0, 1.0],
            vec![vec![], vec![0], vec![]],
        )
        .unwrap();
        assert_eq!(rank_by_efficiency(&inst), vec![1, 0, 2]);
    }

    #[test]
    fn test_empty_instance_items() {
        let inst = SukpInstance::new(1.0, vec![], vec![1.0], vec![]).unwrap();
        assert!(rank_by_efficiency(&inst).is_empty());
    }
}
