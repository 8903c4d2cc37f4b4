//! Selection evaluator shared by all solvers.

use crate::models::{Item, Selection, SukpInstance};

/// Evaluates selections against an instance.
///
/// # Examples
///
/// ```
/// use u_sukp::models::{Selection, SukpInstance};
/// use u_sukp::evaluation::SelectionEvaluator;
///
/// let inst = SukpInstance::new(
///     2.0,
///     vec![5.0, 3.0],
///     vec![1.0, 1.0, 1.0],
///     vec![vec![0, 1], vec![1, 2]],
/// )
/// .unwrap();
/// let eval = SelectionEvaluator::new(&inst);
///
/// let sel = Selection::from_flags(vec![true, true, false]);
/// assert_eq!(eval.weight(&sel), 2.0);
/// assert_eq!(eval.profit(&sel), 5.0);
/// assert!(eval.is_feasible(&sel, 2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectionEvaluator<'a> {
    instance: &'a SukpInstance,
}

impl<'a> SelectionEvaluator<'a> {
    /// Creates an evaluator for the given instance.
    pub fn new(instance: &'a SukpInstance) -> Self {
        Self { instance }
    }

    /// Total weight of the selected elements.
    pub fn weight(&self, selection: &Selection) -> f64 {
        self.instance
            .elements()
            .iter()
            .filter(|e| selection.is_selected(e.id()))
            .map(|e| e.weight())
            .sum()
    }

    /// Returns `true` if every required element of `item` is selected.
    pub fn is_complete(&self, item: &Item, selection: &Selection) -> bool {
        item.required_elements()
            .iter()
            .all(|&e| selection.is_selected(e))
    }

    /// Sum of profits over all complete items.
    ///
    /// Credits items completed incidentally by other items' elements and
    /// degenerate items with an empty union.
    pub fn profit(&self, selection: &Selection) -> f64 {
        self.instance
            .items()
            .iter()
            .filter(|item| self.is_complete(item, selection))
            .map(|item| item.profit())
            .sum()
    }

    /// IDs of all complete items, ascending.
    pub fn complete_items(&self, selection: &Selection) -> Vec<usize> {
        self.instance
            .items()
            .iter()
            .filter(|item| self.is_complete(item, selection))
            .map(|item| item.id())
            .collect()
    }

    /// Returns `true` if the selected weight does not exceed `capacity`.
    pub fn is_feasible(&self, selection: &Selection, capacity: f64) -> bool {
        self.weight(selection) <= capacity
    }

    /// Weight of the item's required elements not yet selected, provided
    /// adding them keeps `current_weight` within `capacity`.
    ///
    /// Returns `None` as soon as the running total exceeds capacity.
    pub fn fitting_marginal(
        &self,
        item: &Item,
        selection: &Selection,
        current_weight: f64,
        capacity: f64,
    ) -> Option<f64> {
        let mut marginal = 0.0;
        for &e in item.required_elements() {
            if !selection.is_selected(e) {
                marginal += self.instance.weight(e);
                if current_weight + marginal > capacity {
                    return None;
                }
            }
        }
        Some(marginal)
    }

    /// Selects every required element of `item`.
    pub fn select_item(&self, item: &Item, selection: &mut Selection) {
        for &e in item.required_elements() {
            selection.select(e);
        }
    }
}
