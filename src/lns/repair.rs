//! Repair operator for SUKP selections.

use rand::Rng;
use u_metaheur::alns::RepairOperator;

use crate::evaluation::SelectionEvaluator;
use crate::models::{Selection, SukpInstance};
use crate::ranking::rank_by_efficiency;

/// Re-adds items in ranked order, each attempted with a fixed probability.
///
/// An attempted item is added when its missing elements fit in the
/// remaining capacity. Unlike the greedy constructor there is no
/// positive-marginal requirement: an item whose union is already selected
/// always "fits" and costs nothing.
///
/// A repaired selection never exceeds capacity provided its input did not.
pub struct ProbabilisticRepair<'a> {
    instance: &'a SukpInstance,
    order: Vec<usize>,
    capacity: f64,
    probability: f64,
}

impl<'a> ProbabilisticRepair<'a> {
    /// Creates a repair operator with attempt probability 0.4.
    pub fn new(instance: &'a SukpInstance, capacity: f64) -> Self {
        Self::with_order(instance, rank_by_efficiency(instance), capacity)
    }

    /// Creates a repair operator over a precomputed item order.
    pub fn with_order(instance: &'a SukpInstance, order: Vec<usize>, capacity: f64) -> Self {
        Self {
            instance,
            order,
            capacity,
            probability: 0.4,
        }
    }

    /// Sets the per-item attempt probability.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }
}

impl RepairOperator<Selection> for ProbabilisticRepair<'_> {
    fn name(&self) -> &str {
        "probabilistic_repair"
    }

    fn repair<R: Rng>(&self, solution: &Selection, rng: &mut R) -> Selection {
        let evaluator = SelectionEvaluator::new(self.instance);
        let mut sol = solution.clone();
        let mut current_weight = evaluator.weight(&sol);

        for &id in &self.order {
            if rng.random::<f64>() >= self.probability {
                continue;
            }
            let item = &self.instance.items()[id];
            if let Some(marginal) =
                evaluator.fitting_marginal(item, &sol, current_weight, self.capacity)
            {
                evaluator.select_item(item, &mut sol);
                current_weight += marginal;
            }
        }

        sol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> SukpInstance {
        SukpInstance::new(
            3.0,
            vec![5.0, 3.0, 2.0],
            vec![1.0, 1.0, 1.0, 2.0],
            vec![vec![0, 1], vec![1, 2], vec![3]],
        )
        .unwrap()
    }

    #[test]
    fn test_certain_repair_fills_greedily() {
        let inst = setup();
        let op = ProbabilisticRepair::new(&inst, 3.0).with_probability(1.0);
        let mut rng = u_numflow::random::create_rng(42);
        let repaired = op.repair(&Selection::empty(4), &mut rng);
        // item 0 (2.5), item 1 (1.5) fit; item 2 needs 2 more
        assert_eq!(repaired.selected_ids(), vec![0, 1, 2]);
    }

    #[test]
    fn test_adds_item_with_weightless_missing_elements() {
        // greedy skips this item (zero marginal weight); repair takes it
        let inst = SukpInstance::new(1.0, vec![5.0], vec![0.0, 1.0], vec![vec![0]]).unwrap();
        let op = ProbabilisticRepair::new(&inst, 1.0).with_probability(1.0);
        let mut rng = u_numflow::random::create_rng(42);
        let repaired = op.repair(&Selection::empty(2), &mut rng);
        assert_eq!(repaired.selected_ids(), vec![0]);
        assert!((SelectionEvaluator::new(&inst).profit(&repaired) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_probability_is_noop() {
        let inst = setup();
        let op = ProbabilisticRepair::new(&inst, 3.0).with_probability(0.0);
        let mut rng = u_numflow::random::create_rng(42);
        let sel = Selection::from_flags(vec![false, true, false, false]);
        assert_eq!(op.repair(&sel, &mut rng), sel);
    }

    #[test]
    fn test_repair_respects_capacity() {
        let inst = setup();
        let eval = SelectionEvaluator::new(&inst);
        let op = ProbabilisticRepair::new(&inst, 3.0);
        for seed in 0..50 {
            let mut rng = u_numflow::random::create_rng(seed);
            let repaired = op.repair(&Selection::empty(4), &mut rng);
            assert!(eval.is_feasible(&repaired, 3.0));
        }
    }

    #[test]
    fn test_repair_keeps_existing_elements() {
        let inst = setup();
        let op = ProbabilisticRepair::new(&inst, 3.0);
        let sel = Selection::from_flags(vec![false, false, false, true]);
        for seed in 0..20 {
            let mut rng = u_numflow::random::create_rng(seed);
            assert!(op.repair(&sel, &mut rng).is_selected(3));
        }
    }
}
