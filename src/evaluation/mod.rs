//! Selection evaluation: weight, completeness-based profit, and feasibility.

mod evaluator;

pub use evaluator::SelectionEvaluator;
