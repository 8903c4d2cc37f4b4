//! Constructive heuristics for building SUKP selections.
//!
//! - [`greedy`] — Deterministic profit-per-weight pass, O(m log m + m·k)
//! - [`randomized`] — Seeded pass attempting each item with probability 0.7,
//!   profit credited by completeness re-scan

mod greedy;
mod randomized;

pub use greedy::greedy;
pub(crate) use greedy::greedy_in_order;
pub use randomized::{randomized, randomized_with_rng, INCLUSION_PROBABILITY};
