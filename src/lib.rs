//! # u-sukp
//!
//! Heuristics for the Set Union Knapsack Problem (SUKP): choose a set of
//! weighted elements within a capacity so that the total profit of the items
//! whose whole element union is chosen is as large as possible. Items that
//! share elements share their weight.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Element, Item, SukpInstance, Selection)
//! - [`evaluation`] — Selection weight, completeness profit, feasibility
//! - [`ranking`] — Profit-per-weight item order
//! - [`constructive`] — Greedy and randomized constructors
//! - [`lns`] — Large neighborhood search (destroy/repair)
//! - [`io`] — Instance text format reader
//! - [`batch`] — Seeded batch evaluation

pub mod batch;
pub mod constructive;
pub mod evaluation;
pub mod io;
pub mod lns;
pub mod models;
pub mod ranking;
