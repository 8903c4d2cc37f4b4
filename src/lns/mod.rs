//! Large neighborhood search for SUKP.
//!
//! - [`LnsConfig`] — destroy rate, iteration budget, repair probability, seed
//! - [`RandomElementRemoval`] — destroy: drop a random fraction of selected elements
//! - [`ProbabilisticRepair`] — repair: re-add ranked items with probability 0.4
//! - [`LnsRunner`] / [`optimize`] — greedy start, destroy/repair, accept strict improvements
//!
//! The operators implement [`u_metaheur::alns::DestroyOperator`] and
//! [`u_metaheur::alns::RepairOperator`].

mod config;
mod destroy;
mod repair;
mod runner;

pub use config::LnsConfig;
pub use destroy::RandomElementRemoval;
pub use repair::ProbabilisticRepair;
pub use runner::{optimize, LnsResult, LnsRunner};
