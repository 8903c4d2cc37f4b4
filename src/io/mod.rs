//! Instance loading.
//!
//! - [`parse_instance`] / [`read_instance`] / [`load_instance`] — text format reader
//! - [`InstanceLoadError`] — everything that can go wrong before a solver runs

mod error;
mod reader;

pub use error::InstanceLoadError;
pub use reader::{load_instance, parse_instance, read_instance};
