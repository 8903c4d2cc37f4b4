//! Domain model types for the Set Union Knapsack Problem.
//!
//! Provides the core abstractions: weighted pool elements, items that pay a
//! profit once their whole element union is selected, the validated
//! instance tying them together, and the element selection that every
//! solver produces.

mod element;
mod instance;
mod item;
mod selection;

pub use element::Element;
pub use instance::SukpInstance;
pub use item::Item;
pub use selection::Selection;
