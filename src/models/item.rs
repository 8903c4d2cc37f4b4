//! Item type: a profit attached to a union of elements.

use serde::Serialize;

/// An item that pays its profit only when every required element is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: usize,
    profit: f64,
    required_elements: Vec<usize>,
    profit_per_weight: f64,
}

impl Item {
    /// `required_elements` must already be sorted and duplicate-free.
    pub(crate) fn new(
        id: usize,
        profit: f64,
        required_elements: Vec<usize>,
        union_weight: f64,
    ) -> Self {
        let profit_per_weight = if union_weight > 0.0 {
            profit / union_weight
        } else {
            0.0
        };
        Self {
            id,
            profit,
            required_elements,
            profit_per_weight,
        }
    }

    /// Item ID (position in the instance).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Profit credited when the item is complete.
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// Element IDs forming this item's union, ascending.
    pub fn required_elements(&self) -> &[usize] {
        &self.required_elements
    }

    /// Number of required elements.
    pub fn len(&self) -> usize {
        self.required_elements.len()
    }

    /// Returns `true` for a degenerate item with no required elements.
    pub fn is_empty(&self) -> bool {
        self.required_elements.is_empty()
    }

    /// Profit divided by the total weight of the union, or 0 for a
    /// weightless union.
    pub fn profit_per_weight(&self) -> f64 {
        self.profit_per_weight
    }
}
