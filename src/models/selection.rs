//! Element selection (the solution representation).

use serde::{Deserialize, Serialize};

/// A selection of pool elements, one flag per element.
///
/// Owns no elements or items; it is created fresh by each algorithm run
/// and returned by value.
///
/// # Examples
///
/// ```
/// use u_sukp::models::Selection;
///
/// let mut sel = Selection::empty(3);
/// sel.select(0);
/// sel.select(2);
/// assert_eq!(sel.count(), 2);
/// assert_eq!(sel.selected_ids(), vec![0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    flags: Vec<bool>,
}

impl Selection {
    /// Creates a selection of `n` elements with nothing selected.
    pub fn empty(n: usize) -> Self {
        Self {
            flags: vec![false; n],
        }
    }

    /// Wraps an explicit flag vector.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Number of elements covered (selected or not).
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the selection covers no elements at all.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns `true` if element `id` is selected.
    pub fn is_selected(&self, id: usize) -> bool {
        self.flags[id]
    }

    /// Marks element `id` as selected.
    pub fn select(&mut self, id: usize) {
        self.flags[id] = true;
    }

    /// Marks element `id` as not selected.
    pub fn deselect(&mut self, id: usize) {
        self.flags[id] = false;
    }

    /// Number of selected elements.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// IDs of the selected elements, ascending.
    pub fn selected_ids(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
            .collect()
    }

    /// The raw flag vector.
    pub fn as_flags(&self) -> &[bool] {
        &self.flags
    }

    /// Consumes the selection, returning the flag vector.
    pub fn into_flags(self) -> Vec<bool> {
        self.flags
    }
}
