//! Weighted pool element.

use serde::Serialize;

/// An element of the shared pool that items draw their unions from.
///
/// Selecting an element costs its weight once, no matter how many items
/// require it.
///
/// # Examples
///
/// ```
/// use u_sukp::models::SukpInstance;
///
/// let inst = SukpInstance::new(10.0, vec![4.0], vec![2.0, 1.0], vec![vec![0, 1]]).unwrap();
/// let e = &inst.elements()[0];
/// assert_eq!(e.id(), 0);
/// assert_eq!(e.weight(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    id: usize,
    weight: f64,
    efficiency: f64,
}

impl Element {
    pub(crate) fn new(id: usize, weight: f64, efficiency: f64) -> Self {
        Self {
            id,
            weight,
            efficiency,
        }
    }

    /// Element ID (position in the pool).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Weight charged when the element is selected.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Profit share per unit weight.
    ///
    /// Sum over requiring items of `profit / |union|`, divided by the
    /// element weight (0 for weightless elements). Diagnostic only; no
    /// solver reads it.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}
