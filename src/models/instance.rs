//! SUKP instance model.

use serde::Serialize;

use crate::io::InstanceLoadError;

use super::{Element, Item};

/// A validated Set Union Knapsack instance.
///
/// Built once per loaded instance and read-only afterwards. Item unions are
/// stored as sparse element-ID lists; a dense incidence matrix is only used
/// transiently by [`SukpInstance::from_incidence`].
///
/// # Examples
///
/// ```
/// use u_sukp::models::SukpInstance;
///
/// let inst = SukpInstance::new(
///     2.0,
///     vec![5.0, 3.0],
///     vec![1.0, 1.0, 1.0],
///     vec![vec![0, 1], vec![1, 2]],
/// )
/// .unwrap();
/// assert_eq!(inst.num_items(), 2);
/// assert_eq!(inst.num_elements(), 3);
/// assert!((inst.items()[0].profit_per_weight() - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SukpInstance {
    capacity: f64,
    elements: Vec<Element>,
    items: Vec<Item>,
}

impl SukpInstance {
    /// Builds an instance from per-item element-ID lists.
    ///
    /// Each list is normalised to ascending order without duplicates.
    ///
    /// # Errors
    ///
    /// Returns an [`InstanceLoadError`] if there are no elements, the
    /// capacity, a weight or a profit is negative or non-finite, the number
    /// of unions differs from the number of profits, or a union references
    /// an element outside the pool.
    pub fn new(
        capacity: f64,
        profits: Vec<f64>,
        weights: Vec<f64>,
        requirements: Vec<Vec<usize>>,
    ) -> Result<Self, InstanceLoadError> {
        let n = weights.len();
        if n == 0 {
            return Err(InstanceLoadError::NoElements);
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(InstanceLoadError::InvalidCapacity(capacity));
        }
        if requirements.len() != profits.len() {
            return Err(InstanceLoadError::DimensionMismatch {
                what: "item unions",
                expected: profits.len(),
                found: requirements.len(),
            });
        }
        if let Some((element, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(InstanceLoadError::InvalidWeight { element, weight });
        }
        if let Some((item, &profit)) = profits
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(InstanceLoadError::InvalidProfit { item, profit });
        }

        let mut shares = vec![0.0; n];
        let mut items = Vec::with_capacity(profits.len());

        for (id, (profit, mut union)) in profits.into_iter().zip(requirements).enumerate() {
            if let Some(&element) = union.iter().find(|&&e| e >= n) {
                return Err(InstanceLoadError::ElementOutOfRange {
                    item: id,
                    element,
                    num_elements: n,
                });
            }
            union.sort_unstable();
            union.dedup();

            let union_weight: f64 = union.iter().map(|&e| weights[e]).sum();
            if !union.is_empty() {
                let share = profit / union.len() as f64;
                for &e in &union {
                    shares[e] += share;
                }
            }
            items.push(Item::new(id, profit, union, union_weight));
        }

        let elements = weights
            .into_iter()
            .zip(shares)
            .enumerate()
            .map(|(id, (weight, share))| {
                let efficiency = if weight > 0.0 { share / weight } else { 0.0 };
                Element::new(id, weight, efficiency)
            })
            .collect();

        Ok(Self {
            capacity,
            elements,
            items,
        })
    }

    /// Builds an instance from a dense item × element 0/1 matrix.
    ///
    /// Row `i` marks the elements required by item `i`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_sukp::models::SukpInstance;
    ///
    /// let inst = SukpInstance::from_incidence(
    ///     2.0,
    ///     vec![5.0, 3.0],
    ///     vec![1.0, 1.0, 1.0],
    ///     &[vec![1, 1, 0], vec![0, 1, 1]],
    /// )
    /// .unwrap();
    /// assert_eq!(inst.items()[1].required_elements(), &[1, 2]);
    /// ```
    pub fn from_incidence(
        capacity: f64,
        profits: Vec<f64>,
        weights: Vec<f64>,
        incidence: &[Vec<u8>],
    ) -> Result<Self, InstanceLoadError> {
        let n = weights.len();
        if incidence.len() != profits.len() {
            return Err(InstanceLoadError::DimensionMismatch {
                what: "incidence rows",
                expected: profits.len(),
                found: incidence.len(),
            });
        }

        let mut requirements = Vec::with_capacity(incidence.len());
        for (item, row) in incidence.iter().enumerate() {
            if row.len() != n {
                return Err(InstanceLoadError::DimensionMismatch {
                    what: "incidence columns",
                    expected: n,
                    found: row.len(),
                });
            }
            let mut union = Vec::new();
            for (element, &flag) in row.iter().enumerate() {
                match flag {
                    0 => {}
                    1 => union.push(element),
                    value => {
                        return Err(InstanceLoadError::InvalidIncidence {
                            item,
                            element,
                            value,
                        })
                    }
                }
            }
            requirements.push(union);
        }

        Self::new(capacity, profits, weights, requirements)
    }

    /// Knapsack capacity supplied with the instance.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// All pool elements, indexed by ID.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All items, indexed by ID.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items (m).
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Number of elements (n).
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Weight of element `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn weight(&self, id: usize) -> f64 {
        self.elements[id].weight()
    }
}
