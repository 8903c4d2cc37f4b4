//! Destroy operator for SUKP selections.

use rand::Rng;
use u_metaheur::alns::DestroyOperator;

use crate::models::Selection;

/// Deselects uniformly random selected elements.
///
/// Removes `floor(degree × selected)` elements. Each pick is drawn directly
/// from the list of still-selected element IDs, so sparse selections never
/// need retries. The result may be under-filled but never over-filled.
///
/// # Examples
///
/// ```
/// use u_sukp::models::Selection;
/// use u_sukp::lns::RandomElementRemoval;
/// use u_metaheur::alns::DestroyOperator;
///
/// let sel = Selection::from_flags(vec![true, true, true, true, false]);
/// let mut rng = u_numflow::random::create_rng(42);
/// let destroyed = RandomElementRemoval.destroy(&sel, 0.5, &mut rng);
/// assert_eq!(destroyed.count(), 2);
/// ```
pub struct RandomElementRemoval;

impl DestroyOperator<Selection> for RandomElementRemoval {
    fn name(&self) -> &str {
        "random_element_removal"
    }

    fn destroy<R: Rng>(&self, solution: &Selection, degree: f64, rng: &mut R) -> Selection {
        let mut sol = solution.clone();
        let mut selected = sol.selected_ids();
        let num_remove = (degree.clamp(0.0, 1.0) * selected.len() as f64).floor() as usize;

        for _ in 0..num_remove {
            if selected.is_empty() {
                break;
            }
            let idx = rng.random_range(0..selected.len());
            let id = selected.swap_remove(idx);
            sol.deselect(id);
        }

        sol
    }
}
