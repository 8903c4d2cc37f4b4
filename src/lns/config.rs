//! LNS configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the large neighborhood search.
///
/// Each iteration destroys `floor(destroy_rate × selected)` elements of the
/// best selection, then repairs by attempting every item, in ranked order,
/// with probability `repair_probability`.
///
/// # Examples
///
/// ```
/// use u_sukp::lns::LnsConfig;
///
/// let config = LnsConfig::default()
///     .with_destroy_rate(0.3)
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LnsConfig {
    /// Fraction of selected elements removed per iteration, in [0, 1].
    pub destroy_rate: f64,

    /// Number of destroy/repair iterations.
    pub max_iterations: usize,

    /// Probability that the repair step attempts an item, in [0, 1].
    pub repair_probability: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for LnsConfig {
    fn default() -> Self {
        Self {
            destroy_rate: 0.2,
            max_iterations: 1000,
            repair_probability: 0.4,
            seed: None,
        }
    }
}

impl LnsConfig {
    pub fn with_destroy_rate(mut self, rate: f64) -> Self {
        self.destroy_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_repair_probability(mut self, p: f64) -> Self {
        self.repair_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.destroy_rate) {
            return Err(format!(
                "destroy_rate must be in [0, 1], got {}",
                self.destroy_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.repair_probability) {
            return Err(format!(
                "repair_probability must be in [0, 1], got {}",
                self.repair_probability
            ));
        }
        Ok(())
    }
}
