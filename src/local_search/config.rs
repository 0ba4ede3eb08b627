//! Hill climbing configuration.

use serde::{Deserialize, Serialize};

/// How each search pass evaluates the swap neighborhood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborEvaluation {
    /// Materialize every neighbor and compute its full cyclic cost.
    /// O(n³) per pass.
    #[default]
    Full,
    /// Score swaps by their cost delta over the ≤4 affected edges.
    /// O(n²) per pass; the accepted tour's cost is recomputed in full.
    Incremental,
}

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::{HillClimbConfig, NeighborEvaluation};
///
/// let config = HillClimbConfig::default()
///     .with_max_iterations(200)
///     .with_seed(42)
///     .with_evaluation(NeighborEvaluation::Incremental);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbConfig {
    /// Maximum number of search passes.
    pub max_iterations: usize,
    /// Seed for the random starting tour (None for OS entropy).
    pub seed: Option<u64>,
    /// Neighborhood evaluation strategy.
    pub evaluation: NeighborEvaluation,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            seed: None,
            evaluation: NeighborEvaluation::Full,
        }
    }
}

impl HillClimbConfig {
    /// Sets the maximum number of search passes.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the neighborhood evaluation strategy.
    pub fn with_evaluation(mut self, evaluation: NeighborEvaluation) -> Self {
        self.evaluation = evaluation;
        self
    }
}
