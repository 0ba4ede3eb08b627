//! Steepest-ascent hill climbing over the swap neighborhood.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting tour
//! 2. At each pass:
//!    a. Expand the swap neighborhood (empty for n ≤ 1 → converged)
//!    b. Select the cheapest neighbor, earliest pair on ties
//!    c. Move only on strict improvement, otherwise converged
//! 3. Stop as budget-exhausted if the pass limit is reached while still
//!    improving
//!
//! Equal-cost neighbors never trigger a move, so the search cannot cycle
//! on a plateau.
//!
//! # Complexity
//!
//! O(n³) per pass with [`NeighborEvaluation::Full`], O(n²) with
//! [`NeighborEvaluation::Incremental`].

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constructive::random_tour;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::route_cost;
use crate::models::{SearchState, SolveResult, Tour};

use super::config::{HillClimbConfig, NeighborEvaluation};
use super::neighborhood::swap_neighbors;
use super::selection::{best_neighbor, best_swap};

/// Hill climbing solver.
pub struct HillClimbSolver;

impl HillClimbSolver {
    /// Runs hill climbing from `initial`.
    ///
    /// Fails with [`Error::InvalidInput`] before any search step if the
    /// tour length differs from the matrix size. Otherwise always returns a
    /// result; [`SolveResult::state`] tells a local optimum
    /// ([`SearchState::Converged`]) from a spent budget
    /// ([`SearchState::BudgetExhausted`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::local_search::{HillClimbConfig, HillClimbSolver};
    /// use u_tsp::models::{SearchState, Tour};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![vec![0.0, 10.0], vec![10.0, 0.0]]).unwrap();
    /// let result =
    ///     HillClimbSolver::solve(&dm, Tour::identity(2), &HillClimbConfig::default()).unwrap();
    /// assert_eq!(result.cost, 20.0);
    /// assert_eq!(result.state, SearchState::Converged);
    /// ```
    pub fn solve(
        distances: &DistanceMatrix,
        initial: Tour,
        config: &HillClimbConfig,
    ) -> Result<SolveResult> {
        if initial.len() != distances.size() {
            return Err(Error::invalid_input(format!(
                "tour has {} cities but the distance matrix has {}",
                initial.len(),
                distances.size()
            )));
        }

        let initial_cost = route_cost(distances, &initial);
        trace!("initial tour {:?}, cost {initial_cost}", initial.cities());

        let mut current = initial;
        let mut current_cost = initial_cost;
        let mut cost_history = vec![initial_cost];
        let mut state = SearchState::Running;
        let mut iterations = 0;

        while iterations < config.max_iterations {
            iterations += 1;

            let Some((best, best_cost)) =
                Self::best_candidate(distances, &current, current_cost, config.evaluation)?
            else {
                state = SearchState::Converged;
                break;
            };

            if best_cost < current_cost {
                debug!("iteration {iterations}: cost {current_cost} -> {best_cost}");
                current = best;
                current_cost = best_cost;
                cost_history.push(current_cost);
            } else {
                state = SearchState::Converged;
                break;
            }
        }

        if state == SearchState::Running {
            state = SearchState::BudgetExhausted;
        }

        let moves = cost_history.len() - 1;
        info!(
            "hill climbing {state:?} after {iterations} iterations, {moves} moves: cost {initial_cost} -> {current_cost}"
        );

        Ok(SolveResult {
            tour: current,
            cost: current_cost,
            state,
            initial_cost,
            iterations,
            moves,
            cost_history,
        })
    }

    /// Runs hill climbing from a random tour drawn with `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::local_search::{HillClimbConfig, HillClimbSolver};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 400.0, 300.0],
    ///     vec![400.0, 0.0, 300.0],
    ///     vec![300.0, 400.0, 0.0],
    /// ])
    /// .unwrap();
    /// let config = HillClimbConfig::default().with_seed(42);
    /// let result = HillClimbSolver::solve_random(&dm, &config).unwrap();
    /// assert!(result.cost <= result.initial_cost);
    /// assert_eq!(result.tour.len(), 3);
    /// ```
    pub fn solve_random(distances: &DistanceMatrix, config: &HillClimbConfig) -> Result<SolveResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let initial = random_tour(distances.size(), &mut rng)?;
        Self::solve(distances, initial, config)
    }

    /// Cheapest neighbor of `current` and its full cost, or `None` if the
    /// neighborhood is empty.
    fn best_candidate(
        distances: &DistanceMatrix,
        current: &Tour,
        current_cost: f64,
        evaluation: NeighborEvaluation,
    ) -> Result<Option<(Tour, f64)>> {
        match evaluation {
            NeighborEvaluation::Full => {
                let candidates = swap_neighbors(current);
                if candidates.is_empty() {
                    return Ok(None);
                }
                best_neighbor(distances, candidates).map(Some)
            }
            NeighborEvaluation::Incremental => Ok(best_swap(distances, current, current_cost)),
        }
    }
}
