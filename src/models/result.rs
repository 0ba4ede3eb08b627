//! Search state and solve result types.

use serde::{Deserialize, Serialize};

use super::Tour;

/// State of a hill-climbing search.
///
/// A search starts `Running` and ends in one of the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchState {
    /// Still improving.
    Running,
    /// No strictly better neighbor exists; the tour is a local optimum.
    Converged,
    /// The iteration budget ran out while the search was still improving.
    BudgetExhausted,
}

impl SearchState {
    /// Returns `true` for `Converged` and `BudgetExhausted`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

/// Outcome of a single solve.
///
/// `cost` is always the cost of `tour`; both are fixed once the result is
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Best tour found.
    pub tour: Tour,
    /// Cyclic length of `tour`.
    pub cost: f64,
    /// Terminal state the search stopped in.
    pub state: SearchState,
    /// Cost of the starting tour.
    pub initial_cost: f64,
    /// Search passes executed (each expands one neighborhood).
    pub iterations: usize,
    /// Improving moves accepted.
    pub moves: usize,
    /// Cost after each accepted move, starting with `initial_cost`.
    pub cost_history: Vec<f64>,
}

impl SolveResult {
    /// Returns `true` if the search stopped at a local optimum.
    pub fn converged(&self) -> bool {
        self.state == SearchState::Converged
    }

    /// Total cost reduction relative to the starting tour.
    pub fn improvement(&self) -> f64 {
        self.initial_cost - self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!SearchState::Running.is_terminal());
        assert!(SearchState::Converged.is_terminal());
        assert!(SearchState::BudgetExhausted.is_terminal());
    }

    #[test]
    fn test_result_accessors() {
        let result = SolveResult {
            tour: Tour::identity(3),
            cost: 6.0,
            state: SearchState::BudgetExhausted,
            initial_cost: 9.0,
            iterations: 2,
            moves: 2,
            cost_history: vec![9.0, 7.0, 6.0],
        };
        assert!(!result.converged());
        assert!((result.improvement() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_result_serializes_for_storage() {
        let result = SolveResult {
            tour: Tour::identity(2),
            cost: 20.0,
            state: SearchState::Converged,
            initial_cost: 20.0,
            iterations: 1,
            moves: 0,
            cost_history: vec![20.0],
        };
        let json = serde_json::to_string(&result).expect("serialize");
        assert!(json.contains("\"tour\":[0,1]"));
        assert!(json.contains("\"state\":\"Converged\""));
        let back: SolveResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, result);
    }
}
