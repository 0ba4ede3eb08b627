//! # u-tsp
//!
//! Travelling salesman local search: steepest-ascent hill climbing over
//! pairwise-swap neighborhoods on a dense distance matrix.
//!
//! ## Modules
//!
//! - [`distance`] — Validated distance matrix
//! - [`models`] — Tours, search state, and solve results
//! - [`evaluation`] — Cyclic tour cost and swap deltas
//! - [`constructive`] — Random starting tours
//! - [`local_search`] — Swap neighborhood, best-neighbor selection, hill climbing
//! - [`error`] — Error type shared by all fallible operations
//!
//! ## Example
//!
//! ```
//! use u_tsp::distance::DistanceMatrix;
//! use u_tsp::local_search::{HillClimbConfig, HillClimbSolver};
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![1.0, 0.0, 6.0, 4.0],
//!     vec![15.0, 7.0, 0.0, 8.0],
//!     vec![6.0, 3.0, 12.0, 0.0],
//! ])
//! .unwrap();
//!
//! let result = HillClimbSolver::solve_random(&dm, &HillClimbConfig::default().with_seed(1)).unwrap();
//! assert!(result.state.is_terminal());
//! assert!(result.cost <= result.initial_cost);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;

pub use error::{Error, Result};
