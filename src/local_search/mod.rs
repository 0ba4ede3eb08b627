//! Local search over the pairwise-swap neighborhood.
//!
//! - [`swap_neighbors`] — Expand every single-swap neighbor of a tour
//! - [`best_neighbor`] — Cheapest of a set of tours, earliest on ties
//! - [`best_swap`] — Same selection, screened by cost delta before full scoring
//! - [`HillClimbSolver`] — Steepest-ascent hill climbing to a local optimum

mod config;
mod hill_climb;
mod neighborhood;
mod selection;

pub use config::{HillClimbConfig, NeighborEvaluation};
pub use hill_climb::HillClimbSolver;
pub use neighborhood::{swap_neighbors, swap_pairs, SwapMove};
pub use selection::{best_neighbor, best_swap};
