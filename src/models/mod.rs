//! Domain model types for tour search.
//!
//! Provides tours as validated city permutations, the search state machine,
//! and the result handed back to callers.

mod result;
mod tour;

pub use result::{SearchState, SolveResult};
pub use tour::Tour;
