//! Constructive heuristics for building starting tours.
//!
//! - [`random_tour`] — Uniform random permutation by sampling without replacement, O(n²)

mod random_tour;

pub use random_tour::random_tour;
