//! Tour cost evaluation.
//!
//! - [`route_cost`] — cyclic tour length, O(n)
//! - [`swap_delta`] — cost change of a pairwise position swap, O(1)

mod cost;

pub use cost::{route_cost, swap_delta};
