//! Pairwise-swap neighborhood.
//!
//! The neighbors of a tour are all tours obtained by exchanging the cities
//! at exactly one pair of positions `(i, j)` with `i < j`. Pairs are
//! enumerated lexicographically, which fixes the tie-break order used by
//! the selectors.

use serde::{Deserialize, Serialize};

use crate::models::Tour;

/// Exchange of the cities at positions `i` and `j` (`i < j`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapMove {
    pub i: usize,
    pub j: usize,
}

impl SwapMove {
    /// Applies this move to `tour`, returning a new tour.
    pub fn apply(&self, tour: &Tour) -> Tour {
        tour.with_swap(self.i, self.j)
    }
}

/// Enumerates every position pair `(i, j)`, `i < j < n`, in lexicographic
/// order. Yields `n·(n-1)/2` moves.
pub fn swap_pairs(n: usize) -> impl Iterator<Item = SwapMove> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| SwapMove { i, j }))
}

/// Expands the full swap neighborhood of `tour`.
///
/// Each neighbor is an independent copy; `tour` is left unchanged. Tours
/// of zero or one city have no neighbors.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
/// use u_tsp::local_search::swap_neighbors;
///
/// let neighbors = swap_neighbors(&Tour::identity(3));
/// let cities: Vec<&[usize]> = neighbors.iter().map(|t| t.cities()).collect();
/// assert_eq!(cities, vec![&[1, 0, 2][..], &[2, 1, 0][..], &[0, 2, 1][..]]);
/// ```
pub fn swap_neighbors(tour: &Tour) -> Vec<Tour> {
    swap_pairs(tour.len()).map(|mv| mv.apply(tour)).collect()
}
