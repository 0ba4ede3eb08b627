//! Best-neighbor selection.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::{route_cost, swap_delta};
use crate::models::Tour;

use super::neighborhood::{swap_pairs, SwapMove};

/// Returns the cheapest tour among `neighbors` together with its cost.
///
/// Ties go to the earliest tour in iteration order. Fails with
/// [`Error::EmptyNeighborhood`] if `neighbors` yields nothing.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Tour;
/// use u_tsp::local_search::{best_neighbor, swap_neighbors};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// let (best, cost) = best_neighbor(&dm, swap_neighbors(&Tour::identity(3))).unwrap();
/// assert_eq!(best.cities(), &[1, 0, 2]);
/// assert_eq!(cost, 6.0);
/// ```
pub fn best_neighbor<I>(distances: &DistanceMatrix, neighbors: I) -> Result<(Tour, f64)>
where
    I: IntoIterator<Item = Tour>,
{
    let mut best: Option<(Tour, f64)> = None;
    for tour in neighbors {
        let cost = route_cost(distances, &tour);
        if best.as_ref().is_none_or(|(_, b)| cost < *b) {
            best = Some((tour, cost));
        }
    }
    best.ok_or(Error::EmptyNeighborhood)
}

/// Relative slack for screening swaps by cost delta. Deltas and full
/// costs are summed in different orders and may disagree by rounding; the
/// slack must exceed that disagreement.
const SCREEN_TOLERANCE: f64 = 1e-9;

/// Finds the cheapest swap neighbor of `tour` without materializing the
/// whole neighborhood.
///
/// Swaps are screened by [`swap_delta`]; every swap whose delta lies within
/// a small tolerance of the minimum is then re-scored with [`route_cost`].
/// The result is the same tour and cost [`best_neighbor`] returns on
/// [`swap_neighbors`](super::swap_neighbors), including the earliest-pair
/// tie-break. `current_cost` is the cost of `tour`.
///
/// Returns `None` for tours of fewer than two cities.
pub fn best_swap(
    distances: &DistanceMatrix,
    tour: &Tour,
    current_cost: f64,
) -> Option<(Tour, f64)> {
    let deltas: Vec<(SwapMove, f64)> = swap_pairs(tour.len())
        .map(|mv| (mv, swap_delta(distances, tour, mv.i, mv.j)))
        .collect();
    let min_delta = deltas.iter().map(|&(_, d)| d).reduce(f64::min)?;
    let slack = SCREEN_TOLERANCE * (current_cost.abs() + min_delta.abs());

    let shortlist = deltas
        .into_iter()
        .filter(|&(_, d)| d <= min_delta + slack)
        .map(|(mv, _)| mv.apply(tour));
    best_neighbor(distances, shortlist).ok()
}
