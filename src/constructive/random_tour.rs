//! Uniform random starting tour.

use rand::Rng;

use crate::error::{Error, Result};
use crate::models::Tour;

/// Builds a uniformly random tour over `n` cities.
///
/// Samples without replacement: each step picks one of the cities not yet
/// placed, uniformly at random, and appends it. Pass a seeded generator
/// for reproducible tours.
///
/// Fails with [`Error::InvalidInput`] when `n == 0`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::constructive::random_tour;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let tour = random_tour(5, &mut rng).unwrap();
/// assert_eq!(tour.len(), 5);
///
/// let mut again = StdRng::seed_from_u64(7);
/// assert_eq!(random_tour(5, &mut again).unwrap(), tour);
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Result<Tour> {
    if n == 0 {
        return Err(Error::invalid_input("a tour needs at least one city"));
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut cities = Vec::with_capacity(n);
    while !remaining.is_empty() {
        let pick = rng.random_range(0..remaining.len());
        cities.push(remaining.remove(pick));
    }

    Tour::new(cities)
}
