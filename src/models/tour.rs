//! Tour type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered visiting sequence over cities `0..n`, implicitly closed into
/// a cycle.
///
/// A `Tour` is always a permutation: each city appears exactly once.
/// Swapping two positions yields a new tour; the original is untouched.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]).unwrap();
/// let swapped = tour.with_swap(0, 2);
/// assert_eq!(swapped.cities(), &[1, 0, 2]);
/// assert_eq!(tour.cities(), &[2, 0, 1]);
///
/// assert!(Tour::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Creates a tour, checking that `cities` is a permutation of `0..len`.
    pub fn new(cities: Vec<usize>) -> Result<Self> {
        let n = cities.len();
        let mut seen = vec![false; n];
        for &city in &cities {
            if city >= n {
                return Err(Error::invalid_input(format!(
                    "city {city} out of range for a tour of {n} cities"
                )));
            }
            if seen[city] {
                return Err(Error::invalid_input(format!(
                    "city {city} appears more than once in tour"
                )));
            }
            seen[city] = true;
        }
        Ok(Self(cities))
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Cities in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a tour over zero cities.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy of this tour with the cities at positions `i` and `j`
    /// exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn with_swap(&self, i: usize, j: usize) -> Self {
        let mut cities = self.0.clone();
        cities.swap(i, j);
        Self(cities)
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = Error;

    fn try_from(cities: Vec<usize>) -> Result<Self> {
        Self::new(cities)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}
