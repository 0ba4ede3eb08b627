//! Cyclic tour cost and swap deltas.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Computes the cyclic length of a tour:
/// `d(t[n-1], t[0]) + d(t[0], t[1]) + ... + d(t[n-2], t[n-1])`.
///
/// A single city costs its self-loop `d(c, c)`; two cities cost the edge
/// there and back.
///
/// # Panics
///
/// Panics if the tour does not visit exactly the cities of the matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::route_cost;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(route_cost(&dm, &Tour::identity(3)), 6.0);
/// ```
pub fn route_cost(distances: &DistanceMatrix, tour: &Tour) -> f64 {
    let cities = tour.cities();
    let n = cities.len();
    assert_eq!(
        n,
        distances.size(),
        "tour has {n} cities but the distance matrix has {}",
        distances.size()
    );
    (0..n)
        .map(|i| distances.get(cities[(i + n - 1) % n], cities[i]))
        .sum()
}

/// Computes the change in cyclic cost from exchanging the cities at
/// positions `i` and `j`.
///
/// Only the edges leaving positions `i - 1`, `i`, `j - 1` and `j` can
/// change; adjacent and wrap-around pairs share edges, which are counted
/// once. Valid for asymmetric matrices.
///
/// ```text
/// delta ≈ route_cost(swapped) - route_cost(tour)
/// ```
///
/// The two sides are summed in different orders, so they can differ by
/// rounding.
///
/// # Panics
///
/// Panics if the tour does not visit exactly the cities of the matrix.
pub fn swap_delta(distances: &DistanceMatrix, tour: &Tour, i: usize, j: usize) -> f64 {
    let cities = tour.cities();
    let n = cities.len();
    assert_eq!(n, distances.size(), "tour and distance matrix sizes differ");
    if i == j || n < 2 {
        return 0.0;
    }

    let swapped_at = |p: usize| {
        if p == i {
            cities[j]
        } else if p == j {
            cities[i]
        } else {
            cities[p]
        }
    };

    // Each edge is keyed by the position it leaves from.
    let mut starts = [(i + n - 1) % n, i, (j + n - 1) % n, j];
    starts.sort_unstable();

    let mut delta = 0.0;
    let mut prev = None;
    for p in starts {
        if prev == Some(p) {
            continue;
        }
        prev = Some(p);
        let q = (p + 1) % n;
        delta += distances.get(swapped_at(p), swapped_at(q)) - distances.get(cities[p], cities[q]);
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .expect("valid")
    }

    /// Symmetric integral matrix, zero diagonal.
    fn symmetric(n: usize, seed: &[u8]) -> DistanceMatrix {
        let mut data = vec![0.0; n * n];
        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                let d = f64::from(seed[k % seed.len()]) + 1.0;
                data[i * n + j] = d;
                data[j * n + i] = d;
                k += 1;
            }
        }
        DistanceMatrix::from_data(n, data).expect("valid")
    }

    fn tour(cities: &[usize]) -> Tour {
        Tour::new(cities.to_vec()).expect("permutation")
    }

    /// Random permutation of `0..n` for `n < 9`.
    fn shuffled(n: usize, perm: Vec<usize>) -> Tour {
        tour(&perm.into_iter().filter(|&c| c < n).collect::<Vec<_>>())
    }

    #[test]
    fn test_route_cost_triangle() {
        let dm = triangle();
        assert_eq!(route_cost(&dm, &tour(&[0, 1, 2])), 6.0);
        assert_eq!(route_cost(&dm, &tour(&[1, 0, 2])), 6.0);
    }

    #[test]
    fn test_route_cost_single_city() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        assert_eq!(route_cost(&dm, &tour(&[0])), 0.0);
    }

    #[test]
    fn test_route_cost_two_cities() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 10.0], vec![10.0, 0.0]]).expect("valid");
        assert_eq!(route_cost(&dm, &tour(&[0, 1])), 20.0);
        assert_eq!(route_cost(&dm, &tour(&[1, 0])), 20.0);
    }

    #[test]
    fn test_route_cost_asymmetric_direction() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 10.0],
            vec![10.0, 0.0, 1.0],
            vec![1.0, 10.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(route_cost(&dm, &tour(&[0, 1, 2])), 3.0);
        assert_eq!(route_cost(&dm, &tour(&[0, 2, 1])), 30.0);
    }

    #[test]
    #[should_panic(expected = "tour has 2 cities but the distance matrix has 3")]
    fn test_route_cost_short_tour_panics() {
        route_cost(&triangle(), &tour(&[0, 1]));
    }

    #[test]
    #[should_panic(expected = "tour has 4 cities but the distance matrix has 3")]
    fn test_route_cost_long_tour_panics() {
        route_cost(&triangle(), &tour(&[0, 3, 1, 2]));
    }

    #[test]
    #[should_panic(expected = "sizes differ")]
    fn test_swap_delta_size_mismatch_panics() {
        swap_delta(&triangle(), &tour(&[1, 0]), 0, 1);
    }

    #[test]
    fn test_swap_delta_adjacent_and_wraparound() {
        let dm = symmetric(5, &[3, 9, 1, 7, 4, 2, 8, 6, 5, 0]);
        let base_tour = Tour::identity(5);
        let base = route_cost(&dm, &base_tour);
        for (i, j) in [(0, 1), (3, 4), (0, 4), (1, 3)] {
            let swapped = base_tour.with_swap(i, j);
            let expected = route_cost(&dm, &swapped) - base;
            assert_eq!(swap_delta(&dm, &base_tour, i, j), expected, "swap ({i}, {j})");
        }
    }

    #[test]
    fn test_swap_delta_two_cities_asymmetric() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![7.0, 0.0]]).expect("valid");
        assert_eq!(swap_delta(&dm, &tour(&[0, 1]), 0, 1), 0.0);
    }

    proptest! {
        #[test]
        fn prop_rotation_invariant(
            n in 1usize..9,
            seed in prop::collection::vec(0u8..50, 1..40),
            perm in Just((0..8usize).collect::<Vec<_>>()).prop_shuffle(),
            shift in 0usize..9,
        ) {
            let dm = symmetric(n, &seed);
            let t = shuffled(n, perm);
            let mut rotated = t.cities().to_vec();
            rotated.rotate_left(shift % n);
            prop_assert_eq!(route_cost(&dm, &t), route_cost(&dm, &tour(&rotated)));
        }

        #[test]
        fn prop_reversal_invariant_when_symmetric(
            n in 1usize..9,
            seed in prop::collection::vec(0u8..50, 1..40),
            perm in Just((0..8usize).collect::<Vec<_>>()).prop_shuffle(),
        ) {
            let dm = symmetric(n, &seed);
            let t = shuffled(n, perm);
            let reversed: Vec<usize> = t.cities().iter().rev().copied().collect();
            prop_assert_eq!(route_cost(&dm, &t), route_cost(&dm, &tour(&reversed)));
        }

        #[test]
        fn prop_swap_delta_matches_full_cost(
            n in 2usize..9,
            data in prop::collection::vec(0u8..100, 64),
            perm in Just((0..8usize).collect::<Vec<_>>()).prop_shuffle(),
            i in 0usize..8,
            j in 0usize..8,
        ) {
            // Asymmetric integral matrix; sums are exact in f64.
            let values: Vec<f64> = data[..n * n].iter().map(|&d| f64::from(d)).collect();
            let dm = DistanceMatrix::from_data(n, values).expect("valid");
            let (i, j) = (i % n, j % n);
            let t = shuffled(n, perm);
            let expected = route_cost(&dm, &t.with_swap(i, j)) - route_cost(&dm, &t);
            prop_assert_eq!(swap_delta(&dm, &t, i, j), expected);
        }
    }
}
