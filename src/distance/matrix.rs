//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense n×n distance matrix stored in row-major order.
///
/// Always square with at least one city, and every entry is finite and
/// non-negative. Symmetry and a zero diagonal are not required.
///
/// Serializes as a nested list of rows.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 400.0, 300.0],
///     vec![400.0, 0.0, 300.0],
///     vec![300.0, 400.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), 400.0);
/// assert!(!dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit list of rows.
    ///
    /// Fails with [`Error::InvalidInput`] if there are no rows, a row's
    /// length differs from the number of rows, or an entry is negative or
    /// not finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::invalid_input("distance matrix has no rows"));
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_input(format!(
                    "distance matrix is not square: row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Creates a distance matrix from row-major data of length `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_input("distance matrix must have at least one city"));
        }
        if data.len() != size * size {
            return Err(Error::invalid_input(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(Error::invalid_input(format!(
                "distance from {} to {} is {}; distances must be finite and non-negative",
                pos / size,
                pos % size,
                data[pos]
            )));
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.size && to < self.size,
            "city index out of range: ({from}, {to}) in a matrix of {} cities",
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every city is at distance zero from itself.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0.0)
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(dm: DistanceMatrix) -> Self {
        dm.data.chunks(dm.size).map(<[f64]>::to_vec).collect()
    }
}
