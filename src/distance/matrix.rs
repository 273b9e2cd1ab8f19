//! Validated symmetric distance matrix.

use crate::error::{AcoError, InputError};

/// Default tolerance for the symmetry check.
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense n×n distance matrix stored in row-major order.
///
/// Construction validates the matrix once; every accessor afterwards can
/// rely on:
///
/// - at least 2 cities,
/// - `get(i, i) == 0`,
/// - `get(i, j) > 0` and finite for `i != j`,
/// - `|get(i, j) - get(j, i)|` within the symmetry tolerance.
///
/// # Examples
///
/// ```
/// use u_aco::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .expect("valid matrix");
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 2), 5.0);
/// assert_eq!(dm.tour_length(&[0, 1, 2]), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows using the default symmetry tolerance.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AcoError> {
        Self::from_rows_with_tolerance(rows, DEFAULT_SYMMETRY_TOLERANCE)
    }

    /// Builds a matrix from explicit rows, accepting `|d(i,j) - d(j,i)| <= tolerance`.
    pub fn from_rows_with_tolerance(rows: Vec<Vec<f64>>, tolerance: f64) -> Result<Self, AcoError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(InputError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                }
                .into());
            }
            data.extend(values);
        }
        Self::validated(data, size, tolerance)
    }

    /// Builds a matrix from a flat row-major buffer of `size * size` values.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, AcoError> {
        if size < 2 {
            return Err(InputError::TooFewCities(size).into());
        }
        if size.checked_mul(size) != Some(data.len()) {
            return Err(InputError::BufferLength {
                size,
                actual: data.len(),
            }
            .into());
        }
        Self::validated(data, size, DEFAULT_SYMMETRY_TOLERANCE)
    }

    /// Computes a Euclidean distance matrix from 2-D coordinates.
    ///
    /// Coincident points produce a zero off-diagonal distance and are rejected.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, AcoError> {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = (dx * dx + dy * dy).sqrt();
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self::validated(data, size, DEFAULT_SYMMETRY_TOLERANCE)
    }

    fn validated(data: Vec<f64>, size: usize, tolerance: f64) -> Result<Self, AcoError> {
        if size < 2 {
            return Err(InputError::TooFewCities(size).into());
        }
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(InputError::parameter(
                "symmetry_tolerance",
                format!("must be non-negative, got {tolerance}"),
            )
            .into());
        }

        for i in 0..size {
            let value = data[i * size + i];
            if value != 0.0 {
                return Err(InputError::NonZeroDiagonal { index: i, value }.into());
            }
        }

        for i in 0..size {
            for j in 0..size {
                let value = data[i * size + j];
                if i != j && (value <= 0.0 || !value.is_finite()) {
                    return Err(InputError::NonPositiveDistance {
                        from: i,
                        to: j,
                        value,
                    }
                    .into());
                }
            }
        }

        for i in 0..size {
            for j in (i + 1)..size {
                let forward = data[i * size + j];
                let backward = data[j * size + i];
                if (forward - backward).abs() > tolerance {
                    return Err(InputError::Asymmetric {
                        from: i,
                        to: j,
                        forward,
                        backward,
                    }
                    .into());
                }
            }
        }

        Ok(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distances from `from` to every city.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the closed tour visiting `cities` in order and returning
    /// to the first one.
    pub fn tour_length(&self, cities: &[usize]) -> f64 {
        match (cities.first(), cities.last()) {
            (Some(&first), Some(&last)) => {
                let open: f64 = cities.windows(2).map(|w| self.get(w[0], w[1])).sum();
                open + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_cities() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 10.0, 15.0, 20.0, 25.0],
            vec![10.0, 0.0, 35.0, 25.0, 30.0],
            vec![15.0, 35.0, 0.0, 30.0, 10.0],
            vec![20.0, 25.0, 30.0, 0.0, 35.0],
            vec![25.0, 30.0, 10.0, 35.0, 0.0],
        ]
    }

    fn reason(err: AcoError) -> InputError {
        match err {
            AcoError::InvalidInput(reason) => reason,
        }
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(five_cities()).expect("valid");
        assert_eq!(dm.size(), 5);
        assert_eq!(dm.get(0, 1), 10.0);
        assert_eq!(dm.get(4, 2), 10.0);
        assert_eq!(dm.row(3), &[20.0, 25.0, 30.0, 0.0, 35.0]);
    }

    #[test]
    fn test_tour_length_includes_closing_edge() {
        let dm = DistanceMatrix::from_rows(five_cities()).expect("valid");
        // 0-1-3-4-2-0 = 10 + 25 + 35 + 10 + 15
        assert_eq!(dm.tour_length(&[0, 1, 3, 4, 2]), 95.0);
        assert_eq!(dm.tour_length(&[]), 0.0);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            reason(err),
            InputError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_flat_length_mismatch_rejected() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(reason(err), InputError::BufferLength { size: 2, actual: 3 });
    }

    #[test]
    fn test_flat_size_overflow_rejected() {
        // size * size does not fit in usize.
        let err = DistanceMatrix::from_data(usize::MAX, vec![0.0]).unwrap_err();
        assert_eq!(
            reason(err),
            InputError::BufferLength {
                size: usize::MAX,
                actual: 1
            }
        );

        // A wrapping multiply would give 0 here.
        let err = DistanceMatrix::from_data((usize::MAX >> 1) + 1, vec![]).unwrap_err();
        assert!(matches!(reason(err), InputError::BufferLength { actual: 0, .. }));

        let err = DistanceMatrix::from_data(1, vec![0.0]).unwrap_err();
        assert_eq!(reason(err), InputError::TooFewCities(1));
    }

    #[test]
    fn test_too_few_cities() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0]]).unwrap_err();
        assert_eq!(reason(err), InputError::TooFewCities(1));
        let err = DistanceMatrix::from_rows(vec![]).unwrap_err();
        assert_eq!(reason(err), InputError::TooFewCities(0));
    }

    #[test]
    fn test_nonzero_diagonal_rejected() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, 0.5]).unwrap_err();
        assert_eq!(
            reason(err),
            InputError::NonZeroDiagonal {
                index: 1,
                value: 0.5
            }
        );
    }

    #[test]
    fn test_non_positive_distance_rejected() {
        let mut rows = five_cities();
        rows[1][2] = 0.0;
        rows[2][1] = 0.0;
        let err = DistanceMatrix::from_rows(rows).unwrap_err();
        assert!(matches!(
            reason(err),
            InputError::NonPositiveDistance { from: 1, to: 2, .. }
        ));

        let err = DistanceMatrix::from_data(2, vec![0.0, -3.0, -3.0, 0.0]).unwrap_err();
        assert!(matches!(reason(err), InputError::NonPositiveDistance { .. }));
    }

    #[test]
    fn test_non_finite_distance_rejected() {
        let err = DistanceMatrix::from_data(2, vec![0.0, f64::NAN, f64::NAN, 0.0]).unwrap_err();
        assert!(matches!(reason(err), InputError::NonPositiveDistance { .. }));
        let err =
            DistanceMatrix::from_data(2, vec![0.0, f64::INFINITY, f64::INFINITY, 0.0]).unwrap_err();
        assert!(matches!(reason(err), InputError::NonPositiveDistance { .. }));
    }

    #[test]
    fn test_asymmetric_rejected() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 10.0, 15.0, 0.0]).unwrap_err();
        assert_eq!(
            reason(err),
            InputError::Asymmetric {
                from: 0,
                to: 1,
                forward: 10.0,
                backward: 15.0
            }
        );
    }

    #[test]
    fn test_symmetry_tolerance_configurable() {
        let rows = vec![vec![0.0, 10.0], vec![10.001, 0.0]];
        assert!(DistanceMatrix::from_rows(rows.clone()).is_err());
        let dm = DistanceMatrix::from_rows_with_tolerance(rows, 0.01).expect("within tolerance");
        assert_eq!(dm.get(1, 0), 10.001);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let rows = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let err = DistanceMatrix::from_rows_with_tolerance(rows, -1.0).unwrap_err();
        assert!(matches!(
            reason(err),
            InputError::InvalidParameter {
                name: "symmetry_tolerance",
                ..
            }
        ));
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]).expect("valid");
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert_eq!(dm.get(2, 0), dm.get(0, 2));
    }

    #[test]
    fn test_coincident_points_rejected() {
        let err = DistanceMatrix::from_points(&[(1.0, 1.0), (1.0, 1.0)]).unwrap_err();
        assert!(matches!(reason(err), InputError::NonPositiveDistance { .. }));
    }
}
