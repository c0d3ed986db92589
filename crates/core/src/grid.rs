//! Grid dimensions and normalized coordinate fields.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, GenerationResult};
use crate::raster::Raster;

/// Validated grid dimensions for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    rows: usize,
    cols: usize,
}

impl GridSpec {
    /// Create a grid specification.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidDimensions`] if either dimension
    /// is zero.
    pub fn new(rows: usize, cols: usize) -> GenerationResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GenerationError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total sample count (rows x cols).
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.rows * self.cols
    }

    /// Build the two coordinate fields of the grid.
    ///
    /// Returns `(x, y)` where `x[i][j]` runs linearly from 0 to 1 across
    /// the columns (depending only on `j`) and `y[i][j]` runs linearly
    /// from 0 to 1 down the rows (depending only on `i`), both with
    /// inclusive endpoints.
    #[must_use]
    pub fn coordinate_fields(&self) -> (Raster, Raster) {
        let x_axis = linspace_unit(self.cols);
        let y_axis = linspace_unit(self.rows);
        let x = Raster::from_fn(self.rows, self.cols, |_, col| x_axis[col]);
        let y = Raster::from_fn(self.rows, self.cols, |row, _| y_axis[row]);
        (x, y)
    }
}

/// `n` evenly spaced samples over [0, 1], endpoints included.
///
/// A single-sample axis collapses to 0.0.
fn linspace_unit(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    // Dividing per sample keeps both endpoints exact.
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            GridSpec::new(0, 40),
            Err(GenerationError::InvalidDimensions { rows: 0, cols: 40 })
        );
        assert_eq!(
            GridSpec::new(40, 0),
            Err(GenerationError::InvalidDimensions { rows: 40, cols: 0 })
        );
    }

    #[test]
    fn linspace_includes_both_endpoints() {
        let axis = linspace_unit(5);
        assert_relative_eq!(axis[0], 0.0);
        assert_relative_eq!(axis[2], 0.5);
        assert_relative_eq!(axis[4], 1.0);
    }

    #[test]
    fn single_sample_axis_collapses_to_zero() {
        assert_eq!(linspace_unit(1), vec![0.0]);
    }

    #[test]
    fn x_varies_by_column_y_by_row() {
        let spec = GridSpec::new(3, 4).unwrap();
        let (x, y) = spec.coordinate_fields();

        for row in 0..3 {
            for col in 0..4 {
                assert_relative_eq!(x.get(row, col), col as f64 / 3.0);
                assert_relative_eq!(y.get(row, col), row as f64 / 2.0);
            }
        }
    }

    #[test]
    fn sample_count_is_product_of_dimensions() {
        let spec = GridSpec::new(15, 15).unwrap();
        assert_eq!(spec.n_samples(), 225);
    }
}
