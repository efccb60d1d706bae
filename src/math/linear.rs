//! Linear evaluation over a fixed design row.
//!
//! The model is `y = β0 + Σ βi * xi` with seven features. We store the
//! coefficients and the design row as stack-allocated `nalgebra` vectors of
//! length 8 (intercept first, paired with a constant `1.0` in the row), so an
//! evaluation is a single dot product with no allocation.

use nalgebra::SVector;

/// Number of weighted features (excluding the intercept).
pub const FEATURE_COUNT: usize = 7;

/// Length of a design row: intercept column + features.
pub const ROW_LEN: usize = FEATURE_COUNT + 1;

/// A design row or coefficient vector.
pub type Row = SVector<f64, ROW_LEN>;

/// Evaluate `weights · row`.
pub fn linear_combination(weights: &Row, row: &Row) -> f64 {
    weights.dot(row)
}

/// Check that every entry of `values` is finite, returning the first bad index.
pub fn first_non_finite(values: &[f64]) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product_with_intercept_column() {
        let weights = Row::from_column_slice(&[-1.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.5]);
        let row = Row::from_column_slice(&[1.0, 3.0, 4.0, 9.0, 9.0, 9.0, 9.0, 1.0]);
        let y = linear_combination(&weights, &row);
        assert!((y - 10.5).abs() < 1e-12);
    }

    #[test]
    fn first_non_finite_finds_nan_and_inf() {
        assert_eq!(first_non_finite(&[1.0, 2.0]), None);
        assert_eq!(first_non_finite(&[1.0, f64::NAN, f64::INFINITY]), Some(1));
        assert_eq!(first_non_finite(&[f64::NEG_INFINITY]), Some(0));
    }
}
