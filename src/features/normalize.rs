//! Per-dimension min-max rescaling of a feature batch to [0, 1].
//!
//! Recomputed from the current batch on every run; the transform is never
//! persisted. A dimension whose observed min equals its max rescales to 0.0
//! for every record (explicit branch, no division by zero and no NaN).

use super::{FeatureVector, FEATURE_DIM};
use crate::error::{AnalysisError, Result};
use ndarray::Array2;

/// Rescale each dimension to [0, 1] using the batch's observed min/max and
/// return the batch as a rows-by-features matrix.
///
/// Errors: [`AnalysisError::EmptyInput`] for an empty batch (dimensionality
/// undefined), [`AnalysisError::DimensionMismatch`] if any vector's length
/// differs from [`FEATURE_DIM`]. The mismatch case should be unreachable with
/// a single extractor but is checked at this boundary.
pub fn normalize(batch: &[FeatureVector]) -> Result<Array2<f64>> {
    if batch.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    for fv in batch {
        if fv.values.len() != FEATURE_DIM {
            return Err(AnalysisError::DimensionMismatch {
                expected: FEATURE_DIM,
                actual: fv.values.len(),
            });
        }
    }

    let mut matrix = Array2::zeros((batch.len(), FEATURE_DIM));
    for (i, fv) in batch.iter().enumerate() {
        for (j, v) in fv.values.iter().enumerate() {
            matrix[[i, j]] = *v;
        }
    }

    for j in 0..FEATURE_DIM {
        let column = matrix.column(j);
        let min = column.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        let mut column = matrix.column_mut(j);
        if range == 0.0 {
            column.fill(0.0);
        } else {
            column.mapv_inplace(|v| (v - min) / range);
        }
    }

    Ok(matrix)
}
