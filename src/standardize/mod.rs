use ndarray::{Array1, Array2, ArrayView2, Axis};
use rayon::prelude::*;

use crate::{AnalyticsError, Result};

/// Per-column centering and scaling to zero mean and unit sample variance.
///
/// Fitted state is local to the call that created it; there is no shared
/// scaler instance between calls.
#[derive(Debug, Clone)]
pub struct Standardizer {
    mean: Array1<f64>,
    std_dev: Array1<f64>,
}

impl Standardizer {
    /// Computes per-column mean and sample standard deviation (N−1
    /// denominator). Requires at least two rows and rejects non-finite
    /// input; columns are reported by index here since a raw matrix has no
    /// names.
    pub fn fit(x: ArrayView2<f64>) -> Result<Self> {
        let n = x.nrows();
        if n < 2 {
            return Err(AnalyticsError::InsufficientData(format!(
                "standardization requires at least 2 rows, got {n}"
            )));
        }
        for ((row, column), &value) in x.indexed_iter() {
            if !value.is_finite() {
                return Err(AnalyticsError::NonFiniteValue {
                    column: column.to_string(),
                    row,
                });
            }
        }
        let mean = x
            .mean_axis(Axis(0))
            .ok_or(AnalyticsError::EmptyDataset)?;
        let std_dev = x.std_axis(Axis(0), 1.0);
        Ok(Self { mean, std_dev })
    }

    /// Applies (x − μ_j) / σ_j per column. Zero-variance columns transform to
    /// exactly 0.0 rather than dividing by zero.
    pub fn transform(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.mean.len() {
            return Err(AnalyticsError::InvalidArgument(format!(
                "matrix has {} columns, standardizer was fitted on {}",
                x.ncols(),
                self.mean.len()
            )));
        }
        let mut z = x.to_owned();
        z.axis_iter_mut(Axis(1))
            .into_par_iter()
            .enumerate()
            .for_each(|(j, mut column)| {
                let sd = self.std_dev[j];
                if sd == 0.0 {
                    column.fill(0.0);
                } else {
                    let mean = self.mean[j];
                    column.mapv_inplace(|v| (v - mean) / sd);
                }
            });
        Ok(z)
    }

    /// Fit and apply in one call.
    pub fn fit_transform(x: ArrayView2<f64>) -> Result<Array2<f64>> {
        Self::fit(x)?.transform(x)
    }

    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    pub fn std_dev(&self) -> &Array1<f64> {
        &self.std_dev
    }
}
