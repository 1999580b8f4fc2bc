//! # Principal Component Analysis
//!
//! Standardizes a feature matrix, eigen-decomposes its covariance, and
//! projects the data onto the leading principal directions, reporting the
//! fraction of total variance each retained component explains.

use std::cmp::Ordering;

use log::debug;
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

use crate::dataset::Dataset;
use crate::standardize::Standardizer;
use crate::{AnalyticsError, Result};

/// Output of one reduction: the projected rows and the per-component
/// explained-variance ratios.
///
/// Ratios are non-increasing, each in [0, 1], and their denominator is the
/// variance of ALL source features, so the sum over the retained components
/// reaches 1 only when every component is kept.
#[derive(Debug, Clone)]
pub struct ProjectionResult {
    /// N×C matrix, one projected row per dataset row in original order.
    pub projection: Array2<f64>,
    pub explained_variance_ratio: Array1<f64>,
}

/// PCA-based dimensionality reducer over named numeric columns of a dataset.
///
/// Eigenvector sign and the relative order of components with equal
/// eigenvalues are inherited from the underlying eigen routine; for
/// degenerate inputs the projection is reproducible only up to those.
#[derive(Debug, Clone, Copy)]
pub struct PcaReducer {
    n_components: usize,
}

impl Default for PcaReducer {
    fn default() -> Self {
        Self { n_components: 2 }
    }
}

impl PcaReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of components to retain. Must lie in `1..=K` for K
    /// feature columns, validated when `reduce` runs.
    pub fn n_components(mut self, n_components: usize) -> Self {
        self.n_components = n_components;
        self
    }

    /// Runs the full pipeline: extract, standardize, decompose, project.
    pub fn reduce(&self, dataset: &Dataset, feature_columns: &[&str]) -> Result<ProjectionResult> {
        let x = dataset.feature_matrix(feature_columns)?;
        let (n, k) = x.dim();
        if self.n_components == 0 || self.n_components > k {
            return Err(AnalyticsError::InvalidArgument(format!(
                "n_components must be in 1..={}, got {}",
                k, self.n_components
            )));
        }

        let z = Standardizer::fit_transform(x.view())?;
        let covariance = z.t().dot(&z) / (n as f64 - 1.0);

        let symmetric = DMatrix::from_fn(k, k, |i, j| covariance[[i, j]]);
        let eigen = symmetric.symmetric_eigen();

        // Stable descending sort keeps the routine's order for tied
        // eigenvalues; tiny negative values are eigen-solver noise on a PSD
        // matrix and count as zero variance.
        let mut order: Vec<usize> = (0..k).collect();
        order.sort_by(|&a, &b| {
            eigen.eigenvalues[b]
                .partial_cmp(&eigen.eigenvalues[a])
                .unwrap_or(Ordering::Equal)
        });
        let eigenvalues: Vec<f64> = order
            .iter()
            .map(|&i| eigen.eigenvalues[i].max(0.0))
            .collect();
        let total_variance: f64 = eigenvalues.iter().sum();

        let c = self.n_components;
        let explained_variance_ratio = Array1::from_iter(eigenvalues.iter().take(c).map(|&l| {
            if total_variance > 0.0 {
                l / total_variance
            } else {
                0.0
            }
        }));

        let mut basis = Array2::zeros((k, c));
        for (out, &src) in order.iter().take(c).enumerate() {
            let eigenvector = eigen.eigenvectors.column(src);
            for i in 0..k {
                basis[[i, out]] = eigenvector[i];
            }
        }
        let projection = z.dot(&basis);

        debug!(
            "pca: {n} rows x {k} features reduced to {c} components, explained variance {:.4}",
            explained_variance_ratio.sum()
        );

        Ok(ProjectionResult {
            projection,
            explained_variance_ratio,
        })
    }
}
