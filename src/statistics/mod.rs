//! Descriptive statistics consumed by external rendering collaborators:
//! histogram binning for frequency plots and Pearson correlation matrices
//! for heatmaps. Computation only; no drawing happens here.

use ndarray::Array2;

use crate::dataset::Dataset;
use crate::standardize::Standardizer;
use crate::{AnalyticsError, Result};

/// Equal-width histogram of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin boundaries, one more than the number of bins.
    pub bin_edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Bins `column` into `bins` equal-width intervals over [min, max]. The
/// rightmost edge is inclusive. A constant column collapses to a single
/// degenerate bin holding every row.
pub fn histogram(dataset: &Dataset, column: &str, bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(AnalyticsError::InvalidArgument(
            "histogram needs at least one bin".to_string(),
        ));
    }
    let values = dataset.numeric(column)?;
    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(AnalyticsError::NonFiniteValue {
                column: column.to_string(),
                row: i,
            });
        }
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Ok(Histogram {
            bin_edges: vec![min, max],
            counts: vec![values.len()],
        });
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }
    let bin_edges = (0..=bins).map(|i| min + width * i as f64).collect();
    Ok(Histogram { bin_edges, counts })
}

/// K×K Pearson correlation matrix over named numeric columns, computed from
/// the standardized matrix as ZᵗZ/(N−1). Zero-variance columns correlate 0
/// with everything else; the diagonal is exactly 1.
pub fn correlation_matrix(dataset: &Dataset, columns: &[&str]) -> Result<Array2<f64>> {
    let x = dataset.feature_matrix(columns)?;
    let n = x.nrows();
    let z = Standardizer::fit_transform(x.view())?;
    let mut correlation = z.t().dot(&z) / (n as f64 - 1.0);
    correlation.mapv_inplace(|v| v.clamp(-1.0, 1.0));
    for i in 0..columns.len() {
        correlation[[i, i]] = 1.0;
    }
    Ok(correlation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;
    use approx::assert_relative_eq;

    fn dataset(columns: Vec<(&str, Vec<f64>)>) -> Dataset {
        Dataset::new(
            columns
                .into_iter()
                .map(|(name, values)| (name.to_string(), Column::Numeric(values)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_histogram_basic_binning() {
        let data = dataset(vec![("x", vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])]);
        let hist = histogram(&data, "x", 2).unwrap();

        assert_eq!(hist.bin_edges, vec![0.0, 2.5, 5.0]);
        // 0, 1, 2 fall left of 2.5; 3, 4 and the inclusive max fall right.
        assert_eq!(hist.counts, vec![3, 3]);
    }

    #[test]
    fn test_histogram_rightmost_edge_inclusive() {
        let data = dataset(vec![("x", vec![0.0, 10.0])]);
        let hist = histogram(&data, "x", 5).unwrap();
        assert_eq!(hist.counts.iter().sum::<usize>(), 2);
        assert_eq!(hist.counts[4], 1);
    }

    #[test]
    fn test_histogram_constant_column() {
        let data = dataset(vec![("x", vec![3.0, 3.0, 3.0, 3.0])]);
        let hist = histogram(&data, "x", 10).unwrap();
        assert_eq!(hist.bin_edges, vec![3.0, 3.0]);
        assert_eq!(hist.counts, vec![4]);
    }

    #[test]
    fn test_histogram_zero_bins() {
        let data = dataset(vec![("x", vec![1.0, 2.0])]);
        assert!(matches!(
            histogram(&data, "x", 0),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_correlation_of_correlated_and_anticorrelated_columns() {
        let data = dataset(vec![
            ("a", vec![1.0, 2.0, 3.0, 4.0]),
            ("b", vec![2.0, 4.0, 6.0, 8.0]),
            ("c", vec![8.0, 6.0, 4.0, 2.0]),
        ]);
        let corr = correlation_matrix(&data, &["a", "b", "c"]).unwrap();

        assert_eq!(corr.shape(), &[3, 3]);
        assert_relative_eq!(corr[[0, 1]], 1.0, epsilon = 1e-9);
        assert_relative_eq!(corr[[0, 2]], -1.0, epsilon = 1e-9);
        for i in 0..3 {
            assert_eq!(corr[[i, i]], 1.0);
        }
    }

    #[test]
    fn test_correlation_with_zero_variance_column() {
        let data = dataset(vec![
            ("a", vec![1.0, 2.0, 3.0]),
            ("flat", vec![5.0, 5.0, 5.0]),
        ]);
        let corr = correlation_matrix(&data, &["a", "flat"]).unwrap();
        assert_eq!(corr[[0, 1]], 0.0);
        assert_eq!(corr[[1, 0]], 0.0);
        assert_eq!(corr[[1, 1]], 1.0);
    }
}
