use log::debug;

use crate::dataset::Dataset;
use crate::{AnalyticsError, Result};

/// One flagged row, keyed by its original position in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Anomaly {
    pub row: usize,
    pub value: f64,
    /// Absolute z-score of the value within its column.
    pub score: f64,
}

/// Outcome of one detection pass over a single column.
///
/// Flagged rows are carried as original row index plus the target column's
/// value, not as full row copies; callers recover the complete row from the
/// dataset via [`Anomaly::row`]. Order and indices match the dataset.
#[derive(Debug, Clone)]
pub struct AnomalyReport {
    pub column: String,
    pub mean: f64,
    pub std_dev: f64,
    pub anomalies: Vec<Anomaly>,
}

impl AnomalyReport {
    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty()
    }
}

/// Z-score anomaly detector over one numeric column.
///
/// A row is flagged when |x − μ| / σ strictly exceeds the threshold, with σ
/// the sample standard deviation (N−1 denominator).
#[derive(Debug, Clone, Copy)]
pub struct AnomalyDetector {
    threshold: f64,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self { threshold: 2.0 }
    }
}

impl AnomalyDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deviation threshold. Validated when `detect` runs.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Scores every row of `column` and returns the rows whose score exceeds
    /// the threshold, in original row order with original indices.
    pub fn detect(&self, dataset: &Dataset, column: &str) -> Result<AnomalyReport> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(AnalyticsError::InvalidArgument(format!(
                "threshold must be positive and finite, got {}",
                self.threshold
            )));
        }

        let values = dataset.numeric(column)?;
        let n = values.len();
        if n < 2 {
            return Err(AnalyticsError::InsufficientData(format!(
                "anomaly detection requires at least 2 rows, got {n}"
            )));
        }
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(AnalyticsError::NonFiniteValue {
                    column: column.to_string(),
                    row: i,
                });
            }
        }

        let mean = values.iter().sum::<f64>() / n as f64;
        let variance =
            values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let std_dev = variance.sqrt();

        // Constant column: every score is 0 by definition, nothing to flag.
        let anomalies = if std_dev == 0.0 {
            Vec::new()
        } else {
            values
                .iter()
                .enumerate()
                .filter_map(|(row, &value)| {
                    let score = (value - mean).abs() / std_dev;
                    (score > self.threshold).then_some(Anomaly { row, value, score })
                })
                .collect()
        };

        debug!(
            "anomaly detection on '{}': {} of {} rows above threshold {}",
            column,
            anomalies.len(),
            n,
            self.threshold
        );

        Ok(AnomalyReport {
            column: column.to_string(),
            mean,
            std_dev,
            anomalies,
        })
    }
}
