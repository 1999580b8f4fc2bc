use thiserror::Error;

/// Failure classes for analytics operations. Callers are expected to branch
/// on the variant; the crate never recovers or logs an error internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("column '{0}' not found in dataset")]
    ColumnNotFound(String),

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("column '{column}' contains a non-finite value at row {row}")]
    NonFiniteValue { column: String, row: usize },
}
