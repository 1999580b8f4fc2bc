use ndarray::Array2;

use crate::{AnalyticsError, Result};

/// A single named column of a [`Dataset`]. Every value in a column shares one
/// semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Timestamp(Vec<i64>),
    Categorical(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Timestamp(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric view of the column, if it is numeric.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Column::Numeric(v) => Some(v),
            _ => None,
        }
    }
}

/// An immutable in-memory table: uniquely named columns of equal length.
///
/// Constructed once by the loading collaborator; the analytics core only ever
/// reads it, so sharing a `Dataset` across concurrent calls needs no locking.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
    n_rows: usize,
}

impl Dataset {
    /// Builds a dataset, validating that column names are unique and all
    /// columns have the same length.
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self> {
        let n_rows = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        for (i, (name, column)) in columns.iter().enumerate() {
            if columns[..i].iter().any(|(other, _)| other == name) {
                return Err(AnalyticsError::InvalidArgument(format!(
                    "duplicate column name '{name}'"
                )));
            }
            if column.len() != n_rows {
                return Err(AnalyticsError::InvalidArgument(format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    column.len(),
                    n_rows
                )));
            }
        }
        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|(other, _)| other == name)
            .map(|(_, column)| column)
            .ok_or_else(|| AnalyticsError::ColumnNotFound(name.to_string()))
    }

    /// Values of a numeric column. Fails on zero-row datasets so every
    /// downstream statistic sees at least one value.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        if self.is_empty() {
            return Err(AnalyticsError::EmptyDataset);
        }
        self.column(name)?.as_numeric().ok_or_else(|| {
            AnalyticsError::InvalidArgument(format!("column '{name}' is not numeric"))
        })
    }

    /// Extracts an N×K feature matrix from K named numeric columns, row order
    /// preserved. Rejects empty or duplicated name lists, missing or
    /// non-numeric columns, and non-finite values.
    pub fn feature_matrix(&self, names: &[&str]) -> Result<Array2<f64>> {
        if names.is_empty() {
            return Err(AnalyticsError::InvalidArgument(
                "feature column list is empty".to_string(),
            ));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(AnalyticsError::InvalidArgument(format!(
                    "duplicate feature column '{name}'"
                )));
            }
        }
        if self.is_empty() {
            return Err(AnalyticsError::EmptyDataset);
        }

        let mut matrix = Array2::zeros((self.n_rows, names.len()));
        for (j, name) in names.iter().enumerate() {
            let values = self.numeric(name)?;
            for (i, &value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(AnalyticsError::NonFiniteValue {
                        column: name.to_string(),
                        row: i,
                    });
                }
                matrix[[i, j]] = value;
            }
        }
        Ok(matrix)
    }
}
