pub mod anomaly;
pub mod dataset;
pub mod dimred;
mod error;
pub mod standardize;
pub mod statistics;

pub use error::AnalyticsError;

pub type Result<T> = std::result::Result<T, AnalyticsError>;
