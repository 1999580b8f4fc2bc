//! # Dimensionality Reduction
//!
//! Algorithms for projecting high-dimensional feature sets into a lower
//! dimension while preserving as much variance as possible, primarily to feed
//! external scatter-plot rendering.
//!
//! ## Currently Available
//! - **PCA** ([`pca`]): Principal Component Analysis for linear dimensionality reduction

pub mod pca;

pub use pca::PcaReducer;
pub use pca::ProjectionResult;
