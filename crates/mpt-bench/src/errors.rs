use polars::error::PolarsError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the benchmark analyzer
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("required column `{0}` is missing from the dataset")]
    MissingColumn(String),

    #[error("column `{column}` row {row}: expected a non-negative numeric value")]
    InvalidValue { column: String, row: usize },

    #[error("row {row}: `updates` must be positive to take log10")]
    NonPositiveUpdates { row: usize },

    #[error("row {row}: denominator `{denominator}` is zero, cannot compute {metric}")]
    ZeroDenominator {
        metric: &'static str,
        denominator: &'static str,
        row: usize,
    },

    #[error("record index {index} is out of bounds for a dataset of {len} records")]
    RecordOutOfBounds { index: usize, len: usize },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("DataFrame error: {0}")]
    DataFrameError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    /// True for the division-by-zero class of failures: a normalization
    /// denominator was zero for the record being processed.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::ZeroDenominator { .. } | AnalysisError::NonPositiveUpdates { .. }
        )
    }
}

/// Implement From<polars::error::PolarsError> for AnalysisError
impl From<PolarsError> for AnalysisError {
    fn from(err: PolarsError) -> Self {
        AnalysisError::DataFrameError(err.to_string())
    }
}
