use crate::errors::{AnalysisError, AnalysisResult};
use polars::prelude::*;
use std::path::Path;

/// Columns the external benchmark harness writes into its results CSV.
/// Column order in the file is irrelevant and extra columns (the harness
/// also emits `total_full_path` / `total_update_path`) are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "n",
    "updates",
    "update_path_avg",
    "full_path_avg",
    "nInteriorNode",
    "nEmptyLeaf",
    "nNonEmptyLeaf",
    "nHashesToCommit",
];

/// One benchmark run as measured by the external MPT benchmark harness.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Total number of entries in the dictionary at measurement time.
    pub n: u64,
    /// Number of update operations applied in this run.
    pub updates: u64,
    /// Average serialized size, in bytes, of an updates-only proof.
    pub update_path_avg: f64,
    /// Average serialized size, in bytes, of a full authentication path proof.
    pub full_path_avg: f64,
    pub n_interior_node: u64,
    pub n_empty_leaf: u64,
    pub n_non_empty_leaf: u64,
    /// Node hashes that had to be recomputed to commit the batch of updates.
    pub n_hashes_to_commit: u64,
}

impl BenchmarkRecord {
    /// Total node count for this run, the denominator for node-fraction metrics.
    pub fn total_nodes(&self) -> u64 {
        self.n_interior_node + self.n_empty_leaf + self.n_non_empty_leaf
    }
}

/// An immutable, ordered collection of benchmark runs. Loaded once and
/// shared read-only by every analysis.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkDataset {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkDataset {
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    /// Load a dataset from a benchmark results CSV file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> AnalysisResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AnalysisError::FileNotFound(path.to_path_buf()));
        }

        let df = CsvReader::from_path(path)?.has_header(true).finish()?;
        let dataset = Self::from_dataframe(&df)?;

        tracing::info!(
            "loaded {} benchmark records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Build a dataset from an already-loaded DataFrame.
    pub fn from_dataframe(df: &DataFrame) -> AnalysisResult<Self> {
        let n = count_column(df, "n")?;
        let updates = count_column(df, "updates")?;
        let update_path_avg = numeric_column(df, "update_path_avg")?;
        let full_path_avg = numeric_column(df, "full_path_avg")?;
        let n_interior_node = count_column(df, "nInteriorNode")?;
        let n_empty_leaf = count_column(df, "nEmptyLeaf")?;
        let n_non_empty_leaf = count_column(df, "nNonEmptyLeaf")?;
        let n_hashes_to_commit = count_column(df, "nHashesToCommit")?;

        let records = (0..df.height())
            .map(|i| BenchmarkRecord {
                n: n[i],
                updates: updates[i],
                update_path_avg: update_path_avg[i],
                full_path_avg: full_path_avg[i],
                n_interior_node: n_interior_node[i],
                n_empty_leaf: n_empty_leaf[i],
                n_non_empty_leaf: n_non_empty_leaf[i],
                n_hashes_to_commit: n_hashes_to_commit[i],
            })
            .collect();

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Fetch one record by index, for point-in-time summaries.
    pub fn record(&self, index: usize) -> AnalysisResult<&BenchmarkRecord> {
        self.records
            .get(index)
            .ok_or(AnalysisError::RecordOutOfBounds {
                index,
                len: self.records.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Extract a named column as f64 values, erroring on nulls.
fn numeric_column(df: &DataFrame, name: &str) -> AnalysisResult<Vec<f64>> {
    let series = df
        .column(name)
        .map_err(|_| AnalysisError::MissingColumn(name.to_string()))?;
    let casted = series.cast(&DataType::Float64)?;
    casted
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| match value {
            Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(AnalysisError::InvalidValue {
                column: name.to_string(),
                row,
            }),
        })
        .collect()
}

/// Extract a named column as non-negative integer counts.
fn count_column(df: &DataFrame, name: &str) -> AnalysisResult<Vec<u64>> {
    let series = df
        .column(name)
        .map_err(|_| AnalysisError::MissingColumn(name.to_string()))?;
    let casted = series.cast(&DataType::Int64)?;
    casted
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| match value {
            Some(v) if v >= 0 => Ok(v as u64),
            _ => Err(AnalysisError::InvalidValue {
                column: name.to_string(),
                row,
            }),
        })
        .collect()
}
