use crate::dataset::BenchmarkDataset;
use crate::errors::AnalysisResult;
use crate::metrics::MetricsEngine;
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for derived-series report generators. Each generator writes one
/// CSV file into the output directory and returns its path; rendering the
/// chart from that file is the external charting surface's job.
pub trait ReportGenerator {
    /// Name of the CSV file this generator writes.
    fn file_name(&self) -> &'static str;

    fn generate(&self, dataset: &BenchmarkDataset, output_dir: &Path) -> AnalysisResult<PathBuf>;
}

/// Writes the proof size comparison: average full-path and updates-only
/// proof sizes against the log-scaled update count.
pub struct ProofSizeReportGenerator;

impl ReportGenerator for ProofSizeReportGenerator {
    fn file_name(&self) -> &'static str {
        "proof_sizes.csv"
    }

    fn generate(&self, dataset: &BenchmarkDataset, output_dir: &Path) -> AnalysisResult<PathBuf> {
        let engine = MetricsEngine::new(dataset);
        let log_updates = engine.log_update_axis()?;
        let (full, update) = engine.proof_size_series();

        let mut df = DataFrame::new(vec![
            Series::new("log10_updates", log_updates),
            Series::new("full_path_avg", full),
            Series::new("update_path_avg", update),
        ])?;

        write_series_csv(&mut df, output_dir, self.file_name())
    }
}

/// Writes the hash recompute fraction against the update fraction, with
/// the identity line `y = x` alongside for comparison.
pub struct HashRecomputeReportGenerator;

impl ReportGenerator for HashRecomputeReportGenerator {
    fn file_name(&self) -> &'static str {
        "hash_recompute.csv"
    }

    fn generate(&self, dataset: &BenchmarkDataset, output_dir: &Path) -> AnalysisResult<PathBuf> {
        let engine = MetricsEngine::new(dataset);
        let update_fraction = engine.update_fraction_axis()?;
        let recompute_fraction = engine.hash_recompute_fraction()?;
        let identity = update_fraction.clone();

        let mut df = DataFrame::new(vec![
            Series::new("update_fraction", update_fraction),
            Series::new("hash_recompute_fraction", recompute_fraction),
            Series::new("identity", identity),
        ])?;

        write_series_csv(&mut df, output_dir, self.file_name())
    }
}

/// Write a DataFrame to CSV atomically via a temporary file.
fn write_series_csv(
    df: &mut DataFrame,
    output_dir: &Path,
    file_name: &str,
) -> AnalysisResult<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let file_path = output_dir.join(file_name);
    let temp_path = file_path.with_extension("csv.tmp");
    let file = fs::File::create(&temp_path)?;

    CsvWriter::new(&file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)?;

    fs::rename(&temp_path, &file_path)?;

    tracing::info!("wrote {} rows to {}", df.height(), file_path.display());
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::BenchmarkRecord;

    fn sample_dataset() -> BenchmarkDataset {
        BenchmarkDataset::new(vec![
            BenchmarkRecord {
                n: 1_000_000,
                updates: 1000,
                update_path_avg: 320.5,
                full_path_avg: 4800.0,
                n_interior_node: 1_900_000,
                n_empty_leaf: 100_000,
                n_non_empty_leaf: 1_000_000,
                n_hashes_to_commit: 21_000,
            },
            BenchmarkRecord {
                n: 1_000_000,
                updates: 5000,
                update_path_avg: 410.0,
                full_path_avg: 4750.0,
                n_interior_node: 1_900_000,
                n_empty_leaf: 100_000,
                n_non_empty_leaf: 1_000_000,
                n_hashes_to_commit: 96_000,
            },
        ])
    }

    fn temp_output_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mpt-bench-report-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_proof_size_report() {
        let output_dir = temp_output_dir("proof");
        let path = ProofSizeReportGenerator
            .generate(&sample_dataset(), &output_dir)
            .unwrap();

        let df = CsvReader::from_path(&path)
            .unwrap()
            .has_header(true)
            .finish()
            .unwrap();
        fs::remove_dir_all(&output_dir).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(
            df.get_column_names(),
            vec!["log10_updates", "full_path_avg", "update_path_avg"]
        );
        let logs = df.column("log10_updates").unwrap().f64().unwrap();
        assert!((logs.get(0).unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_hash_recompute_report() {
        let output_dir = temp_output_dir("hash");
        let path = HashRecomputeReportGenerator
            .generate(&sample_dataset(), &output_dir)
            .unwrap();

        let df = CsvReader::from_path(&path)
            .unwrap()
            .has_header(true)
            .finish()
            .unwrap();
        fs::remove_dir_all(&output_dir).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(
            df.get_column_names(),
            vec!["update_fraction", "hash_recompute_fraction", "identity"]
        );

        // The identity column mirrors the x-axis, point for point.
        let x = df.column("update_fraction").unwrap().f64().unwrap();
        let identity = df.column("identity").unwrap().f64().unwrap();
        for i in 0..df.height() {
            assert_eq!(x.get(i), identity.get(i));
        }
    }

    #[test]
    fn test_report_fails_on_zero_update_record() {
        let dataset = BenchmarkDataset::new(vec![BenchmarkRecord {
            n: 1_000_000,
            updates: 0,
            update_path_avg: 0.0,
            full_path_avg: 4800.0,
            n_interior_node: 1_900_000,
            n_empty_leaf: 100_000,
            n_non_empty_leaf: 1_000_000,
            n_hashes_to_commit: 0,
        }]);

        let output_dir = temp_output_dir("zero");
        let result = ProofSizeReportGenerator.generate(&dataset, &output_dir);
        let _ = fs::remove_dir_all(&output_dir);
        assert!(result.unwrap_err().is_domain_error());
    }
}
