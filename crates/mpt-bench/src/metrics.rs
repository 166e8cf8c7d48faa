use crate::dataset::BenchmarkDataset;
use crate::errors::{AnalysisError, AnalysisResult};
use serde::Serialize;

/// A node category's raw count and its share of the total node population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeCount {
    pub count: u64,
    pub percent: f64,
}

/// Point-in-time census of the trie's node population for one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub total: u64,
    pub interior: NodeCount,
    pub empty_leaf: NodeCount,
    pub non_empty_leaf: NodeCount,
}

/// Pure, read-only derivations over a loaded benchmark dataset.
///
/// Every operation is a single-pass transformation that preserves record
/// order: the i-th output value always corresponds to the i-th record.
/// Zero denominators fail fast with a named error rather than leaking
/// NaN or Infinity into downstream charts.
pub struct MetricsEngine<'a> {
    dataset: &'a BenchmarkDataset,
}

impl<'a> MetricsEngine<'a> {
    pub fn new(dataset: &'a BenchmarkDataset) -> Self {
        Self { dataset }
    }

    /// `log10(updates)` per record, the x-axis for proof size comparisons.
    pub fn log_update_axis(&self) -> AnalysisResult<Vec<f64>> {
        self.dataset
            .records()
            .iter()
            .enumerate()
            .map(|(row, record)| {
                if record.updates == 0 {
                    return Err(AnalysisError::NonPositiveUpdates { row });
                }
                Ok((record.updates as f64).log10())
            })
            .collect()
    }

    /// `updates / n` per record, the fraction of dictionary entries updated.
    pub fn update_fraction_axis(&self) -> AnalysisResult<Vec<f64>> {
        self.dataset
            .records()
            .iter()
            .enumerate()
            .map(|(row, record)| {
                if record.n == 0 {
                    return Err(AnalysisError::ZeroDenominator {
                        metric: "update fraction",
                        denominator: "n",
                        row,
                    });
                }
                Ok(record.updates as f64 / record.n as f64)
            })
            .collect()
    }

    /// The paired `(full_path_avg, update_path_avg)` series, unmodified and
    /// in record order. Pairing with one of the axis series is what makes
    /// the comparison meaningful.
    pub fn proof_size_series(&self) -> (Vec<f64>, Vec<f64>) {
        let records = self.dataset.records();
        let full = records.iter().map(|r| r.full_path_avg).collect();
        let update = records.iter().map(|r| r.update_path_avg).collect();
        (full, update)
    }

    /// Fraction of the trie's nodes whose hash had to be recomputed to
    /// commit each run's batch of updates. Meant to be read against the
    /// identity line `y = x` on the update-fraction axis: a perfectly lazy
    /// scheme recomputes exactly the nodes on the update paths.
    pub fn hash_recompute_fraction(&self) -> AnalysisResult<Vec<f64>> {
        self.dataset
            .records()
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let total = record.total_nodes();
                if total == 0 {
                    return Err(AnalysisError::ZeroDenominator {
                        metric: "hash recompute fraction",
                        denominator: "total node count",
                        row,
                    });
                }
                Ok(record.n_hashes_to_commit as f64 / total as f64)
            })
            .collect()
    }

    /// Census of a single record's node population: total count plus raw
    /// count and percentage for each of the three node categories.
    pub fn node_population_summary(&self, record_index: usize) -> AnalysisResult<NodeSummary> {
        let record = self.dataset.record(record_index)?;
        let total = record.total_nodes();
        if total == 0 {
            return Err(AnalysisError::ZeroDenominator {
                metric: "node population summary",
                denominator: "total node count",
                row: record_index,
            });
        }

        let percent_of_total = |count: u64| (count as f64 / total as f64) * 100.0;
        Ok(NodeSummary {
            total,
            interior: NodeCount {
                count: record.n_interior_node,
                percent: percent_of_total(record.n_interior_node),
            },
            empty_leaf: NodeCount {
                count: record.n_empty_leaf,
                percent: percent_of_total(record.n_empty_leaf),
            },
            non_empty_leaf: NodeCount {
                count: record.n_non_empty_leaf,
                percent: percent_of_total(record.n_non_empty_leaf),
            },
        })
    }
}
