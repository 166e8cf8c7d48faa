pub mod dataset;
pub mod errors;
pub mod metrics;
pub mod reporting;

// Re-export main components for easier use
pub use dataset::{BenchmarkDataset, BenchmarkRecord};
pub use errors::{AnalysisError, AnalysisResult};
pub use metrics::{MetricsEngine, NodeCount, NodeSummary};
