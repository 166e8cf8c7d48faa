pub mod report_generators;

pub use report_generators::{
    HashRecomputeReportGenerator, ProofSizeReportGenerator, ReportGenerator,
};
