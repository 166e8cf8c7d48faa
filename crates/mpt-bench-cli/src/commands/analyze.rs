use anyhow::{Context, Result};
use console::style;
use mpt_bench::reporting::{
    HashRecomputeReportGenerator, ProofSizeReportGenerator, ReportGenerator,
};
use mpt_bench::{BenchmarkDataset, MetricsEngine, NodeSummary};
use std::path::Path;

/// Which derived series to generate.
#[derive(Debug, Clone, Copy)]
pub enum SeriesKind {
    ProofSizes,
    HashRecompute,
}

impl SeriesKind {
    fn generator(self) -> Box<dyn ReportGenerator> {
        match self {
            SeriesKind::ProofSizes => Box::new(ProofSizeReportGenerator),
            SeriesKind::HashRecompute => Box::new(HashRecomputeReportGenerator),
        }
    }
}

pub fn handle_series(kind: SeriesKind, input: &Path, output_dir: &Path) -> Result<()> {
    let dataset = load_dataset(input)?;
    let path = kind
        .generator()
        .generate(&dataset, output_dir)
        .context("failed to generate derived series")?;

    println!("{} {}", style("Wrote").green().bold(), path.display());
    Ok(())
}

pub fn handle_report(input: &Path, output_dir: &Path) -> Result<()> {
    let dataset = load_dataset(input)?;
    let generators: [Box<dyn ReportGenerator>; 2] = [
        Box::new(ProofSizeReportGenerator),
        Box::new(HashRecomputeReportGenerator),
    ];

    tracing::info!(
        "generating {} derived series into {}",
        generators.len(),
        output_dir.display()
    );

    for generator in generators {
        let path = generator
            .generate(&dataset, output_dir)
            .with_context(|| format!("failed to generate {}", generator.file_name()))?;
        println!("{} {}", style("Wrote").green().bold(), path.display());
    }
    Ok(())
}

pub fn handle_census(input: &Path, record: usize, json: bool) -> Result<()> {
    let dataset = load_dataset(input)?;
    let summary = MetricsEngine::new(&dataset)
        .node_population_summary(record)
        .with_context(|| format!("failed to summarize record {record}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn load_dataset(input: &Path) -> Result<BenchmarkDataset> {
    BenchmarkDataset::from_csv(input)
        .with_context(|| format!("failed to load benchmark results from {}", input.display()))
}

fn print_summary(summary: &NodeSummary) {
    println!("{} {}", style("TOTAL NODES:").bold(), summary.total);
    println!(
        "{} {} ({:.2} %)",
        style("INTERIOR NODES:").bold(),
        summary.interior.count,
        summary.interior.percent
    );
    println!(
        "{} {} ({:.2} %)",
        style("EMPTY LEAF NODES:").bold(),
        summary.empty_leaf.count,
        summary.empty_leaf.percent
    );
    println!(
        "{} {} ({:.2} %)",
        style("NONEMPTY LEAF NODES:").bold(),
        summary.non_empty_leaf.count,
        summary.non_empty_leaf.percent
    );
}
