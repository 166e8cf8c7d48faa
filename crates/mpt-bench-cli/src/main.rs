use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

use commands::analyze::{handle_census, handle_report, handle_series, SeriesKind};
use logging::setup_logging;

#[derive(Parser)]
#[command(author, version, about = "Analyze MPT dictionary benchmark results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the proof size comparison series
    #[command(about = "Derive average proof sizes against the log-scaled update count")]
    ProofSizes {
        #[arg(
            short,
            long,
            value_name = "FILE",
            help = "Path to the benchmark results CSV"
        )]
        input: PathBuf,

        #[arg(
            short,
            long,
            value_name = "DIR",
            default_value = "analysis",
            help = "Directory to write derived series CSVs into"
        )]
        output_dir: PathBuf,
    },

    /// Derive the hash recompute fraction series
    #[command(about = "Derive the fraction of node hashes recomputed per batch of updates")]
    HashRecompute {
        #[arg(
            short,
            long,
            value_name = "FILE",
            help = "Path to the benchmark results CSV"
        )]
        input: PathBuf,

        #[arg(
            short,
            long,
            value_name = "DIR",
            default_value = "analysis",
            help = "Directory to write derived series CSVs into"
        )]
        output_dir: PathBuf,
    },

    /// Summarize the trie's node population for one record
    #[command(about = "Print a node population census for one benchmark record")]
    Census {
        #[arg(
            short,
            long,
            value_name = "FILE",
            help = "Path to the benchmark results CSV"
        )]
        input: PathBuf,

        #[arg(
            short,
            long,
            default_value_t = 0,
            help = "Index of the record to summarize"
        )]
        record: usize,

        #[arg(long, help = "Emit the summary as JSON instead of styled text")]
        json: bool,
    },

    /// Generate every derived series in one pass
    #[command(about = "Write all derived series CSVs for the external charting surface")]
    Report {
        #[arg(
            short,
            long,
            value_name = "FILE",
            help = "Path to the benchmark results CSV"
        )]
        input: PathBuf,

        #[arg(
            short,
            long,
            value_name = "DIR",
            default_value = "analysis",
            help = "Directory to write derived series CSVs into"
        )]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Command::ProofSizes { input, output_dir }) => {
            handle_series(SeriesKind::ProofSizes, &input, &output_dir)
        }
        Some(Command::HashRecompute { input, output_dir }) => {
            handle_series(SeriesKind::HashRecompute, &input, &output_dir)
        }
        Some(Command::Census {
            input,
            record,
            json,
        }) => handle_census(&input, record, json),
        Some(Command::Report { input, output_dir }) => handle_report(&input, &output_dir),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
