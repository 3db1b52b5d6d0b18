mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::export::ExportArgs;
use commands::scenario::ScenarioArgs;
use commands::sensitivity::SensitivityArgs;

/// New-build vs renovation investment comparison
#[derive(Parser)]
#[command(
    name = "invc",
    version,
    about = "New-build vs renovation investment comparison",
    long_about = "A CLI for comparing two housing investment scenarios with \
                  decimal precision. Computes NPV, nominal cost accumulation, \
                  yearly cash flows, ROI, the better option, and a \
                  discount-rate sensitivity sweep."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Net present value of a single scenario
    Npv(ScenarioArgs),
    /// Terminal-vs-initial ROI of a single scenario
    Roi(ScenarioArgs),
    /// Cumulative nominal and yearly cash-flow series of a single scenario
    Series(ScenarioArgs),
    /// Evaluate both scenarios and decide the better option
    Compare(CompareArgs),
    /// Sweep both NPVs across discount-rate perturbations
    Sensitivity(SensitivityArgs),
    /// Metrics table for the export adapter (pairs with --output csv)
    Export(ExportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Npv(args) => commands::scenario::run_npv(args),
        Commands::Roi(args) => commands::scenario::run_roi(args),
        Commands::Series(args) => commands::scenario::run_series(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Sensitivity(args) => commands::sensitivity::run_sensitivity(args),
        Commands::Export(args) => commands::export::run_export(args),
        Commands::Version => {
            println!("invc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
