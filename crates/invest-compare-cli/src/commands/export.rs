use clap::Args;
use serde_json::Value;

use invest_compare_core::comparison;
use invest_compare_core::export;

use crate::commands::compare::{resolve_comparison, CompareArgs};

/// Arguments for the export table. Scenario flags are shared with `compare`;
/// combine with `--output csv` to produce the CSV blob.
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub comparison: CompareArgs,
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = resolve_comparison(&args.comparison)?;
    let evaluation = comparison::evaluate(&input)?;
    let table = export::metrics_table(&evaluation.result);
    Ok(serde_json::to_value(table)?)
}
