use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use invest_compare_core::sensitivity::{self, SensitivityInput};

use crate::commands::compare::{resolve_comparison, CompareArgs};

/// Arguments for the discount-rate sensitivity sweep. Scenario flags are
/// shared with `compare`; the swept base rate is the shared discount rate.
#[derive(Args)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub comparison: CompareArgs,

    /// Comma-separated rate deltas in percent (e.g. "-20,-10,0,10,20")
    #[arg(long, allow_hyphen_values = true)]
    pub deltas: Option<String>,
}

fn parse_deltas(spec: &str) -> Result<Vec<Decimal>, Box<dyn std::error::Error>> {
    spec.split(',')
        .map(|part| {
            let trimmed = part.trim();
            trimmed
                .parse::<Decimal>()
                .map_err(|e| format!("Invalid delta '{trimmed}': {e}").into())
        })
        .collect()
}

pub fn run_sensitivity(args: SensitivityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let comparison = resolve_comparison(&args.comparison)?;
    let deltas = args.deltas.as_deref().map(parse_deltas).transpose()?;

    let base_rate = comparison.discount_rate;
    let years = comparison.years;
    let input = SensitivityInput {
        base_rate,
        scenario_a: comparison.scenario_a.to_scenario(years, base_rate),
        scenario_b: comparison.scenario_b.to_scenario(years, base_rate),
        deltas,
    };

    let output = sensitivity::sensitivity_sweep(&input)?;
    Ok(serde_json::to_value(output)?)
}
