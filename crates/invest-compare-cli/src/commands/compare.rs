use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use invest_compare_core::comparison::{self, ComparisonInput, ScenarioCosts};
use invest_compare_core::types::Currency;

use crate::input;

/// Arguments for the two-scenario evaluation. The renovation option takes a
/// purchase + renovation split, summed into its initial cost before it
/// reaches the engine.
#[derive(Args)]
pub struct CompareArgs {
    /// Shared horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Shared discount rate in percent (5 = 5%)
    #[arg(long, allow_hyphen_values = true)]
    pub discount_rate: Option<Decimal>,

    /// Total construction cost of the new build
    #[arg(long)]
    pub build_cost: Option<Decimal>,

    /// Annual operating cost of the new build
    #[arg(long)]
    pub build_annual: Option<Decimal>,

    /// Residual value of the new build
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub build_residual: Decimal,

    /// Purchase price of the existing house
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Renovation cost on top of the purchase price
    #[arg(long)]
    pub renovation_cost: Option<Decimal>,

    /// Annual operating cost after renovation
    #[arg(long)]
    pub reno_annual: Option<Decimal>,

    /// Residual value after renovation
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub reno_residual: Decimal,

    /// Path to JSON file with a full comparison input (overrides flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn resolve_comparison(
    args: &CompareArgs,
) -> Result<ComparisonInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let purchase = args
        .purchase_price
        .ok_or("--purchase-price is required (or provide --input)")?;
    let renovation = args
        .renovation_cost
        .ok_or("--renovation-cost is required (or provide --input)")?;

    Ok(ComparisonInput {
        years: args.years.ok_or("--years is required (or provide --input)")?,
        discount_rate: args
            .discount_rate
            .ok_or("--discount-rate is required (or provide --input)")?,
        scenario_a: ScenarioCosts {
            initial_cost: args
                .build_cost
                .ok_or("--build-cost is required (or provide --input)")?,
            annual_cost: args
                .build_annual
                .ok_or("--build-annual is required (or provide --input)")?,
            residual_value: args.build_residual,
        },
        scenario_b: ScenarioCosts {
            initial_cost: purchase + renovation,
            annual_cost: args
                .reno_annual
                .ok_or("--reno-annual is required (or provide --input)")?,
            residual_value: args.reno_residual,
        },
        currency: Currency::EUR,
    })
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = resolve_comparison(&args)?;
    let output = comparison::evaluate(&input)?;
    Ok(serde_json::to_value(output)?)
}
