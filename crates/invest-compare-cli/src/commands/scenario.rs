use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use invest_compare_core::engine::{npv, roi, series};
use invest_compare_core::Scenario;

use crate::input;

/// Flags describing one scenario; also accepted as a JSON `Scenario` via
/// --input or piped stdin.
#[derive(Args)]
pub struct ScenarioArgs {
    /// Total cost at year 0
    #[arg(long)]
    pub initial_cost: Option<Decimal>,

    /// Operating cost per year
    #[arg(long)]
    pub annual_cost: Option<Decimal>,

    /// Horizon length in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Value realized at the end of the horizon
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub residual_value: Decimal,

    /// Discount rate in percent (5 = 5%)
    #[arg(long, allow_hyphen_values = true)]
    pub discount_rate: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn resolve_scenario(args: &ScenarioArgs) -> Result<Scenario, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(Scenario {
        initial_cost: args
            .initial_cost
            .ok_or("--initial-cost is required (or provide --input)")?,
        annual_cost: args
            .annual_cost
            .ok_or("--annual-cost is required (or provide --input)")?,
        years: args.years.ok_or("--years is required (or provide --input)")?,
        residual_value: args.residual_value,
        discount_rate: args
            .discount_rate
            .ok_or("--discount-rate is required (or provide --input)")?,
    })
}

#[derive(Debug, Serialize)]
struct NpvOutput {
    npv: Decimal,
}

#[derive(Debug, Serialize)]
struct RoiOutput {
    roi_pct: Decimal,
}

#[derive(Debug, Serialize)]
struct SeriesOutput {
    cumulative: Vec<Decimal>,
    cashflows: Vec<Decimal>,
}

pub fn run_npv(args: ScenarioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario = resolve_scenario(&args)?;
    let value = npv::npv(&scenario)?;
    Ok(serde_json::to_value(NpvOutput { npv: value })?)
}

pub fn run_roi(args: ScenarioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario = resolve_scenario(&args)?;
    let value = roi::roi(&scenario)?;
    Ok(serde_json::to_value(RoiOutput { roi_pct: value })?)
}

pub fn run_series(args: ScenarioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario = resolve_scenario(&args)?;
    let output = SeriesOutput {
        cumulative: series::cumulative_series(&scenario),
        cashflows: series::cashflow_series(&scenario),
    };
    Ok(serde_json::to_value(output)?)
}
