//! Optimize command implementation for the Tollway CLI.

use std::io::{BufReader, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use chrono::NaiveTime;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tollway_core::{
    DEFAULT_BUDGET_USD, FixedClock, OptimizationResult, OptimizeRequest, PricingTable, Region,
    RouteCandidate, RouteOptimizer, TollEstimator, validate_budget,
};
use tollway_optimizer::BudgetOptimizer;
use tollway_pricing::{EstimatorConfig, RoadPatternEstimator};

use crate::{
    ARG_BUDGET, ARG_DEPARTURE_TIME, ARG_DYNAMIC_PRICING, ARG_HAS_TOLL_TAG, ARG_REGION,
    ARG_REQUEST, CliError, ENV_REQUEST,
};

const DEPARTURE_TIME_FORMAT: &str = "%H:%M";

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Price the candidate routes in a JSON request with the \
                 Texas toll table and rank them against a toll budget. \
                 Preferences in the request win over configured ones.",
    about = "Estimate tolls and rank routes against a budget"
)]
#[ortho_config(prefix = "TOLLWAY")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing an optimisation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Toll budget in dollars when the request sets none.
    #[arg(long = ARG_BUDGET, value_name = "usd")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Whether the vehicle carries a toll tag when the request does not say.
    #[arg(long = ARG_HAS_TOLL_TAG, value_name = "bool")]
    #[serde(default)]
    pub(crate) has_toll_tag: Option<bool>,
    /// Apply time-of-day and congestion pricing (default true).
    #[arg(long = ARG_DYNAMIC_PRICING, value_name = "bool")]
    #[serde(default)]
    pub(crate) dynamic_pricing: Option<bool>,
    /// Restrict pricing to one metro area (austin, houston, dfw, san-antonio).
    #[arg(long = ARG_REGION, value_name = "name")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Price as if departing at this local time (HH:MM) instead of now.
    #[arg(long = ARG_DEPARTURE_TIME, value_name = "HH:MM")]
    #[serde(default)]
    pub(crate) departure_time: Option<String>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Configured budget, used when the request has none.
    pub(crate) budget_usd: Option<f64>,
    /// Configured toll-tag flag, used when the request has none.
    pub(crate) has_toll_tag: Option<bool>,
    pub(crate) dynamic_pricing: bool,
    pub(crate) region: Option<Region>,
    pub(crate) departure_time: Option<NaiveTime>,
}

impl OptimizeConfig {
    /// Budget for `request`: the request's own, then the configured one,
    /// then [`DEFAULT_BUDGET_USD`].
    pub(crate) fn budget_for(&self, request: &OptimizeRequest) -> f64 {
        request
            .budget_usd
            .or(self.budget_usd)
            .unwrap_or(DEFAULT_BUDGET_USD)
    }

    pub(crate) fn estimator_config_for(&self, request: &OptimizeRequest) -> EstimatorConfig {
        let has_toll_tag = request.has_toll_tag.or(self.has_toll_tag).unwrap_or(true);
        EstimatorConfig::default()
            .with_toll_tag(has_toll_tag)
            .with_dynamic_pricing(self.dynamic_pricing)
    }

    fn pricing_table(&self) -> Result<PricingTable, CliError> {
        let table = PricingTable::texas()?;
        Ok(match self.region {
            Some(region) => table.for_region(region),
            None => table,
        })
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        if let Some(budget) = args.budget {
            validate_budget(budget).map_err(|source| CliError::InvalidBudget { source })?;
        }
        let region = args.region.map(|value| parse_region(&value)).transpose()?;
        let departure_time = args
            .departure_time
            .map(|value| parse_departure_time(&value))
            .transpose()?;
        Ok(Self {
            request_path,
            budget_usd: args.budget,
            has_toll_tag: args.has_toll_tag,
            dynamic_pricing: args.dynamic_pricing.unwrap_or(true),
            region,
            departure_time,
        })
    }
}

fn parse_region(value: &str) -> Result<Region, CliError> {
    value
        .parse()
        .map_err(|reason| CliError::InvalidRegion {
            value: value.to_owned(),
            reason,
        })
}

fn parse_departure_time(value: &str) -> Result<NaiveTime, CliError> {
    NaiveTime::parse_from_str(value.trim(), DEPARTURE_TIME_FORMAT).map_err(|source| {
        CliError::InvalidDepartureTime {
            value: value.to_owned(),
            source,
        }
    })
}

pub(super) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &mut stdout)
}

pub(super) fn run_optimize_with(
    args: OptimizeArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let result = execute_optimize(&config)?;
    write_result(writer, &result)
}

pub(super) fn execute_optimize(config: &OptimizeConfig) -> Result<OptimizationResult, CliError> {
    let request = load_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let budget = config.budget_for(&request);
    let estimator_config = config.estimator_config_for(&request);
    let table = Arc::new(config.pricing_table()?);

    let mut routes = request.into_candidates();
    price_routes(config, table, estimator_config, &mut routes);
    log::debug!(
        "ranking {} candidates against a ${budget:.2} budget",
        routes.len()
    );
    Ok(BudgetOptimizer::new().optimize(&routes, budget))
}

fn price_routes(
    config: &OptimizeConfig,
    table: Arc<PricingTable>,
    estimator_config: EstimatorConfig,
    routes: &mut [RouteCandidate],
) {
    let estimator = RoadPatternEstimator::new(table, estimator_config);
    match config.departure_time {
        Some(time) => estimator
            .with_clock(FixedClock::new(time))
            .estimate_tolls(routes),
        None => estimator.estimate_tolls(routes),
    }
}

/// Loads a JSON-encoded [`OptimizeRequest`] from disk.
pub(super) fn load_request(path: &Utf8Path) -> Result<OptimizeRequest, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenRequest {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_result(writer: &mut dyn Write, result: &OptimizationResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerialiseResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
