//! Recommend command implementation for the metrotrip CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use metrotrip_core::{QueryContext, QueryFilters, ResultSet, TimeOfDay, Transport};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalogue::{load_catalogue, warn_unmatched};
use crate::output::write_json;
use crate::{
    ARG_AREA, ARG_CATEGORY_L, ARG_CATEGORY_M, ARG_CATEGORY_S, ARG_DATASET, ARG_DIVERSIFY,
    ARG_SUB_REGION, ARG_TIME_OF_DAY, ARG_TOP, ARG_TRANSPORT, CliError, ENV_RECOMMEND_DATASET,
};

/// Result count used when `--top` is not given.
pub(crate) const DEFAULT_TOP: i64 = 10;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Filter a curated dataset on area, sub-region and category, \
                 score the matches by rank with optional time-of-day and \
                 transport weighting, and print the top results as JSON.",
    about = "Rank the places matching a set of filters"
)]
#[ortho_config(prefix = "METROTRIP")]
pub(crate) struct RecommendArgs {
    /// Path to the curated dataset (JSON, JSON Lines, SQLite or Parquet).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Required area, e.g. 서울특별시.
    #[arg(long = ARG_AREA, value_name = "area")]
    #[serde(default)]
    pub(crate) area: Option<String>,
    /// Required sub-region, e.g. 종로구.
    #[arg(long = ARG_SUB_REGION, value_name = "name")]
    #[serde(default)]
    pub(crate) sub_region: Option<String>,
    /// Required top-level category.
    #[arg(long = ARG_CATEGORY_L, value_name = "category")]
    #[serde(default)]
    pub(crate) category_l: Option<String>,
    /// Required mid-level category.
    #[arg(long = ARG_CATEGORY_M, value_name = "category")]
    #[serde(default)]
    pub(crate) category_m: Option<String>,
    /// Required leaf category.
    #[arg(long = ARG_CATEGORY_S, value_name = "category")]
    #[serde(default)]
    pub(crate) category_s: Option<String>,
    /// Number of places to return (default 10).
    #[arg(long = ARG_TOP, value_name = "count", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) top: Option<i64>,
    /// Planned time of day: morning, midday, evening or night.
    #[arg(long = ARG_TIME_OF_DAY, value_name = "time")]
    #[serde(default)]
    pub(crate) time_of_day: Option<String>,
    /// Planned transport: public-transit or private-car.
    #[arg(long = ARG_TRANSPORT, value_name = "mode")]
    #[serde(default)]
    pub(crate) transport: Option<String>,
    /// Spread results across sub-regions.
    #[arg(long = ARG_DIVERSIFY)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) diversify: bool,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) filters: QueryFilters,
    pub(crate) top_n: i64,
    pub(crate) context: QueryContext,
    pub(crate) diversify: bool,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_RECOMMEND_DATASET,
        })?;
        let filters = QueryFilters {
            area: args.area,
            sub_region: args.sub_region,
            category_l: args.category_l,
            category_m: args.category_m,
            category_s: args.category_s,
        };
        let context = parse_context(args.time_of_day.as_deref(), args.transport.as_deref())?;
        Ok(Self {
            dataset,
            filters,
            top_n: args.top.unwrap_or(DEFAULT_TOP),
            context,
            diversify: args.diversify,
        })
    }
}

/// Parse the optional context flags shared with other commands.
pub(crate) fn parse_context(
    time_of_day: Option<&str>,
    transport: Option<&str>,
) -> Result<QueryContext, CliError> {
    Ok(QueryContext {
        time_of_day: time_of_day.map(str::parse::<TimeOfDay>).transpose()?,
        transport: transport.map(str::parse::<Transport>).transpose()?,
    })
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let results = execute_recommend(&config)?;
    write_json(writer, &results)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<ResultSet, CliError> {
    let catalogue = load_catalogue(&config.dataset)?;
    warn_unmatched(&config.filters, catalogue.facets());
    let results = metrotrip_scorer::recommend(
        catalogue.dataset(),
        &config.filters,
        config.top_n,
        config.context.time_of_day,
        config.context.transport,
        config.diversify,
    )?;
    Ok(results)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
