//! Ask command implementation for the metrotrip CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use metrotrip_core::{Intent, QueryRequest, ResultSet, parse_intent};
use metrotrip_scorer::RankRecommender;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalogue::{load_catalogue, warn_unmatched};
use crate::output::write_json;
use crate::{ARG_DATASET, ARG_DIVERSIFY, ARG_MESSAGE, CliError, ENV_ASK_DATASET, ENV_ASK_MESSAGE};

/// CLI arguments for the `ask` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Extract area, category, time of day, transport and place \
                 count from a Korean travel request and answer it with \
                 ranked recommendations.",
    about = "Answer a free-text travel request"
)]
#[ortho_config(prefix = "METROTRIP")]
pub(crate) struct AskArgs {
    /// The travel request, e.g. "서울 야간 전시 3곳만".
    #[arg(value_name = ARG_MESSAGE)]
    #[serde(default)]
    pub(crate) message: Option<String>,
    /// Path to the curated dataset (JSON, JSON Lines, SQLite or Parquet).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Spread results across sub-regions.
    #[arg(long = ARG_DIVERSIFY)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) diversify: bool,
}

impl AskArgs {
    pub(crate) fn into_config(self) -> Result<AskConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AskConfig::try_from(merged)
    }
}

/// Resolved `ask` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AskConfig {
    pub(crate) message: String,
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) diversify: bool,
}

impl TryFrom<AskArgs> for AskConfig {
    type Error = CliError;

    fn try_from(args: AskArgs) -> Result<Self, Self::Error> {
        let message = args.message.ok_or(CliError::MissingArgument {
            field: ARG_MESSAGE,
            env: ENV_ASK_MESSAGE,
        })?;
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_ASK_DATASET,
        })?;
        Ok(Self {
            message,
            dataset,
            diversify: args.diversify,
        })
    }
}

/// The extracted intent alongside the places answering it.
#[derive(Debug, Serialize)]
pub(crate) struct AskResponse {
    pub(crate) intent: Intent,
    pub(crate) results: ResultSet,
}

pub(crate) fn run_ask(args: AskArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let response = execute_ask(&config)?;
    write_json(writer, &response)
}

pub(crate) fn execute_ask(config: &AskConfig) -> Result<AskResponse, CliError> {
    let intent = parse_intent(&config.message);
    let mut request = QueryRequest::try_from(&intent).map_err(CliError::InvalidIntent)?;
    request.diversify = config.diversify;
    debug!("answering {:?} with {request:?}", config.message);

    let catalogue = load_catalogue(&config.dataset)?;
    warn_unmatched(&request.filters, catalogue.facets());
    let results = catalogue.recommend(&RankRecommender::default(), &request);
    Ok(AskResponse { intent, results })
}
