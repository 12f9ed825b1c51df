//! Refine command implementation for the metrotrip CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use metrotrip_data::{RefineReport, load_dataset, refine, write_dataset};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::{ARG_INPUT, ARG_OUTPUT, CliError, ENV_REFINE_INPUT, ENV_REFINE_OUTPUT};

/// CLI arguments for the `refine` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Normalise text, drop implausible ranks and remove \
                 duplicate attractions from a raw dataset, then write the \
                 curated result as a JSON records file.",
    about = "Clean a raw dataset into the curated form"
)]
#[ortho_config(prefix = "METROTRIP")]
pub(crate) struct RefineArgs {
    /// Path to the raw dataset (JSON, JSON Lines, SQLite or Parquet).
    #[arg(value_name = ARG_INPUT)]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Where to write the curated JSON dataset.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RefineArgs {
    pub(crate) fn into_config(self) -> Result<RefineConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RefineConfig::try_from(merged)
    }
}

/// Resolved `refine` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RefineConfig {
    pub(crate) input: Utf8PathBuf,
    pub(crate) output: Utf8PathBuf,
}

impl TryFrom<RefineArgs> for RefineConfig {
    type Error = CliError;

    fn try_from(args: RefineArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_REFINE_INPUT,
        })?;
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_REFINE_OUTPUT,
        })?;
        Ok(Self { input, output })
    }
}

pub(crate) fn run_refine(args: RefineArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_refine(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_refine(config: &RefineConfig) -> Result<RefineReport, CliError> {
    let raw = load_dataset(&config.input)?;
    let refined = refine(raw)?;
    write_dataset(&config.output, &refined.dataset)?;
    Ok(refined.report)
}
