//! Facets command implementation for the metrotrip CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::warn;
use metrotrip_core::{FacetColumn, Facets};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalogue::load_catalogue;
use crate::output::write_json;
use crate::{ARG_AREA, ARG_DATASET, CliError, ENV_FACETS_DATASET};

/// CLI arguments for the `facets` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the sorted distinct areas, sub-regions and categories \
                 of a dataset. With --area the sub-region list only covers \
                 that area.",
    about = "List the distinct filter values of a dataset"
)]
#[ortho_config(prefix = "METROTRIP")]
pub(crate) struct FacetsArgs {
    /// Path to the curated dataset (JSON, JSON Lines, SQLite or Parquet).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Restrict the sub-region list to one area.
    #[arg(long = ARG_AREA, value_name = "area")]
    #[serde(default)]
    pub(crate) area: Option<String>,
}

impl FacetsArgs {
    pub(crate) fn into_config(self) -> Result<FacetsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FacetsConfig::try_from(merged)
    }
}

/// Resolved `facets` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FacetsConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) area: Option<String>,
}

impl TryFrom<FacetsArgs> for FacetsConfig {
    type Error = CliError;

    fn try_from(args: FacetsArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_FACETS_DATASET,
        })?;
        let area = args.area.filter(|value| !value.trim().is_empty());
        Ok(Self { dataset, area })
    }
}

pub(crate) fn run_facets(args: FacetsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let facets = execute_facets(&config)?;
    write_json(writer, &facets)
}

pub(crate) fn execute_facets(config: &FacetsConfig) -> Result<Facets, CliError> {
    let catalogue = load_catalogue(&config.dataset)?;
    let Some(area) = config.area.as_deref() else {
        return Ok(catalogue.facets().clone());
    };
    if !catalogue.facets().contains(FacetColumn::Area, area) {
        warn!("no record has area '{area}'");
    }
    Ok(Facets {
        sub_regions: catalogue.dataset().sub_regions_within(area),
        ..catalogue.facets().clone()
    })
}
