//! Command-line interface for the metrotrip recommender.
//!
//! Every subcommand reads its options from CLI flags, configuration files and
//! `METROTRIP_CMDS_<SUBCOMMAND>_<FIELD>` environment variables, then prints a
//! single JSON document on stdout. Diagnostics go to stderr.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod ask;
mod catalogue;
mod error;
mod facets;
mod logging;
mod output;
mod recommend;
mod refine;

pub use error::CliError;
pub use logging::init_logging;

use ask::AskArgs;
use facets::FacetsArgs;
use recommend::RecommendArgs;
use refine::RefineArgs;

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_AREA: &str = "area";
pub(crate) const ARG_SUB_REGION: &str = "sub-region";
pub(crate) const ARG_CATEGORY_L: &str = "category-l";
pub(crate) const ARG_CATEGORY_M: &str = "category-m";
pub(crate) const ARG_CATEGORY_S: &str = "category-s";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_TIME_OF_DAY: &str = "time-of-day";
pub(crate) const ARG_TRANSPORT: &str = "transport";
pub(crate) const ARG_DIVERSIFY: &str = "diversify";
pub(crate) const ARG_MESSAGE: &str = "message";
pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_OUTPUT: &str = "output";

pub(crate) const ENV_RECOMMEND_DATASET: &str = "METROTRIP_CMDS_RECOMMEND_DATASET";
pub(crate) const ENV_FACETS_DATASET: &str = "METROTRIP_CMDS_FACETS_DATASET";
pub(crate) const ENV_ASK_DATASET: &str = "METROTRIP_CMDS_ASK_DATASET";
pub(crate) const ENV_ASK_MESSAGE: &str = "METROTRIP_CMDS_ASK_MESSAGE";
pub(crate) const ENV_REFINE_INPUT: &str = "METROTRIP_CMDS_REFINE_INPUT";
pub(crate) const ENV_REFINE_OUTPUT: &str = "METROTRIP_CMDS_REFINE_OUTPUT";

/// Run the metrotrip CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging or the
/// selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => recommend::run_recommend(args, writer),
        Command::Facets(args) => facets::run_facets(args, writer),
        Command::Ask(args) => ask::run_ask(args, writer),
        Command::Refine(args) => refine::run_refine(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "metrotrip",
    about = "Recommend points of interest around the Seoul metropolitan area",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the places matching a set of filters.
    Recommend(RecommendArgs),
    /// List the distinct filter values of a dataset.
    Facets(FacetsArgs),
    /// Answer a free-text travel request.
    Ask(AskArgs),
    /// Clean a raw dataset into the curated form.
    Refine(RefineArgs),
}

#[cfg(test)]
mod tests;
