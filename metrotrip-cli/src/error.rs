//! Error types emitted by the metrotrip CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use metrotrip_core::{ParseContextError, QueryError};
use metrotrip_data::{DatasetError, RefineError, WriteDatasetError};
use metrotrip_scorer::RecommendError;
use thiserror::Error;

/// Errors emitted by the metrotrip CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A time-of-day or transport option was not recognised.
    #[error(transparent)]
    InvalidContext(#[from] ParseContextError),
    /// Loading the dataset failed.
    #[error(transparent)]
    LoadDataset(#[from] Box<DatasetError>),
    /// The recommendation request was rejected.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// The intent extracted from a message could not become a query.
    #[error("cannot answer the message: {0}")]
    InvalidIntent(#[source] QueryError),
    /// Refining the raw dataset failed.
    #[error(transparent)]
    Refine(#[from] RefineError),
    /// Writing the refined dataset failed.
    #[error(transparent)]
    WriteDataset(#[from] Box<WriteDatasetError>),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<DatasetError> for CliError {
    fn from(source: DatasetError) -> Self {
        Self::LoadDataset(Box::new(source))
    }
}

impl From<WriteDatasetError> for CliError {
    fn from(source: WriteDatasetError) -> Self {
        Self::WriteDataset(Box::new(source))
    }
}
