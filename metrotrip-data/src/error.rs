//! Error types raised while loading, refining and writing datasets.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading a dataset.
///
/// Data-quality problems (blank cells, unparsable ranks, absent optional
/// columns) are repaired during loading and never surface here.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// No file exists at the requested location.
    #[error("dataset not found at {path}")]
    NotFound {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
    /// The file extension does not name a supported format.
    #[error("unsupported dataset format for {path} (expected .json, .jsonl, .ndjson, .db, .sqlite, .sqlite3 or .parquet)")]
    UnsupportedFormat {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
    /// Reading the file failed.
    #[error("failed to read dataset {path}")]
    Read {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON.
    #[error("failed to parse dataset {path}{}", line_suffix(.line))]
    Parse {
        /// Dataset path.
        path: Utf8PathBuf,
        /// One-based line number for JSON Lines input.
        line: Option<usize>,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// An array element or line was valid JSON but not an object.
    #[error("record {index} of {path} is not a JSON object")]
    NotARecord {
        /// Dataset path.
        path: Utf8PathBuf,
        /// One-based position of the offending record.
        index: usize,
    },
    /// Opening or querying the `SQLite` database failed.
    #[error("failed to {operation} in SQLite dataset {path}")]
    Database {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Decoding the Parquet file failed.
    #[error("failed to decode Parquet dataset {path}")]
    Parquet {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Source error from `parquet`.
        #[source]
        source: parquet::errors::ParquetError,
    },
    /// The `SQLite` database has no `pois` table.
    #[error("SQLite dataset {path} has no `{table}` table")]
    MissingTable {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Expected table name.
        table: &'static str,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|number| format!(" at line {number}"))
        .unwrap_or_default()
}

/// Errors raised by the refinement pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefineError {
    /// Every record was removed.
    #[error("refinement removed every record ({input} in, 0 out)")]
    Empty {
        /// Number of input records.
        input: usize,
    },
}

/// Errors raised while persisting a dataset.
#[derive(Debug, Error)]
pub enum WriteDatasetError {
    /// Creating the parent directory or the output file failed.
    #[error("failed to create dataset file {path}")]
    Create {
        /// Output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising records failed.
    #[error("failed to write dataset {path}")]
    Write {
        /// Output path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Flushing the output file failed.
    #[error("failed to flush dataset {path}")]
    Flush {
        /// Output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
