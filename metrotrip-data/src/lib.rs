//! Dataset access for the metrotrip recommender.
//!
//! Responsibilities:
//! - Load curated POI tables from JSON, JSON Lines or `SQLite` files.
//! - Repair rank cells into numeric ranks without inventing values.
//! - Refine raw tables into the curated form and persist them as JSON.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `metrotrip-scorer`).
//! - Do not choose file locations; callers name every input and output.
//!
//! Invariants:
//! - Loading never writes and never fails on data-quality problems.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod error;
mod loader;
mod refine;
mod rows;
mod writer;

pub use error::{DatasetError, RefineError, WriteDatasetError};
pub use loader::{DatasetFormat, SQLITE_TABLE, load_dataset};
pub use refine::{
    MIN_RANK_UPPER_BOUND, RefineReport, Refined, normalise_text, rank_upper_bound, refine,
};
pub use writer::write_dataset;
