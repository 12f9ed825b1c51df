//! Dataset loading shared by the query commands.

use camino::Utf8Path;
use log::{info, warn};
use metrotrip_core::{Catalogue, Facets, QueryFilters};
use metrotrip_data::load_dataset;

use crate::CliError;

pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<Catalogue, CliError> {
    let dataset = load_dataset(path)?;
    info!("loaded {} records from {path}", dataset.len());
    Ok(Catalogue::new(dataset))
}

/// Warn about filters that can only produce an empty result.
pub(crate) fn warn_unmatched(filters: &QueryFilters, facets: &Facets) {
    for (column, value) in filters.unmatched(facets) {
        warn!("no record has {column} '{value}'; the result will be empty");
    }
}
