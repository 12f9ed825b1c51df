//! Distinct-value lists for the filterable columns.
//!
//! Facets drive selection controls and let callers check filter values
//! against what the dataset actually contains.

use std::collections::BTreeSet;

use crate::{Dataset, FacetColumn};

/// Sorted, de-duplicated, trimmed values of the five facet columns.
///
/// # Examples
/// ```
/// use metrotrip_core::{Dataset, FacetColumn, Facets, PoiRecord};
///
/// let dataset = Dataset::with_inferred_columns(vec![
///     PoiRecord { area: Some("서울특별시".into()), ..PoiRecord::default() },
///     PoiRecord { area: Some(" ".into()), ..PoiRecord::default() },
///     PoiRecord { area: Some("경기도".into()), ..PoiRecord::default() },
/// ]);
/// let facets = Facets::extract(&dataset);
/// assert_eq!(facets.values(FacetColumn::Area), ["경기도", "서울특별시"]);
/// assert!(facets.values(FacetColumn::CategoryS).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Facets {
    /// Distinct areas.
    pub areas: Vec<String>,
    /// Distinct sub-regions.
    pub sub_regions: Vec<String>,
    /// Distinct top-level categories.
    pub categories_l: Vec<String>,
    /// Distinct mid-level categories.
    pub categories_m: Vec<String>,
    /// Distinct leaf categories.
    pub categories_s: Vec<String>,
}

impl Facets {
    /// Compute facets from a dataset.
    ///
    /// Columns the dataset lacks yield empty lists. Blank-after-trim values are
    /// treated as missing.
    #[must_use]
    pub fn extract(dataset: &Dataset) -> Self {
        let distinct = |column: FacetColumn| distinct_values(dataset, column);
        Self {
            areas: distinct(FacetColumn::Area),
            sub_regions: distinct(FacetColumn::SubRegion),
            categories_l: distinct(FacetColumn::CategoryL),
            categories_m: distinct(FacetColumn::CategoryM),
            categories_s: distinct(FacetColumn::CategoryS),
        }
    }

    /// Values for one facet column.
    #[must_use]
    pub fn values(&self, column: FacetColumn) -> &[String] {
        match column {
            FacetColumn::Area => &self.areas,
            FacetColumn::SubRegion => &self.sub_regions,
            FacetColumn::CategoryL => &self.categories_l,
            FacetColumn::CategoryM => &self.categories_m,
            FacetColumn::CategoryS => &self.categories_s,
        }
    }

    /// Report whether `value` is one of the facet values of `column`.
    #[must_use]
    pub fn contains(&self, column: FacetColumn, value: &str) -> bool {
        self.values(column)
            .binary_search_by(|candidate| candidate.as_str().cmp(value))
            .is_ok()
    }
}

fn distinct_values(dataset: &Dataset, column: FacetColumn) -> Vec<String> {
    if !dataset.columns().contains(column.column()) {
        return Vec::new();
    }
    dataset
        .records()
        .iter()
        .filter_map(|record| record.facet(column))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
