//! The in-memory POI table.

use std::collections::BTreeSet;

use crate::{Column, ColumnSet, PoiRecord};

/// An immutable snapshot of POI records together with the columns the source
/// table carried.
///
/// Column presence is tracked separately from cell values: a column that is
/// present but blank in every row differs from a column the table never had.
///
/// # Examples
/// ```
/// use metrotrip_core::{Column, ColumnSet, Dataset, PoiRecord};
///
/// let records = vec![PoiRecord { area: Some("경기도".into()), ..PoiRecord::default() }];
/// let dataset = Dataset::new(records, ColumnSet::empty().with(Column::Area));
/// assert_eq!(dataset.len(), 1);
/// assert!(!dataset.columns().has_rank());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<PoiRecord>,
    columns: ColumnSet,
}

impl Dataset {
    /// Wrap records read from a table with the given column set.
    #[must_use]
    pub const fn new(records: Vec<PoiRecord>, columns: ColumnSet) -> Self {
        Self { records, columns }
    }

    /// Build a dataset whose column set is every column holding at least one
    /// value.
    #[must_use]
    pub fn with_inferred_columns(records: Vec<PoiRecord>) -> Self {
        let mut columns = ColumnSet::empty();
        for record in &records {
            for column in Column::ALL {
                let present = match column {
                    Column::RankNumeric => record.rank.is_some(),
                    other => record.text(other).is_some(),
                };
                if present {
                    columns.insert(column);
                }
            }
        }
        Self { records, columns }
    }

    /// Records in source order.
    #[must_use]
    pub fn records(&self) -> &[PoiRecord] {
        &self.records
    }

    /// Columns present in the source table.
    #[must_use]
    pub const fn columns(&self) -> ColumnSet {
        self.columns
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the dataset, returning its records and column set.
    #[must_use]
    pub fn into_parts(self) -> (Vec<PoiRecord>, ColumnSet) {
        (self.records, self.columns)
    }

    /// Sorted distinct sub-regions of the records whose area equals `area`.
    ///
    /// Used to cascade selection controls once an area is chosen. Values are
    /// trimmed and blanks are skipped, as for facets.
    #[must_use]
    pub fn sub_regions_within(&self, area: &str) -> Vec<String> {
        if !self.columns.contains(Column::SubRegion) {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|record| record.area.as_deref().map(str::trim) == Some(area.trim()))
            .filter_map(|record| record.sub_region.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
