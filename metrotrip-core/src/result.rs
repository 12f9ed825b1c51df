//! Scored, ordered recommendation output.

use crate::{ColumnSet, PoiRecord};

/// A record paired with its computed relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPoi {
    /// The matching record.
    pub record: PoiRecord,
    /// Relevance score; higher is better.
    pub score: f64,
}

/// Ordered recommendations for one query.
///
/// A result set is created fresh per query and cannot be modified once
/// returned. It remembers which columns the source dataset carried so that
/// presentation omits columns the dataset never had.
///
/// With the `serde` feature a result set serialises as a sequence of row
/// objects keyed by [`Column::key`](crate::Column::key) plus `score`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    columns: ColumnSet,
    rows: Vec<ScoredPoi>,
}

impl ResultSet {
    /// Wrap ordered rows.
    #[must_use]
    pub const fn new(columns: ColumnSet, rows: Vec<ScoredPoi>) -> Self {
        Self { columns, rows }
    }

    /// An empty result for a dataset with the given columns.
    #[must_use]
    pub const fn empty(columns: ColumnSet) -> Self {
        Self::new(columns, Vec::new())
    }

    /// Source columns carried into the output.
    #[must_use]
    pub const fn columns(&self) -> ColumnSet {
        self.columns
    }

    /// Rows in rank order.
    #[must_use]
    pub fn rows(&self) -> &[ScoredPoi] {
        &self.rows
    }

    /// Iterate over rows in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredPoi> {
        self.rows.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the result set, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<ScoredPoi> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ScoredPoi;
    type IntoIter = std::slice::Iter<'a, ScoredPoi>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serialise {
    use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    use super::{ResultSet, ScoredPoi};
    use crate::{Column, ColumnSet};

    struct Row<'a> {
        columns: ColumnSet,
        row: &'a ScoredPoi,
    }

    impl Serialize for Row<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(None)?;
            for column in self.columns.iter() {
                match column {
                    Column::RankNumeric => {
                        map.serialize_entry(column.key(), &self.row.record.rank)?;
                    }
                    other => map.serialize_entry(other.key(), &self.row.record.text(other))?,
                }
            }
            map.serialize_entry("score", &self.row.score)?;
            map.end()
        }
    }

    impl Serialize for ResultSet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
            for row in &self.rows {
                seq.serialize_element(&Row {
                    columns: self.columns,
                    row,
                })?;
            }
            seq.end()
        }
    }
}
