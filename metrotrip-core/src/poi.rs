//! Records of the curated POI table.

use crate::{Column, FacetColumn, Rank};

/// One row of the curated POI dataset.
///
/// Every field is optional because the source table has no fixed column set
/// and individual cells may be blank.
///
/// # Examples
/// ```
/// use metrotrip_core::{PoiRecord, Rank};
///
/// let poi = PoiRecord {
///     name: Some("경복궁".into()),
///     rank: Rank::new(1.0),
///     ..PoiRecord::default()
/// };
/// assert_eq!(poi.display_name(), Some("경복궁"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PoiRecord {
    /// Region name, e.g. `서울특별시`.
    pub area: Option<String>,
    /// District or county name, e.g. `종로구`.
    pub sub_region: Option<String>,
    /// Name of the anchor attraction.
    pub name: Option<String>,
    /// Name of the related attraction.
    pub related_name: Option<String>,
    /// Top-level category.
    pub category_l: Option<String>,
    /// Mid-level category.
    pub category_m: Option<String>,
    /// Leaf category.
    pub category_s: Option<String>,
    /// Rank exactly as supplied by the source.
    pub rank_raw: Option<String>,
    /// Rank coerced to a number; `None` when absent or unparsable.
    pub rank: Option<Rank>,
}

impl PoiRecord {
    /// Preferred display name: the related name, falling back to the name.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.related_name.as_deref().or(self.name.as_deref())
    }

    /// Text value of a column. [`Column::RankNumeric`] has no text form.
    #[must_use]
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Area => self.area.as_deref(),
            Column::SubRegion => self.sub_region.as_deref(),
            Column::Name => self.name.as_deref(),
            Column::RelatedName => self.related_name.as_deref(),
            Column::CategoryL => self.category_l.as_deref(),
            Column::CategoryM => self.category_m.as_deref(),
            Column::CategoryS => self.category_s.as_deref(),
            Column::Rank => self.rank_raw.as_deref(),
            Column::RankNumeric => None,
        }
    }

    /// Mutable text slot of a column, if the column is textual.
    pub const fn text_mut(&mut self, column: Column) -> Option<&mut Option<String>> {
        match column {
            Column::Area => Some(&mut self.area),
            Column::SubRegion => Some(&mut self.sub_region),
            Column::Name => Some(&mut self.name),
            Column::RelatedName => Some(&mut self.related_name),
            Column::CategoryL => Some(&mut self.category_l),
            Column::CategoryM => Some(&mut self.category_m),
            Column::CategoryS => Some(&mut self.category_s),
            Column::Rank => Some(&mut self.rank_raw),
            Column::RankNumeric => None,
        }
    }

    /// Value of a facet column.
    #[must_use]
    pub fn facet(&self, column: FacetColumn) -> Option<&str> {
        self.text(column.column())
    }
}
