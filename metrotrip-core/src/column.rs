//! Logical dataset columns and the set of columns a dataset carries.
//!
//! The curated POI table is produced by an external cleaning pipeline and its
//! column set is not fixed. Each logical [`Column`] is read from the first
//! present of its accepted source names, so both the raw tourism API field
//! names (`areaNm`, `rlteRank`, ...) and camelCase aliases load.

/// A logical column of the POI dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// Region name (province or metropolitan city).
    Area,
    /// District or county name.
    SubRegion,
    /// Name of the anchor attraction.
    Name,
    /// Name of the related attraction; preferred for display.
    RelatedName,
    /// Top-level category.
    CategoryL,
    /// Mid-level category.
    CategoryM,
    /// Leaf category.
    CategoryS,
    /// Raw rank text as supplied by the source.
    Rank,
    /// Rank already coerced to a number by the cleaning pipeline.
    RankNumeric,
}

impl Column {
    /// Every column, in output order.
    pub const ALL: [Self; 9] = [
        Self::RelatedName,
        Self::Name,
        Self::Area,
        Self::SubRegion,
        Self::CategoryL,
        Self::CategoryM,
        Self::CategoryS,
        Self::Rank,
        Self::RankNumeric,
    ];

    /// Accepted source column names, highest priority first.
    ///
    /// # Examples
    /// ```
    /// use metrotrip_core::Column;
    ///
    /// assert_eq!(Column::SubRegion.source_names(), &["signguNm", "subRegion"]);
    /// ```
    #[must_use]
    pub const fn source_names(self) -> &'static [&'static str] {
        match self {
            Self::Area => &["areaNm", "area"],
            Self::SubRegion => &["signguNm", "subRegion"],
            Self::Name => &["tAtsNm", "name"],
            Self::RelatedName => &["rlteTatsNm", "relatedName"],
            Self::CategoryL => &["rlteCtgryLclsNm", "categoryL"],
            Self::CategoryM => &["rlteCtgryMclsNm", "categoryM"],
            Self::CategoryS => &["rlteCtgrySclsNm", "categoryS"],
            Self::Rank => &["rlteRank", "rank"],
            Self::RankNumeric => &["rlteRank_num", "rankNumeric"],
        }
    }

    /// Canonical source name used when persisting a dataset.
    #[must_use]
    pub const fn canonical_source_name(self) -> &'static str {
        match self {
            Self::Area => "areaNm",
            Self::SubRegion => "signguNm",
            Self::Name => "tAtsNm",
            Self::RelatedName => "rlteTatsNm",
            Self::CategoryL => "rlteCtgryLclsNm",
            Self::CategoryM => "rlteCtgryMclsNm",
            Self::CategoryS => "rlteCtgrySclsNm",
            Self::Rank => "rlteRank",
            Self::RankNumeric => "rlteRank_num",
        }
    }

    /// Key used for the column in result rows.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::SubRegion => "subRegion",
            Self::Name => "name",
            Self::RelatedName => "relatedName",
            Self::CategoryL => "categoryL",
            Self::CategoryM => "categoryM",
            Self::CategoryS => "categoryS",
            Self::Rank => "rank",
            Self::RankNumeric => "rankNumeric",
        }
    }

    const fn bit(self) -> u16 {
        1_u16 << (self as u16)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A categorical column that can be filtered on and faceted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetColumn {
    /// See [`Column::Area`].
    Area,
    /// See [`Column::SubRegion`].
    SubRegion,
    /// See [`Column::CategoryL`].
    CategoryL,
    /// See [`Column::CategoryM`].
    CategoryM,
    /// See [`Column::CategoryS`].
    CategoryS,
}

impl FacetColumn {
    /// The five facet columns in filter evaluation order.
    pub const ALL: [Self; 5] = [
        Self::Area,
        Self::SubRegion,
        Self::CategoryL,
        Self::CategoryM,
        Self::CategoryS,
    ];

    /// The underlying dataset column.
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            Self::Area => Column::Area,
            Self::SubRegion => Column::SubRegion,
            Self::CategoryL => Column::CategoryL,
            Self::CategoryM => Column::CategoryM,
            Self::CategoryS => Column::CategoryS,
        }
    }
}

impl std::fmt::Display for FacetColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.column().fmt(f)
    }
}

/// The set of logical columns present in a dataset.
///
/// # Examples
/// ```
/// use metrotrip_core::{Column, ColumnSet};
///
/// let columns = ColumnSet::from_iter([Column::Area, Column::Rank]);
/// assert!(columns.contains(Column::Area));
/// assert!(!columns.contains(Column::CategoryS));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ColumnSet(u16);

impl ColumnSet {
    /// An empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every logical column.
    #[must_use]
    pub fn all() -> Self {
        Column::ALL.into_iter().collect()
    }

    /// Add a column.
    pub const fn insert(&mut self, column: Column) {
        self.0 |= column.bit();
    }

    /// Return a copy with `column` added.
    #[must_use]
    pub const fn with(mut self, column: Column) -> Self {
        self.insert(column);
        self
    }

    /// Report whether `column` is present.
    #[must_use]
    pub const fn contains(self, column: Column) -> bool {
        self.0 & column.bit() != 0
    }

    /// Report whether any rank column (raw or numeric) is present.
    #[must_use]
    pub const fn has_rank(self) -> bool {
        self.contains(Column::Rank) || self.contains(Column::RankNumeric)
    }

    /// Iterate over present columns in output order.
    pub fn iter(self) -> impl Iterator<Item = Column> {
        Column::ALL
            .into_iter()
            .filter(move |column| self.contains(*column))
    }

    /// Report whether no column is present.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Column> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        let mut set = Self::empty();
        for column in iter {
            set.insert(column);
        }
        set
    }
}
