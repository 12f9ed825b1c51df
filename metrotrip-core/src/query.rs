//! Recommendation query parameters.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::{FacetColumn, Facets, PoiRecord, QueryContext};

/// Errors raised while assembling a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The requested result count was zero or negative.
    #[error("top-N must be a positive integer (got {requested})")]
    InvalidTopN {
        /// Value the caller asked for.
        requested: i64,
    },
}

/// Number of results to return; always at least one.
///
/// # Examples
/// ```
/// use metrotrip_core::{QueryError, TopN};
///
/// assert_eq!(TopN::default().get(), 10);
/// assert_eq!(TopN::new(3).map(TopN::get), Ok(3));
/// assert_eq!(TopN::new(0), Err(QueryError::InvalidTopN { requested: 0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "usize"))]
pub struct TopN(NonZeroUsize);

impl TopN {
    /// Default result count.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(9));

    /// Validate a requested result count.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidTopN`] when `requested <= 0`.
    pub fn new(requested: i64) -> Result<Self, QueryError> {
        usize::try_from(requested)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(QueryError::InvalidTopN { requested })
    }

    /// The count as `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for TopN {
    type Error = QueryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonZeroUsize> for TopN {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl From<TopN> for usize {
    fn from(value: TopN) -> Self {
        value.get()
    }
}

impl std::fmt::Display for TopN {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Equality filters over the five facet columns.
///
/// Filters are AND-combined. An unset or blank filter imposes no constraint.
/// A record whose cell is missing never satisfies a set filter.
///
/// # Examples
/// ```
/// use metrotrip_core::{PoiRecord, QueryFilters};
///
/// let filters = QueryFilters::default().with_area("경기도");
/// let poi = PoiRecord { area: Some("경기도".into()), ..PoiRecord::default() };
/// assert!(filters.matches(&poi));
/// assert!(!filters.matches(&PoiRecord::default()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct QueryFilters {
    /// Required area.
    pub area: Option<String>,
    /// Required sub-region.
    pub sub_region: Option<String>,
    /// Required top-level category.
    pub category_l: Option<String>,
    /// Required mid-level category.
    pub category_m: Option<String>,
    /// Required leaf category.
    pub category_s: Option<String>,
}

impl QueryFilters {
    /// Value of the filter on `column`, ignoring blank values.
    #[must_use]
    pub fn get(&self, column: FacetColumn) -> Option<&str> {
        let value = match column {
            FacetColumn::Area => self.area.as_deref(),
            FacetColumn::SubRegion => self.sub_region.as_deref(),
            FacetColumn::CategoryL => self.category_l.as_deref(),
            FacetColumn::CategoryM => self.category_m.as_deref(),
            FacetColumn::CategoryS => self.category_s.as_deref(),
        };
        value.filter(|text| !text.trim().is_empty())
    }

    /// Set the filter on `column`.
    pub fn set(&mut self, column: FacetColumn, value: impl Into<String>) {
        let slot = match column {
            FacetColumn::Area => &mut self.area,
            FacetColumn::SubRegion => &mut self.sub_region,
            FacetColumn::CategoryL => &mut self.category_l,
            FacetColumn::CategoryM => &mut self.category_m,
            FacetColumn::CategoryS => &mut self.category_s,
        };
        *slot = Some(value.into());
    }

    /// Set the filter on `column` while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, column: FacetColumn, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Shorthand for `with(FacetColumn::Area, ..)`.
    #[must_use]
    pub fn with_area(self, value: impl Into<String>) -> Self {
        self.with(FacetColumn::Area, value)
    }

    /// Shorthand for `with(FacetColumn::SubRegion, ..)`.
    #[must_use]
    pub fn with_sub_region(self, value: impl Into<String>) -> Self {
        self.with(FacetColumn::SubRegion, value)
    }

    /// Shorthand for `with(FacetColumn::CategoryL, ..)`.
    #[must_use]
    pub fn with_category_l(self, value: impl Into<String>) -> Self {
        self.with(FacetColumn::CategoryL, value)
    }

    /// Active filters in evaluation order.
    pub fn active(&self) -> impl Iterator<Item = (FacetColumn, &str)> {
        FacetColumn::ALL
            .into_iter()
            .filter_map(|column| self.get(column).map(|value| (column, value)))
    }

    /// Report whether `record` satisfies every active filter exactly.
    ///
    /// Surrounding whitespace is ignored on both sides, the same way
    /// [`Facets`] lists cell values.
    #[must_use]
    pub fn matches(&self, record: &PoiRecord) -> bool {
        self.active().all(|(column, value)| {
            record.facet(column).map(str::trim) == Some(value.trim())
        })
    }

    /// Active filters whose value does not appear in `facets`.
    ///
    /// Such a filter can only produce an empty result. This is advisory; the
    /// engine never rejects a filter value.
    #[must_use]
    pub fn unmatched<'a>(&'a self, facets: &Facets) -> Vec<(FacetColumn, &'a str)> {
        self.active()
            .filter(|(column, value)| !facets.contains(*column, value.trim()))
            .collect()
    }
}

/// A complete recommendation request.
///
/// # Examples
/// ```
/// use metrotrip_core::{QueryContext, QueryFilters, QueryRequest, TimeOfDay, TopN};
///
/// let request = QueryRequest::new(TopN::new(5)?)
///     .with_filters(QueryFilters::default().with_area("서울특별시"))
///     .with_context(QueryContext::none().with_time_of_day(TimeOfDay::Evening))
///     .diversified();
/// assert_eq!(request.top_n.get(), 5);
/// assert!(request.diversify);
/// # Ok::<(), metrotrip_core::QueryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct QueryRequest {
    /// Equality filters.
    pub filters: QueryFilters,
    /// Maximum number of results.
    pub top_n: TopN,
    /// Contextual modifiers feeding the score.
    pub context: QueryContext,
    /// Spread results across sub-regions.
    pub diversify: bool,
}

impl QueryRequest {
    /// Request `top_n` results with no filters or context.
    #[must_use]
    pub fn new(top_n: TopN) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }

    /// Replace the filters.
    #[must_use]
    pub fn with_filters(mut self, filters: QueryFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Replace the context.
    #[must_use]
    pub const fn with_context(mut self, context: QueryContext) -> Self {
        self.context = context;
        self
    }

    /// Enable sub-region diversification.
    #[must_use]
    pub const fn diversified(mut self) -> Self {
        self.diversify = true;
        self
    }
}
