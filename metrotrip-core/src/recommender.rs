//! Produce ranked recommendations for a query.
//!
//! The `Recommender` trait turns a [`Dataset`](crate::Dataset) and a
//! [`QueryRequest`](crate::QueryRequest) into an ordered
//! [`ResultSet`](crate::ResultSet).

use crate::{Dataset, QueryRequest, ResultSet};

/// Rank the records of a dataset against a query.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one recommender
/// can serve concurrent queries against a shared snapshot. The method is
/// infallible: a query that matches nothing yields an empty result set.
///
/// Implementations must:
/// - Return at most `request.top_n` rows.
/// - Only return records satisfying every active filter.
/// - Leave the dataset untouched.
///
/// # Examples
///
/// ```rust
/// use metrotrip_core::{Dataset, QueryRequest, Recommender, ResultSet, ScoredPoi};
///
/// struct FirstRecords;
///
/// impl Recommender for FirstRecords {
///     fn recommend(&self, dataset: &Dataset, request: &QueryRequest) -> ResultSet {
///         let rows = dataset
///             .records()
///             .iter()
///             .filter(|record| request.filters.matches(record))
///             .take(request.top_n.get())
///             .map(|record| ScoredPoi { record: record.clone(), score: 1.0 })
///             .collect();
///         ResultSet::new(dataset.columns(), rows)
///     }
/// }
///
/// let result = FirstRecords.recommend(&Dataset::default(), &QueryRequest::default());
/// assert!(result.is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Return the best records in `dataset` for `request`, best first.
    fn recommend(&self, dataset: &Dataset, request: &QueryRequest) -> ResultSet;
}
