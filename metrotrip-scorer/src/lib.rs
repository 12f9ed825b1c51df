//! Ranking for metrotrip points of interest.
//!
//! The crate turns a loaded [`Dataset`](metrotrip_core::Dataset) and a
//! [`QueryRequest`](metrotrip_core::QueryRequest) into an ordered
//! [`ResultSet`](metrotrip_core::ResultSet):
//! - **Base scores** are reciprocals of the external rank; unranked records
//!   fall to a floor below every ranked record in the pool.
//! - **Context rules** multiply the base score when the request's time of day
//!   or transport mode matches a registered condition.
//! - **Diversity** optionally spreads results across sub-regions before the
//!   list is cut to size.
//!
//! [`RankRecommender`] implements the
//! [`Recommender`](metrotrip_core::Recommender) trait so callers can swap in
//! other strategies.
//!
//! # Examples
//!
//! ```
//! use metrotrip_core::{QueryRequest, Recommender, TopN};
//! use metrotrip_core::test_support::sample_dataset;
//! use metrotrip_scorer::RankRecommender;
//!
//! let request = QueryRequest::new(TopN::new(3)?).diversified();
//! let result = RankRecommender::default().recommend(&sample_dataset(), &request);
//! assert_eq!(result.len(), 3);
//! # Ok::<(), metrotrip_core::QueryError>(())
//! ```

#![forbid(unsafe_code)]

mod diversity;
mod error;
mod recommender;
mod rules;
mod score;

pub use diversity::{SubRegionCap, diversify};
pub use error::RecommendError;
pub use recommender::{RankRecommender, recommend};
pub use rules::{
    ContextCondition, ContextRule, ContextRuleError, ContextRules, EVENING_MULTIPLIER,
    PUBLIC_TRANSIT_MULTIPLIER,
};
pub use score::{BaseScore, MISSING_RANK_FLOOR, RANK_EPSILON, result_order, sort_rows};

#[cfg(test)]
mod tests;
