//! Core domain types for the metrotrip recommender.
//!
//! The crate models a curated table of points of interest, the facets used to
//! narrow it down, and the request and result types exchanged with a
//! [`Recommender`]. Loading data lives in `metrotrip-data`; ranking lives in
//! `metrotrip-scorer`.

#![forbid(unsafe_code)]

pub mod catalogue;
pub mod column;
pub mod context;
pub mod dataset;
pub mod facets;
pub mod intent;
pub mod poi;
pub mod query;
pub mod rank;
pub mod recommender;
pub mod result;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalogue::{Catalogue, SharedCatalogue};
pub use column::{Column, ColumnSet, FacetColumn};
pub use context::{ParseContextError, QueryContext, TimeOfDay, Transport};
pub use dataset::Dataset;
pub use facets::Facets;
pub use intent::{Intent, parse_intent};
pub use poi::PoiRecord;
pub use query::{QueryError, QueryFilters, QueryRequest, TopN};
pub use rank::{Rank, compare_ranks};
pub use recommender::Recommender;
pub use result::{ResultSet, ScoredPoi};
