//! Facade crate for the metrotrip POI recommender.
//!
//! This crate re-exports the core domain types and the rank-based
//! recommender, and exposes dataset loading behind the `loader` feature.
//!
//! # Examples
//! ```
//! use metrotrip::{Catalogue, QueryFilters, QueryRequest, RankRecommender, SharedCatalogue, TopN};
//! use metrotrip::PoiRecord;
//!
//! let shared = SharedCatalogue::default();
//! shared.replace(Catalogue::new(metrotrip::Dataset::with_inferred_columns(vec![
//!     PoiRecord { area: Some("서울특별시".into()), related_name: Some("경복궁".into()), ..PoiRecord::default() },
//! ])));
//!
//! let request = QueryRequest::new(TopN::new(3)?)
//!     .with_filters(QueryFilters::default().with_area("서울특별시"));
//! let results = shared.snapshot().recommend(&RankRecommender::default(), &request);
//! assert_eq!(results.len(), 1);
//! # Ok::<(), metrotrip::QueryError>(())
//! ```

#![forbid(unsafe_code)]

pub use metrotrip_core::{
    Catalogue, Column, ColumnSet, Dataset, FacetColumn, Facets, Intent, ParseContextError,
    PoiRecord, QueryContext, QueryError, QueryFilters, QueryRequest, Rank, Recommender, ResultSet,
    ScoredPoi, SharedCatalogue, TimeOfDay, TopN, Transport, compare_ranks, parse_intent,
};

pub use metrotrip_scorer::{
    ContextRules, RankRecommender, RecommendError, SubRegionCap, recommend,
};

#[cfg(feature = "loader")]
pub use metrotrip_data::{
    DatasetError, RefineError, RefineReport, Refined, WriteDatasetError, load_dataset, refine,
    write_dataset,
};

#[cfg(feature = "test-support")]
pub use metrotrip_core::test_support;
