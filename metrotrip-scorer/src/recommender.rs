//! The rank-based [`Recommender`] implementation.

use log::debug;
use metrotrip_core::{
    Dataset, PoiRecord, QueryContext, QueryFilters, QueryRequest, Recommender, ResultSet,
    ScoredPoi, TimeOfDay, TopN, Transport,
};

use crate::{BaseScore, ContextRules, RecommendError, SubRegionCap, diversify, sort_rows};

/// Filter, score, order and truncate records by their external rank.
///
/// The pipeline for one request:
/// 1. keep the records matching every active filter;
/// 2. score each as its rank-derived base score times the context factor;
/// 3. sort by score descending, rank ascending, dataset order;
/// 4. diversify across sub-regions when requested, otherwise truncate.
///
/// # Examples
/// ```
/// use metrotrip_core::{Dataset, PoiRecord, QueryFilters, QueryRequest, Rank, Recommender, TopN};
/// use metrotrip_scorer::RankRecommender;
///
/// let poi = |name: &str, rank: f64| PoiRecord {
///     related_name: Some(name.into()),
///     area: Some("서울특별시".into()),
///     rank: Rank::new(rank),
///     ..PoiRecord::default()
/// };
/// let dataset = Dataset::with_inferred_columns(vec![poi("b", 3.0), poi("a", 1.0)]);
/// let request = QueryRequest::new(TopN::new(1)?)
///     .with_filters(QueryFilters::default().with_area("서울특별시"));
/// let result = RankRecommender::default().recommend(&dataset, &request);
/// assert_eq!(result.rows()[0].record.display_name(), Some("a"));
/// # Ok::<(), metrotrip_core::QueryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankRecommender {
    rules: ContextRules,
    cap: SubRegionCap,
}

impl RankRecommender {
    /// A recommender with the baseline context rules and proportional cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the context rules.
    #[must_use]
    pub fn with_rules(mut self, rules: ContextRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the sub-region cap used when diversifying.
    #[must_use]
    pub const fn with_sub_region_cap(mut self, cap: SubRegionCap) -> Self {
        self.cap = cap;
        self
    }

    /// Context rules in effect.
    #[must_use]
    pub const fn rules(&self) -> &ContextRules {
        &self.rules
    }

    /// Sub-region cap in effect.
    #[must_use]
    pub const fn sub_region_cap(&self) -> SubRegionCap {
        self.cap
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "context factors scale base scores"
    )]
    fn score_candidates(&self, dataset: &Dataset, request: &QueryRequest) -> Vec<ScoredPoi> {
        let candidates: Vec<&PoiRecord> = dataset
            .records()
            .iter()
            .filter(|record| request.filters.matches(record))
            .collect();
        let base = BaseScore::for_pool(dataset.columns(), candidates.iter().copied());
        let factor = self.rules.factor(&request.context);
        candidates
            .into_iter()
            .map(|record| ScoredPoi {
                score: base.score(record) * factor,
                record: record.clone(),
            })
            .collect()
    }
}

impl Recommender for RankRecommender {
    fn recommend(&self, dataset: &Dataset, request: &QueryRequest) -> ResultSet {
        let mut rows = self.score_candidates(dataset, request);
        let matched = rows.len();
        sort_rows(&mut rows);
        let selected = if request.diversify {
            diversify(rows, request.top_n, self.cap)
        } else {
            rows.truncate(request.top_n.get());
            rows
        };
        debug!(
            "recommended {} of {matched} matching records (top {}, diversify {})",
            selected.len(),
            request.top_n,
            request.diversify
        );
        ResultSet::new(dataset.columns(), selected)
    }
}

/// Recommend with the default [`RankRecommender`] from loose parameters.
///
/// # Errors
/// Returns [`RecommendError::Query`] when `top_n <= 0`.
///
/// # Examples
/// ```
/// use metrotrip_core::{Dataset, QueryFilters};
/// use metrotrip_scorer::{RecommendError, recommend};
///
/// let dataset = Dataset::default();
/// let filters = QueryFilters::default();
/// assert!(recommend(&dataset, &filters, 5, None, None, false)?.is_empty());
/// assert!(recommend(&dataset, &filters, 0, None, None, false).is_err());
/// # Ok::<(), RecommendError>(())
/// ```
pub fn recommend(
    dataset: &Dataset,
    filters: &QueryFilters,
    top_n: i64,
    time_of_day: Option<TimeOfDay>,
    transport: Option<Transport>,
    diversify: bool,
) -> Result<ResultSet, RecommendError> {
    let request = QueryRequest {
        filters: filters.clone(),
        top_n: TopN::new(top_n)?,
        context: QueryContext {
            time_of_day,
            transport,
        },
        diversify,
    };
    Ok(RankRecommender::default().recommend(dataset, &request))
}
