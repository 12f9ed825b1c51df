//! Unit coverage for the rank recommender pipeline.

use metrotrip_core::test_support::{PoiBuilder, ranked_poi, sample_dataset};
use metrotrip_core::{
    Dataset, QueryContext, QueryError, QueryFilters, QueryRequest, Recommender, ResultSet,
    TimeOfDay, TopN, Transport,
};
use rstest::{fixture, rstest};

use crate::{RankRecommender, RecommendError, recommend};

#[fixture]
fn dataset() -> Dataset {
    sample_dataset()
}

fn request(top_n: i64) -> QueryRequest {
    QueryRequest::new(TopN::new(top_n).expect("positive top-N"))
}

fn names(result: &ResultSet) -> Vec<&str> {
    result
        .iter()
        .filter_map(|row| row.record.display_name())
        .collect()
}

#[rstest]
fn orders_by_score_then_rank_then_dataset_order(dataset: Dataset) {
    let result = RankRecommender::default().recommend(&dataset, &request(4));
    // 경복궁 and 수원화성 tie on score and rank; dataset order decides.
    assert_eq!(names(&result), ["경복궁", "수원화성", "창덕궁", "광장시장"]);
}

#[rstest]
fn lower_rank_scores_higher() {
    let dataset = Dataset::with_inferred_columns(vec![
        ranked_poi("one", "서울특별시", "종로구", 1.0),
        ranked_poi("three", "서울특별시", "종로구", 3.0),
        PoiBuilder::new("none")
            .area("서울특별시")
            .sub_region("종로구")
            .raw_rank("-")
            .build(),
    ]);
    let result = RankRecommender::default().recommend(
        &dataset,
        &request(2).with_filters(QueryFilters::default().with_area("서울특별시")),
    );
    assert_eq!(names(&result), ["one", "three"]);
    let scores: Vec<f64> = result.iter().map(|row| row.score).collect();
    assert!(scores.first() > scores.get(1));
}

#[rstest]
fn unranked_records_sort_last(dataset: Dataset) {
    let result = RankRecommender::default().recommend(&dataset, &request(100));
    assert_eq!(result.len(), dataset.len());
    assert_eq!(
        result.rows().last().map(|row| row.record.display_name()),
        Some(Some("남이섬"))
    );
}

#[rstest]
fn filters_restrict_candidates(dataset: Dataset) {
    let filters = QueryFilters::default()
        .with_area("서울특별시")
        .with_category_l("음식");
    let result = RankRecommender::default().recommend(&dataset, &request(10).with_filters(filters));
    assert_eq!(names(&result), ["광장시장", "망원시장"]);
}

#[rstest]
fn unmatched_filter_yields_empty_result(dataset: Dataset) {
    let filters = QueryFilters::default().with_area("부산광역시");
    let result = RankRecommender::default().recommend(&dataset, &request(10).with_filters(filters));
    assert!(result.is_empty());
    assert_eq!(result.columns(), dataset.columns());
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test compares scaled scores"
)]
fn evening_public_transit_scales_scores(dataset: Dataset) {
    let recommender = RankRecommender::default();
    let plain = recommender.recommend(&dataset, &request(1));
    let context = QueryContext::none()
        .with_time_of_day(TimeOfDay::Evening)
        .with_transport(Transport::PublicTransit);
    let boosted = recommender.recommend(&dataset, &request(1).with_context(context));
    let plain_score = plain.rows().first().map_or(0.0, |row| row.score);
    let boosted_score = boosted.rows().first().map_or(0.0, |row| row.score);
    assert_eq!(boosted_score, plain_score * 1.05 * 1.03);
}

#[rstest]
fn diversify_spreads_across_sub_regions(dataset: Dataset) {
    let filters = QueryFilters::default().with_area("서울특별시");
    let result = RankRecommender::default().recommend(
        &dataset,
        &request(5).with_filters(filters).diversified(),
    );
    // Three sub-regions, cap ceil(5 / 3) = 2: 광장시장 waits for the fill pass.
    assert_eq!(
        names(&result),
        ["경복궁", "창덕궁", "명동거리", "망원시장", "광장시장"]
    );
}

#[rstest]
fn identical_requests_give_identical_results(dataset: Dataset) {
    let recommender = RankRecommender::default();
    let query = request(6).diversified();
    assert_eq!(
        recommender.recommend(&dataset, &query),
        recommender.recommend(&dataset, &query)
    );
}

#[rstest]
#[case(0)]
#[case(-3)]
fn loose_entry_point_rejects_non_positive_top_n(dataset: Dataset, #[case] top_n: i64) {
    let result = recommend(&dataset, &QueryFilters::default(), top_n, None, None, false);
    assert_eq!(
        result,
        Err(RecommendError::Query(QueryError::InvalidTopN { requested: top_n }))
    );
}

#[rstest]
fn loose_entry_point_applies_context(dataset: Dataset) {
    let result = recommend(
        &dataset,
        &QueryFilters::default().with_area("경기도"),
        2,
        Some(TimeOfDay::Night),
        Some(Transport::PrivateCar),
        false,
    )
    .expect("valid request");
    assert_eq!(names(&result), ["수원화성", "행궁동"]);
    assert_eq!(result.rows().first().map(|row| row.score), Some(1.0));
}
