//! Property-based tests for the recommender's ordering, size and
//! diversification guarantees.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use metrotrip_core::{
    Dataset, PoiRecord, QueryFilters, QueryRequest, Rank, Recommender, TopN, compare_ranks,
};
use metrotrip_scorer::{RankRecommender, SubRegionCap};
use proptest::prelude::*;

const AREAS: [&str; 3] = ["서울특별시", "경기도", "인천광역시"];
const SUB_REGIONS: [&str; 4] = ["종로구", "중구", "수원시", "남동구"];

fn record_strategy() -> impl Strategy<Value = PoiRecord> {
    (
        prop::sample::select(AREAS.to_vec()),
        prop::option::of(prop::sample::select(SUB_REGIONS.to_vec())),
        prop::option::of(0_u16..50),
    )
        .prop_map(|(area, sub_region, rank)| PoiRecord {
            area: Some(area.to_owned()),
            sub_region: sub_region.map(str::to_owned),
            related_name: Some(format!("{area}-{sub_region:?}-{rank:?}")),
            rank: rank.and_then(|value| Rank::new(f64::from(value))),
            ..PoiRecord::default()
        })
}

fn request_strategy() -> impl Strategy<Value = QueryRequest> {
    (
        1_i64..15,
        prop::option::of(prop::sample::select(AREAS.to_vec())),
        any::<bool>(),
    )
        .prop_map(|(top_n, area, diversify)| {
            let filters = area.map_or_else(QueryFilters::default, |value| {
                QueryFilters::default().with_area(value)
            });
            let mut request = QueryRequest::new(TopN::new(top_n).unwrap_or_default())
                .with_filters(filters);
            request.diversify = diversify;
            request
        })
}

fn sub_region_counts<'a>(
    records: impl Iterator<Item = &'a PoiRecord>,
) -> BTreeMap<Option<&'a str>, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let count = counts.entry(record.sub_region.as_deref()).or_insert(0_usize);
        *count += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn result_size_is_bounded(
        records in prop::collection::vec(record_strategy(), 0..40),
        request in request_strategy(),
    ) {
        let dataset = Dataset::with_inferred_columns(records);
        let matching = dataset
            .records()
            .iter()
            .filter(|record| request.filters.matches(record))
            .count();
        let result = RankRecommender::default().recommend(&dataset, &request);
        prop_assert_eq!(result.len(), request.top_n.get().min(matching));
    }

    #[test]
    fn every_row_satisfies_the_filters(
        records in prop::collection::vec(record_strategy(), 0..40),
        request in request_strategy(),
    ) {
        let dataset = Dataset::with_inferred_columns(records);
        let result = RankRecommender::default().recommend(&dataset, &request);
        for row in &result {
            prop_assert!(request.filters.matches(&row.record));
        }
    }

    #[test]
    fn undiversified_rows_are_ordered(
        records in prop::collection::vec(record_strategy(), 0..40),
        request in request_strategy(),
    ) {
        let dataset = Dataset::with_inferred_columns(records);
        let mut plain = request;
        plain.diversify = false;
        let result = RankRecommender::default().recommend(&dataset, &plain);
        for pair in result.rows().windows(2) {
            let [first, second] = pair else { continue };
            prop_assert!(first.score >= second.score);
            if first.score.total_cmp(&second.score) == Ordering::Equal {
                prop_assert_ne!(
                    compare_ranks(first.record.rank, second.record.rank),
                    Ordering::Greater
                );
            }
        }
    }

    #[test]
    fn recommending_is_idempotent(
        records in prop::collection::vec(record_strategy(), 0..40),
        request in request_strategy(),
    ) {
        let dataset = Dataset::with_inferred_columns(records);
        let recommender = RankRecommender::default();
        prop_assert_eq!(
            recommender.recommend(&dataset, &request),
            recommender.recommend(&dataset, &request)
        );
    }

    #[test]
    fn diversified_rows_respect_the_sub_region_cap(
        records in prop::collection::vec(record_strategy(), 0..40),
        request in request_strategy(),
    ) {
        let dataset = Dataset::with_inferred_columns(records);
        let mut spread = request;
        spread.diversify = true;
        let pool = sub_region_counts(
            dataset
                .records()
                .iter()
                .filter(|record| spread.filters.matches(record)),
        );
        let matching: usize = pool.values().sum();
        let limit = spread.top_n.get();
        let threshold = SubRegionCap::Proportional.threshold(limit, pool.len());

        let result = RankRecommender::default().recommend(&dataset, &spread);
        prop_assert_eq!(result.len(), limit.min(matching));

        let selected = sub_region_counts(result.iter().map(|row| &row.record));
        let over_cap = selected.values().any(|count| *count > threshold);
        if over_cap {
            // Rows beyond the cap are only taken once every sub-region is
            // capped or exhausted.
            for (group, available) in &pool {
                let taken = selected.get(group).copied().unwrap_or(0);
                prop_assert!(taken >= threshold.min(*available));
            }
        }

        let admitted = result
            .iter()
            .scan(BTreeMap::new(), |running, row| {
                let count = running.entry(row.record.sub_region.as_deref()).or_insert(0_usize);
                *count += 1;
                (*count <= threshold).then_some(row.score)
            })
            .collect::<Vec<_>>();
        for pair in admitted.windows(2) {
            let [first, second] = pair else { continue };
            prop_assert!(first >= second);
        }
    }
}
