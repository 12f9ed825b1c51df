//! Behavioural coverage for facet extraction and cascading sub-regions.

use std::cell::RefCell;

use metrotrip_core::{Dataset, FacetColumn, Facets, PoiRecord, QueryFilters};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct FacetWorld {
    dataset: RefCell<Dataset>,
    facets: RefCell<Option<Facets>>,
    sub_regions: RefCell<Vec<String>>,
}

#[fixture]
fn world() -> FacetWorld {
    FacetWorld::default()
}

fn located(area: &str, sub_region: Option<&str>) -> PoiRecord {
    PoiRecord {
        area: Some(area.to_owned()),
        sub_region: sub_region.map(str::to_owned),
        ..PoiRecord::default()
    }
}

#[given("a dataset with duplicate, padded and blank areas")]
fn padded_areas(world: &FacetWorld) {
    let records = vec![
        located("서울특별시", None),
        located("경기도", None),
        located(" 서울특별시 ", None),
        located("   ", None),
    ];
    world
        .dataset
        .replace(Dataset::with_inferred_columns(records));
}

#[given("a dataset without category columns")]
fn no_categories(world: &FacetWorld) {
    world
        .dataset
        .replace(Dataset::with_inferred_columns(vec![located(
            "서울특별시",
            Some("종로구"),
        )]));
}

#[given("a dataset spanning Seoul and Gyeonggi districts")]
fn capital_region(world: &FacetWorld) {
    let records = vec![
        located("서울특별시", Some("종로구")),
        located("서울특별시", Some("중구")),
        located("서울특별시", Some("종로구")),
        located("경기도", Some("수원시")),
        located("서울특별시", None),
    ];
    world
        .dataset
        .replace(Dataset::with_inferred_columns(records));
}

#[when("facets are extracted")]
fn extract(world: &FacetWorld) {
    let facets = Facets::extract(&world.dataset.borrow());
    world.facets.replace(Some(facets));
}

#[when("sub-regions within {area} are listed")]
fn list_sub_regions(world: &FacetWorld, area: String) {
    let listed = world.dataset.borrow().sub_regions_within(&area);
    world.sub_regions.replace(listed);
}

fn with_facets(world: &FacetWorld, check: impl FnOnce(&Facets)) {
    let borrowed = world.facets.borrow();
    let Some(facets) = borrowed.as_ref() else {
        panic!("facets must be extracted first");
    };
    check(facets);
}

#[then("the area facet lists {first} then {second}")]
fn area_facet(world: &FacetWorld, first: String, second: String) {
    with_facets(world, |facets| {
        assert_eq!(facets.values(FacetColumn::Area), [first, second]);
    });
}

#[then("every category facet is empty")]
fn categories_empty(world: &FacetWorld) {
    with_facets(world, |facets| {
        for column in [
            FacetColumn::CategoryL,
            FacetColumn::CategoryM,
            FacetColumn::CategoryS,
        ] {
            assert!(facets.values(column).is_empty(), "{column:?} should be empty");
        }
        assert_eq!(facets.values(FacetColumn::SubRegion), ["종로구"]);
    });
}

#[then("the sub-regions are {first} and {second}")]
fn sub_regions(world: &FacetWorld, first: String, second: String) {
    assert_eq!(*world.sub_regions.borrow(), vec![first, second]);
}

#[then("an area filter of {value} is reported as unmatched")]
fn unmatched_filter(world: &FacetWorld, value: String) {
    with_facets(world, |facets| {
        let filters = QueryFilters::default().with_area(value.clone());
        assert_eq!(
            filters.unmatched(facets),
            vec![(FacetColumn::Area, value.as_str())]
        );
    });
}

#[scenario(path = "tests/features/facets.feature", index = 0)]
fn sorted_and_trimmed(world: FacetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/facets.feature", index = 1)]
fn absent_columns(world: FacetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/facets.feature", index = 2)]
fn cascading_sub_regions(world: FacetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/facets.feature", index = 3)]
fn unmatched_filter_value(world: FacetWorld) {
    let _ = world;
}
