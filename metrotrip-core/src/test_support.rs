//! Record builders and a small sample dataset for unit and behaviour tests.

use crate::{Dataset, PoiRecord, Rank};

/// Fluent builder for [`PoiRecord`] values.
///
/// # Examples
/// ```
/// use metrotrip_core::test_support::PoiBuilder;
///
/// let poi = PoiBuilder::new("경복궁").area("서울특별시").rank(1.0).build();
/// assert_eq!(poi.display_name(), Some("경복궁"));
/// assert_eq!(poi.rank_raw.as_deref(), Some("1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoiBuilder {
    record: PoiRecord,
}

impl PoiBuilder {
    /// Start a record with the given related name.
    #[must_use]
    pub fn new(related_name: &str) -> Self {
        Self {
            record: PoiRecord {
                related_name: Some(related_name.to_owned()),
                ..PoiRecord::default()
            },
        }
    }

    /// Set the anchor attraction name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.record.name = Some(name.to_owned());
        self
    }

    /// Set the area.
    #[must_use]
    pub fn area(mut self, area: &str) -> Self {
        self.record.area = Some(area.to_owned());
        self
    }

    /// Set the sub-region.
    #[must_use]
    pub fn sub_region(mut self, sub_region: &str) -> Self {
        self.record.sub_region = Some(sub_region.to_owned());
        self
    }

    /// Set the three category levels.
    #[must_use]
    pub fn categories(mut self, large: &str, medium: &str, small: &str) -> Self {
        self.record.category_l = Some(large.to_owned());
        self.record.category_m = Some(medium.to_owned());
        self.record.category_s = Some(small.to_owned());
        self
    }

    /// Set only the top-level category.
    #[must_use]
    pub fn category_l(mut self, large: &str) -> Self {
        self.record.category_l = Some(large.to_owned());
        self
    }

    /// Set both the raw and the numeric rank.
    #[must_use]
    pub fn rank(mut self, rank: f64) -> Self {
        self.record.rank_raw = Some(rank.to_string());
        self.record.rank = Rank::new(rank);
        self
    }

    /// Set a raw rank that does not parse as a number.
    #[must_use]
    pub fn raw_rank(mut self, raw: &str) -> Self {
        self.record.rank = Rank::parse(raw);
        self.record.rank_raw = Some(raw.to_owned());
        self
    }

    /// Finish the record.
    #[must_use]
    pub fn build(self) -> PoiRecord {
        self.record
    }
}

/// Shorthand for a ranked record in `area`/`sub_region`.
#[must_use]
pub fn ranked_poi(related_name: &str, area: &str, sub_region: &str, rank: f64) -> PoiRecord {
    PoiBuilder::new(related_name)
        .area(area)
        .sub_region(sub_region)
        .rank(rank)
        .build()
}

/// Eight records across two areas and five sub-regions.
///
/// Seoul has three records in 종로구, one in 중구 and one in 마포구.
/// Gyeonggi has two records in 수원시 and one unranked record in 가평군.
#[must_use]
pub fn sample_dataset() -> Dataset {
    Dataset::with_inferred_columns(vec![
        PoiBuilder::new("경복궁")
            .name("광화문")
            .area("서울특별시")
            .sub_region("종로구")
            .categories("관광지", "역사관광", "고궁")
            .rank(1.0)
            .build(),
        PoiBuilder::new("창덕궁")
            .name("광화문")
            .area("서울특별시")
            .sub_region("종로구")
            .categories("관광지", "역사관광", "고궁")
            .rank(2.0)
            .build(),
        PoiBuilder::new("광장시장")
            .name("종로")
            .area("서울특별시")
            .sub_region("종로구")
            .categories("음식", "음식점", "시장")
            .rank(3.0)
            .build(),
        PoiBuilder::new("명동거리")
            .name("명동")
            .area("서울특별시")
            .sub_region("중구")
            .categories("쇼핑", "쇼핑", "거리")
            .rank(4.0)
            .build(),
        PoiBuilder::new("망원시장")
            .name("망원")
            .area("서울특별시")
            .sub_region("마포구")
            .categories("음식", "음식점", "시장")
            .rank(5.0)
            .build(),
        PoiBuilder::new("수원화성")
            .name("수원")
            .area("경기도")
            .sub_region("수원시")
            .categories("관광지", "역사관광", "성곽")
            .rank(1.0)
            .build(),
        PoiBuilder::new("행궁동")
            .name("수원")
            .area("경기도")
            .sub_region("수원시")
            .categories("관광지", "문화관광", "거리")
            .rank(6.0)
            .build(),
        PoiBuilder::new("남이섬")
            .name("가평")
            .area("경기도")
            .sub_region("가평군")
            .categories("관광지", "자연관광", "섬")
            .build(),
    ])
}
