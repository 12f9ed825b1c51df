//! Keyword-table intent extraction for Korean travel requests.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::Intent;
use crate::{TimeOfDay, Transport};

/// Area keywords in priority order; the first keyword found wins.
const AREA_KEYWORDS: &[(&str, &str)] = &[
    ("서울", "서울특별시"),
    ("서울시", "서울특별시"),
    ("경기", "경기도"),
    ("경기도", "경기도"),
    ("인천", "인천광역시"),
    ("인천시", "인천광역시"),
];

/// Checked in order; the first matching group wins.
const TIME_OF_DAY_GROUPS: &[(TimeOfDay, &[&str])] = &[
    (TimeOfDay::Morning, &["아침", "오전", "브런치"]),
    (TimeOfDay::Midday, &["점심"]),
    (TimeOfDay::Evening, &["저녁", "노을", "해질"]),
    (TimeOfDay::Night, &["밤", "야간", "심야"]),
];

/// Checked in order; a later matching group overrides an earlier one.
const TRANSPORT_GROUPS: &[(Transport, &[&str])] = &[
    (Transport::PublicTransit, &["대중교통", "지하철", "버스"]),
    (Transport::PrivateCar, &["차로", "드라이브", "자가용", "렌트카"]),
];

/// Checked in order; a later matching group overrides an earlier one.
const CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    ("관광지", &["전시", "박물관", "미술관", "실내"]),
    ("음식", &["시장", "카페", "맛집", "먹거리", "음식"]),
    ("체험", &["체험", "액티비티", "테마"]),
];

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by unit tests"
)]
static COUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*곳").expect("count pattern compiles"));

/// Extract a structured [`Intent`] from a free-text message.
///
/// Extraction never fails: anything not recognised is left unset, and the
/// place count falls back to `None` (the default of ten) when no
/// `<number>곳` phrase is present or the number does not fit.
///
/// # Examples
/// ```
/// use metrotrip_core::{TimeOfDay, Transport, parse_intent};
///
/// let intent = parse_intent("서울 야간 전시 3곳만, 대중교통");
/// assert_eq!(intent.area.as_deref(), Some("서울특별시"));
/// assert_eq!(intent.time_of_day, Some(TimeOfDay::Night));
/// assert_eq!(intent.transport, Some(Transport::PublicTransit));
/// assert_eq!(intent.category_l.as_deref(), Some("관광지"));
/// assert_eq!(intent.top_n, Some(3));
/// ```
#[must_use]
pub fn parse_intent(message: &str) -> Intent {
    let text = message.trim();
    let intent = Intent {
        area: AREA_KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, area)| (*area).to_owned()),
        sub_region: None,
        category_l: last_matching_group(text, CATEGORY_GROUPS).map(str::to_owned),
        time_of_day: first_matching_group(text, TIME_OF_DAY_GROUPS),
        transport: last_matching_group(text, TRANSPORT_GROUPS),
        top_n: requested_count(text),
    };
    debug!("parsed intent {intent:?} from {text:?}");
    intent
}

fn matches_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

fn first_matching_group<T: Copy>(message: &str, groups: &[(T, &[&str])]) -> Option<T> {
    groups
        .iter()
        .find(|(_, keywords)| matches_any(message, keywords))
        .map(|(value, _)| *value)
}

fn last_matching_group<T: Copy>(message: &str, groups: &[(T, &[&str])]) -> Option<T> {
    groups
        .iter()
        .rev()
        .find(|(_, keywords)| matches_any(message, keywords))
        .map(|(value, _)| *value)
}

fn requested_count(message: &str) -> Option<i64> {
    COUNT_PATTERN
        .captures(message)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits_value(digits.as_str()))
}

/// Decimal value of ASCII or full-width digits; other scripts are unread.
fn digits_value(digits: &str) -> Option<i64> {
    digits.chars().try_fold(0_i64, |total, digit| {
        let value = digit.to_digit(10).or_else(|| full_width_digit(digit))?;
        total.checked_mul(10)?.checked_add(i64::from(value))
    })
}

fn full_width_digit(digit: char) -> Option<u32> {
    u32::from(digit)
        .checked_sub(u32::from('０'))
        .filter(|offset| *offset < 10)
}
