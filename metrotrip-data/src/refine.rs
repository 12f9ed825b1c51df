//! Offline clean-up of a raw dataset into the curated form.
//!
//! The pass normalises text, drops records outside the plausible rank range
//! and removes duplicate attractions, keeping the best-ranked copy.

use std::collections::HashSet;

use log::{debug, info};
use metrotrip_core::{Column, ColumnSet, Dataset, PoiRecord, Rank, compare_ranks};
use serde::Serialize;

use crate::RefineError;

/// Lowest rank upper bound, however small the 95th percentile.
pub const MIN_RANK_UPPER_BOUND: f64 = 20.0;

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Columns identifying one attraction for de-duplication.
const KEY_COLUMNS: [Column; 3] = [Column::Area, Column::SubRegion, Column::RelatedName];

/// Record counts after each refinement stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineReport {
    /// Records read.
    pub input: usize,
    /// Records left after the rank range filter.
    pub after_rank_filter: usize,
    /// Records left after de-duplication.
    pub after_dedup: usize,
    /// Inclusive upper rank bound, when the range filter ran.
    pub rank_upper_bound: Option<f64>,
}

/// A refined dataset and the report describing how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Refined {
    /// The curated dataset.
    pub dataset: Dataset,
    /// Stage counts.
    pub report: RefineReport,
}

/// Normalise one text cell: ideographic spaces become ASCII spaces,
/// whitespace runs collapse to one space, and the ends are trimmed. Blank
/// text becomes missing.
///
/// # Examples
/// ```
/// use metrotrip_data::normalise_text;
///
/// assert_eq!(normalise_text(" 경복궁\u{3000}\u{3000}야간 ").as_deref(), Some("경복궁 야간"));
/// assert_eq!(normalise_text("\u{3000} "), None);
/// ```
#[must_use]
pub fn normalise_text(text: &str) -> Option<String> {
    let collapsed = text
        .replace(IDEOGRAPHIC_SPACE, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}

fn normalise_record(record: &mut PoiRecord) {
    for column in Column::ALL {
        if let Some(cell) = record.text_mut(column) {
            *cell = cell.as_deref().and_then(normalise_text);
        }
    }
}

/// Linearly interpolated 95th percentile of `sorted`, which must be
/// ascending and non-empty.
#[expect(
    clippy::float_arithmetic,
    reason = "percentile interpolation is floating-point by definition"
)]
fn percentile_95(sorted: &[f64]) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    // Position 0.95 * last, split into whole and twentieths.
    let scaled = last.saturating_mul(19);
    let lower = scaled.checked_div(20)?;
    let twentieths = u8::try_from(scaled.rem_euclid(20)).ok()?;
    let low = *sorted.get(lower)?;
    let high = sorted.get(lower.saturating_add(1)).copied().unwrap_or(low);
    Some(low + (high - low) * f64::from(twentieths) / 20.0)
}

/// Inclusive rank upper bound for `records`, or `None` when no record has a
/// numeric rank.
#[must_use]
pub fn rank_upper_bound(records: &[PoiRecord]) -> Option<f64> {
    let mut ranks: Vec<f64> = records
        .iter()
        .filter_map(|record| record.rank.map(Rank::get))
        .collect();
    ranks.sort_by(f64::total_cmp);
    percentile_95(&ranks).map(|q95| q95.trunc().max(MIN_RANK_UPPER_BOUND))
}

fn within_bounds(rank: Option<Rank>, upper: f64) -> bool {
    rank.is_some_and(|value| (1.0..=upper).contains(&value.get()))
}

fn dedup_key(record: &PoiRecord, columns: ColumnSet) -> [Option<String>; 3] {
    KEY_COLUMNS.map(|column| {
        columns
            .contains(column)
            .then(|| record.text(column).map(str::to_owned))
            .flatten()
    })
}

/// Refine `dataset` into its curated form.
///
/// 1. Every text cell is normalised with [`normalise_text`].
/// 2. When any record has a numeric rank, records outside
///    `1..=max(20, trunc(p95))` are dropped, including unranked records.
/// 3. Records sharing area, sub-region and related name (restricted to the
///    columns present) are reduced to the best-ranked one. The output is in
///    rank order, missing ranks last, ties in input order.
///
/// # Errors
/// Returns [`RefineError::Empty`] when no record survives.
pub fn refine(dataset: Dataset) -> Result<Refined, RefineError> {
    let input = dataset.len();
    let (mut records, columns) = dataset.into_parts();
    records.iter_mut().for_each(normalise_record);

    let upper = rank_upper_bound(&records);
    if let Some(bound) = upper {
        records.retain(|record| within_bounds(record.rank, bound));
        debug!("rank filter kept {} of {input} records (upper bound {bound})", records.len());
    }
    let after_rank_filter = records.len();

    let has_key = KEY_COLUMNS.iter().any(|column| columns.contains(*column));
    records.sort_by(|left, right| compare_ranks(left.rank, right.rank));
    if has_key {
        let mut seen = HashSet::new();
        records.retain(|record| seen.insert(dedup_key(record, columns)));
    }
    let after_dedup = records.len();

    if records.is_empty() {
        return Err(RefineError::Empty { input });
    }
    let report = RefineReport {
        input,
        after_rank_filter,
        after_dedup,
        rank_upper_bound: upper,
    };
    info!(
        "refined {input} records: {after_rank_filter} after rank filter, {after_dedup} after de-duplication"
    );
    Ok(Refined {
        dataset: Dataset::new(records, columns),
        report,
    })
}
