//! Rank-derived base scores and the result ordering.

use std::cmp::Ordering;

use metrotrip_core::{ColumnSet, PoiRecord, ScoredPoi, compare_ranks};

/// Smallest rank used as a divisor, so a rank of zero scores `1e6`.
pub const RANK_EPSILON: f64 = 1e-6;

/// Divisor floor for records without a rank.
pub const MISSING_RANK_FLOOR: f64 = 999.0;

/// Base score rule for one candidate pool.
///
/// A ranked record scores `1 / max(rank, ε)`. An unranked record scores
/// `1 / max(999, largest rank in the pool)`, which is never above the score
/// of any ranked record in the same pool. Without a rank column every record
/// scores `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseScore {
    has_rank_column: bool,
    missing_rank_divisor: f64,
}

impl BaseScore {
    /// Derive the rule for `pool`, drawn from a dataset with `columns`.
    #[must_use]
    pub fn for_pool<'a>(columns: ColumnSet, pool: impl IntoIterator<Item = &'a PoiRecord>) -> Self {
        let largest = pool
            .into_iter()
            .filter_map(|record| record.rank)
            .max()
            .map_or(0.0, metrotrip_core::Rank::get);
        Self {
            has_rank_column: columns.has_rank(),
            missing_rank_divisor: largest.max(MISSING_RANK_FLOOR),
        }
    }

    /// Base score of `record`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scores are reciprocals of ranks"
    )]
    pub fn score(&self, record: &PoiRecord) -> f64 {
        if !self.has_rank_column {
            return 1.0;
        }
        match record.rank {
            Some(rank) => 1.0 / rank.get().max(RANK_EPSILON),
            None => 1.0 / self.missing_rank_divisor,
        }
    }
}

/// Result order: score descending, then rank ascending with missing ranks
/// last.
#[must_use]
pub fn result_order(left: &ScoredPoi, right: &ScoredPoi) -> Ordering {
    right
        .score
        .total_cmp(&left.score)
        .then_with(|| compare_ranks(left.record.rank, right.record.rank))
}

/// Sort rows into result order. The sort is stable, so rows that tie on both
/// keys keep their dataset order.
pub fn sort_rows(rows: &mut [ScoredPoi]) {
    rows.sort_by(result_order);
}
