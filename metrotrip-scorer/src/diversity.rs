//! Sub-region diversification of ranked candidates.
//!
//! A two-pass heuristic. The first pass walks candidates in score order and
//! admits each one while its sub-region is below the cap, deferring the rest.
//! The second pass fills any remaining slots from the deferred candidates,
//! again in score order. Records without a sub-region share one group.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use log::debug;
use metrotrip_core::{ScoredPoi, TopN};

/// Per-sub-region cap applied during the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubRegionCap {
    /// `ceil(top_n / distinct sub-regions in the pool)`.
    #[default]
    Proportional,
    /// A fixed number of records per sub-region.
    Fixed(NonZeroUsize),
}

impl SubRegionCap {
    /// Cap for a pool with `groups` distinct sub-regions.
    ///
    /// # Examples
    /// ```
    /// use metrotrip_scorer::SubRegionCap;
    ///
    /// assert_eq!(SubRegionCap::Proportional.threshold(10, 3), 4);
    /// assert_eq!(SubRegionCap::Proportional.threshold(10, 0), 10);
    /// ```
    #[must_use]
    pub fn threshold(self, top_n: usize, groups: usize) -> usize {
        match self {
            Self::Proportional => top_n.div_ceil(groups.max(1)),
            Self::Fixed(cap) => cap.get(),
        }
    }
}

fn group_key(row: &ScoredPoi) -> Option<&str> {
    row.record
        .sub_region
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Select up to `top_n` rows from `ranked`, spreading them across
/// sub-regions.
///
/// `ranked` must already be in result order. The output holds
/// `min(top_n, ranked.len())` rows: first-pass admissions in score order,
/// then second-pass fills in score order.
#[must_use]
pub fn diversify(ranked: Vec<ScoredPoi>, top_n: TopN, cap: SubRegionCap) -> Vec<ScoredPoi> {
    let limit = top_n.get();
    let groups = {
        let mut seen: Vec<Option<&str>> = ranked.iter().map(group_key).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    };
    let threshold = cap.threshold(limit, groups);

    let mut counts: HashMap<Option<String>, usize> = HashMap::new();
    let mut selected = Vec::with_capacity(limit.min(ranked.len()));
    let mut deferred = Vec::new();
    for row in ranked {
        if selected.len() >= limit {
            break;
        }
        let count = counts
            .entry(group_key(&row).map(str::to_owned))
            .or_insert(0);
        if *count < threshold {
            *count = count.saturating_add(1);
            selected.push(row);
        } else {
            deferred.push(row);
        }
    }
    let admitted = selected.len();
    let remaining = limit.saturating_sub(admitted);
    selected.extend(deferred.into_iter().take(remaining));
    debug!(
        "diversified {groups} sub-regions with cap {threshold}: {admitted} admitted, {} filled",
        selected.len().saturating_sub(admitted)
    );
    selected
}
