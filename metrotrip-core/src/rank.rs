//! Externally supplied relevance ranks.
//!
//! A rank is an ordinal where lower values denote higher relevance. Source
//! data mixes numbers, numeric text and junk, so a record carries an
//! `Option<Rank>`: `None` means "no rank" and always orders after every
//! present rank. Missing ranks are never read as zero.

use std::cmp::Ordering;

/// A finite, non-negative rank value.
///
/// # Examples
/// ```
/// use metrotrip_core::Rank;
///
/// assert_eq!(Rank::parse(" 3 ").map(Rank::get), Some(3.0));
/// assert!(Rank::parse("n/a").is_none());
/// assert!(Rank::new(-1.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rank(f64);

impl Rank {
    /// Accept `value` when it is finite and non-negative.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            // Fold -0.0 into 0.0 so equal ranks compare equal bit-for-bit.
            Some(Self(value.abs()))
        } else {
            None
        }
    }

    /// Coerce rank text into a number.
    ///
    /// Surrounding whitespace is ignored and decimal or exponent forms are
    /// accepted. Anything else, including `NaN` and infinities, is no rank.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().and_then(Self::new)
    }

    /// The numeric value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Rank {}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Order optional ranks ascending with missing ranks last.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use metrotrip_core::{Rank, compare_ranks};
///
/// let one = Rank::new(1.0);
/// assert_eq!(compare_ranks(one, None), Ordering::Less);
/// assert_eq!(compare_ranks(None, None), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_ranks(left: Option<Rank>, right: Option<Rank>) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
