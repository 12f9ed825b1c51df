//! The current dataset snapshot and its atomic replacement.
//!
//! Queries read a [`Catalogue`] through an `Arc` taken from a
//! [`SharedCatalogue`]. A reload builds a complete new catalogue and swaps the
//! reference, so an in-flight query sees either the old snapshot or the new
//! one in full.

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::{Dataset, Facets, QueryRequest, Recommender, ResultSet};

/// A dataset bundled with the facets derived from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalogue {
    dataset: Dataset,
    facets: Facets,
}

impl Catalogue {
    /// Wrap a freshly loaded dataset, computing its facets.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        let facets = Facets::extract(&dataset);
        Self { dataset, facets }
    }

    /// The dataset snapshot.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Facets of the dataset snapshot.
    #[must_use]
    pub const fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Run a query against this snapshot.
    #[must_use]
    pub fn recommend(&self, recommender: &dyn Recommender, request: &QueryRequest) -> ResultSet {
        recommender.recommend(&self.dataset, request)
    }
}

/// Shared handle to the current [`Catalogue`].
///
/// Many readers, one writer path ([`SharedCatalogue::replace`]). A poisoned
/// lock is recovered: the stored `Arc` is always a complete snapshot, so no
/// reader can observe a partial write.
///
/// # Examples
/// ```
/// use metrotrip_core::{Catalogue, Dataset, PoiRecord, SharedCatalogue};
///
/// let shared = SharedCatalogue::default();
/// let before = shared.snapshot();
/// assert!(before.dataset().is_empty());
///
/// shared.replace(Catalogue::new(Dataset::with_inferred_columns(vec![PoiRecord::default()])));
/// assert_eq!(shared.snapshot().dataset().len(), 1);
/// // Readers holding the old snapshot are unaffected.
/// assert!(before.dataset().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SharedCatalogue {
    current: RwLock<Arc<Catalogue>>,
}

impl SharedCatalogue {
    /// Start with `catalogue` as the current snapshot.
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalogue)),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalogue> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install a new snapshot, returning the one it replaced.
    pub fn replace(&self, catalogue: Catalogue) -> Arc<Catalogue> {
        let next = Arc::new(catalogue);
        debug!("replacing catalogue with {} records", next.dataset().len());
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}
