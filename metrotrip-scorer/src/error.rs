//! Error types raised by the recommendation entry points.

use metrotrip_core::QueryError;
use thiserror::Error;

/// Errors raised while serving a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// The request parameters were invalid.
    #[error("invalid recommendation request: {0}")]
    Query(#[from] QueryError),
}
