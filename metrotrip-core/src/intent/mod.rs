//! Structured travel intents and their mapping onto query requests.
//!
//! An [`Intent`] is what the conversational layer extracts from a message.
//! Converting it into a [`QueryRequest`] is a pure mapping that only validates
//! the requested result count.

mod parser;

pub use parser::parse_intent;

use crate::{QueryContext, QueryError, QueryFilters, QueryRequest, TimeOfDay, TopN, Transport};

/// Structured intent extracted from a visitor's message.
///
/// # Examples
/// ```
/// use metrotrip_core::{Intent, QueryRequest, TimeOfDay};
///
/// let intent = Intent {
///     area: Some("서울특별시".into()),
///     time_of_day: Some(TimeOfDay::Night),
///     top_n: Some(3),
///     ..Intent::default()
/// };
/// let request = QueryRequest::try_from(&intent)?;
/// assert_eq!(request.top_n.get(), 3);
/// assert_eq!(request.filters.area.as_deref(), Some("서울특별시"));
/// # Ok::<(), metrotrip_core::QueryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Intent {
    /// Area, restricted to the capital region by the parser.
    pub area: Option<String>,
    /// Sub-region.
    pub sub_region: Option<String>,
    /// Top-level category.
    pub category_l: Option<String>,
    /// Planned time of day.
    pub time_of_day: Option<TimeOfDay>,
    /// Planned transport mode.
    pub transport: Option<Transport>,
    /// Requested number of places; `None` means the default of ten.
    pub top_n: Option<i64>,
}

impl Intent {
    /// Requested result count after applying the default.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidTopN`] when the requested count is not
    /// positive.
    pub fn top_n(&self) -> Result<TopN, QueryError> {
        self.top_n.map_or(Ok(TopN::DEFAULT), TopN::new)
    }
}

impl TryFrom<&Intent> for QueryRequest {
    type Error = QueryError;

    fn try_from(intent: &Intent) -> Result<Self, Self::Error> {
        let filters = QueryFilters {
            area: intent.area.clone(),
            sub_region: intent.sub_region.clone(),
            category_l: intent.category_l.clone(),
            ..QueryFilters::default()
        };
        let context = QueryContext {
            time_of_day: intent.time_of_day,
            transport: intent.transport,
        };
        Ok(Self::new(intent.top_n()?)
            .with_filters(filters)
            .with_context(context))
    }
}

impl TryFrom<Intent> for QueryRequest {
    type Error = QueryError;

    fn try_from(intent: Intent) -> Result<Self, Self::Error> {
        Self::try_from(&intent)
    }
}
