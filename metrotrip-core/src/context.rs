//! Contextual modifiers attached to a query.
//!
//! Both enums parse from their English identifiers and from the Korean labels
//! used by the conversational front end.
//!
//! # Examples
//! ```
//! use metrotrip_core::{TimeOfDay, Transport};
//!
//! assert_eq!("evening".parse::<TimeOfDay>(), Ok(TimeOfDay::Evening));
//! assert_eq!("저녁".parse::<TimeOfDay>(), Ok(TimeOfDay::Evening));
//! assert_eq!(Transport::PublicTransit.to_string(), "public-transit");
//! ```

use thiserror::Error;

/// Error returned when a context value is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseContextError {
    /// The text names no known time of day.
    #[error("unknown time of day '{0}' (expected morning, midday, evening or night)")]
    TimeOfDay(String),
    /// The text names no known transport mode.
    #[error("unknown transport '{0}' (expected public-transit or private-car)")]
    Transport(String),
}

/// Part of the day the visitor plans to travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TimeOfDay {
    /// 아침.
    Morning,
    /// 점심.
    Midday,
    /// 저녁.
    Evening,
    /// 야간.
    Night,
}

impl TimeOfDay {
    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = ParseContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "아침" | "오전" => Ok(Self::Morning),
            "midday" | "noon" | "점심" => Ok(Self::Midday),
            "evening" | "저녁" => Ok(Self::Evening),
            "night" | "야간" | "밤" | "심야" => Ok(Self::Night),
            _ => Err(ParseContextError::TimeOfDay(s.to_owned())),
        }
    }
}

/// How the visitor gets around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Transport {
    /// 대중교통: subway and bus.
    PublicTransit,
    /// 자가용: own or rented car.
    PrivateCar,
}

impl Transport {
    /// Kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublicTransit => "public-transit",
            Self::PrivateCar => "private-car",
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Transport {
    type Err = ParseContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public-transit" | "public_transit" | "대중교통" => Ok(Self::PublicTransit),
            "private-car" | "private_car" | "car" | "자가용" | "자차" => {
                Ok(Self::PrivateCar)
            }
            _ => Err(ParseContextError::Transport(s.to_owned())),
        }
    }
}

/// Optional contextual modifiers of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QueryContext {
    /// Planned time of day.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_of_day: Option<TimeOfDay>,
    /// Planned transport mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub transport: Option<Transport>,
}

impl QueryContext {
    /// Context with neither modifier set.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            time_of_day: None,
            transport: None,
        }
    }

    /// Set the time of day while returning `self` for chaining.
    #[must_use]
    pub const fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    /// Set the transport mode while returning `self` for chaining.
    #[must_use]
    pub const fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = Some(transport);
        self
    }
}
