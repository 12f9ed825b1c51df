//! Contextual weighting rules.
//!
//! A rule pairs a condition on the [`QueryContext`] with a score multiplier.
//! Rules are evaluated in registration order and every matching multiplier is
//! applied to the base score. A context value with no rule changes nothing.

use metrotrip_core::{QueryContext, TimeOfDay, Transport};
use thiserror::Error;

/// Errors raised while registering context rules.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ContextRuleError {
    /// A multiplier was zero, negative or not finite.
    #[error("context multiplier must be finite and positive (got {multiplier})")]
    InvalidMultiplier {
        /// Rejected multiplier.
        multiplier: f64,
    },
}

/// Condition a query context must meet for a rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextCondition {
    /// The visit is planned for this time of day.
    TimeOfDay(TimeOfDay),
    /// The visitor travels this way.
    Transport(Transport),
}

impl ContextCondition {
    /// Report whether `context` satisfies the condition.
    #[must_use]
    pub fn holds(self, context: &QueryContext) -> bool {
        match self {
            Self::TimeOfDay(expected) => context.time_of_day == Some(expected),
            Self::Transport(expected) => context.transport == Some(expected),
        }
    }
}

/// A validated condition and multiplier pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextRule {
    condition: ContextCondition,
    multiplier: f64,
}

impl ContextRule {
    /// Validate and build a rule.
    ///
    /// # Errors
    /// Returns [`ContextRuleError::InvalidMultiplier`] unless `multiplier` is
    /// finite and strictly positive.
    pub fn new(condition: ContextCondition, multiplier: f64) -> Result<Self, ContextRuleError> {
        if multiplier.is_finite() && multiplier > 0.0 {
            Ok(Self {
                condition,
                multiplier,
            })
        } else {
            Err(ContextRuleError::InvalidMultiplier { multiplier })
        }
    }

    /// The condition that triggers the rule.
    #[must_use]
    pub const fn condition(&self) -> ContextCondition {
        self.condition
    }

    /// The factor applied when the rule fires.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

/// Ordered registry of context rules.
///
/// The default registry holds the baseline policy: evening visits × 1.05,
/// then public transit × 1.03.
///
/// # Examples
/// ```
/// use metrotrip_core::{QueryContext, TimeOfDay, Transport};
/// use metrotrip_scorer::{ContextCondition, ContextRules};
///
/// let rules = ContextRules::default();
/// let context = QueryContext::none()
///     .with_time_of_day(TimeOfDay::Evening)
///     .with_transport(Transport::PublicTransit);
/// assert_eq!(rules.factor(&context), 1.05 * 1.03);
///
/// let rules = ContextRules::empty()
///     .with_rule(ContextCondition::Transport(Transport::PrivateCar), 0.9)?;
/// assert_eq!(rules.len(), 1);
/// # Ok::<(), metrotrip_scorer::ContextRuleError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContextRules {
    rules: Vec<ContextRule>,
}

/// Multiplier for evening visits in the baseline policy.
pub const EVENING_MULTIPLIER: f64 = 1.05;
/// Multiplier for public transit in the baseline policy.
pub const PUBLIC_TRANSIT_MULTIPLIER: f64 = 1.03;

impl ContextRules {
    /// A registry with no rules; every context leaves scores unchanged.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule.
    ///
    /// # Errors
    /// Returns [`ContextRuleError::InvalidMultiplier`] for an unusable
    /// multiplier; the registry is unchanged in that case.
    pub fn push(
        &mut self,
        condition: ContextCondition,
        multiplier: f64,
    ) -> Result<(), ContextRuleError> {
        self.rules.push(ContextRule::new(condition, multiplier)?);
        Ok(())
    }

    /// Append a rule while consuming `self`, enabling chaining.
    ///
    /// # Errors
    /// Returns [`ContextRuleError::InvalidMultiplier`] for an unusable
    /// multiplier.
    pub fn with_rule(
        mut self,
        condition: ContextCondition,
        multiplier: f64,
    ) -> Result<Self, ContextRuleError> {
        self.push(condition, multiplier)?;
        Ok(self)
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ContextRule] {
        &self.rules
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Report whether the registry has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Combined multiplier of every rule matching `context`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "context multipliers combine by multiplication"
    )]
    pub fn factor(&self, context: &QueryContext) -> f64 {
        self.rules
            .iter()
            .filter(|rule| rule.condition.holds(context))
            .fold(1.0, |factor, rule| factor * rule.multiplier)
    }
}

impl Default for ContextRules {
    fn default() -> Self {
        Self {
            rules: vec![
                ContextRule {
                    condition: ContextCondition::TimeOfDay(TimeOfDay::Evening),
                    multiplier: EVENING_MULTIPLIER,
                },
                ContextRule {
                    condition: ContextCondition::Transport(Transport::PublicTransit),
                    multiplier: PUBLIC_TRANSIT_MULTIPLIER,
                },
            ],
        }
    }
}
