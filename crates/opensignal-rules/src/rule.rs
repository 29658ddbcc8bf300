use serde::{Deserialize, Serialize};

use opensignal_envelope::Event;

use crate::error::{Result, RuleError};

// ---------------------------------------------------------------------------
// RuleHit
// ---------------------------------------------------------------------------

/// Contribution of a matching rule: how much to add and why.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleHit {
    pub weight: f64,
    pub explanation: String,
}

impl RuleHit {
    pub fn new(weight: f64, explanation: impl Into<String>) -> Self {
        Self {
            weight,
            explanation: explanation.into(),
        }
    }

    /// A hit is usable only if it cannot lower the score.
    pub fn is_valid(&self) -> bool {
        self.weight.is_finite() && self.weight >= 0.0
    }
}

// ---------------------------------------------------------------------------
// Rule trait
// ---------------------------------------------------------------------------

/// A single scoring rule.
///
/// Rules inspect the event and either abstain (`None`) or return the weight
/// and explanation to record. They never mutate the event themselves; the
/// engine owns the risk trail.
///
/// The trait is object-safe and `Send + Sync` so rules can be stored in a
/// `Vec<Box<dyn Rule>>` and shared across threads.
pub trait Rule: Send + Sync {
    /// Stable identifier recorded in `rules_applied`.
    fn id(&self) -> &str;

    /// Decide whether the rule fires for this event.
    fn evaluate(&self, event: &Event) -> Option<RuleHit>;
}

// ---------------------------------------------------------------------------
// TypeWeightRule
// ---------------------------------------------------------------------------

/// Fires on every event of one type and adds a fixed weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeWeightRule {
    /// Identifier recorded in `rules_applied`.
    pub id: String,
    /// Event type this rule matches exactly.
    pub event_type: String,
    /// Score contribution.
    pub weight: f64,
    /// Justification recorded in `explain`.
    pub explanation: String,
}

impl TypeWeightRule {
    /// Build a validated rule.
    pub fn new(
        id: impl Into<String>,
        event_type: impl Into<String>,
        weight: f64,
        explanation: impl Into<String>,
    ) -> Result<Self> {
        let rule = Self {
            id: id.into(),
            event_type: event_type.into(),
            weight,
            explanation: explanation.into(),
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Check the invariants that deserialization cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(RuleError::EmptyRuleId);
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(RuleError::InvalidWeight {
                rule: self.id.clone(),
                weight: self.weight,
            });
        }
        Ok(())
    }
}

impl Rule for TypeWeightRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, event: &Event) -> Option<RuleHit> {
        (event.event_type == self.event_type)
            .then(|| RuleHit::new(self.weight, self.explanation.clone()))
    }
}
