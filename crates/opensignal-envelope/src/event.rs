use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EnvelopeError, Result};

/// Envelope shape identifier written into every event.
pub const SCHEMA_VERSION: &str = "1.0";

/// Type-specific payload fields. Opaque to the transport and rule engine.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Globally unique identifier for an event.
///
/// Assigned once by the envelope factory and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns `true` for the nil UUID, which is never issued.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Short representation (first 8 hex chars).
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Risk enrichment attached to every event.
///
/// `rules_applied` and `explain` are append-only and always the same length:
/// entry `i` of `explain` justifies entry `i` of `rules_applied`. The score
/// never decreases: rule weights are validated non-negative before they
/// reach [`RiskBlock::record`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskBlock {
    pub score: f64,
    pub rules_applied: Vec<String>,
    pub explain: Vec<String>,
}

impl RiskBlock {
    /// The zero state: no score, no rules.
    pub fn new() -> Self {
        Self {
            score: 0.0,
            rules_applied: Vec::new(),
            explain: Vec::new(),
        }
    }

    /// Record one rule application.
    pub fn record(
        &mut self,
        rule_id: impl Into<String>,
        weight: f64,
        explanation: impl Into<String>,
    ) {
        self.score += weight;
        self.rules_applied.push(rule_id.into());
        self.explain.push(explanation.into());
    }

    /// Whether the given rule has already contributed to this block.
    pub fn has_rule(&self, rule_id: &str) -> bool {
        self.rules_applied.iter().any(|r| r == rule_id)
    }

    /// Returns `true` if no rule has been applied.
    pub fn is_empty(&self) -> bool {
        self.rules_applied.is_empty()
    }
}

impl Default for RiskBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// The canonical OpenSignal event envelope (schema v1.0).
///
/// Serializes to a flat JSON object with the fields `id`, `type`, `source`,
/// `time`, `data`, `risk`, and `schema_version`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Tag selecting which rules apply (e.g. `sanction_update`).
    #[serde(rename = "type")]
    pub event_type: String,
    /// Identifier of the originating feed.
    pub source: String,
    /// Creation time, UTC.
    pub time: DateTime<Utc>,
    /// Type-specific payload.
    pub data: Payload,
    /// Enrichment block, zeroed at creation.
    pub risk: RiskBlock,
    /// Envelope shape identifier.
    pub schema_version: String,
}

impl Event {
    /// Build an envelope from already-generated identity and time.
    ///
    /// Most callers want [`EnvelopeFactory::create_event`](crate::EnvelopeFactory::create_event)
    /// instead.
    pub fn new(
        id: EventId,
        time: DateTime<Utc>,
        event_type: impl Into<String>,
        source: impl Into<String>,
        data: Payload,
    ) -> Self {
        Self {
            id,
            event_type: event_type.into(),
            source: source.into(),
            time,
            data,
            risk: RiskBlock::new(),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Check that this record is a well-formed envelope.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_nil() {
            return Err(EnvelopeError::NilId);
        }
        if self.schema_version != SCHEMA_VERSION {
            return Err(EnvelopeError::SchemaVersion {
                expected: SCHEMA_VERSION.to_string(),
                found: self.schema_version.clone(),
            });
        }
        if self.risk.rules_applied.len() != self.risk.explain.len() {
            return Err(EnvelopeError::RiskTrailMismatch {
                rules: self.risk.rules_applied.len(),
                explanations: self.risk.explain.len(),
            });
        }
        if !self.risk.score.is_finite() || self.risk.score < 0.0 {
            return Err(EnvelopeError::InvalidScore(self.risk.score));
        }
        Ok(())
    }
}
