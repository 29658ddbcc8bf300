use tracing::{debug, warn};

use opensignal_envelope::Event;

use crate::builtin::default_rules;
use crate::config::RuleSetConfig;
use crate::error::{Result, RuleError};
use crate::rule::Rule;

// ---------------------------------------------------------------------------
// RuleEngine
// ---------------------------------------------------------------------------

/// Ordered, additive rule pipeline.
///
/// Every rule is evaluated against every event, in insertion order. Matching
/// rules are not mutually exclusive: each adds its own weight and trail
/// entry. Rules never see each other's contributions through the score, so
/// adding a rule cannot change what earlier rules record.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// An engine with no rules; every event passes through unchanged.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// An engine with the standard ruleset:
    /// `economic_baseline` -> `base_sanction_weight`
    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        for rule in default_rules() {
            engine.rules.push(Box::new(rule));
        }
        engine
    }

    /// Build an engine from a declarative rule set, validating every rule.
    pub fn from_config(config: &RuleSetConfig) -> Result<Self> {
        let mut engine = Self::new();
        for rule in &config.rules {
            rule.validate()?;
            engine.add_rule(Box::new(rule.clone()))?;
        }
        Ok(engine)
    }

    /// Append a rule to the end of the pipeline.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) -> Result<()> {
        if rule.id().is_empty() {
            return Err(RuleError::EmptyRuleId);
        }
        if self.rules.iter().any(|r| r.id() == rule.id()) {
            return Err(RuleError::DuplicateRule(rule.id().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Number of rules in the pipeline.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Rule ids in evaluation order.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Enrich an event, returning the scored record.
    ///
    /// A rule whose id is already present in `rules_applied` is skipped, so
    /// running the engine twice over the same event does not double-score it.
    /// Hits with a negative or non-finite weight are dropped.
    pub fn apply(&self, mut event: Event) -> Event {
        for rule in &self.rules {
            if event.risk.has_rule(rule.id()) {
                debug!(id = %event.id, rule = rule.id(), "rule already applied; skipping");
                continue;
            }
            let Some(hit) = rule.evaluate(&event) else {
                continue;
            };
            if !hit.is_valid() {
                warn!(rule = rule.id(), weight = hit.weight, "discarding invalid rule weight");
                continue;
            }
            event.risk.record(rule.id(), hit.weight, hit.explanation);
            debug!(id = %event.id, rule = rule.id(), score = event.risk.score, "rule applied");
        }
        event
    }

    /// Enrich a copy of the event, leaving the original untouched.
    pub fn enrich(&self, event: &Event) -> Event {
        self.apply(event.clone())
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

/// Apply the standard ruleset to an event.
pub fn apply_rules(event: Event) -> Event {
    RuleEngine::with_default_rules().apply(event)
}
