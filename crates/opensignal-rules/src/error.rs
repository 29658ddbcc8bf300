use thiserror::Error;

/// Errors produced while building a rule set.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A rule id is empty.
    #[error("rule id must not be empty")]
    EmptyRuleId,

    /// A weight would lower the score or is not a real number.
    #[error("rule {rule}: weight must be finite and non-negative, got {weight}")]
    InvalidWeight { rule: String, weight: f64 },

    /// Two rules share the same id.
    #[error("duplicate rule id: {0}")]
    DuplicateRule(String),

    /// The rule set configuration could not be parsed.
    #[error("invalid rule configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias used throughout the rules crate.
pub type Result<T> = std::result::Result<T, RuleError>;
