//! Error types for envelope validation.

use thiserror::Error;

/// Reasons an [`Event`](crate::Event) is not a well-formed envelope.
#[derive(Debug, Error, PartialEq)]
pub enum EnvelopeError {
    /// The event id is the nil UUID.
    #[error("event id is nil")]
    NilId,

    /// The envelope was produced for a different schema version.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    SchemaVersion { expected: String, found: String },

    /// `rules_applied` and `explain` have drifted apart.
    #[error("risk trail length mismatch: {rules} rules applied, {explanations} explanations")]
    RiskTrailMismatch { rules: usize, explanations: usize },

    /// The risk score is negative, NaN, or infinite.
    #[error("invalid risk score: {0}")]
    InvalidScore(f64),
}

/// Convenience type alias for envelope operations.
pub type Result<T> = std::result::Result<T, EnvelopeError>;
