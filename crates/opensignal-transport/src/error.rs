//! Error types for transport operations.

use opensignal_envelope::EnvelopeError;
use thiserror::Error;

use crate::handler::HandlerError;

/// Errors that can occur while subscribing or publishing.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The stream name is empty or malformed.
    #[error("invalid stream name {name:?}: {reason}")]
    InvalidStreamName { name: String, reason: String },

    /// The published record is not a well-formed envelope.
    #[error("invalid event: {0}")]
    InvalidEvent(#[from] EnvelopeError),

    /// A subscribed handler returned an error. Handlers after it did not run.
    #[error("handler {index} on stream {stream} failed: {source}")]
    HandlerFailed {
        stream: String,
        index: usize,
        #[source]
        source: HandlerError,
    },

    /// The subscription registry lock was poisoned by a panicking thread.
    #[error("subscription registry lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Convenience type alias for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;
