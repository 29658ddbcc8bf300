//! The [`EventSink`] trait defining the persistence interface.

use opensignal_envelope::Event;

use crate::error::Result;

/// Destination for a batch of processed events.
///
/// Implementations must preserve input order. A failed write may leave the
/// destination partially written; sinks make no atomicity promise.
pub trait EventSink: Send + Sync {
    /// Persist `events`, replacing whatever the sink held before.
    fn write(&self, events: &[Event]) -> Result<()>;
}
