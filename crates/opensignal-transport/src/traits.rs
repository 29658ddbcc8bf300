//! The [`Transport`] trait defining the publish/subscribe interface.
//!
//! Any backend (in-memory, durable queue, broker) implements this trait so
//! the pipeline driver can be pointed at it without changes.

use std::collections::BTreeMap;
use std::sync::Arc;

use opensignal_envelope::Event;

use crate::error::Result;
use crate::handler::{EventHandler, HandlerError};

/// Publish/subscribe backend.
///
/// Implementations must deliver to the handlers of a single stream in the
/// order they were subscribed. No ordering is promised across streams.
pub trait Transport: Send + Sync {
    /// Append `handler` to the handler list of `stream`, creating the list
    /// if absent.
    ///
    /// Fails with [`TransportError::InvalidStreamName`](crate::TransportError::InvalidStreamName)
    /// if the name is empty or malformed.
    fn subscribe(&self, stream: &str, handler: Arc<dyn EventHandler>) -> Result<()>;

    /// Deliver `event` to every handler on `stream`.
    ///
    /// Publishing to a stream with no subscribers is a silent no-op. Fails if
    /// the stream name is invalid, the event is malformed, or a handler
    /// returns an error.
    fn publish(&self, stream: &str, event: &Event) -> Result<()>;

    /// Handler count per stream. Debugging aid.
    fn subscriptions(&self) -> Result<BTreeMap<String, usize>>;

    /// Number of handlers registered on one stream.
    fn subscriber_count(&self, stream: &str) -> Result<usize> {
        Ok(self.subscriptions()?.get(stream).copied().unwrap_or(0))
    }

    /// Subscribe a closure.
    fn subscribe_fn<F>(&self, stream: &str, handler: F) -> Result<()>
    where
        Self: Sized,
        F: Fn(&Event) -> std::result::Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.subscribe(stream, Arc::new(handler))
    }
}
