//! In-memory transport for demos, tests, and single-process pipelines.
//!
//! [`InMemoryTransport`] keeps the handler registry in a `HashMap` protected
//! by a `RwLock`. It holds no event state: events are delivered and then
//! forgotten.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use tracing::debug;

use opensignal_envelope::Event;

use crate::error::{Result, TransportError};
use crate::handler::EventHandler;
use crate::names::validate_stream_name;
use crate::traits::Transport;

/// An in-memory implementation of [`Transport`].
///
/// Delivery is synchronous. The handler list is snapshotted before any
/// handler runs and the lock is released, so a handler may re-entrantly
/// publish or subscribe on the same transport. A handler added during a
/// publish does not receive the event in flight.
#[derive(Default)]
pub struct InMemoryTransport {
    subscriptions: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
}

impl InMemoryTransport {
    /// Create a transport with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    fn handlers_for(&self, stream: &str) -> Result<Vec<Arc<dyn EventHandler>>> {
        let subs = self
            .subscriptions
            .read()
            .map_err(|e| TransportError::LockPoisoned(e.to_string()))?;
        Ok(subs.get(stream).cloned().unwrap_or_default())
    }
}

impl std::fmt::Debug for InMemoryTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTransport")
            .field("subscriptions", &self.subscriptions().unwrap_or_default())
            .finish()
    }
}

impl Transport for InMemoryTransport {
    fn subscribe(&self, stream: &str, handler: Arc<dyn EventHandler>) -> Result<()> {
        validate_stream_name(stream)?;

        let mut subs = self
            .subscriptions
            .write()
            .map_err(|e| TransportError::LockPoisoned(e.to_string()))?;
        let handlers = subs.entry(stream.to_string()).or_default();
        handlers.push(handler);

        debug!(stream, handlers = handlers.len(), "handler subscribed");
        Ok(())
    }

    fn publish(&self, stream: &str, event: &Event) -> Result<()> {
        validate_stream_name(stream)?;
        event.validate()?;

        let handlers = self.handlers_for(stream)?;
        for (index, handler) in handlers.iter().enumerate() {
            handler
                .handle(event)
                .map_err(|source| TransportError::HandlerFailed {
                    stream: stream.to_string(),
                    index,
                    source,
                })?;
        }

        debug!(stream, id = %event.id, delivered = handlers.len(), "event published");
        Ok(())
    }

    fn subscriptions(&self) -> Result<BTreeMap<String, usize>> {
        let subs = self
            .subscriptions
            .read()
            .map_err(|e| TransportError::LockPoisoned(e.to_string()))?;
        Ok(subs.iter().map(|(k, v)| (k.clone(), v.len())).collect())
    }
}
