//! In-memory sink for tests and embedding.

use std::sync::Mutex;

use opensignal_envelope::Event;

use crate::error::{Result, SinkError};
use crate::traits::EventSink;

/// Keeps the most recently written batch in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    events: Mutex<Vec<Event>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the last written batch.
    pub fn events(&self) -> Result<Vec<Event>> {
        let events = self
            .events
            .lock()
            .map_err(|e| SinkError::LockPoisoned(e.to_string()))?;
        Ok(events.clone())
    }
}

impl EventSink for InMemorySink {
    fn write(&self, events: &[Event]) -> Result<()> {
        let mut stored = self
            .events
            .lock()
            .map_err(|e| SinkError::LockPoisoned(e.to_string()))?;
        *stored = events.to_vec();
        Ok(())
    }
}
