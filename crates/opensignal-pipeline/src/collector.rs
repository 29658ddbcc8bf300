use std::sync::{Arc, Mutex};

use tracing::debug;

use opensignal_envelope::Event;
use opensignal_rules::RuleEngine;
use opensignal_transport::{EventHandler, HandlerError};

use crate::error::{PipelineError, PipelineResult};

/// Shared, append-only accumulator for processed events.
///
/// Clones share the same buffer, so a clone can live inside a transport
/// handler while the pipeline keeps another to drain at the end.
#[derive(Clone, Debug, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) -> PipelineResult<()> {
        self.lock()?.push(event);
        Ok(())
    }

    pub fn len(&self) -> PipelineResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> PipelineResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Copy of everything collected so far.
    pub fn snapshot(&self) -> PipelineResult<Vec<Event>> {
        Ok(self.lock()?.clone())
    }

    /// Drain the buffer.
    pub fn take(&self) -> PipelineResult<Vec<Event>> {
        Ok(std::mem::take(&mut *self.lock()?))
    }

    /// Handler that enriches each delivered event once and collects the
    /// enriched copy. The delivered event itself is left untouched.
    pub fn enriching_handler(&self, engine: Arc<RuleEngine>) -> Arc<dyn EventHandler> {
        let collector = self.clone();
        Arc::new(move |event: &Event| -> Result<(), HandlerError> {
            let enriched = engine.enrich(event);
            debug!(id = %enriched.id, score = enriched.risk.score, "event enriched");
            collector.push(enriched)?;
            Ok(())
        })
    }

    fn lock(&self) -> PipelineResult<std::sync::MutexGuard<'_, Vec<Event>>> {
        self.events
            .lock()
            .map_err(|e| PipelineError::LockPoisoned(e.to_string()))
    }
}
