use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::event::{Event, Payload};
use crate::identity::{IdGenerator, UuidGenerator};

/// Builds canonical event envelopes.
///
/// Identity and time come from the injected [`IdGenerator`] and [`Clock`].
/// No validation of the event type or payload shape is performed: any string
/// and any JSON object are accepted and wrapped unchanged.
#[derive(Debug, Default)]
pub struct EnvelopeFactory<I = UuidGenerator, C = SystemClock> {
    ids: I,
    clock: C,
}

impl EnvelopeFactory {
    /// Factory backed by UUIDv7 ids and the system clock.
    pub fn system() -> Self {
        Self::new(UuidGenerator, SystemClock)
    }
}

impl<I: IdGenerator, C: Clock> EnvelopeFactory<I, C> {
    pub fn new(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Create a new event with a fresh id, the current time, and a zeroed
    /// risk block.
    pub fn create_event(
        &self,
        event_type: impl Into<String>,
        source: impl Into<String>,
        data: Payload,
    ) -> Event {
        let event = Event::new(
            self.ids.next_id(),
            self.clock.now(),
            event_type,
            source,
            data,
        );
        debug!(id = %event.id, kind = %event.event_type, "event created");
        event
    }
}

/// Create an event with system identity and time.
pub fn create_event(
    event_type: impl Into<String>,
    source: impl Into<String>,
    data: Payload,
) -> Event {
    EnvelopeFactory::system().create_event(event_type, source, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::identity::SequentialIdGenerator;
    use crate::event::SCHEMA_VERSION;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn payload(entity: &str) -> Payload {
        let mut data = Payload::new();
        data.insert("entity".into(), json!(entity));
        data
    }

    fn deterministic_factory() -> EnvelopeFactory<SequentialIdGenerator, FixedClock> {
        EnvelopeFactory::new(
            SequentialIdGenerator::new(),
            FixedClock(Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap()),
        )
    }

    #[test]
    fn wraps_inputs_unchanged() {
        let factory = deterministic_factory();
        let data = payload("Example Corp");
        let event = factory.create_event("sanction_update", "public_list", data.clone());

        assert_eq!(event.event_type, "sanction_update");
        assert_eq!(event.source, "public_list");
        assert_eq!(event.data, data);
        assert_eq!(event.schema_version, SCHEMA_VERSION);
        assert!(event.risk.is_empty());
        assert_eq!(event.risk.score, 0.0);
    }

    #[test]
    fn deterministic_identity_and_time() {
        let factory = deterministic_factory();
        let a = factory.create_event("x", "s", Payload::new());
        let b = factory.create_event("x", "s", Payload::new());

        assert_eq!(a.id.as_uuid().as_u128(), 1);
        assert_eq!(b.id.as_uuid().as_u128(), 2);
        assert_eq!(a.time, b.time);
    }

    #[test]
    fn accepts_any_type_and_payload() {
        let factory = deterministic_factory();
        let event = factory.create_event("", "", Payload::new());
        assert_eq!(event.event_type, "");
        assert!(event.validate().is_ok());
    }

    #[test]
    fn system_factory_issues_distinct_ids() {
        let a = create_event("policy_announcement", "public_bulletin", Payload::new());
        let b = create_event("policy_announcement", "public_bulletin", Payload::new());
        assert_ne!(a.id, b.id);
        assert!(b.time >= a.time);
    }
}
