//! Canonical event envelope for OpenSignal.
//!
//! Every signal that enters the pipeline is wrapped in an [`Event`]: a
//! vendor-neutral record carrying a unique identity, a UTC creation time, the
//! originating feed, an opaque JSON payload, and a [`RiskBlock`] that the rule
//! engine fills in later.
//!
//! # Key Types
//!
//! - [`Event`] — The envelope itself
//! - [`EventId`] — UUID-backed identifier, never reused
//! - [`RiskBlock`] — Score plus the append-only rule trail
//! - [`EnvelopeFactory`] — Builds events from an injected [`IdGenerator`] and [`Clock`]

pub mod clock;
pub mod error;
pub mod event;
pub mod factory;
pub mod identity;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{EnvelopeError, Result};
pub use event::{Event, EventId, Payload, RiskBlock, SCHEMA_VERSION};
pub use factory::{create_event, EnvelopeFactory};
pub use identity::{IdGenerator, SequentialIdGenerator, UuidGenerator};
