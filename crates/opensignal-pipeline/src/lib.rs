//! The OpenSignal ingestion pipeline.
//!
//! Wires the components into one linear flow:
//!
//! ```text
//! EnvelopeFactory -> Transport::publish -> (handler) RuleEngine -> EventCollector
//!                                                                   |-> EventSink
//!                                                                   `-> BriefGenerator
//! ```
//!
//! This is the main entry point for drivers embedding OpenSignal.

pub mod collector;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod synthetic;

pub use collector::EventCollector;
pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Pipeline, PipelineReport};
pub use synthetic::{DemoSource, LoadSource, SyntheticSignal};

// Re-export key types
pub use opensignal_envelope::{Event, EventId, Payload};
pub use opensignal_rules::{RuleEngine, TypeWeightRule};
