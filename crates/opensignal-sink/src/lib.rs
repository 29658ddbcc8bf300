//! Persistence for processed OpenSignal events.
//!
//! An [`EventSink`] takes a finished batch of events and stores it. The
//! [`NdjsonSink`] writes one JSON object per line to a file, overwriting any
//! previous content; [`read_ndjson`] reads such a file back.

pub mod error;
pub mod memory;
pub mod ndjson;
pub mod traits;

pub use error::{Result, SinkError};
pub use memory::InMemorySink;
pub use ndjson::{read_ndjson, NdjsonSink};
pub use traits::EventSink;
