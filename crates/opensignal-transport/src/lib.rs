//! Publish/subscribe transport for OpenSignal.
//!
//! A transport maps stream names to ordered handler lists. Publishing an
//! event invokes every handler registered on that stream, synchronously and
//! in registration order, before `publish` returns. Events are not buffered:
//! a handler subscribed after a publish never sees that event.
//!
//! # Modules
//!
//! - [`error`] — Error types for transport operations
//! - [`handler`] — The [`EventHandler`] callback trait
//! - [`traits`] — The [`Transport`] trait defining the pub/sub interface
//! - [`names`] — Stream name validation
//! - [`memory`] — In-memory [`InMemoryTransport`]

pub mod error;
pub mod handler;
pub mod memory;
pub mod names;
pub mod traits;

pub use error::{Result, TransportError};
pub use handler::{EventHandler, HandlerError};
pub use memory::InMemoryTransport;
pub use names::{validate_stream_name, DEFAULT_STREAM};
pub use traits::Transport;
