//! Subscriber callbacks.

use opensignal_envelope::Event;

/// Error type a handler may return. Boxed so handlers can surface any error.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A callback invoked for every event published on a subscribed stream.
///
/// Handlers receive a shared reference: they cannot mutate the event other
/// handlers will see. A handler that enriches events produces a new record
/// and stores it wherever it accumulates output.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event) -> Result<(), HandlerError>;
}

impl<F> EventHandler for F
where
    F: Fn(&Event) -> Result<(), HandlerError> + Send + Sync,
{
    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        self(event)
    }
}
