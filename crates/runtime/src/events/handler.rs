//! The subscriber side of the event bus.

use async_trait::async_trait;

use super::types::GameEvent;

/// Error returned by an event handler.
///
/// Handler failures are per-subscriber and recoverable: the bus logs them
/// with context and moves on to the next subscriber, and nothing reaches
/// the publisher. A throwing achievement tracker silently misses that
/// achievement rather than blocking gameplay.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl HandlerError {
    /// Failure described in prose.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Failure bubbled up from the subscriber's own subsystem.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// An asynchronous subscriber invoked once per published event of the kinds
/// it registered for.
///
/// Handlers are registered during their owning subsystem's startup and are
/// expected to stay registered for the process lifetime. Within one publish
/// call, handlers run sequentially in registration order; a handler that
/// suspends delays its successors, never overlaps them.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Stable name identifying this registration.
    ///
    /// The bus keys registrations by this name: subscribing a second
    /// handler with the same name for the same kind is a no-op, and
    /// unsubscribing takes the name.
    fn name(&self) -> &'static str;

    /// React to one event.
    async fn handle(&self, event: &GameEvent) -> Result<(), HandlerError>;
}
