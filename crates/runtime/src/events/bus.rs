//! Kind-keyed event bus implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::handler::EventHandler;
use super::types::{EventKind, GameEvent};

/// Kind-keyed event bus.
///
/// One instance is constructed at process start and passed (behind an
/// [`Arc`]) to every publisher and subscriber; there is no global state.
/// Registrations are the only state the bus keeps: events are fire-and-
/// forget, with no retry, acknowledgement, or persistence.
///
/// # Dispatch Ordering
///
/// [`EventBus::publish`] is the only suspending operation: it awaits each
/// handler to completion before invoking the next, in registration order.
/// The subscriber list is snapshotted when the publish starts, so a
/// subscribe or unsubscribe racing a publish of the same kind affects only
/// later publishes, never the in-flight iteration.
pub struct EventBus {
    subscribers: RwLock<HashMap<EventKind, Vec<Arc<dyn EventHandler>>>>,
}

impl EventBus {
    /// Creates a new bus with no registrations.
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Register `handler` for `kind`.
    ///
    /// Idempotent: if a handler with the same name is already registered
    /// for this kind, the call is a no-op and a later publish still invokes
    /// it once.
    pub fn subscribe(&self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        let mut subscribers = self
            .subscribers
            .write()
            .expect("event bus lock poisoned");
        let handlers = subscribers.entry(kind).or_default();

        if handlers
            .iter()
            .any(|existing| existing.name() == handler.name())
        {
            tracing::debug!(
                target: "runtime::events",
                handler = handler.name(),
                kind = %kind,
                "handler already subscribed, ignoring duplicate"
            );
            return;
        }

        tracing::debug!(
            target: "runtime::events",
            handler = handler.name(),
            kind = %kind,
            "handler subscribed"
        );
        handlers.push(handler);
    }

    /// Remove the registration named `name` for `kind`, if present.
    ///
    /// Removing a handler that was never registered, or for a kind with no
    /// registrations, is a no-op.
    pub fn unsubscribe(&self, kind: EventKind, name: &str) {
        let mut subscribers = self
            .subscribers
            .write()
            .expect("event bus lock poisoned");
        if let Some(handlers) = subscribers.get_mut(&kind) {
            handlers.retain(|handler| handler.name() != name);
        }
    }

    /// Dispatch `event` to every handler registered for its kind.
    ///
    /// Handlers run sequentially in registration order; each is awaited to
    /// completion before the next starts, and there is no timeout. A
    /// handler error is logged with its identity and the event kind, then
    /// dispatch continues with the remaining handlers; nothing propagates
    /// to the publisher. With no registrations the event is dropped
    /// immediately.
    pub async fn publish(&self, event: &GameEvent) {
        let snapshot: Vec<Arc<dyn EventHandler>> = {
            let subscribers = self
                .subscribers
                .read()
                .expect("event bus lock poisoned");
            match subscribers.get(&event.kind) {
                Some(handlers) if !handlers.is_empty() => handlers.clone(),
                _ => {
                    // No subscribers for this kind - this is normal, not an error
                    tracing::trace!(
                        target: "runtime::events",
                        kind = %event.kind,
                        "no subscribers for event"
                    );
                    return;
                }
            }
        };

        for handler in snapshot {
            if let Err(error) = handler.handle(event).await {
                tracing::error!(
                    target: "runtime::events",
                    handler = handler.name(),
                    kind = %event.kind,
                    error = %error,
                    "event handler failed, continuing with remaining handlers"
                );
            }
        }
    }

    /// Current registration count for `kind` (0 if none).
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        let subscribers = self
            .subscribers
            .read()
            .expect("event bus lock poisoned");
        subscribers.get(&kind).map_or(0, Vec::len)
    }

    /// Remove every registration (test/reset utility).
    pub fn clear_all(&self) {
        let mut subscribers = self
            .subscribers
            .write()
            .expect("event bus lock poisoned");
        subscribers.clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
