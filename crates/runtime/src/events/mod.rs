//! Typed publish/subscribe bus for gameplay events.
//!
//! Gameplay actions publish [`GameEvent`]s to an explicit [`EventBus`]
//! instance; subsystems that care about an [`EventKind`] register an
//! [`EventHandler`] for it at their own startup. Publishers and subscribers
//! never reference each other directly.

mod bus;
mod handler;
mod types;

pub use bus::EventBus;
pub use handler::{EventHandler, HandlerError};
pub use types::{EventKind, EventPayload, GameEvent};
