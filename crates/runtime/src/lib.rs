//! Runtime orchestration for the synergy engine.
//!
//! This crate wires the immutable synergy catalog, the per-entity specials
//! cache, and the gameplay event bus into a cohesive API. Consumers embed
//! [`Runtime`] to evaluate synergies and share one [`EventBus`] between
//! publishers (gameplay actions) and subscribers (achievement tracking,
//! quest tracking, and other interested subsystems).
//!
//! Modules are organized by responsibility:
//! - [`events`] provides the typed publish/subscribe bus and event taxonomy
//! - [`runtime`] hosts the facade that loads content and owns shared state
pub mod events;
pub mod runtime;

pub use events::{EventBus, EventHandler, EventKind, EventPayload, GameEvent, HandlerError};
pub use runtime::{Runtime, RuntimeConfig, RuntimeError};
