//! Data-driven synergy definitions and loaders.
//!
//! This crate turns the external synergy table into an immutable
//! [`synergy_core::SynergyCatalog`]:
//! - Synergy table rows (data-driven via RON, spreadsheet-shaped)
//! - Free-form "special" effect payloads (JSON objects inside the table)
//!
//! Content is loaded once at startup by the runtime and never appears in
//! game state. Malformed cells degrade to safe defaults with a logged
//! warning; only a file-level failure aborts the load.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, SynergyLoader, SynergyRow, SynergyTable};
