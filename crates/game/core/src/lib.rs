//! Deterministic synergy rules shared across the runtime and offline tools.
//!
//! `synergy-core` defines the canonical data model (stat vectors, synergy
//! definitions, effect bundles) and exposes pure APIs for evaluating which
//! synergies a stat investment activates and for summing their effects.
//! Catalog construction happens once at startup (see the `synergy-content`
//! loaders); everything in this crate operates on the resulting immutable
//! [`SynergyCatalog`].
pub mod entity;
pub mod stats;
pub mod synergy;

pub use entity::{EntityId, StatSource};
pub use stats::StatVector;
pub use synergy::{
    EffectBundle, SpecialMap, SpecialValue, SpecialsCache, Synergy, SynergyCatalog,
    SynergyCondition, SynergyEffect,
};
