//! Synergy System - additive stat-investment bonuses.
//!
//! A synergy pairs an activation condition over the five invested stats with
//! an additively-stacking effect. The pipeline is:
//!
//! ```text
//! [ SynergyCatalog (immutable, loaded once) ]
//!      ↓ active_for(stats)
//! [ Active Synergies ]
//!      ↓ EffectBundle::aggregate
//! [ EffectBundle (summed channels) ]
//! ```
//!
//! ## Principles
//!
//! 1. **Immutable catalog**: definitions are created at load time and never
//!    mutated or removed afterwards
//! 2. **Total evaluation**: condition checks are pure and defined for every
//!    stat vector; no partial credit for near-misses
//! 3. **Commutative aggregation**: the bundle is an elementwise sum, so any
//!    ordering or grouping of the same active set yields the same result
//! 4. **Transient results**: active lists and bundles are recomputed on
//!    demand; only the special-payload subset is cached, per entity, until
//!    explicitly invalidated

pub mod aggregate;
pub mod cache;
pub mod catalog;
pub mod condition;
pub mod effect;

pub use aggregate::EffectBundle;
pub use cache::SpecialsCache;
pub use catalog::{Synergy, SynergyCatalog};
pub use condition::SynergyCondition;
pub use effect::{SpecialMap, SpecialValue, SynergyEffect};
