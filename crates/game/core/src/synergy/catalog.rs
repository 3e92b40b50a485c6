//! The immutable synergy catalog and the condition evaluator entry point.

use crate::stats::StatVector;

use super::condition::SynergyCondition;
use super::effect::SynergyEffect;

/// A named rule pairing an activation condition with an additive effect.
///
/// Synergies are created once at catalog load time and never mutated or
/// removed at runtime. `tier` (1–3) groups synergies for display; it does
/// not affect activation and tiers are not mutually exclusive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Synergy {
    pub name: String,
    pub tier: u8,
    pub condition: SynergyCondition,
    pub effect: SynergyEffect,
}

/// Process-wide, ordered list of synergy definitions.
///
/// Order matches the source table and matters only for enumeration and
/// display; aggregation over any subset is commutative.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynergyCatalog {
    entries: Vec<Synergy>,
}

impl SynergyCatalog {
    /// Build a catalog from already-validated definitions, preserving order.
    pub fn new(entries: Vec<Synergy>) -> Self {
        Self { entries }
    }

    /// All synergies whose condition the given stats satisfy, in catalog
    /// order.
    ///
    /// This is the uncached full listing: it is recomputed from the current
    /// stats on every call, so it can never serve stale results. Combat hot
    /// paths that only need special payloads should go through
    /// [`super::cache::SpecialsCache`] instead.
    pub fn active_for(&self, stats: &StatVector) -> Vec<&Synergy> {
        self.entries
            .iter()
            .filter(|synergy| synergy.condition.is_met(stats))
            .collect()
    }

    /// Look up a synergy by name (display/inspection use).
    pub fn get(&self, name: &str) -> Option<&Synergy> {
        self.entries.iter().find(|synergy| synergy.name == name)
    }

    /// Iterate all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Synergy> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synergy(name: &str, condition: SynergyCondition) -> Synergy {
        Synergy {
            name: name.to_string(),
            tier: 1,
            condition,
            effect: SynergyEffect::default(),
        }
    }

    #[test]
    fn active_for_filters_unmet_conditions() {
        let catalog = SynergyCatalog::new(vec![
            synergy("warrior", SynergyCondition::per_stat(50, 0, 0, 0, 0)),
            synergy("balanced", SynergyCondition::uniform(30)),
            synergy("baseline", SynergyCondition::default()),
        ]);

        let active = catalog.active_for(&StatVector::new(50, 0, 0, 0, 0));
        let names: Vec<&str> = active.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["warrior", "baseline"]);
    }

    #[test]
    fn active_for_preserves_catalog_order() {
        let catalog = SynergyCatalog::new(vec![
            synergy("third", SynergyCondition::default()),
            synergy("first", SynergyCondition::default()),
            synergy("second", SynergyCondition::default()),
        ]);

        let names: Vec<&str> = catalog
            .active_for(&StatVector::default())
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn get_finds_by_name() {
        let catalog = SynergyCatalog::new(vec![synergy("warrior", SynergyCondition::default())]);
        assert!(catalog.get("warrior").is_some());
        assert!(catalog.get("mage").is_none());
    }
}
