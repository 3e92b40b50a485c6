//! Per-entity cache for the special-payload subset of active synergies.

use std::collections::HashMap;
use std::sync::Arc;

use crate::entity::{EntityId, StatSource};
use crate::synergy::catalog::SynergyCatalog;
use crate::synergy::effect::SpecialMap;

/// Memoizes, per entity, the non-empty special maps of that entity's active
/// synergies.
///
/// Combat resolution consults special payloads on every hit, so this is the
/// hot path; the full catalog scan runs once per entity and the result is
/// reused until [`SpecialsCache::invalidate`] is called. The cache does NOT
/// observe stat changes: whichever service mutates stat investment owns the
/// matching invalidate call, and a read between the mutation and the
/// invalidation returns the stale list by contract.
///
/// Participants without a stat vector (monsters, props) resolve to an empty
/// list and are never inserted into the map.
pub struct SpecialsCache {
    catalog: Arc<SynergyCatalog>,
    entries: HashMap<EntityId, Arc<[SpecialMap]>>,
}

impl SpecialsCache {
    /// Create an empty cache over the given catalog.
    pub fn new(catalog: Arc<SynergyCatalog>) -> Self {
        Self {
            catalog,
            entries: HashMap::new(),
        }
    }

    /// The special maps of the participant's currently-active synergies.
    ///
    /// First call per entity computes and stores the list; later calls
    /// return the stored value without re-reading the participant's stats.
    /// The returned slice is immutable and cheap to clone across readers.
    pub fn active_specials(&mut self, source: &dyn StatSource) -> Arc<[SpecialMap]> {
        let Some(stats) = source.stat_vector() else {
            return Arc::from(Vec::new());
        };

        let id = source.entity_id();
        if let Some(cached) = self.entries.get(&id) {
            return Arc::clone(cached);
        }

        let specials: Arc<[SpecialMap]> = self
            .catalog
            .active_for(&stats)
            .into_iter()
            .filter(|synergy| !synergy.effect.special.is_empty())
            .map(|synergy| synergy.effect.special.clone())
            .collect();

        self.entries.insert(id, Arc::clone(&specials));
        specials
    }

    /// Drop any cached list for the entity.
    ///
    /// Must be called by the service that mutates stat investment. Safe to
    /// call when nothing was cached.
    pub fn invalidate(&mut self, id: EntityId) {
        self.entries.remove(&id);
    }

    /// Drop every cached list (reset utility).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entities currently holding a cached list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The catalog this cache evaluates against.
    pub fn catalog(&self) -> &Arc<SynergyCatalog> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatVector;
    use crate::synergy::catalog::Synergy;
    use crate::synergy::condition::SynergyCondition;
    use crate::synergy::effect::{SpecialValue, SynergyEffect};

    /// Player stand-in whose stats can be mutated between cache reads.
    struct TestPlayer {
        id: EntityId,
        stats: StatVector,
    }

    impl StatSource for TestPlayer {
        fn entity_id(&self) -> EntityId {
            self.id
        }

        fn stat_vector(&self) -> Option<StatVector> {
            Some(self.stats)
        }
    }

    /// Monster stand-in: participates in combat, invests no stat points.
    struct TestMonster;

    impl StatSource for TestMonster {
        fn entity_id(&self) -> EntityId {
            EntityId(900)
        }

        fn stat_vector(&self) -> Option<StatVector> {
            None
        }
    }

    fn special_catalog() -> Arc<SynergyCatalog> {
        let mut boss_effect = SynergyEffect::default();
        boss_effect
            .special
            .insert("boss_damage_mult".into(), SpecialValue::Number(1.5));

        Arc::new(SynergyCatalog::new(vec![
            Synergy {
                name: "giant_slayer".to_string(),
                tier: 2,
                condition: SynergyCondition::per_stat(100, 0, 0, 0, 0),
                effect: boss_effect,
            },
            // Active for everyone, but carries no specials: must be
            // filtered out of the fast-path list.
            Synergy {
                name: "baseline_vigor".to_string(),
                tier: 1,
                condition: SynergyCondition::default(),
                effect: SynergyEffect {
                    hp_pct: 2.0,
                    ..SynergyEffect::default()
                },
            },
        ]))
    }

    #[test]
    fn caches_until_invalidated_even_across_stat_changes() {
        let mut cache = SpecialsCache::new(special_catalog());
        let mut player = TestPlayer {
            id: EntityId(1),
            stats: StatVector::default(),
        };

        // First read: str 0, giant_slayer inactive, list is empty.
        assert!(cache.active_specials(&player).is_empty());

        // Stats change without invalidation: the stale empty list persists.
        player.stats = StatVector::new(100, 0, 0, 0, 0);
        assert!(cache.active_specials(&player).is_empty());

        // Invalidation forces recomputation from the current stats.
        cache.invalidate(player.id);
        let specials = cache.active_specials(&player);
        assert_eq!(specials.len(), 1);
        assert_eq!(
            specials[0].get("boss_damage_mult"),
            Some(&SpecialValue::Number(1.5))
        );
    }

    #[test]
    fn empty_special_maps_are_excluded() {
        let mut cache = SpecialsCache::new(special_catalog());
        let player = TestPlayer {
            id: EntityId(1),
            stats: StatVector::new(100, 100, 100, 100, 100),
        };

        // baseline_vigor is active but special-less; only giant_slayer shows.
        let specials = cache.active_specials(&player);
        assert_eq!(specials.len(), 1);
    }

    #[test]
    fn statless_participant_short_circuits_and_is_never_cached() {
        let mut cache = SpecialsCache::new(special_catalog());

        assert!(cache.active_specials(&TestMonster).is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_without_cached_entry_is_a_no_op() {
        let mut cache = SpecialsCache::new(special_catalog());
        cache.invalidate(EntityId(42));
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_drops_all_entries() {
        let mut cache = SpecialsCache::new(special_catalog());
        for id in 1..=3 {
            let player = TestPlayer {
                id: EntityId(id),
                stats: StatVector::default(),
            };
            cache.active_specials(&player);
        }
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn repeated_reads_return_the_same_list() {
        let mut cache = SpecialsCache::new(special_catalog());
        let player = TestPlayer {
            id: EntityId(7),
            stats: StatVector::new(100, 0, 0, 0, 0),
        };

        let first = cache.active_specials(&player);
        let second = cache.active_specials(&player);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
