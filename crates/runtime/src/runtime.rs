//! The runtime facade: catalog + cache + bus wired together.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use synergy_content::ContentFactory;
use synergy_core::{
    EffectBundle, EntityId, SpecialMap, SpecialsCache, StatSource, StatVector, Synergy,
    SynergyCatalog,
};

use crate::events::EventBus;

/// Runtime configuration.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory containing content files (`synergies.ron`).
    pub data_dir: PathBuf,
}

impl RuntimeConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

/// Runtime errors.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The synergy catalog could not be loaded at startup. The process
    /// cannot run without its definitions, so this is fatal.
    #[error("failed to load synergy catalog: {0}")]
    CatalogLoad(String),
}

/// Owns the immutable catalog, the per-entity specials cache, and the
/// shared event bus.
///
/// One `Runtime` is constructed at process start; gameplay services borrow
/// it (or clone its bus handle) rather than reaching for globals. Synergy
/// evaluation and cache access are synchronous; event dispatch is the only
/// suspending operation in this subsystem.
pub struct Runtime {
    catalog: Arc<SynergyCatalog>,
    cache: Mutex<SpecialsCache>,
    bus: Arc<EventBus>,
}

impl Runtime {
    /// Load content from the configured data directory and start.
    ///
    /// A file-level failure on the synergy table aborts startup; malformed
    /// rows inside a readable table degrade to defaults during the load.
    pub fn start(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        let factory = ContentFactory::new(&config.data_dir);
        let catalog = factory
            .load_synergies()
            .map_err(|e| RuntimeError::CatalogLoad(e.to_string()))?;

        tracing::info!(
            target: "runtime",
            synergies = catalog.len(),
            data_dir = %config.data_dir.display(),
            "synergy catalog loaded"
        );

        Ok(Self::with_catalog(catalog))
    }

    /// Start from an already-built catalog (tests, embedded tools).
    pub fn with_catalog(catalog: SynergyCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            cache: Mutex::new(SpecialsCache::new(Arc::clone(&catalog))),
            bus: Arc::new(EventBus::new()),
            catalog,
        }
    }

    /// The loaded synergy catalog.
    pub fn catalog(&self) -> &SynergyCatalog {
        &self.catalog
    }

    /// Shared handle to the event bus.
    pub fn bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.bus)
    }

    /// Every synergy the given stats currently activate (uncached full
    /// listing, for UI/inspection).
    pub fn evaluate(&self, stats: &StatVector) -> Vec<&Synergy> {
        self.catalog.active_for(stats)
    }

    /// The summed effect bundle for the given stats.
    pub fn aggregate_for(&self, stats: &StatVector) -> EffectBundle {
        EffectBundle::aggregate(self.catalog.active_for(stats))
    }

    /// Cached special payloads of the participant's active synergies
    /// (combat fast path). See [`SpecialsCache`] for staleness semantics.
    pub fn active_specials(&self, source: &dyn StatSource) -> Arc<[SpecialMap]> {
        let mut cache = self.cache.lock().expect("specials cache lock poisoned");
        cache.active_specials(source)
    }

    /// Drop the cached specials for an entity. Must be called by whichever
    /// service mutates that entity's stat investment.
    pub fn invalidate(&self, id: EntityId) {
        let mut cache = self.cache.lock().expect("specials cache lock poisoned");
        cache.invalidate(id);
    }
}
