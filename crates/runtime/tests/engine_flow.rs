//! End-to-end flow: load the catalog from a data directory, evaluate and
//! aggregate synergies, exercise the specials cache, and round-trip an
//! event through the bus.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use runtime::{EventHandler, EventKind, GameEvent, HandlerError, Runtime, RuntimeConfig};
use synergy_core::{EntityId, SpecialValue, StatSource, StatVector};

const SYNERGY_TABLE: &str = r#"SynergyTable(
    rows: [
        SynergyRow(
            name: "warrior_blood",
            tier: "1",
            str_min: "50",
            hp_pct: "10",
            description: "HP +10%",
        ),
        SynergyRow(
            name: "balanced_growth",
            tier: "2",
            all_min: "30",
            phys_dmg_pct: "5",
            description: "Physical damage +5%",
        ),
        SynergyRow(
            name: "giant_slayer",
            tier: "3",
            str_min: "100",
            special: "{\"boss_damage_mult\": 1.5}",
        ),
    ],
)"#;

struct Player {
    id: EntityId,
    stats: StatVector,
}

impl StatSource for Player {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn stat_vector(&self) -> Option<StatVector> {
        Some(self.stats)
    }
}

/// Accumulates gold amounts from events, like a quest/achievement consumer.
#[derive(Default)]
struct GoldLedger {
    total: AtomicU64,
}

#[async_trait]
impl EventHandler for GoldLedger {
    fn name(&self) -> &'static str {
        "gold_ledger"
    }

    async fn handle(&self, event: &GameEvent) -> Result<(), HandlerError> {
        let amount = event
            .field("amount")
            .and_then(|value| value.as_u64())
            .ok_or_else(|| HandlerError::message("gold event without amount"))?;
        self.total.fetch_add(amount, Ordering::SeqCst);
        Ok(())
    }
}

fn start_runtime() -> Runtime {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("synergies.ron"), SYNERGY_TABLE).expect("write table");
    Runtime::start(RuntimeConfig::new(dir.path())).expect("runtime should start")
}

#[test]
fn evaluate_and_aggregate_from_loaded_catalog() {
    let rt = start_runtime();
    assert_eq!(rt.catalog().len(), 3);

    // Pure warrior build: meets str_min 50, misses the uniform minimum.
    let stats = StatVector::new(50, 0, 0, 0, 0);
    let names: Vec<&str> = rt.evaluate(&stats).iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["warrior_blood"]);

    let bundle = rt.aggregate_for(&stats);
    assert_eq!(bundle.hp_pct, 10.0);
    assert_eq!(bundle.phys_dmg_pct, 0.0);
    assert_eq!(bundle.description_text(), "HP +10%");

    // Balanced build: uniform minimum holds, str threshold does not.
    let stats = StatVector::new(30, 30, 30, 30, 30);
    let bundle = rt.aggregate_for(&stats);
    assert_eq!(bundle.phys_dmg_pct, 5.0);
    assert_eq!(bundle.hp_pct, 0.0);
}

#[test]
fn specials_cache_is_stale_until_invalidated() {
    let rt = start_runtime();
    let mut player = Player {
        id: EntityId(1),
        stats: StatVector::default(),
    };

    // Cached while nothing is active.
    assert!(rt.active_specials(&player).is_empty());

    // Stat investment changes without an invalidate: stale list persists.
    player.stats = StatVector::new(100, 0, 0, 0, 0);
    assert!(rt.active_specials(&player).is_empty());

    rt.invalidate(player.id);
    let specials = rt.active_specials(&player);
    assert_eq!(specials.len(), 1);
    assert_eq!(
        specials[0].get("boss_damage_mult"),
        Some(&SpecialValue::Number(1.5))
    );
}

#[tokio::test]
async fn gold_event_reaches_registered_ledger() {
    let rt = start_runtime();
    let bus = rt.bus();
    let ledger = Arc::new(GoldLedger::default());

    bus.subscribe(EventKind::GoldObtained, ledger.clone());

    let event = GameEvent::new(EventKind::GoldObtained, EntityId::PLAYER)
        .with_field("amount", 120)
        .with_field("source", "monster_drop");
    bus.publish(&event).await;

    assert_eq!(ledger.total.load(Ordering::SeqCst), 120);

    // A malformed payload is the ledger's own failure; the publish itself
    // neither raises nor affects the recorded total.
    bus.publish(&GameEvent::new(EventKind::GoldObtained, EntityId::PLAYER))
        .await;
    assert_eq!(ledger.total.load(Ordering::SeqCst), 120);
}

#[test]
fn missing_catalog_aborts_startup() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("no_such_dir");

    let result = Runtime::start(RuntimeConfig::new(missing));
    assert!(result.is_err());
}
