//! Event taxonomy and the event value itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use synergy_core::EntityId;

/// Open key→value payload attached to an event.
///
/// The schema of each kind's payload is a convention between its publishers
/// and subscribers; the bus never inspects it.
pub type EventPayload = serde_json::Map<String, Value>;

/// The fixed enumeration of gameplay occurrences the bus can dispatch.
///
/// Extend only by adding new kinds; existing kinds are never repurposed,
/// since long-lived subscribers (achievements, quests) depend on their
/// meaning staying put.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EventKind {
    // ----- combat outcomes -----
    /// A monster was defeated by the subject.
    MonsterDefeated,
    /// The subject won a combat encounter.
    CombatWon,
    /// The subject lost a combat encounter.
    CombatLost,

    // ----- items -----
    /// The subject obtained an item.
    ItemObtained,
    /// The subject consumed or used an item.
    ItemUsed,

    // ----- exploration -----
    /// The subject explored a dungeon.
    DungeonExplored,
    /// The subject fully cleared a dungeon.
    DungeonCleared,
    /// The subject cleared a dungeon floor.
    FloorCleared,

    // ----- currency -----
    /// The subject obtained gold.
    GoldObtained,
    /// The subject's gold balance changed (either direction).
    GoldChanged,

    // ----- progression -----
    /// The subject reached a new level.
    LevelUp,
    /// The subject gained experience.
    ExperienceObtained,

    // ----- streaks -----
    /// The subject's win streak changed.
    WinStreakUpdated,
}

/// A gameplay occurrence flowing through the bus.
///
/// Events are immutable once constructed and exist only for the duration of
/// the publish call; the bus neither buffers nor persists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    /// Kind used for subscriber routing.
    pub kind: EventKind,
    /// The entity this event is about (usually the acting player).
    pub subject: EntityId,
    /// Kind-specific data, by publisher/subscriber convention.
    pub payload: EventPayload,
    /// When the event was constructed.
    pub timestamp: DateTime<Utc>,
}

impl GameEvent {
    /// Create a new event with an empty payload, stamped now.
    pub fn new(kind: EventKind, subject: EntityId) -> Self {
        Self {
            kind,
            subject,
            payload: EventPayload::new(),
            timestamp: Utc::now(),
        }
    }

    /// Attach one payload field (builder pattern).
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Read one payload field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}
