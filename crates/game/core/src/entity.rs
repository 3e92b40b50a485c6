//! Entity identity and the stat-bearing capability.

use crate::stats::StatVector;

/// Unique identifier for a combat participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

/// Capability interface for participants that may carry invested stats.
///
/// Synergies only ever activate for participants that invest stat points.
/// Monsters and other non-investing combatants implement this with
/// `stat_vector() == None` and are excluded from synergy evaluation (and
/// from the specials cache) up front, instead of being probed for stat
/// fields at runtime.
pub trait StatSource {
    /// Stable identity used to key cached synergy lookups.
    fn entity_id(&self) -> EntityId;

    /// The participant's invested stat vector, or `None` if this
    /// participant does not invest stat points.
    fn stat_vector(&self) -> Option<StatVector>;
}
