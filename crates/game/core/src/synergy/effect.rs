//! Effect payloads carried by synergy definitions.

use std::collections::BTreeMap;

/// Open key→value payload for effects the fixed channels cannot express.
///
/// # Key Schema
///
/// Keys are interpreted by the combat consumer, never by this engine. The
/// schema is versioned by convention: existing keys keep their meaning
/// forever and new behavior gets a new key. Known keys at the time of
/// writing:
///
/// | Key                  | Value    | Consumer behavior                    |
/// |----------------------|----------|--------------------------------------|
/// | `boss_damage_mult`   | Number   | damage multiplier vs boss monsters   |
/// | `elemental_ignore`   | Flag     | attacks bypass elemental resistance  |
/// | `revive_once`        | Flag     | survive one killing blow per combat  |
/// | `proc_skill`         | Text     | skill id triggered on critical hits  |
pub type SpecialMap = BTreeMap<String, SpecialValue>;

/// A single value in a [`SpecialMap`].
///
/// Deliberately small: the catalog's special column is authored as a JSON
/// object, and these three shapes cover every payload the consumers read.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum SpecialValue {
    /// Boolean marker (presence-style effects).
    Flag(bool),
    /// Numeric parameter (multipliers, counts).
    Number(f64),
    /// Free-form reference (skill ids, element names).
    Text(String),
}

/// The additive bonus bundle a single synergy contributes while active.
///
/// Every percentage channel stacks by plain summation across active
/// synergies; `speed` is a flat additive value. A zero channel means "no
/// contribution", never "force to zero". Effects the channels cannot
/// express travel in `special` and are surfaced to consumers unmerged (see
/// [`super::cache::SpecialsCache`]).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynergyEffect {
    pub hp_pct: f32,
    pub phys_atk_pct: f32,
    pub magic_atk_pct: f32,
    pub phys_dmg_pct: f32,
    pub magic_dmg_pct: f32,
    pub defense_pct: f32,
    pub accuracy_pct: f32,
    pub evasion_pct: f32,
    pub crit_rate_pct: f32,
    pub crit_dmg_pct: f32,
    pub armor_pen_pct: f32,
    pub dmg_taken_pct: f32,
    pub drop_rate_pct: f32,
    pub lifesteal_pct: f32,
    /// Flat speed bonus (not a percentage).
    pub speed: i32,

    /// Human-readable summary for display surfaces.
    pub description: String,
    /// Channel-inexpressible effects, keyed per the [`SpecialMap`] schema.
    pub special: SpecialMap,
}

impl SynergyEffect {
    /// True if every numeric channel is zero and no specials are carried.
    pub fn is_inert(&self) -> bool {
        self.hp_pct == 0.0
            && self.phys_atk_pct == 0.0
            && self.magic_atk_pct == 0.0
            && self.phys_dmg_pct == 0.0
            && self.magic_dmg_pct == 0.0
            && self.defense_pct == 0.0
            && self.accuracy_pct == 0.0
            && self.evasion_pct == 0.0
            && self.crit_rate_pct == 0.0
            && self.crit_dmg_pct == 0.0
            && self.armor_pen_pct == 0.0
            && self.dmg_taken_pct == 0.0
            && self.drop_rate_pct == 0.0
            && self.lifesteal_pct == 0.0
            && self.speed == 0
            && self.special.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_effect_is_inert() {
        assert!(SynergyEffect::default().is_inert());
    }

    #[test]
    fn special_only_effect_is_not_inert() {
        let mut effect = SynergyEffect::default();
        effect
            .special
            .insert("revive_once".into(), SpecialValue::Flag(true));
        assert!(!effect.is_inert());
    }
}
