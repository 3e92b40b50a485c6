//! Effect aggregation - summing active synergies into one bundle.

use super::catalog::Synergy;
use super::effect::SynergyEffect;

/// The elementwise sum of all active synergies' effects.
///
/// Aggregation is a plain per-channel sum: commutative and associative, so
/// any permutation or grouping of the same active set produces an identical
/// bundle. Unmet synergies contribute nothing (they are filtered before
/// aggregation, never scaled). Special payloads are intentionally absent
/// here; consumers fetch them unmerged through
/// [`super::cache::SpecialsCache`] so that key collisions stay visible to
/// the consumer instead of being resolved silently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectBundle {
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
    pub speed: i32,

    /// Descriptions of the contributing synergies, in aggregation order.
    /// Display only; carries no gameplay meaning.
    pub descriptions: Vec<String>,
}

impl EffectBundle {
    /// Sum the effects of the given active synergies.
    pub fn aggregate<'a>(active: impl IntoIterator<Item = &'a Synergy>) -> Self {
        let mut bundle = Self::default();
        for synergy in active {
            bundle.add_effect(&synergy.effect);
        }
        bundle
    }

    /// Fold one effect into the bundle.
    pub fn add_effect(&mut self, effect: &SynergyEffect) {
        self.hp_pct += effect.hp_pct;
        self.phys_atk_pct += effect.phys_atk_pct;
        self.magic_atk_pct += effect.magic_atk_pct;
        self.phys_dmg_pct += effect.phys_dmg_pct;
        self.magic_dmg_pct += effect.magic_dmg_pct;
        self.defense_pct += effect.defense_pct;
        self.accuracy_pct += effect.accuracy_pct;
        self.evasion_pct += effect.evasion_pct;
        self.crit_rate_pct += effect.crit_rate_pct;
        self.crit_dmg_pct += effect.crit_dmg_pct;
        self.armor_pen_pct += effect.armor_pen_pct;
        self.dmg_taken_pct += effect.dmg_taken_pct;
        self.drop_rate_pct += effect.drop_rate_pct;
        self.lifesteal_pct += effect.lifesteal_pct;
        self.speed += effect.speed;

        if !effect.description.is_empty() {
            self.descriptions.push(effect.description.clone());
        }
    }

    /// Joined description line for display surfaces.
    pub fn description_text(&self) -> String {
        self.descriptions.join(", ")
    }
}
