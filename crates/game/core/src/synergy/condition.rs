//! Activation conditions over invested stats.

use crate::stats::StatVector;

/// The stat requirements a participant must meet to activate a synergy.
///
/// A condition operates in one of two modes, chosen at evaluation time:
/// - **Uniform minimum** (`all_min > 0`): satisfied when the *lowest* of the
///   five stats reaches `all_min`. The per-stat minimums are ignored
///   entirely in this mode, even if the catalog row also sets them.
/// - **Per-stat minimums** (`all_min == 0`): satisfied when every stat meets
///   its own minimum. Unset minimums default to 0 and are trivially met.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynergyCondition {
    pub str_min: u32,
    pub int_min: u32,
    pub dex_min: u32,
    pub vit_min: u32,
    pub luk_min: u32,
    /// Uniform minimum applied to the lowest stat. Replaces the per-stat
    /// test entirely when positive.
    pub all_min: u32,
}

impl SynergyCondition {
    /// Condition requiring a uniform minimum across all five stats.
    pub fn uniform(all_min: u32) -> Self {
        Self {
            all_min,
            ..Self::default()
        }
    }

    /// Condition with independent per-stat minimums.
    pub fn per_stat(str_min: u32, int_min: u32, dex_min: u32, vit_min: u32, luk_min: u32) -> Self {
        Self {
            str_min,
            int_min,
            dex_min,
            vit_min,
            luk_min,
            all_min: 0,
        }
    }

    /// Whether the given stat vector satisfies this condition.
    ///
    /// A condition with every threshold at its default of 0 is satisfied by
    /// every stat vector, including the all-zero vector. Such always-on
    /// synergies are a legitimate catalog authoring device (unconditional
    /// baseline bonuses) and are evaluated literally.
    pub fn is_met(&self, stats: &StatVector) -> bool {
        if self.all_min > 0 {
            return stats.lowest() >= self.all_min;
        }

        stats.str >= self.str_min
            && stats.int >= self.int_min
            && stats.dex >= self.dex_min
            && stats.vit >= self.vit_min
            && stats.luk >= self.luk_min
    }
}
