//! Synergy table loader.
//!
//! The synergy table is exported from an external tabular source, so every
//! cell arrives as a string. Conversion into domain types is lenient on a
//! per-cell basis: a cell that fails to parse is logged and replaced with
//! its safe default (0 for thresholds, 0.0 for percentages, an empty map
//! for the special payload) so that one bad row weakens itself instead of
//! aborting startup. Only a file-level read or parse failure is an error.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use synergy_core::{SpecialMap, Synergy, SynergyCatalog, SynergyCondition, SynergyEffect};

use crate::loaders::{LoadResult, read_file};

/// Synergy table structure for RON files.
///
/// Rows keep their file order; the catalog preserves it for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynergyTable {
    pub rows: Vec<SynergyRow>,
}

/// One row of the synergy table, cells still raw.
///
/// Every column except `name` may be omitted and defaults to the empty
/// string, which converts to the column's safe default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynergyRow {
    pub name: String,
    pub tier: String,

    // Activation thresholds
    pub str_min: String,
    pub int_min: String,
    pub dex_min: String,
    pub vit_min: String,
    pub luk_min: String,
    pub all_min: String,

    // Effect channels
    pub hp_pct: String,
    pub phys_atk_pct: String,
    pub magic_atk_pct: String,
    pub phys_dmg_pct: String,
    pub magic_dmg_pct: String,
    pub defense_pct: String,
    pub accuracy_pct: String,
    pub evasion_pct: String,
    pub crit_rate_pct: String,
    pub crit_dmg_pct: String,
    pub armor_pen_pct: String,
    pub dmg_taken_pct: String,
    pub drop_rate_pct: String,
    pub lifesteal_pct: String,
    pub speed: String,

    pub description: String,
    /// JSON object, e.g. `{"boss_damage_mult": 1.5}`.
    pub special: String,
}

impl SynergyRow {
    /// Convert the raw row into a domain synergy, cell by cell.
    fn into_synergy(self) -> Synergy {
        let condition = SynergyCondition {
            str_min: parse_cell(&self.str_min, "str_min", &self.name),
            int_min: parse_cell(&self.int_min, "int_min", &self.name),
            dex_min: parse_cell(&self.dex_min, "dex_min", &self.name),
            vit_min: parse_cell(&self.vit_min, "vit_min", &self.name),
            luk_min: parse_cell(&self.luk_min, "luk_min", &self.name),
            all_min: parse_cell(&self.all_min, "all_min", &self.name),
        };

        let effect = SynergyEffect {
            hp_pct: parse_cell(&self.hp_pct, "hp_pct", &self.name),
            phys_atk_pct: parse_cell(&self.phys_atk_pct, "phys_atk_pct", &self.name),
            magic_atk_pct: parse_cell(&self.magic_atk_pct, "magic_atk_pct", &self.name),
            phys_dmg_pct: parse_cell(&self.phys_dmg_pct, "phys_dmg_pct", &self.name),
            magic_dmg_pct: parse_cell(&self.magic_dmg_pct, "magic_dmg_pct", &self.name),
            defense_pct: parse_cell(&self.defense_pct, "defense_pct", &self.name),
            accuracy_pct: parse_cell(&self.accuracy_pct, "accuracy_pct", &self.name),
            evasion_pct: parse_cell(&self.evasion_pct, "evasion_pct", &self.name),
            crit_rate_pct: parse_cell(&self.crit_rate_pct, "crit_rate_pct", &self.name),
            crit_dmg_pct: parse_cell(&self.crit_dmg_pct, "crit_dmg_pct", &self.name),
            armor_pen_pct: parse_cell(&self.armor_pen_pct, "armor_pen_pct", &self.name),
            dmg_taken_pct: parse_cell(&self.dmg_taken_pct, "dmg_taken_pct", &self.name),
            drop_rate_pct: parse_cell(&self.drop_rate_pct, "drop_rate_pct", &self.name),
            lifesteal_pct: parse_cell(&self.lifesteal_pct, "lifesteal_pct", &self.name),
            speed: parse_cell(&self.speed, "speed", &self.name),
            description: self.description,
            special: parse_special(&self.special, &self.name),
        };

        // Tier is display-only and 1-based; 0 is not a tier.
        let tier = match parse_cell::<u8>(&self.tier, "tier", &self.name) {
            0 => 1,
            tier => tier,
        };

        Synergy {
            name: self.name,
            tier,
            condition,
            effect,
        }
    }
}

/// Parse one numeric cell, falling back to the type's default.
fn parse_cell<T: FromStr + Default>(raw: &str, column: &'static str, row: &str) -> T {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return T::default();
    }

    match trimmed.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                target: "content::synergies",
                row,
                column,
                value = raw,
                "unparsable cell, using default"
            );
            T::default()
        }
    }
}

/// Parse the free-form special column (a JSON object) into a [`SpecialMap`].
fn parse_special(raw: &str, row: &str) -> SpecialMap {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return SpecialMap::new();
    }

    match serde_json::from_str(trimmed) {
        Ok(map) => map,
        Err(error) => {
            tracing::warn!(
                target: "content::synergies",
                row,
                %error,
                "unparsable special payload, using empty map"
            );
            SpecialMap::new()
        }
    }
}

/// Loader for the synergy catalog from RON table files.
pub struct SynergyLoader;

impl SynergyLoader {
    /// Load the synergy catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a SynergyTable
    ///
    /// # Returns
    ///
    /// Returns the immutable SynergyCatalog, row order preserved.
    pub fn load(path: &Path) -> LoadResult<SynergyCatalog> {
        let content = read_file(path)?;
        Self::from_table_str(&content)
    }

    /// Parse a synergy table from RON source.
    pub fn from_table_str(content: &str) -> LoadResult<SynergyCatalog> {
        let table: SynergyTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse synergy table RON: {}", e))?;

        let entries = table
            .rows
            .into_iter()
            .map(SynergyRow::into_synergy)
            .collect();

        Ok(SynergyCatalog::new(entries))
    }
}
