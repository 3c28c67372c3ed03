//! User overrides for the built-in tables
//!
//! New relic items or duties can be added without a rebuild by listing them
//! in a TOML file. Entries are merged over the built-ins; an entry with an
//! existing id replaces it.
//!
//! ```toml
//! [[relic]]
//! item_id = 9491
//! name = "Excalibur"
//! slot = "mainhand"
//!
//! [[duty]]
//! territory_id = 160
//! name = "Pharos Sirius"
//! default_light_intensity = 16
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::bonus_light::{BonusLightDuty, TerritoryLightTable};
use super::relics::{RelicItem, RelicItemTable};
use crate::error::TableError;
use crate::host::EquipSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicEntry {
    pub item_id: u32,
    pub name: String,
    pub slot: EquipSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyEntry {
    pub territory_id: u16,
    pub name: String,
    pub default_light_intensity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOverrides {
    #[serde(default, rename = "relic")]
    pub relics: Vec<RelicEntry>,

    #[serde(default, rename = "duty")]
    pub duties: Vec<DutyEntry>,
}

impl TableOverrides {
    /// Merge relic entries into `table`, logging replaced built-ins
    pub fn apply_relics(&self, table: &mut RelicItemTable) {
        let replaced = table.add_items(
            self.relics
                .iter()
                .map(|e| (e.item_id, RelicItem::new(e.name.clone(), e.slot))),
        );
        if !replaced.is_empty() {
            tracing::info!(?replaced, "Relic overrides replaced built-in items");
        }
    }

    /// Merge duty entries into `table`, logging replaced built-ins
    pub fn apply_duties(&self, table: &mut TerritoryLightTable) {
        let replaced = table.add_duties(self.duties.iter().map(|e| {
            (e.territory_id, BonusLightDuty::new(e.name.clone(), e.default_light_intensity))
        }));
        if !replaced.is_empty() {
            tracing::info!(?replaced, "Duty overrides replaced built-in territories");
        }
    }
}

/// Load overrides from a TOML file.
///
/// A missing file is not an error and yields empty overrides.
pub fn load_overrides(path: &Path) -> Result<TableOverrides, TableError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No table overrides file");
        return Ok(TableOverrides::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| TableError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| TableError::Parse {
        source_name: path.display().to_string(),
        source: e,
    })
}

/// Get the default overrides file path
pub fn default_overrides_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("zodiac").join("tables.toml"))
}
