//! Static game data
//!
//! - **bonus_light**: the ordered light-level table and per-territory light data
//! - **relics**: item ids of the tracked relic weapons
//! - **messages**: toast templates resolved from the host's log-message sheet
//! - **overrides**: user-provided TOML entries merged over the built-in tables
//!
//! Built-in relic and territory tables are generated by `build.rs` from the
//! CSV files in `core/data/`.

mod bonus_light;
mod messages;
mod overrides;
mod relics;

pub use bonus_light::{
    BONUS_LIGHT_DUTIES, BONUS_LIGHT_LEVELS, BonusLightDuty, BonusLightLevel, TerritoryLightTable,
};
pub use messages::{StaticMessageSheet, resolve_bonus_levels};
pub use overrides::{DutyEntry, RelicEntry, TableOverrides, default_overrides_path, load_overrides};
pub use relics::{RELIC_ITEMS, RelicItem, RelicItemTable};
