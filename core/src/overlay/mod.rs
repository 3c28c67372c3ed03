//! Relic overlay
//!
//! Two jobs, both recomputed from scratch on every call:
//!
//! - decide whether the Brave window should be shown ([`OverlayUpdater::compute`])
//! - patch the host's `RelicMagicite` addon with the light progress
//!   ([`OverlayUpdater::patch_relic_magicite`])
//!
//! ```text
//!  RelicMagicite (addon index 1)
//!  ├── node 9  light text      "Light: Forceful"  ->  "Light: Forceful\n117/40"
//!  └── node 8  analyze text    (optionally overwritten with node 9's text)
//! ```

mod window;

pub use window::{BraveWindow, WindowSummary};

use zodiac_types::BraveConfiguration;
use zodiac_types::formatting::{append_line, format_progress};

use crate::game_data::RelicItemTable;
use crate::host::{GameGui, InventoryItem};

pub const RELIC_MAGICITE_ADDON: &str = "RelicMagicite";
pub const RELIC_MAGICITE_ADDON_INDEX: u32 = 1;
pub const LIGHT_TEXT_NODE_ID: u32 = 9;
pub const ANALYZE_TEXT_NODE_ID: u32 = 8;

/// Spiritbond accumulated per magicite cycle
pub const SPIRITBOND_PER_CYCLE: u16 = 500;
/// Light points needed to fill one magicite
pub const LIGHT_PROGRESS_MAX: u16 = 40;

/// Light points of the current cycle: `(spiritbond % 500) / 2`.
pub fn light_progress(spiritbond: u16) -> u16 {
    (spiritbond % SPIRITBOND_PER_CYCLE) / 2
}

/// Per-frame overlay state. Never carried over between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub visible: bool,
    pub mainhand: Option<InventoryItem>,
    /// Tracked for display only, never gates visibility
    pub offhand: Option<InventoryItem>,
}

/// What [`OverlayUpdater::patch_relic_magicite`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The item is not a tracked relic, the addon was not touched
    NotRelic,
    /// The addon is not open
    AddonMissing,
    /// The addon has no light text node
    LightNodeMissing,
    /// Light text handled, but the analyze node to mirror into is missing
    AnalyzeNodeMissing { progress_appended: bool },
    Patched { progress_appended: bool, mirrored: bool },
}

/// Computes overlay visibility and content against a relic table.
#[derive(Debug, Clone, Copy)]
pub struct OverlayUpdater<'a> {
    relics: &'a RelicItemTable,
}

impl<'a> OverlayUpdater<'a> {
    pub fn new(relics: &'a RelicItemTable) -> Self {
        Self { relics }
    }

    /// Visible iff the mainhand item is a tracked relic.
    ///
    /// Only the mainhand gains spiritbond, so the offhand never decides.
    pub fn compute(
        &self,
        mainhand: Option<InventoryItem>,
        offhand: Option<InventoryItem>,
    ) -> OverlayState {
        let visible = mainhand.is_some_and(|item| self.relics.contains(item.item_id));
        OverlayState { visible, mainhand, offhand }
    }

    /// Write light progress into the `RelicMagicite` addon.
    ///
    /// Every lookup miss stops the patch where it is; nodes already written
    /// keep their new text.
    pub fn patch_relic_magicite(
        &self,
        gui: &mut dyn GameGui,
        item: InventoryItem,
        options: &BraveConfiguration,
    ) -> PatchOutcome {
        if !self.relics.contains(item.item_id) {
            return PatchOutcome::NotRelic;
        }

        let Some(addon) = gui.addon_by_name(RELIC_MAGICITE_ADDON, RELIC_MAGICITE_ADDON_INDEX)
        else {
            return PatchOutcome::AddonMissing;
        };

        let light_text = {
            let Some(light_node) = addon.text_node(LIGHT_TEXT_NODE_ID) else {
                return PatchOutcome::LightNodeMissing;
            };
            if options.show_numeric_progress {
                let progress = format_progress(light_progress(item.spiritbond), LIGHT_PROGRESS_MAX);
                let patched = append_line(light_node.text(), &progress);
                light_node.set_text(&patched);
            }
            light_node.text().to_string()
        };
        let progress_appended = options.show_numeric_progress;

        if !options.mirror_to_secondary_element {
            return PatchOutcome::Patched { progress_appended, mirrored: false };
        }

        let Some(analyze_node) = addon.text_node(ANALYZE_TEXT_NODE_ID) else {
            return PatchOutcome::AnalyzeNodeMissing { progress_appended };
        };
        analyze_node.set_text(&light_text);

        PatchOutcome::Patched { progress_appended, mirrored: true }
    }
}
