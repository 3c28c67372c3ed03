//! Host seams
//!
//! The tracker runs inside a game client that owns all inventory and UI
//! state. Each trait below is the narrowest view of one host service the core
//! needs. The embedding layer implements them on top of its hooks; tests and
//! the CLI use the in-memory versions from [`memory`].
//!
//! UI handles are only ever borrowed for the duration of a call. The host may
//! tear down and rebuild an addon between frames, so every entry point looks
//! its addon and nodes up again.

pub mod memory;

use serde::{Deserialize, Serialize};
use zodiac_types::ClientLanguage;

use crate::error::HostError;

/// Equipment slots the tracker reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    #[serde(rename = "mainhand")]
    MainHand,
    #[serde(rename = "offhand")]
    OffHand,
}

impl EquipSlot {
    /// Index of the slot inside the host's equipped-items container
    pub fn container_index(self) -> u32 {
        match self {
            Self::MainHand => 0,
            Self::OffHand => 1,
        }
    }
}

/// Snapshot of an equipped item, copied out of host memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryItem {
    pub item_id: u32,
    /// Bonded progress counter (spiritbond) of the item
    pub spiritbond: u16,
}

impl InventoryItem {
    pub fn new(item_id: u32, spiritbond: u16) -> Self {
        Self { item_id, spiritbond }
    }
}

/// Read access to the player's equipped items.
pub trait Inventory {
    /// Item in the given slot, `Ok(None)` when the slot is empty.
    fn equipped_item(&self, slot: EquipSlot) -> Result<Option<InventoryItem>, HostError>;
}

/// Read access to client-wide state.
pub trait ClientState {
    /// Territory (zone) id the player is currently in
    fn territory_type(&self) -> Result<u16, HostError>;
}

/// Outbound chat, fire-and-forget.
pub trait ChatSink {
    fn print_message(&mut self, text: &str);
}

/// Receiver for detected light bonuses.
pub trait BonusLightReporter {
    fn add_light_bonus(&mut self, territory_id: u16, message: &str);
}

/// A text node inside a host addon.
pub trait TextNode {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
}

/// A host addon (window) and its node tree.
pub trait Addon {
    /// Search the addon's node tree for a text node by id.
    fn text_node(&mut self, node_id: u32) -> Option<&mut dyn TextNode>;
}

/// Lookup of addons by name.
pub trait GameGui {
    /// Resolve an addon by name and instance index, `None` when it is not open.
    fn addon_by_name(&mut self, name: &str, index: u32) -> Option<&mut dyn Addon>;
}

/// The host's localized log-message sheet.
pub trait LogMessageSheet {
    fn message(&self, language: ClientLanguage, row: u32) -> Option<String>;
}
