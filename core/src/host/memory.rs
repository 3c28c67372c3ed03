//! In-memory host
//!
//! Plain-data implementations of every host seam. Used by the test suites and
//! by `zodiac-validate` to preview what the tracker would do to a live client.

use hashbrown::HashMap;

use super::{
    Addon, BonusLightReporter, ChatSink, ClientState, EquipSlot, GameGui, Inventory,
    InventoryItem, TextNode,
};
use crate::error::HostError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTextNode {
    pub text: String,
}

impl TextNode for MemoryTextNode {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAddon {
    nodes: HashMap<u32, MemoryTextNode>,
}

impl MemoryAddon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to add a text node
    pub fn with_text_node(mut self, node_id: u32, text: &str) -> Self {
        self.nodes.insert(node_id, MemoryTextNode { text: text.to_string() });
        self
    }

    /// Current text of a node, if the node exists
    pub fn node_text(&self, node_id: u32) -> Option<&str> {
        self.nodes.get(&node_id).map(|n| n.text.as_str())
    }
}

impl Addon for MemoryAddon {
    fn text_node(&mut self, node_id: u32) -> Option<&mut dyn TextNode> {
        self.nodes.get_mut(&node_id).map(|n| n as &mut dyn TextNode)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryGui {
    addons: HashMap<(String, u32), MemoryAddon>,
}

impl MemoryGui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_addon(&mut self, name: &str, index: u32, addon: MemoryAddon) {
        self.addons.insert((name.to_string(), index), addon);
    }

    pub fn close_addon(&mut self, name: &str, index: u32) -> Option<MemoryAddon> {
        self.addons.remove(&(name.to_string(), index))
    }

    pub fn addon(&self, name: &str, index: u32) -> Option<&MemoryAddon> {
        self.addons.get(&(name.to_string(), index))
    }
}

impl GameGui for MemoryGui {
    fn addon_by_name(&mut self, name: &str, index: u32) -> Option<&mut dyn Addon> {
        self.addons
            .get_mut(&(name.to_string(), index))
            .map(|a| a as &mut dyn Addon)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    pub mainhand: Option<InventoryItem>,
    pub offhand: Option<InventoryItem>,
    /// Simulates the equipped container not being loaded yet
    pub unavailable: bool,
    /// Simulates a failed read of a single slot
    pub faulted_slot: Option<EquipSlot>,
}

impl MemoryInventory {
    pub fn with_mainhand(item: InventoryItem) -> Self {
        Self { mainhand: Some(item), ..Self::default() }
    }
}

impl Inventory for MemoryInventory {
    fn equipped_item(&self, slot: EquipSlot) -> Result<Option<InventoryItem>, HostError> {
        if self.unavailable {
            return Err(HostError::InventoryUnavailable { container: "EquippedItems" });
        }
        if self.faulted_slot == Some(slot) {
            return Err(HostError::CallFailed {
                call: "equipped_item",
                reason: format!("slot {} could not be read", slot.container_index()),
            });
        }
        Ok(match slot {
            EquipSlot::MainHand => self.mainhand,
            EquipSlot::OffHand => self.offhand,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryClient {
    /// `None` simulates a client that is not logged in
    pub territory: Option<u16>,
}

impl MemoryClient {
    pub fn in_territory(territory: u16) -> Self {
        Self { territory: Some(territory) }
    }
}

impl ClientState for MemoryClient {
    fn territory_type(&self) -> Result<u16, HostError> {
        self.territory.ok_or_else(|| HostError::ClientUnavailable {
            reason: "not logged in".to_string(),
        })
    }
}

/// Chat sink that keeps every printed line.
#[derive(Debug, Clone, Default)]
pub struct RecordingChat {
    pub messages: Vec<String>,
}

impl ChatSink for RecordingChat {
    fn print_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

/// Bonus reporter that keeps every report.
#[derive(Debug, Clone, Default)]
pub struct RecordingBonusReporter {
    pub reports: Vec<(u16, String)>,
}

impl BonusLightReporter for RecordingBonusReporter {
    fn add_light_bonus(&mut self, territory_id: u16, message: &str) {
        self.reports.push((territory_id, message.to_string()));
    }
}

/// All in-memory seams bundled together.
///
/// Fields are public so callers can borrow several seams at once.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    pub inventory: MemoryInventory,
    pub client: MemoryClient,
    pub gui: MemoryGui,
    pub chat: RecordingChat,
    pub bonus_light: RecordingBonusReporter,
}
