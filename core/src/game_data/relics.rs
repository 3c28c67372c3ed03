//! Tracked relic weapons.

use std::borrow::Cow;

use hashbrown::HashMap;

use crate::host::EquipSlot;

include!(concat!(env!("OUT_DIR"), "/relic_items.rs"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelicItem {
    pub name: Cow<'static, str>,
    /// Slot the item is equipped in
    pub slot: EquipSlot,
}

impl RelicItem {
    pub fn new(name: impl Into<String>, slot: EquipSlot) -> Self {
        Self { name: Cow::Owned(name.into()), slot }
    }
}

/// Item id -> relic lookup. Read-only once the manager is built.
#[derive(Debug, Clone, Default)]
pub struct RelicItemTable {
    items: HashMap<u32, RelicItem>,
}

impl RelicItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding every built-in relic
    pub fn builtin() -> Self {
        Self {
            items: RELIC_ITEMS.entries().map(|(id, item)| (*id, item.clone())).collect(),
        }
    }

    /// Add or replace items, returns item ids that were replaced
    pub fn add_items(&mut self, items: impl IntoIterator<Item = (u32, RelicItem)>) -> Vec<u32> {
        let mut replaced = Vec::new();
        for (item_id, item) in items {
            if self.items.insert(item_id, item).is_some() {
                replaced.push(item_id);
            }
        }
        replaced
    }

    pub fn contains(&self, item_id: u32) -> bool {
        self.items.contains_key(&item_id)
    }

    pub fn get(&self, item_id: u32) -> Option<&RelicItem> {
        self.items.get(&item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &RelicItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(u32, RelicItem)> for RelicItemTable {
    fn from_iter<T: IntoIterator<Item = (u32, RelicItem)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.add_items(iter);
        table
    }
}
