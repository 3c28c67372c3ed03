//! Light levels and per-territory light data.

use std::borrow::Cow;

use hashbrown::HashMap;

include!(concat!(env!("OUT_DIR"), "/bonus_light_duties.rs"));

/// One step of the ordered light-level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusLightLevel {
    pub name: &'static str,
    pub intensity: u32,
    /// Log-message row holding the toast template for this level
    pub message_id: u32,
}

/// Light levels in match order. The last entry is the "completed" sentinel.
#[rustfmt::skip]
pub const BONUS_LIGHT_LEVELS: [BonusLightLevel; 7] = [
    BonusLightLevel { name: "Feeble",     intensity:  4, message_id: 4660 },
    BonusLightLevel { name: "Faint",      intensity:  8, message_id: 4661 },
    BonusLightLevel { name: "Gentle",     intensity: 16, message_id: 4662 },
    BonusLightLevel { name: "Steady",     intensity: 24, message_id: 4663 },
    BonusLightLevel { name: "Forceful",   intensity: 48, message_id: 4664 },
    BonusLightLevel { name: "Nigh Sings", intensity: 64, message_id: 4665 },
    BonusLightLevel { name: "Completed",  intensity: 40, message_id: 4666 },
];

/// Light data for a duty (territory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusLightDuty {
    pub name: Cow<'static, str>,
    /// Light granted by the duty when it carries a bonus
    pub default_light_intensity: u32,
}

impl BonusLightDuty {
    pub fn new(name: impl Into<String>, default_light_intensity: u32) -> Self {
        Self { name: Cow::Owned(name.into()), default_light_intensity }
    }

    /// Whether a gain of `intensity` is above the regular (non-bonus) gain.
    ///
    /// Regular gain appears to be half the default intensity, so anything
    /// strictly above that (integer division) counts as a bonus.
    pub fn is_bonus_gain(&self, intensity: u32) -> bool {
        intensity > self.default_light_intensity / 2
    }
}

/// Territory id -> light data lookup.
#[derive(Debug, Clone, Default)]
pub struct TerritoryLightTable {
    duties: HashMap<u16, BonusLightDuty>,
}

impl TerritoryLightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding every built-in duty
    pub fn builtin() -> Self {
        Self {
            duties: BONUS_LIGHT_DUTIES
                .entries()
                .map(|(id, duty)| (*id, duty.clone()))
                .collect(),
        }
    }

    /// Add or replace duties, returns territory ids that were replaced
    pub fn add_duties(&mut self, duties: impl IntoIterator<Item = (u16, BonusLightDuty)>) -> Vec<u16> {
        let mut replaced = Vec::new();
        for (territory_id, duty) in duties {
            if self.duties.insert(territory_id, duty).is_some() {
                replaced.push(territory_id);
            }
        }
        replaced
    }

    pub fn get(&self, territory_id: u16) -> Option<&BonusLightDuty> {
        self.duties.get(&territory_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &BonusLightDuty)> {
        self.duties.iter().map(|(id, duty)| (*id, duty))
    }

    pub fn len(&self) -> usize {
        self.duties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.duties.is_empty()
    }
}
