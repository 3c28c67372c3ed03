use zodiac_types::formatting::format_progress;

use super::{LIGHT_PROGRESS_MAX, OverlayState, light_progress};
use crate::game_data::RelicItemTable;

/// State of the tracker's own Brave window, refreshed every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraveWindow {
    pub show_window: bool,
    pub state: OverlayState,
}

/// What the window displays for the equipped relic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSummary {
    pub relic_name: String,
    pub offhand_name: Option<String>,
    /// Light of the current magicite cycle, as `value/40`
    pub light_progress: String,
}

impl BraveWindow {
    /// Hide the window and forget the last state
    pub fn hide(&mut self) {
        *self = Self::default();
    }

    pub fn summary(&self, relics: &RelicItemTable) -> Option<WindowSummary> {
        if !self.show_window {
            return None;
        }
        let mainhand = self.state.mainhand?;
        let relic = relics.get(mainhand.item_id)?;
        let offhand_name = self
            .state
            .offhand
            .and_then(|item| relics.get(item.item_id))
            .map(|item| item.name.to_string());

        Some(WindowSummary {
            relic_name: relic.name.to_string(),
            offhand_name,
            light_progress: format_progress(light_progress(mainhand.spiritbond), LIGHT_PROGRESS_MAX),
        })
    }
}
