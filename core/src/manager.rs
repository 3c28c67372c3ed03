//! Entry points called by the host
//!
//! The host drives the tracker from three places, all on its main thread:
//!
//! | Host event                 | Entry point                        |
//! |----------------------------|------------------------------------|
//! | Framework update (frame)   | [`BraveManager::on_update`]        |
//! | Quest toast delivered      | [`BraveManager::on_toast`]         |
//! | `RelicMagicite` setup hook | [`BraveManager::on_addon_setup`]   |
//!
//! Each entry point runs an inner function returning `Result` and logs any
//! error under the entry point's name before dropping it. Nothing is
//! propagated back into the host loop, and a failed call leaves no state that
//! the next call depends on.

use zodiac_types::ZodiacConfig;
use zodiac_types::formatting::{format_bonus_detected, format_light_gain};

use crate::error::{HostError, TableError};
use crate::game_data::{RelicItemTable, StaticMessageSheet, TableOverrides, TerritoryLightTable};
use crate::host::{
    BonusLightReporter, ChatSink, ClientState, EquipSlot, GameGui, Inventory, LogMessageSheet,
};
use crate::overlay::{BraveWindow, OverlayUpdater, PatchOutcome};
use crate::toast::{BonusLevel, LightAssessment, ToastClassifier};

/// What [`BraveManager::on_toast`] did with a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastOutcome<'a> {
    /// Another consumer already handled the toast
    AlreadyHandled,
    /// Not a light toast
    Unrecognized,
    /// The relic is complete; no message sent
    Completed { level: &'a BonusLevel },
    /// Light gain announced in chat
    Announced {
        level: &'a BonusLevel,
        assessment: LightAssessment<'a>,
        /// Whether the bonus was reported to the bonus light reporter
        escalated: bool,
    },
}

/// Owns the read-only tables and the window state for the Brave stage.
#[derive(Debug, Clone)]
pub struct BraveManager {
    classifier: ToastClassifier,
    relics: RelicItemTable,
    duties: TerritoryLightTable,
    window: BraveWindow,
}

impl BraveManager {
    pub fn new(
        classifier: ToastClassifier,
        relics: RelicItemTable,
        duties: TerritoryLightTable,
    ) -> Self {
        Self {
            classifier,
            relics,
            duties,
            window: BraveWindow::default(),
        }
    }

    /// Build from the host's message sheet, the built-in tables and user overrides.
    pub fn load(
        config: &ZodiacConfig,
        sheet: &dyn LogMessageSheet,
        overrides: &TableOverrides,
    ) -> Result<Self, TableError> {
        let classifier = ToastClassifier::from_sheet(sheet, config.language)?;

        let mut relics = RelicItemTable::builtin();
        overrides.apply_relics(&mut relics);
        let mut duties = TerritoryLightTable::builtin();
        overrides.apply_duties(&mut duties);

        tracing::info!(
            language = config.language.as_str(),
            relics = relics.len(),
            duties = duties.len(),
            "Brave tracker loaded"
        );
        Ok(Self::new(classifier, relics, duties))
    }

    /// Build entirely from built-in data
    pub fn builtin(config: &ZodiacConfig) -> Result<Self, TableError> {
        let sheet = StaticMessageSheet::builtin()?;
        Self::load(config, &sheet, &TableOverrides::default())
    }

    pub fn window(&self) -> &BraveWindow {
        &self.window
    }

    pub fn classifier(&self) -> &ToastClassifier {
        &self.classifier
    }

    pub fn relics(&self) -> &RelicItemTable {
        &self.relics
    }

    pub fn duties(&self) -> &TerritoryLightTable {
        &self.duties
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Framework update
    // ─────────────────────────────────────────────────────────────────────────

    pub fn on_update(&mut self, config: &ZodiacConfig, inventory: &dyn Inventory) {
        let result = self.try_update(config, inventory);
        guard("on_update", result);
    }

    fn try_update(
        &mut self,
        config: &ZodiacConfig,
        inventory: &dyn Inventory,
    ) -> Result<(), HostError> {
        if !config.brave.overlay_enabled {
            self.window.hide();
            return Ok(());
        }

        // Sword and shield are managed together, but only the sword gains spiritbond
        let mainhand = inventory.equipped_item(EquipSlot::MainHand)?;
        let offhand = match inventory.equipped_item(EquipSlot::OffHand) {
            Ok(item) => item,
            Err(e) => {
                tracing::debug!(error = %e, "Off-hand read failed, continuing without it");
                None
            }
        };

        let state = OverlayUpdater::new(&self.relics).compute(mainhand, offhand);
        self.window = BraveWindow { show_window: state.visible, state };
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Quest toast
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle a quest toast. `handled` is only ever set, never cleared, and
    /// only for recognised light toasts when `consume_light_toasts` is on.
    ///
    /// Returns `None` if the call faulted.
    pub fn on_toast(
        &self,
        config: &ZodiacConfig,
        message: &str,
        handled: &mut bool,
        client: &dyn ClientState,
        chat: &mut dyn ChatSink,
        bonus_light: &mut dyn BonusLightReporter,
    ) -> Option<ToastOutcome<'_>> {
        let result = self.try_toast(config, message, handled, client, chat, bonus_light);
        guard("on_toast", result)
    }

    fn try_toast(
        &self,
        config: &ZodiacConfig,
        message: &str,
        handled: &mut bool,
        client: &dyn ClientState,
        chat: &mut dyn ChatSink,
        bonus_light: &mut dyn BonusLightReporter,
    ) -> Result<ToastOutcome<'_>, HostError> {
        if *handled {
            return Ok(ToastOutcome::AlreadyHandled);
        }

        let Some(toast) = self.classifier.classify(message) else {
            return Ok(ToastOutcome::Unrecognized);
        };

        // Completed magicite is ignored for now
        if toast.is_completed() {
            tracing::debug!(message_id = toast.level.message_id, "Completed light toast");
            return Ok(ToastOutcome::Completed { level: toast.level });
        }

        chat.print_message(&format_light_gain(toast.level.intensity));
        if config.brave.consume_light_toasts {
            *handled = true;
        }

        let territory_id = client.territory_type()?;
        let assessment = toast.assess(self.duties.get(territory_id));

        let escalated = match assessment {
            LightAssessment::BonusDetected { duty, .. }
                if config.bonus_light.escalate_detected_bonus =>
            {
                bonus_light.add_light_bonus(territory_id, &format_bonus_detected(&duty.name));
                true
            }
            LightAssessment::BonusDetected { duty, intensity } => {
                tracing::debug!(
                    territory_id,
                    duty = %duty.name,
                    intensity,
                    "Bonus light detected, escalation disabled"
                );
                false
            }
            LightAssessment::UnknownTerritory { .. } => {
                tracing::debug!(territory_id, "No light data for territory");
                false
            }
            LightAssessment::Regular { .. } | LightAssessment::Completed => false,
        };

        Ok(ToastOutcome::Announced {
            level: toast.level,
            assessment,
            escalated,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // RelicMagicite setup
    // ─────────────────────────────────────────────────────────────────────────

    /// Patch the `RelicMagicite` addon after the host finished setting it up.
    ///
    /// Returns `None` if the call faulted.
    pub fn on_addon_setup(
        &self,
        config: &ZodiacConfig,
        inventory: &dyn Inventory,
        gui: &mut dyn GameGui,
    ) -> Option<PatchOutcome> {
        let result = self.try_addon_setup(config, inventory, gui);
        guard("on_addon_setup", result)
    }

    fn try_addon_setup(
        &self,
        config: &ZodiacConfig,
        inventory: &dyn Inventory,
        gui: &mut dyn GameGui,
    ) -> Result<PatchOutcome, HostError> {
        let Some(item) = inventory.equipped_item(EquipSlot::MainHand)? else {
            return Ok(PatchOutcome::NotRelic);
        };

        let outcome =
            OverlayUpdater::new(&self.relics).patch_relic_magicite(gui, item, &config.brave);
        match outcome {
            PatchOutcome::AddonMissing
            | PatchOutcome::LightNodeMissing
            | PatchOutcome::AnalyzeNodeMissing { .. } => {
                tracing::debug!(?outcome, item_id = item.item_id, "RelicMagicite patch incomplete");
            }
            PatchOutcome::NotRelic | PatchOutcome::Patched { .. } => {}
        }
        Ok(outcome)
    }
}

/// Log and drop an entry point's error.
fn guard<T>(entry_point: &'static str, result: Result<T, HostError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::error!(
                entry_point,
                error = %err,
                "Unhandled error during BraveManager::{entry_point}"
            );
            None
        }
    }
}
