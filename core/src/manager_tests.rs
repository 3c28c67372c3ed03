//! Tests for the BraveManager entry points
//!
//! Drives every entry point through the in-memory host.

use zodiac_types::ZodiacConfig;

use crate::game_data::{BonusLightDuty, StaticMessageSheet, TableOverrides, TerritoryLightTable};
use crate::host::{EquipSlot, InventoryItem};
use crate::host::memory::{MemoryAddon, MemoryHost, MemoryInventory};
use crate::manager::{BraveManager, ToastOutcome};
use crate::overlay::{
    ANALYZE_TEXT_NODE_ID, LIGHT_TEXT_NODE_ID, PatchOutcome, RELIC_MAGICITE_ADDON,
    RELIC_MAGICITE_ADDON_INDEX,
};
use crate::toast::LightAssessment;

const EXCALIBUR: u32 = 9491;
const AEGIS_SHIELD: u32 = 9500;
const PHAROS_SIRIUS: u16 = 160;
const UNKNOWN_TERRITORY: u16 = 128;

const FAINT_TOAST: &str = "The Excalibur glows faintly.";
const GENTLE_TOAST: &str = "The Excalibur glows gently.";
const COMPLETED_TOAST: &str = "The Excalibur can hold no more light.";

fn make_manager() -> BraveManager {
    BraveManager::builtin(&ZodiacConfig::default()).unwrap()
}

fn host_in(territory: u16) -> MemoryHost {
    let mut host = MemoryHost::default();
    host.client.territory = Some(territory);
    host
}

/// Run `on_toast` against `host` and return the outcome plus the handled flag
fn toast<'m>(
    manager: &'m BraveManager,
    config: &ZodiacConfig,
    host: &mut MemoryHost,
    message: &str,
    handled: bool,
) -> (Option<ToastOutcome<'m>>, bool) {
    let mut handled = handled;
    let outcome = manager.on_toast(
        config,
        message,
        &mut handled,
        &host.client,
        &mut host.chat,
        &mut host.bonus_light,
    );
    (outcome, handled)
}

// ═══════════════════════════════════════════════════════════════════════════
// on_update
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_update_shows_window_for_relic_mainhand() {
    let mut manager = make_manager();
    let config = ZodiacConfig::default();
    let inventory = MemoryInventory {
        mainhand: Some(InventoryItem::new(EXCALIBUR, 300)),
        offhand: Some(InventoryItem::new(AEGIS_SHIELD, 0)),
        ..MemoryInventory::default()
    };

    manager.on_update(&config, &inventory);

    let window = manager.window();
    assert!(window.show_window);
    assert_eq!(window.state.mainhand, inventory.mainhand);
    let summary = window.summary(manager.relics()).unwrap();
    assert_eq!(summary.light_progress, "150/40");
}

#[test]
fn test_update_hides_window_for_other_mainhand() {
    let mut manager = make_manager();
    let config = ZodiacConfig::default();

    manager.on_update(&config, &MemoryInventory::with_mainhand(InventoryItem::new(EXCALIBUR, 0)));
    assert!(manager.window().show_window);

    // Holding only the shield is not enough
    let inventory = MemoryInventory {
        mainhand: Some(InventoryItem::new(1, 0)),
        offhand: Some(InventoryItem::new(AEGIS_SHIELD, 0)),
        ..MemoryInventory::default()
    };
    manager.on_update(&config, &inventory);
    assert!(!manager.window().show_window);
}

#[test]
fn test_update_respects_overlay_enabled() {
    let mut manager = make_manager();
    let mut config = ZodiacConfig::default();
    let inventory = MemoryInventory::with_mainhand(InventoryItem::new(EXCALIBUR, 0));

    manager.on_update(&config, &inventory);
    assert!(manager.window().show_window);

    config.brave.overlay_enabled = false;
    manager.on_update(&config, &inventory);
    assert!(!manager.window().show_window);
    assert!(manager.window().summary(manager.relics()).is_none());
}

#[test]
fn test_update_fault_keeps_previous_window() {
    let mut manager = make_manager();
    let config = ZodiacConfig::default();
    let mut inventory = MemoryInventory::with_mainhand(InventoryItem::new(EXCALIBUR, 20));
    manager.on_update(&config, &inventory);
    let before = *manager.window();

    inventory.unavailable = true;
    manager.on_update(&config, &inventory);
    assert_eq!(*manager.window(), before);

    // The next good tick recovers
    inventory.unavailable = false;
    inventory.mainhand = None;
    manager.on_update(&config, &inventory);
    assert!(!manager.window().show_window);
}

#[test]
fn test_update_offhand_fault_does_not_drop_tick() {
    let mut manager = make_manager();
    let config = ZodiacConfig::default();
    let mut inventory = MemoryInventory::with_mainhand(InventoryItem::new(EXCALIBUR, 20));
    manager.on_update(&config, &inventory);
    assert_eq!(manager.window().state.mainhand, inventory.mainhand);

    inventory.mainhand = Some(InventoryItem::new(EXCALIBUR, 84));
    inventory.offhand = Some(InventoryItem::new(AEGIS_SHIELD, 0));
    inventory.faulted_slot = Some(EquipSlot::OffHand);
    manager.on_update(&config, &inventory);

    let window = manager.window();
    assert!(window.show_window);
    assert_eq!(window.state.mainhand, Some(InventoryItem::new(EXCALIBUR, 84)));
    assert_eq!(window.state.offhand, None);
    assert_eq!(window.summary(manager.relics()).unwrap().light_progress, "42/40");
}

#[test]
fn test_update_mainhand_fault_keeps_previous_window() {
    let mut manager = make_manager();
    let config = ZodiacConfig::default();
    let mut inventory = MemoryInventory::with_mainhand(InventoryItem::new(EXCALIBUR, 20));
    manager.on_update(&config, &inventory);
    let before = *manager.window();

    inventory.mainhand = None;
    inventory.faulted_slot = Some(EquipSlot::MainHand);
    manager.on_update(&config, &inventory);
    assert_eq!(*manager.window(), before);
}

// ═══════════════════════════════════════════════════════════════════════════
// on_toast
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_toast_announces_light_gain() {
    let manager = make_manager();
    let config = ZodiacConfig::default();
    let mut host = host_in(PHAROS_SIRIUS);

    let (outcome, handled) = toast(&manager, &config, &mut host, FAINT_TOAST, false);

    match outcome.unwrap() {
        ToastOutcome::Announced { level, assessment, escalated } => {
            assert_eq!(level.intensity, 8);
            assert!(matches!(assessment, LightAssessment::Regular { intensity: 8, .. }));
            assert!(!escalated);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(host.chat.messages, vec!["Light Intensity has increased by 8."]);
    assert!(!handled);
}

#[test]
fn test_unrecognized_toast_leaves_handled_untouched() {
    let manager = make_manager();
    let mut config = ZodiacConfig::default();
    config.brave.consume_light_toasts = true;
    let mut host = host_in(PHAROS_SIRIUS);

    let (outcome, handled) = toast(&manager, &config, &mut host, "Quest accepted.", false);

    assert_eq!(outcome, Some(ToastOutcome::Unrecognized));
    assert!(!handled);
    assert!(host.chat.messages.is_empty());
}

#[test]
fn test_already_handled_toast_is_skipped() {
    let manager = make_manager();
    let config = ZodiacConfig::default();
    let mut host = host_in(PHAROS_SIRIUS);

    let (outcome, handled) = toast(&manager, &config, &mut host, FAINT_TOAST, true);

    assert_eq!(outcome, Some(ToastOutcome::AlreadyHandled));
    assert!(handled);
    assert!(host.chat.messages.is_empty());
}

#[test]
fn test_consume_marks_recognised_toast_handled() {
    let manager = make_manager();
    let mut config = ZodiacConfig::default();
    config.brave.consume_light_toasts = true;
    let mut host = host_in(PHAROS_SIRIUS);

    let (_, handled) = toast(&manager, &config, &mut host, FAINT_TOAST, false);
    assert!(handled);
}

#[test]
fn test_completed_toast_sends_no_message() {
    let manager = make_manager();
    let mut config = ZodiacConfig::default();
    config.brave.consume_light_toasts = true;
    config.bonus_light.escalate_detected_bonus = true;
    let mut host = host_in(PHAROS_SIRIUS);

    let (outcome, handled) = toast(&manager, &config, &mut host, COMPLETED_TOAST, false);

    assert!(matches!(outcome, Some(ToastOutcome::Completed { .. })));
    assert!(host.chat.messages.is_empty());
    assert!(host.bonus_light.reports.is_empty());
    assert!(!handled);
}

#[test]
fn test_unknown_territory_is_silent() {
    let manager = make_manager();
    let mut config = ZodiacConfig::default();
    config.bonus_light.escalate_detected_bonus = true;
    let mut host = host_in(UNKNOWN_TERRITORY);

    let (outcome, _) = toast(&manager, &config, &mut host, GENTLE_TOAST, false);

    match outcome.unwrap() {
        ToastOutcome::Announced { assessment, escalated, .. } => {
            assert_eq!(assessment, LightAssessment::UnknownTerritory { intensity: 16 });
            assert!(!escalated);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(host.chat.messages.len(), 1);
    assert!(host.bonus_light.reports.is_empty());
}

#[test]
fn test_bonus_detected_but_escalation_disabled() {
    let manager = make_manager();
    let config = ZodiacConfig::default();
    let mut host = host_in(PHAROS_SIRIUS);

    // Gentle (16) > 16 / 2
    let (outcome, _) = toast(&manager, &config, &mut host, GENTLE_TOAST, false);

    match outcome.unwrap() {
        ToastOutcome::Announced { assessment, escalated, .. } => {
            assert!(assessment.is_bonus());
            assert!(!escalated);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(host.bonus_light.reports.is_empty());
}

#[test]
fn test_bonus_escalation_when_enabled() {
    let manager = make_manager();
    let mut config = ZodiacConfig::default();
    config.bonus_light.escalate_detected_bonus = true;
    let mut host = host_in(PHAROS_SIRIUS);

    let (outcome, _) = toast(&manager, &config, &mut host, GENTLE_TOAST, false);

    assert!(matches!(outcome, Some(ToastOutcome::Announced { escalated: true, .. })));
    assert_eq!(
        host.bonus_light.reports,
        vec![(PHAROS_SIRIUS, "Light bonus detected on \"Pharos Sirius\"".to_string())]
    );
}

#[test]
fn test_toast_fault_is_contained() {
    let manager = make_manager();
    let config = ZodiacConfig::default();
    let mut host = MemoryHost::default(); // not logged in

    let (outcome, handled) = toast(&manager, &config, &mut host, FAINT_TOAST, false);
    assert!(outcome.is_none());
    assert!(!handled);

    // Next call works once the client is back
    host.client.territory = Some(PHAROS_SIRIUS);
    let (outcome, _) = toast(&manager, &config, &mut host, FAINT_TOAST, false);
    assert!(matches!(outcome, Some(ToastOutcome::Announced { .. })));
}

#[test]
fn test_custom_duty_table() {
    let config = ZodiacConfig::default();
    let sheet = StaticMessageSheet::builtin().unwrap();
    let overrides = TableOverrides {
        relics: Vec::new(),
        duties: vec![crate::game_data::DutyEntry {
            territory_id: UNKNOWN_TERRITORY,
            name: "Custom Duty".to_string(),
            default_light_intensity: 64,
        }],
    };
    let manager = BraveManager::load(&config, &sheet, &overrides).unwrap();
    let mut host = host_in(UNKNOWN_TERRITORY);

    // Gentle (16) is not above 64 / 2
    let (outcome, _) = toast(&manager, &config, &mut host, GENTLE_TOAST, false);
    let duty = BonusLightDuty::new("Custom Duty", 64);
    match outcome.unwrap() {
        ToastOutcome::Announced { assessment, .. } => {
            assert_eq!(assessment, LightAssessment::Regular { intensity: 16, duty: &duty });
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_empty_duty_table_never_escalates() {
    let config = ZodiacConfig {
        bonus_light: zodiac_types::BonusLightConfiguration { escalate_detected_bonus: true },
        ..ZodiacConfig::default()
    };
    let builtin = BraveManager::builtin(&config).unwrap();
    let manager = BraveManager::new(
        builtin.classifier().clone(),
        builtin.relics().clone(),
        TerritoryLightTable::new(),
    );
    let mut host = host_in(PHAROS_SIRIUS);

    toast(&manager, &config, &mut host, GENTLE_TOAST, false);
    assert!(host.bonus_light.reports.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// on_addon_setup
// ═══════════════════════════════════════════════════════════════════════════

fn open_magicite(host: &mut MemoryHost, light: &str, analyze: &str) {
    host.gui.open_addon(
        RELIC_MAGICITE_ADDON,
        RELIC_MAGICITE_ADDON_INDEX,
        MemoryAddon::new()
            .with_text_node(LIGHT_TEXT_NODE_ID, light)
            .with_text_node(ANALYZE_TEXT_NODE_ID, analyze),
    );
}

fn node_text(host: &MemoryHost, node_id: u32) -> Option<&str> {
    host.gui
        .addon(RELIC_MAGICITE_ADDON, RELIC_MAGICITE_ADDON_INDEX)
        .and_then(|a| a.node_text(node_id))
}

#[test]
fn test_addon_setup_patches_light_text() {
    let manager = make_manager();
    let mut config = ZodiacConfig::default();
    config.brave.mirror_to_secondary_element = true;
    let mut host = MemoryHost::default();
    host.inventory = MemoryInventory::with_mainhand(InventoryItem::new(EXCALIBUR, 1499));
    open_magicite(&mut host, "Light: Forceful", "Analyzing...");

    let outcome = manager.on_addon_setup(&config, &host.inventory, &mut host.gui);

    assert_eq!(outcome, Some(PatchOutcome::Patched { progress_appended: true, mirrored: true }));
    assert_eq!(node_text(&host, LIGHT_TEXT_NODE_ID), Some("Light: Forceful\n249/40"));
    assert_eq!(node_text(&host, ANALYZE_TEXT_NODE_ID), Some("Light: Forceful\n249/40"));
}

#[test]
fn test_addon_setup_respects_options() {
    let manager = make_manager();
    let mut config = ZodiacConfig::default();
    config.brave.show_numeric_progress = false;
    let mut host = MemoryHost::default();
    host.inventory = MemoryInventory::with_mainhand(InventoryItem::new(EXCALIBUR, 1499));
    open_magicite(&mut host, "Light", "Analyzing...");

    let outcome = manager.on_addon_setup(&config, &host.inventory, &mut host.gui);

    assert_eq!(outcome, Some(PatchOutcome::Patched { progress_appended: false, mirrored: false }));
    assert_eq!(node_text(&host, LIGHT_TEXT_NODE_ID), Some("Light"));
    assert_eq!(node_text(&host, ANALYZE_TEXT_NODE_ID), Some("Analyzing..."));
}

#[test]
fn test_addon_setup_without_addon_or_item() {
    let manager = make_manager();
    let config = ZodiacConfig::default();
    let mut host = MemoryHost::default();

    // Nothing equipped
    let outcome = manager.on_addon_setup(&config, &host.inventory, &mut host.gui);
    assert_eq!(outcome, Some(PatchOutcome::NotRelic));

    // Relic equipped, addon not open
    host.inventory = MemoryInventory::with_mainhand(InventoryItem::new(EXCALIBUR, 10));
    let outcome = manager.on_addon_setup(&config, &host.inventory, &mut host.gui);
    assert_eq!(outcome, Some(PatchOutcome::AddonMissing));
}

#[test]
fn test_addon_setup_fault_is_contained() {
    let manager = make_manager();
    let config = ZodiacConfig::default();
    let mut host = MemoryHost::default();
    host.inventory.unavailable = true;
    open_magicite(&mut host, "Light", "Analyzing...");

    let outcome = manager.on_addon_setup(&config, &host.inventory, &mut host.gui);

    assert!(outcome.is_none());
    assert_eq!(node_text(&host, LIGHT_TEXT_NODE_ID), Some("Light"));
}
