pub mod config;
pub mod error;
pub mod game_data;
pub mod host;
pub mod manager;
pub mod overlay;
pub mod toast;

#[cfg(test)]
mod manager_tests;

// Re-exports for convenience
pub use error::{ConfigError, HostError, TableError};
pub use game_data::{BonusLightDuty, RelicItem, RelicItemTable, TerritoryLightTable};
pub use manager::{BraveManager, ToastOutcome};
pub use overlay::{BraveWindow, OverlayState, OverlayUpdater, PatchOutcome};
pub use toast::{BonusLevel, LightAssessment, ToastClassifier, ToastMatch};
pub use zodiac_types::{ClientLanguage, ZodiacConfig};
