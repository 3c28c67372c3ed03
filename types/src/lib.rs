//! Shared types for the Zodiac Brave light tracker.
//!
//! Configuration is plain serde data so that the core, the CLI and any
//! embedding layer agree on one on-disk format.

pub mod formatting;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Client Language
// ─────────────────────────────────────────────────────────────────────────────

/// Language of the game client, which decides how toast templates are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientLanguage {
    Japanese,
    #[default]
    English,
    German,
    French,
}

impl ClientLanguage {
    /// Separator left in a log message where the host strips the item-name payload.
    ///
    /// Latin-script clients leave two consecutive spaces, the Japanese client
    /// leaves an empty bracket pair.
    pub fn token_delimiter(self) -> &'static str {
        match self {
            Self::Japanese => "「」",
            Self::English | Self::German | Self::French => "  ",
        }
    }

    /// Key used for this language in message sheets and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Japanese => "japanese",
            Self::English => "english",
            Self::German => "german",
            Self::French => "french",
        }
    }
}

impl std::str::FromStr for ClientLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ja" | "japanese" => Ok(Self::Japanese),
            "en" | "english" => Ok(Self::English),
            "de" | "german" => Ok(Self::German),
            "fr" | "french" => Ok(Self::French),
            other => Err(format!("unknown client language: {other}")),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Root configuration, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZodiacConfig {
    /// Client language used to resolve and split toast templates
    pub language: ClientLanguage,
    pub brave: BraveConfiguration,
    pub bonus_light: BonusLightConfiguration,
}

/// Options for the Brave stage window and the RelicMagicite patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BraveConfiguration {
    /// Show the relic window while a Brave weapon is equipped
    pub overlay_enabled: bool,
    /// Append `value/40` under the light text of the RelicMagicite window
    pub show_numeric_progress: bool,
    /// Copy the light text over the analysis text (skips the analyze animation)
    pub mirror_to_secondary_element: bool,
    /// Mark recognised light toasts as handled so other consumers skip them
    pub consume_light_toasts: bool,
}

impl Default for BraveConfiguration {
    fn default() -> Self {
        Self {
            overlay_enabled: true,
            show_numeric_progress: true,
            mirror_to_secondary_element: false,
            consume_light_toasts: false,
        }
    }
}

/// Options for bonus light detection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusLightConfiguration {
    /// Report a duty as having bonus light when a toast exceeds half its
    /// default intensity. Off until the threshold is confirmed.
    pub escalate_detected_bonus: bool,
}
