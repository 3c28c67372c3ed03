//! Light toast classification
//!
//! Quest toasts for the Brave stage are built from log-message templates with
//! the relic's name inserted into them. The host renders the name as a
//! payload, so the plain template text is split where the payload goes and a
//! toast matches a level when it contains every piece.
//!
//! ```text
//!   template  "The  glows faintly."      split on "  "
//!   tokens    ["The", "glows faintly."]
//!   toast     "The Excalibur glows faintly."   -> contains both -> Faint
//! ```
//!
//! Levels are tried in table order and the first match wins. A toast that
//! contains the tokens of two templates resolves to the earlier one.

use zodiac_types::ClientLanguage;

use crate::error::TableError;
use crate::game_data::{BonusLightDuty, resolve_bonus_levels};
use crate::host::LogMessageSheet;

/// A light level with its resolved, localized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusLevel {
    pub name: &'static str,
    pub intensity: u32,
    pub message_id: u32,
    pub message: String,
}

/// A classified toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastMatch<'a> {
    pub level: &'a BonusLevel,
    /// Index of the level in table order
    pub position: usize,
    completed: bool,
}

impl ToastMatch<'_> {
    /// Whether the match is the "completed" sentinel (the last table entry).
    ///
    /// Callers must not announce a light gain for it.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Compare the gain against a territory's light data.
    pub fn assess<'d>(&self, duty: Option<&'d BonusLightDuty>) -> LightAssessment<'d> {
        if self.completed {
            return LightAssessment::Completed;
        }
        let intensity = self.level.intensity;
        match duty {
            None => LightAssessment::UnknownTerritory { intensity },
            Some(duty) if duty.is_bonus_gain(intensity) => {
                LightAssessment::BonusDetected { intensity, duty }
            }
            Some(duty) => LightAssessment::Regular { intensity, duty },
        }
    }
}

/// Outcome of comparing a light gain with the current territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightAssessment<'d> {
    /// The relic is complete, nothing to compare
    Completed,
    /// No light data for the territory
    UnknownTerritory { intensity: u32 },
    /// Gain at or below half the duty's default intensity
    Regular { intensity: u32, duty: &'d BonusLightDuty },
    /// Gain above half the duty's default intensity
    BonusDetected { intensity: u32, duty: &'d BonusLightDuty },
}

impl LightAssessment<'_> {
    pub fn is_bonus(&self) -> bool {
        matches!(self, Self::BonusDetected { .. })
    }
}

/// Split a template into its non-empty tokens.
pub fn tokenize<'t>(template: &'t str, delimiter: &'t str) -> impl Iterator<Item = &'t str> + 't {
    template.split(delimiter).filter(|token| !token.is_empty())
}

/// Whether every token of `template` occurs in `notification`.
///
/// A template without tokens never matches.
pub fn template_matches(template: &str, delimiter: &str, notification: &str) -> bool {
    let mut tokens = tokenize(template, delimiter).peekable();
    tokens.peek().is_some() && tokens.all(|token| notification.contains(token))
}

/// Ordered light-level classifier for one client language.
#[derive(Debug, Clone)]
pub struct ToastClassifier {
    levels: Vec<BonusLevel>,
    language: ClientLanguage,
}

impl ToastClassifier {
    /// Build from already-resolved levels. The last level is the sentinel.
    pub fn new(levels: Vec<BonusLevel>, language: ClientLanguage) -> Self {
        Self { levels, language }
    }

    /// Resolve the built-in level table through a message sheet.
    pub fn from_sheet(
        sheet: &dyn LogMessageSheet,
        language: ClientLanguage,
    ) -> Result<Self, TableError> {
        Ok(Self::new(resolve_bonus_levels(sheet, language)?, language))
    }

    pub fn levels(&self) -> &[BonusLevel] {
        &self.levels
    }

    pub fn language(&self) -> ClientLanguage {
        self.language
    }

    /// First level (in table order) whose template tokens all occur in `notification`.
    pub fn classify(&self, notification: &str) -> Option<ToastMatch<'_>> {
        let delimiter = self.language.token_delimiter();
        let last = self.levels.len().checked_sub(1)?;
        self.levels
            .iter()
            .enumerate()
            .find(|(_, level)| template_matches(&level.message, delimiter, notification))
            .map(|(position, level)| ToastMatch {
                level,
                position,
                completed: position == last,
            })
    }
}
