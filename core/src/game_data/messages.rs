//! Toast templates
//!
//! The light-level table only stores log-message row ids. The template text
//! is localized, so it is resolved once at startup from a [`LogMessageSheet`]:
//! the host's sheet in a live client, or [`StaticMessageSheet`] (TOML) for the
//! CLI and tests.

use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use zodiac_types::ClientLanguage;

use super::bonus_light::BONUS_LIGHT_LEVELS;
use crate::error::TableError;
use crate::host::LogMessageSheet;
use crate::toast::{BonusLevel, tokenize};

const BUILTIN_LOG_MESSAGES: &str = include_str!("../../data/log_messages.toml");

/// Log messages keyed by language and row, loaded from TOML.
///
/// ```toml
/// [english]
/// 4660 = "The  glows feebly."
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticMessageSheet {
    messages: HashMap<ClientLanguage, HashMap<u32, String>>,
}

impl StaticMessageSheet {
    /// Sheet with the templates shipped in `core/data/log_messages.toml`
    pub fn builtin() -> Result<Self, TableError> {
        Self::parse(BUILTIN_LOG_MESSAGES, "builtin log_messages.toml")
    }

    pub fn load_file(path: &Path) -> Result<Self, TableError> {
        let contents = fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    pub fn parse(contents: &str, source_name: &str) -> Result<Self, TableError> {
        let raw: HashMap<String, HashMap<String, String>> =
            toml::from_str(contents).map_err(|e| TableError::Parse {
                source_name: source_name.to_string(),
                source: e,
            })?;

        let mut messages = HashMap::new();
        for (language_key, rows) in raw {
            let Ok(language) = language_key.parse::<ClientLanguage>() else {
                tracing::warn!(language = %language_key, source = source_name, "Skipping unknown language");
                continue;
            };
            let mut parsed = HashMap::with_capacity(rows.len());
            for (key, text) in rows {
                let row: u32 = key.parse().map_err(|_| TableError::InvalidRow {
                    key: key.clone(),
                    source_name: source_name.to_string(),
                })?;
                parsed.insert(row, text);
            }
            messages.insert(language, parsed);
        }

        Ok(Self { messages })
    }

    pub fn insert(&mut self, language: ClientLanguage, row: u32, text: impl Into<String>) {
        self.messages.entry(language).or_default().insert(row, text.into());
    }
}

impl LogMessageSheet for StaticMessageSheet {
    fn message(&self, language: ClientLanguage, row: u32) -> Option<String> {
        self.messages.get(&language)?.get(&row).cloned()
    }
}

/// Resolve the ordered light-level table for one client language.
///
/// Fails if any row is missing: a partial table would shift which level the
/// "completed" sentinel is.
pub fn resolve_bonus_levels(
    sheet: &dyn LogMessageSheet,
    language: ClientLanguage,
) -> Result<Vec<BonusLevel>, TableError> {
    BONUS_LIGHT_LEVELS
        .iter()
        .map(|level| {
            let message = sheet.message(language, level.message_id).ok_or(
                TableError::MissingMessage {
                    row: level.message_id,
                    language: language.as_str(),
                },
            )?;
            if tokenize(&message, language.token_delimiter()).next().is_none() {
                tracing::warn!(
                    row = level.message_id,
                    language = language.as_str(),
                    "Toast template has no tokens and will never match"
                );
            }
            Ok(BonusLevel {
                name: level.name,
                intensity: level.intensity,
                message_id: level.message_id,
                message,
            })
        })
        .collect()
}
