//! Error types for host calls, table loading and configuration.
//!
//! Lookup misses (no addon, no node, unknown territory) are not errors and
//! never appear here; they are `Option`s or outcome variants.

use std::path::PathBuf;

use thiserror::Error;

/// A fault reported by the host while servicing a call from the core.
///
/// These only ever reach the entry-point boundary in
/// [`BraveManager`](crate::BraveManager), where they are logged and dropped.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("inventory container {container} is not loaded")]
    InventoryUnavailable { container: &'static str },

    #[error("client state is not available: {reason}")]
    ClientUnavailable { reason: String },

    #[error("host call {call} failed: {reason}")]
    CallFailed { call: &'static str, reason: String },
}

/// Errors while building the read-only lookup tables at startup.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("log message {row} has no {language} text")]
    MissingMessage { row: u32, language: &'static str },

    #[error("invalid log message row {key:?} in {source_name}")]
    InvalidRow { key: String, source_name: String },

    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors while loading or saving [`ZodiacConfig`](zodiac_types::ZodiacConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Store(#[from] confy::ConfyError),

    #[error("IO error accessing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}
