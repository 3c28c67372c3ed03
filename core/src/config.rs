//! Configuration loading
//!
//! The tracker itself never reads configuration from ambient state: the
//! embedder loads a [`ZodiacConfig`] once and passes it into every entry
//! point. This module only covers getting it on and off disk.
//!
//! - **Store**: the per-user config file managed by `confy`
//! - **File**: an explicit TOML path (used by the CLI and tests)

use std::fs;
use std::path::{Path, PathBuf};

use zodiac_types::ZodiacConfig;

use crate::error::ConfigError;

pub const APP_NAME: &str = "zodiac";
const CONFIG_NAME: &str = "config";

/// Load the per-user configuration, creating it with defaults if missing.
pub fn load_config() -> Result<ZodiacConfig, ConfigError> {
    Ok(confy::load(APP_NAME, Some(CONFIG_NAME))?)
}

/// Load the per-user configuration, falling back to defaults on any error.
pub fn load_config_or_default() -> ZodiacConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load configuration, using defaults");
            ZodiacConfig::default()
        }
    }
}

/// Path of the per-user configuration file
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(confy::get_configuration_file_path(APP_NAME, Some(CONFIG_NAME))?)
}

/// Load a configuration from an explicit TOML file
pub fn load_file(path: &Path) -> Result<ZodiacConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a configuration to an explicit TOML file
pub fn save_file(path: &Path, config: &ZodiacConfig) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
