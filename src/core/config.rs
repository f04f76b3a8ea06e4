//! Optional `barnacle.toml` configuration.
//!
//! Absence of the file is normal and yields defaults; a file that exists but
//! fails to parse is a hard configuration error.

use crate::core::error::RegistryError;
use crate::core::table::TableStyle;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "barnacle.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BarnacleConfig {
    pub tracking: TrackingConfig,
    pub table: TableStyle,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Whether execution tracking starts enabled.
    pub enabled: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        TrackingConfig { enabled: true }
    }
}

impl BarnacleConfig {
    /// Load configuration from an explicit path.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<BarnacleConfig, RegistryError> {
        if !path.exists() {
            return Ok(BarnacleConfig::default());
        }
        let content = fs::read_to_string(path).map_err(RegistryError::IoError)?;
        toml::from_str(&content).map_err(|e| RegistryError::ConfigError(e.to_string()))
    }

    /// Load `barnacle.toml` from the given directory, falling back to defaults.
    pub fn load_from_dir(dir: &Path) -> Result<BarnacleConfig, RegistryError> {
        BarnacleConfig::load(&dir.join(CONFIG_FILE_NAME))
    }
}
