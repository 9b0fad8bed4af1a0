use crate::error::{PasteError, Result};
use crate::store::paste_store::DEFAULT_SLOT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_WIDTH: usize = 50;

/// Configuration for pastebox, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasteboxConfig {
    /// Name of the slot pastes are persisted under
    #[serde(default = "default_slot")]
    pub slot: String,

    /// How many characters of content to preview in listings
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_preview_width() -> usize {
    DEFAULT_PREVIEW_WIDTH
}

impl Default for PasteboxConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            preview_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

/// Keys understood by `get`/`set`.
pub const CONFIG_KEYS: &[&str] = &["slot", "preview-width"];

impl PasteboxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PasteError::Io)?;
        let config: PasteboxConfig =
            serde_json::from_str(&content).map_err(PasteError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PasteError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PasteError::Serialization)?;
        fs::write(config_path, content).map_err(PasteError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "slot" => Ok(self.slot.clone()),
            "preview-width" => Ok(self.preview_width.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "slot" => {
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
                if !valid {
                    return Err(PasteError::Config(format!(
                        "slot must be letters, digits, '-' or '_', got '{}'",
                        value
                    )));
                }
                self.slot = value.to_string();
            }
            "preview-width" => {
                self.preview_width = value.parse().map_err(|_| {
                    PasteError::Config(format!("preview-width must be a number, got '{}'", value))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> PasteError {
    PasteError::Config(format!(
        "Unknown config key: {} (known: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
