use crate::error::{RepzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATASET: &str = "data";
const DEFAULT_FILE_EXT: &str = ".csv";

/// Configuration for repz, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepzConfig {
    /// Dataset a session starts on when none is named (e.g. "data")
    #[serde(default = "default_dataset")]
    pub default_dataset: String,

    /// File extension for dataset files (e.g. ".csv")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for RepzConfig {
    fn default() -> Self {
        Self {
            default_dataset: DEFAULT_DATASET.to_string(),
            file_ext: DEFAULT_FILE_EXT.to_string(),
        }
    }
}

impl RepzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RepzError::Io)?;
        let config: RepzConfig =
            serde_json::from_str(&content).map_err(RepzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RepzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RepzError::Serialization)?;
        fs::write(config_path, content).map_err(RepzError::Io)?;
        Ok(())
    }

    /// Load config, writing a default config.json first if none exists yet.
    /// Used on startup so a fresh data directory ends up with an editable file.
    pub fn ensure<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            let config = Self::default();
            config.save(config_dir)?;
            return Ok(config);
        }
        Self::load(config_dir)
    }

    /// Get the file extension (always starts with a dot)
    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }
}
