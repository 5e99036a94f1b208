use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "DEVICELOG_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub data_file: String,
    #[serde(default = "default_oplog_file")]
    pub oplog_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Maximum rows printed by `list` (0 = no limit)
    #[serde(default)]
    pub list_limit: usize,
}

fn default_oplog_file() -> String {
    Config::oplog_path().to_string_lossy().to_string()
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_path().to_string_lossy().to_string(),
            oplog_file: default_oplog_file(),
            separator_char: default_separator_char(),
            list_limit: 0,
        }
    }
}

impl Config {
    /// Return the configuration directory: `$DEVICELOG_CONFIG_DIR` if set,
    /// otherwise the standard one for the platform
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            PathBuf::from(dir)
        } else if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("devicelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".devicelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("devicelog.conf")
    }

    /// Return the default path of the event CSV file
    pub fn data_path() -> PathBuf {
        Self::config_dir().join("smart_device_log.csv")
    }

    /// Return the default path of the operation log
    pub fn oplog_path() -> PathBuf {
        Self::config_dir().join("devicelog_oplog.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Write the configuration as YAML.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Point the configuration at another data file.
    /// The operation log follows it (`<stem>_oplog.csv` in the same folder)
    /// so that a custom data file never writes into the default folder.
    pub fn with_data_file(mut self, custom: &str) -> Self {
        let data = expand_tilde(custom);
        let stem = data
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "devicelog".to_string());
        let oplog = data.with_file_name(format!("{stem}_oplog.csv"));

        self.data_file = data.to_string_lossy().to_string();
        self.oplog_file = oplog.to_string_lossy().to_string();
        self
    }

    pub fn data_file_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn oplog_file_path(&self) -> PathBuf {
        expand_tilde(&self.oplog_file)
    }
}
