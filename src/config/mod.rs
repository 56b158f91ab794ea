use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub mod graph;

pub use graph::GraphSettings;

/// Basic user information shown on reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub name: String,
    pub user_id: String,
    pub birth_date: String,
    pub department: String,
    pub position: String,
    pub sap_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record store JSON file.
    pub records_file: String,
    /// Axis table cache JSON file.
    pub axis_file: String,
    pub graph: GraphSettings,
    pub user: UserInfo,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_file: Self::records_path().to_string_lossy().to_string(),
            axis_file: Self::axis_path().to_string_lossy().to_string(),
            graph: GraphSettings::default(),
            user: UserInfo::default(),
        }
    }
}

impl Config {
    /// Platform config directory, `$HOME/.timereport` when none is known.
    pub fn config_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("timereport"),
            None => {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".timereport")
            }
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timereport.conf")
    }

    pub fn records_path() -> PathBuf {
        Self::config_dir().join("records.json")
    }

    pub fn axis_path() -> PathBuf {
        Self::config_dir().join("x_axis.json")
    }

    pub fn records_file_path(&self) -> PathBuf {
        expand_tilde(&self.records_file)
    }

    pub fn axis_file_path(&self) -> PathBuf {
        expand_tilde(&self.axis_file)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|_| AppError::ConfigSave)?;

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        info!(path = %Self::config_file().display(), "configuration saved");
        Ok(())
    }

    /// Create the configuration and an empty record store.
    ///
    /// `records` may name the store file; relative names land in the config
    /// directory. With `is_test` the configuration file is left untouched.
    pub fn init_all(records: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let records_path = match records {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::records_path(),
        };

        let config = Config {
            records_file: records_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
        }

        if let Some(parent) = records_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !records_path.exists() {
            fs::write(&records_path, "[]")?;
        }

        Ok(config)
    }
}
