use crate::classifier::ClassifierKind;
use crate::classifier::huggingface::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const DEFAULT_TEXT: &str = "Bitcoin hits all-time high!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub classifier: ClassifierKind,
    #[serde(default = "default_model_endpoint")]
    pub model_endpoint: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Name of the environment variable holding the inference API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// When false, `dashboard` keeps prompting for new headlines.
    #[serde(default = "default_headless")]
    pub headless: bool,
    #[serde(default = "default_recent_rows")]
    pub recent_rows: usize,
    #[serde(default = "default_text")]
    pub default_text: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_model_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_model_name() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_token_env() -> String {
    "HF_TOKEN".to_string()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_headless() -> bool {
    true
}
fn default_recent_rows() -> usize {
    10
}
fn default_text() -> String {
    DEFAULT_TEXT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            classifier: ClassifierKind::default(),
            model_endpoint: default_model_endpoint(),
            model_name: default_model_name(),
            token_env: default_token_env(),
            request_timeout_secs: default_request_timeout(),
            headless: default_headless(),
            recent_rows: default_recent_rows(),
            default_text: default_text(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.greedfear`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".greedfear")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("greedfear.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("greedfear.sqlite")
    }

    /// Load configuration from the default file, or defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration file and database location.
    ///
    /// Returns the resolved database path. In test mode the config file is
    /// left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path.to_string_lossy().to_string())
    }
}
