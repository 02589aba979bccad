use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "pitch";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prediction endpoint used when `--endpoint` is not passed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Default log level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Level from `explicit` if given, else the configured one
    pub fn resolve_log_level(&self, explicit: Option<&str>) -> Result<tracing::Level, StateError> {
        parse_log_level(explicit.unwrap_or(&self.log_level))
    }
}

pub fn parse_log_level(level: &str) -> Result<tracing::Level, StateError> {
    level
        .parse()
        .map_err(|_| StateError::InvalidLogLevel(level.to_string()))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the pitch directory (~/.pitch)
    pub pitch_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the pitch directory path (custom or default ~/.pitch)
    pub fn pitch_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Write a new config file, refusing to clobber an existing one
    pub fn init(custom_path: Option<PathBuf>, config: AppConfig) -> Result<Self, StateError> {
        let pitch_dir = Self::pitch_dir(custom_path)?;
        let config_path = pitch_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            return Err(StateError::AlreadyInitialized(config_path));
        }

        fs::create_dir_all(&pitch_dir)?;
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            pitch_dir,
            config_path,
            config,
        })
    }

    /// Load the config file; a missing file means defaults
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let pitch_dir = Self::pitch_dir(custom_path)?;
        let config_path = pitch_dir.join(CONFIG_FILE_NAME);

        let config = if config_path.exists() {
            let config_toml = fs::read_to_string(&config_path)?;
            toml::from_str(&config_toml)?
        } else {
            AppConfig::default()
        };

        Ok(Self {
            pitch_dir,
            config_path,
            config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("config already exists at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("invalid log level {0:?} (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
