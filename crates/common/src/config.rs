//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KenBurnsError, KenBurnsResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default animation settings.
    pub animation: AnimationDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default animation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationDefaults {
    /// Duration of each transition in milliseconds.
    pub transition_duration_ms: u64,

    /// Easing curve name (e.g., "linear", "accelerate-decelerate").
    pub easing: String,

    /// Start each transition from the previous destiny rect when the
    /// drawable and viewport are unchanged.
    pub chain_transitions: bool,

    /// Target frame rate for the driver.
    pub fps: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "kenburns_engine=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AnimationDefaults {
    fn default() -> Self {
        Self {
            transition_duration_ms: 10_000,
            easing: "accelerate-decelerate".to_string(),
            chain_transitions: true,
            fps: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> KenBurnsResult<Self> {
        if !path.exists() {
            return Err(KenBurnsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> KenBurnsResult<()> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> KenBurnsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the animation engine cannot run with.
    pub fn validate(&self) -> KenBurnsResult<()> {
        if self.animation.transition_duration_ms == 0 {
            return Err(KenBurnsError::config(
                "transition_duration_ms must be positive",
            ));
        }
        if self.animation.fps == 0 {
            return Err(KenBurnsError::config("fps must be positive"));
        }
        if self.animation.easing.trim().is_empty() {
            return Err(KenBurnsError::config("easing must not be empty"));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("kenburns").join("config.json")
}
