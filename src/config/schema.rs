use crate::error::ConfigError;
use crate::mediator::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Completion-service credential. An absent or empty key is accepted
    /// here; the remote call is what fails.
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub default_model: String,

    #[serde(default = "default_temperature")]
    pub default_temperature: f64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            default_model: default_model(),
            default_temperature: default_temperature(),
        }
    }
}

impl Config {
    /// Load `~/.nexus-exec/config.toml`, creating the directory and a
    /// default config on first run.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".to_string()))?;
        let nexus_dir = home.join(".nexus-exec");
        let config_path = nexus_dir.join("config.toml");

        if !nexus_dir.exists() {
            fs::create_dir_all(&nexus_dir)?;
        }

        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path (tests use a tempdir).
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| ConfigError::Load(e.to_string()))?;
            config.config_path = config_path.to_path_buf();
            Ok(config)
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Save(e.to_string()))?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        // API Key: NEXUS_API_KEY or API_KEY
        if let Ok(key) = std::env::var("NEXUS_API_KEY").or_else(|_| std::env::var("API_KEY")) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }

        // Model: NEXUS_MODEL
        if let Ok(model) = std::env::var("NEXUS_MODEL") {
            if !model.is_empty() {
                self.default_model = model;
            }
        }

        // Temperature: NEXUS_TEMPERATURE
        if let Ok(temp_str) = std::env::var("NEXUS_TEMPERATURE") {
            if let Ok(temp) = temp_str.parse::<f64>() {
                self.default_temperature = temp;
            }
        }
    }
}
