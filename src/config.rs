use crate::error::{CarAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Production endpoint of the classification service
pub const DEFAULT_API_URL: &str = "https://car-classifier-tilhbeahgq-uc.a.run.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CarAiError::Config("Home directory not found".into()))?;
        Ok(home.join(".config").join("car-ai").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_url: None,
            timeout_seconds: 120,
        }
    }

    /// Resolve the API base URL. The environment variable wins, then the
    /// config file, then the deployed production endpoint.
    pub fn api_url(&self) -> String {
        if let Ok(url) = std::env::var("CAR_AI_API_URL") {
            if !url.trim().is_empty() {
                return url;
            }
        }

        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_url = Some(url);
        self.save()
    }
}
