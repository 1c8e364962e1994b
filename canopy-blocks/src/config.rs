use crate::error::BlockError;
use crate::theme::Theme;
use canopy_model::Locale;
use serde::{Deserialize, Serialize};

/// Site-level configuration for the block engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: Locale,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            theme: Theme::Arbres,
        }
    }
}

impl Config {
    /// Best-effort load; any missing or unreadable file falls back to the
    /// defaults.
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("canopy").join("config.json");
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    match serde_json::from_str(&content) {
                        Ok(config) => return config,
                        Err(err) => {
                            log::warn!("ignoring malformed config {}: {err}", config_path.display())
                        }
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), BlockError> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("canopy");
            std::fs::create_dir_all(&app_dir)?;
            let config_path = app_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }
}
