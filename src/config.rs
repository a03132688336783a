use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub background_color: String,
    pub header_color: String,
    pub button_hover_color: String,
    pub history_color: String,
    pub title_color: String,
    pub font_size: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Directory holding the platform PNGs. Defaults to the app's XDG data
    /// directory when unset.
    pub directory: Option<PathBuf>,
    pub size: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeConfig {
                background_color: "#c8f0e8".to_string(), // Pale teal
                header_color: "#0077b6".to_string(),
                button_hover_color: "#bfeff6".to_string(),
                history_color: "#e6fbff".to_string(),
                title_color: "#04335a".to_string(),
                font_size: 12,
            },
            window: WindowConfig {
                width: 560,
                height: 600,
            },
            icons: IconConfig {
                directory: None,
                size: 28,
            },
        }
    }
}

impl IconConfig {
    pub fn directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("webhop")
                .join("icons")
        })
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("webhop")
            .join("config.toml")
    }

    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::config_path();

        if !path.exists() {
            let default = Config::default();
            default.save()?;
            return Ok(default);
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.theme.background_color, config.theme.background_color);
        assert_eq!(parsed.theme.header_color, config.theme.header_color);
        assert_eq!(parsed.window.width, 560);
        assert_eq!(parsed.icons.size, 28);
        assert!(parsed.icons.directory.is_none());
    }
}
