use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_API_BASE_URL;
use crate::utils::FolioError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Chat widget configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UIConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the API, including the `/api` prefix
    pub base_url: String,
    /// Request timeout in seconds; unset means the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Chat widget configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Drop an outstanding reply when the chat pane is closed
    #[serde(default)]
    pub discard_on_close: bool,
    /// Start with the chat pane open
    #[serde(default)]
    pub open_on_start: bool,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    /// Show the welcome text while the conversation is empty
    pub show_welcome: bool,
    /// Show the portfolio sections next to the chat
    pub show_sections: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            show_welcome: true,
            show_sections: true,
        }
    }
}

/// Defaults merged with each existing TOML file, later files winning
fn figment_from(files: &[PathBuf]) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    for file in files {
        if file.exists() {
            figment = figment.merge(Toml::file(file));
        }
    }

    figment
}

/// Load configuration from multiple sources
///
/// Order: defaults, global config, local `.folio/config.toml`, the explicit
/// `--config` file, then `FOLIO_` environment variables.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(FolioError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            ))
            .into());
        }
    }

    let mut files = vec![
        get_config_dir()?.join("config.toml"),
        PathBuf::from(".folio/config.toml"),
    ];
    files.extend(explicit.map(Path::to_path_buf));

    // FOLIO_API__BASE_URL -> api.base_url
    figment_from(&files)
        .merge(Env::prefixed("FOLIO_").split("__"))
        .extract()
        .context("Failed to load configuration")
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

fn home_fallback(sub: &str) -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Could not determine home directory")?;
    Ok(PathBuf::from(home).join(sub).join("folio"))
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = match project_dirs() {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => home_fallback(".config")?,
    };
    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir)
}

/// Get the data directory (log file lives here)
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = match project_dirs() {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => home_fallback(".local/share")?,
    };
    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => get_config_dir()?.join("config.toml"),
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist.
/// Returns the path and whether it was newly written.
pub fn init_config() -> Result<(PathBuf, bool)> {
    let config_file = get_config_dir()?.join("config.toml");

    if config_file.exists() {
        return Ok((config_file, false));
    }

    save_config(&Config::default(), Some(config_file.clone()))?;
    Ok((config_file, true))
}
