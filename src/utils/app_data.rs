use crate::index::types::{ManualLayout, DEFAULT_DOCUMENTATION_FOLDER, DEFAULT_MANUALS_FOLDER};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "mandex";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the documentation folder. Falls back to the
    /// current directory when unset.
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default = "default_documentation_folder")]
    pub documentation_folder: String,

    #[serde(default = "default_manuals_folder")]
    pub manuals_folder: String,
}

fn default_documentation_folder() -> String {
    DEFAULT_DOCUMENTATION_FOLDER.to_string()
}

fn default_manuals_folder() -> String {
    DEFAULT_MANUALS_FOLDER.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: None,
            documentation_folder: default_documentation_folder(),
            manuals_folder: default_manuals_folder(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        Ok(config)
    }

    /// Build the manual layout, preferring an explicit root over the configured one.
    pub fn layout(&self, root_override: Option<&Path>) -> Result<ManualLayout> {
        let root = match root_override.or(self.root.as_deref()) {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir().context("Could not determine current directory")?,
        };
        let root = root.canonicalize().unwrap_or(root);

        Ok(ManualLayout {
            root,
            documentation_folder: self.documentation_folder.clone(),
            manuals_folder: self.manuals_folder.clone(),
        })
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
