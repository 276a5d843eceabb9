use crate::pagination::{PageSize, PaginationError, DEFAULT_POSTS_PER_PAGE};
use crate::ui::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Validated by `page_size`, not on load
    pub posts_per_page: i64,
    /// Recommendations JSON; the bundled sample is used when unset
    pub recommendations_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            posts_per_page: DEFAULT_POSTS_PER_PAGE as i64,
            recommendations_file: None,
        }
    }
}

impl Settings {
    /// Validated page size, `override_per_page` taking precedence
    pub fn page_size(&self, override_per_page: Option<usize>) -> Result<PageSize, PaginationError> {
        match override_per_page {
            Some(per_page) => PageSize::new(per_page),
            None => PageSize::from_signed(self.posts_per_page),
        }
    }
}

/// Directory holding settings. Logs live under the cache directory instead.
pub fn app_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
        .join("bgrecs");

    fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

fn settings_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("settings.json"))
}

/// Load settings from disk
/// Falls back to default settings if file doesn't exist or is invalid
pub fn load_settings() -> Settings {
    match settings_path() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            log::warn!("no settings location: {}", e);
            Settings::default()
        }
    }
}

fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    match fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| serde_json::from_str(&content).map_err(anyhow::Error::from))
    {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("ignoring unreadable settings {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Save settings to disk
pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(settings, &settings_path()?)
}

fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
