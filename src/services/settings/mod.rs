// Settings service
// Loads and saves the widget configuration file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;

use crate::models::settings::WidgetSettings;

const CONFIG_FILE_NAME: &str = "countdown.toml";
const STORAGE_FILE_NAME: &str = "countdown.db";

pub struct SettingsService;

impl SettingsService {
    /// Load settings from `path`, using defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<WidgetSettings> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(WidgetSettings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let settings: WidgetSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        Ok(settings)
    }

    /// Like [`SettingsService::load`], but never fails: problems are logged and
    /// the defaults are used instead.
    pub fn load_or_default(path: &Path) -> WidgetSettings {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                WidgetSettings::default()
            }
        }
    }

    pub fn save(path: &Path, settings: &WidgetSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn resolve_config_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            PathBuf::from(CONFIG_FILE_NAME)
        }

        #[cfg(not(debug_assertions))]
        {
            if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "CountdownWidget") {
                proj_dirs.config_dir().join(CONFIG_FILE_NAME)
            } else {
                PathBuf::from(CONFIG_FILE_NAME)
            }
        }
    }

    pub fn resolve_storage_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            PathBuf::from(STORAGE_FILE_NAME)
        }

        #[cfg(not(debug_assertions))]
        {
            if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "CountdownWidget") {
                proj_dirs.data_dir().join(STORAGE_FILE_NAME)
            } else {
                PathBuf::from(STORAGE_FILE_NAME)
            }
        }
    }
}
