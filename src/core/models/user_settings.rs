use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub media_directory: Option<PathBuf>,
    #[serde(default = "default_camera_command")]
    pub camera_command: Vec<String>,
}

fn default_camera_command() -> Vec<String> {
    global_constants::DEFAULT_CAMERA_COMMAND
        .iter()
        .map(|part| part.to_string())
        .collect()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            media_directory: None,
            camera_command: default_camera_command(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("failed to read settings from {:?}", settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse settings in {:?}", settings_path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Media directory: {:?}", settings.media_directory);
        log::debug!("[SETTINGS] Camera command: {:?}", settings.camera_command);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn resolve_media_directory(&self) -> anyhow::Result<PathBuf> {
        if let Some(directory) = &self.media_directory {
            return Ok(directory.clone());
        }

        let base_directory = dirs::picture_dir()
            .or_else(dirs::data_local_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not find a pictures directory"))?;

        Ok(base_directory.join(global_constants::MEDIA_DIRECTORY_NAME))
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
