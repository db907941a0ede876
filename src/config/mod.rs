pub mod keybindings;

use crate::assets::DEFAULT_ASSET_BASE;
use crate::profile::Profile;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "portfolio-cli";

pub const DEFAULT_ART_WIDTH: u32 = 80;

/// User settings read from `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory or URL that web-style resource paths are resolved against
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    #[serde(default = "default_art_width")]
    pub art_width: u32,
    #[serde(default = "default_show_welcome")]
    pub show_welcome: bool,
    /// Overrides the platform downloads directory
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub resume_path: Option<String>,
}

fn default_asset_base() -> String {
    DEFAULT_ASSET_BASE.to_string()
}

fn default_art_width() -> u32 {
    DEFAULT_ART_WIDTH
}

fn default_show_welcome() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_base: default_asset_base(),
            art_width: DEFAULT_ART_WIDTH,
            show_welcome: true,
            download_dir: None,
            profile_image: None,
            resume_path: None,
        }
    }
}

impl Settings {
    /// Profile data with any resource overrides applied
    pub fn profile(&self) -> Profile {
        let mut profile = Profile::default();
        if let Some(image) = &self.profile_image {
            profile.image_source = image.clone();
        }
        if let Some(resume) = &self.resume_path {
            profile.resume_path = resume.clone();
        }
        profile
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(crate::download::default_target_dir)
    }
}

/// `<config dir>/portfolio-cli`, created if missing
pub fn app_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
        .join(APP_DIR);

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

pub fn load_config() -> Result<Settings> {
    load_config_from(&app_config_dir()?.join("config.json"))
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(settings)
}
