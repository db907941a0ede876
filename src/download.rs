//! Saving downloadable resources into the user's downloads directory.

use crate::assets::{self, AssetLocation};
use crate::profile::file_name_of;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

const FALLBACK_NAME: &str = "resume.pdf";

/// Where downloads land: the platform downloads directory or the current directory.
pub fn default_target_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// File name a resource is saved under
pub fn target_name(resource: &str) -> &str {
    file_name_of(resource).unwrap_or(FALLBACK_NAME)
}

/// Copy the resource at `location` into `target_dir`, named after the last
/// segment of `resource`. Returns the written path.
pub async fn download(location: &AssetLocation, resource: &str, target_dir: &Path) -> Result<PathBuf> {
    let bytes = assets::fetch(location)
        .await
        .with_context(|| format!("fetching {}", location))?;

    tokio::fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("creating {}", target_dir.display()))?;

    let path = target_dir.join(target_name(resource));
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "downloaded");
    Ok(path)
}
