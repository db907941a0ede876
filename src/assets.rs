//! Resolution of web-style resource paths onto local files or remote URLs.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_ASSET_BASE: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    File(PathBuf),
    Url(String),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

impl std::fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetLocation::File(path) => write!(f, "{}", path.display()),
            AssetLocation::Url(url) => f.write_str(url),
        }
    }
}

fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Resolve `resource` against `base`.
///
/// Absolute URLs and `file://` paths are used as-is. Anything else is treated
/// as relative to the asset base, which is either a directory or a URL prefix,
/// with a leading `/` meaning the root of that base.
pub fn resolve(base: &str, resource: &str) -> AssetLocation {
    if is_url(resource) {
        return AssetLocation::Url(resource.to_string());
    }
    if let Some(path) = resource.strip_prefix("file://") {
        return AssetLocation::File(PathBuf::from(path));
    }

    let relative = resource.trim_start_matches('/');
    if is_url(base) {
        AssetLocation::Url(format!("{}/{}", base.trim_end_matches('/'), relative))
    } else {
        AssetLocation::File(Path::new(base).join(relative))
    }
}

/// Read the full contents of an asset.
pub async fn fetch(location: &AssetLocation) -> Result<Vec<u8>, AssetError> {
    match location {
        AssetLocation::File(path) => tokio::fs::read(path).await.map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        }),
        AssetLocation::Url(url) => {
            let response = reqwest::get(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(AssetError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            Ok(response.bytes().await?.to_vec())
        }
    }
}
