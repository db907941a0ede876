use crate::app::Action;
use crate::art::{self, ArtError, AsciiArtGrid};
use crate::assets;
use crate::config::Settings;
use crate::download;
use crate::session::Effect;
use anyhow::Result;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::warn;

/// Convert the image behind `source` using the configured asset base and width.
pub async fn render_art(settings: &Settings, source: &str) -> Result<AsciiArtGrid, ArtError> {
    let location = assets::resolve(&settings.asset_base, source);
    art::convert(&location, settings.art_width).await
}

/// Save the resource behind `resource` into the configured downloads directory.
pub async fn save_download(settings: &Settings, resource: &str) -> Result<PathBuf> {
    let location = assets::resolve(&settings.asset_base, resource);
    download::download(&location, resource, &settings.download_dir()).await
}

/// Run an effect in the background and report back through `action_tx`.
pub fn spawn_effect(effect: Effect, settings: &Settings, action_tx: &mpsc::UnboundedSender<Action>) {
    let settings = settings.clone();
    let tx = action_tx.clone();
    match effect {
        Effect::RenderArt { id, source } => {
            tokio::spawn(async move {
                let result = render_art(&settings, &source).await;
                // Receiver gone means the app is shutting down
                let _ = tx.send(Action::ArtReady(id, result));
            });
        }
        Effect::Download { resource } => {
            tokio::spawn(async move {
                let result = save_download(&settings, &resource).await.map_err(|e| {
                    let message = format!("{:#}", e);
                    warn!(resource = %resource, error = %message, "download failed");
                    message
                });
                let _ = tx.send(Action::DownloadFinished(result));
            });
        }
    }
}
