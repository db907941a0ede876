use crate::app::{Action, AppState, NoticeLevel};
use crate::session::InputEdit;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use super::effects::spawn_effect;

/// Lines moved per scroll step
const SCROLL_STEP: u16 = 5;

pub fn process_action(
    state: &mut AppState,
    action: Action,
    action_tx: &mpsc::UnboundedSender<Action>,
) -> Result<()> {
    match action {
        Action::Quit => {
            state.system.should_quit = true;
        }
        Action::Tick => {
            state.tick_animation();
        }
        Action::Resize(w, h) => {
            state.system.terminal_size = (w, h);
        }

        Action::InputChar(c) => state.session.edit(InputEdit::Insert(c)),
        Action::InputBackspace => state.session.edit(InputEdit::Backspace),
        Action::Paste(text) => state.session.edit(InputEdit::Paste(text)),
        Action::ClearInput => state.session.edit(InputEdit::Clear),
        Action::Submit => {
            let effects = state.session.submit();
            for effect in effects {
                spawn_effect(effect, state.settings(), action_tx);
            }
            // Follow new output
            state.scroll_to_bottom();
        }

        Action::HistoryPrev => state.session.history_up(),
        Action::HistoryNext => state.session.history_down(),

        Action::ScrollUp => state.scroll_up(SCROLL_STEP),
        Action::ScrollDown => state.scroll_down(SCROLL_STEP),
        Action::ScrollToBottom => state.scroll_to_bottom(),

        Action::ArtReady(id, result) => {
            state.session.complete_art(id, result);
            state.scroll_to_bottom();
        }
        Action::DownloadFinished(result) => match result {
            Ok(path) => {
                info!(path = %path.display(), "resume saved");
                state
                    .ui
                    .notify(NoticeLevel::Info, format!("Saved {}", path.display()));
            }
            Err(e) => state.ui.notify(NoticeLevel::Error, format!("Download failed: {}", e)),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::session::{LineKind, Renderable, SessionState, ART_LOAD_FAILED};
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::time::Duration;

    fn state_with(settings: Settings) -> AppState {
        AppState::new(settings, Default::default())
    }

    fn type_and_submit(
        state: &mut AppState,
        line: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) {
        for c in line.chars() {
            process_action(state, Action::InputChar(c), tx).unwrap();
        }
        process_action(state, Action::Submit, tx).unwrap();
    }

    async fn next_action(rx: &mut mpsc::UnboundedReceiver<Action>) -> Action {
        tokio::time::timeout(Duration::from_secs(10), rx.recv())
            .await
            .expect("background task timed out")
            .expect("channel closed")
    }

    #[test]
    fn test_quit() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        process_action(&mut state, Action::Quit, &tx).unwrap();
        assert!(state.system.should_quit);
    }

    #[test]
    fn test_typing_and_submitting() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        type_and_submit(&mut state, "pwd", &tx);

        let lines = state.session.scrollback();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].content.as_text(), Some("/home/portfolio"));
        assert_eq!(state.session.input(), "");
    }

    #[test]
    fn test_history_keys() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        type_and_submit(&mut state, "a", &tx);
        type_and_submit(&mut state, "b", &tx);

        process_action(&mut state, Action::HistoryPrev, &tx).unwrap();
        assert_eq!(state.session.input(), "b");
        process_action(&mut state, Action::HistoryPrev, &tx).unwrap();
        assert_eq!(state.session.input(), "a");
        process_action(&mut state, Action::HistoryNext, &tx).unwrap();
        assert_eq!(state.session.input(), "b");
        process_action(&mut state, Action::HistoryNext, &tx).unwrap();
        assert_eq!(state.session.input(), "");
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        state.ui.content_length = 30;
        state.ui.viewport_height = 20;

        process_action(&mut state, Action::ScrollUp, &tx).unwrap();
        process_action(&mut state, Action::ScrollUp, &tx).unwrap();
        process_action(&mut state, Action::ScrollUp, &tx).unwrap();
        assert_eq!(state.ui.scroll_offset, 10);

        process_action(&mut state, Action::ScrollDown, &tx).unwrap();
        assert_eq!(state.ui.scroll_offset, 5);

        type_and_submit(&mut state, "help", &tx);
        assert_eq!(state.ui.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_profile_renders_art_from_asset_dir() {
        let assets = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 50, image::Rgb([0, 0, 0])));
        img.save_with_format(assets.path().join("foysal-mahmud-hasan.jpg"), ImageFormat::Png)
            .unwrap();

        let settings = Settings {
            asset_base: assets.path().to_string_lossy().into_owned(),
            show_welcome: false,
            ..Settings::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = state_with(settings);

        type_and_submit(&mut state, "profile", &tx);
        assert_eq!(state.session.state(), SessionState::Executing);

        let action = next_action(&mut rx).await;
        process_action(&mut state, action, &tx).unwrap();

        assert_eq!(state.session.state(), SessionState::Idle);
        let last = state.session.scrollback().last().unwrap();
        assert_eq!(last.kind, LineKind::Output);
        match &last.content {
            Renderable::Art(grid) => assert_eq!((grid.width(), grid.height()), (80, 20)),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_profile_image_shows_error() {
        let assets = tempfile::tempdir().unwrap();
        let settings = Settings {
            asset_base: assets.path().to_string_lossy().into_owned(),
            ..Settings::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = state_with(settings);

        type_and_submit(&mut state, "cat profile.jpg", &tx);
        let action = next_action(&mut rx).await;
        process_action(&mut state, action, &tx).unwrap();

        let last = state.session.scrollback().last().unwrap();
        assert_eq!(last.kind, LineKind::Error);
        assert_eq!(last.content.as_text(), Some(ART_LOAD_FAILED));
    }

    #[tokio::test]
    async fn test_resume_download_lands_in_download_dir() {
        let assets = tempfile::tempdir().unwrap();
        std::fs::write(assets.path().join("foysal-mahmud-hasan-resume.pdf"), b"%PDF").unwrap();
        let downloads = tempfile::tempdir().unwrap();

        let settings = Settings {
            asset_base: assets.path().to_string_lossy().into_owned(),
            download_dir: Some(downloads.path().to_path_buf()),
            ..Settings::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = state_with(settings);

        type_and_submit(&mut state, "resume", &tx);
        assert!(matches!(
            state.session.scrollback().last().unwrap().content,
            Renderable::DownloadLink { .. }
        ));

        let action = next_action(&mut rx).await;
        process_action(&mut state, action, &tx).unwrap();

        let saved = downloads.path().join("foysal-mahmud-hasan-resume.pdf");
        assert_eq!(std::fs::read(saved).unwrap(), b"%PDF");
        let notice = state.ui.notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
    }
}
