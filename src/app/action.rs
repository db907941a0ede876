use crate::art::{ArtError, AsciiArtGrid};
use crate::config::keybindings::KeyAction;
use crate::session::RequestId;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Action {
    // Input line
    InputChar(char),
    InputBackspace,
    Paste(String),
    ClearInput,
    Submit,

    // History
    HistoryPrev,
    HistoryNext,

    // Scrollback
    ScrollUp,
    ScrollDown,
    ScrollToBottom,

    // Background work
    ArtReady(RequestId, Result<AsciiArtGrid, ArtError>),
    DownloadFinished(Result<PathBuf, String>),

    // App control
    Quit,
    Tick,
    Resize(u16, u16),
}

impl From<KeyAction> for Action {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::Submit => Action::Submit,
            KeyAction::HistoryPrev => Action::HistoryPrev,
            KeyAction::HistoryNext => Action::HistoryNext,
            KeyAction::ScrollUp => Action::ScrollUp,
            KeyAction::ScrollDown => Action::ScrollDown,
            KeyAction::ScrollBottom => Action::ScrollToBottom,
            KeyAction::ClearInput => Action::ClearInput,
            KeyAction::Quit => Action::Quit,
        }
    }
}
