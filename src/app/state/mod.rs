mod system;
mod ui;

pub use system::SystemState;
pub use ui::{NoticeLevel, UIState};

use crate::config::keybindings::KeybindingConfig;
use crate::config::Settings;
use crate::session::Session;

pub struct AppState {
    pub session: Session,
    pub system: SystemState,
    pub ui: UIState,
}

impl AppState {
    pub fn new(settings: Settings, keybindings: KeybindingConfig) -> Self {
        let profile = settings.profile();
        let session = if settings.show_welcome {
            Session::new(profile)
        } else {
            Session::blank(profile)
        };
        Self {
            session,
            system: SystemState::new(settings, keybindings),
            ui: UIState::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.system.settings
    }

    pub fn tick_animation(&mut self) {
        self.system.animation_frame = self.system.animation_frame.wrapping_add(1);
        self.ui.expire_notice();
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.ui.scroll_offset = self
            .ui
            .scroll_offset
            .saturating_add(lines)
            .min(self.ui.max_scroll());
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.ui.scroll_offset = self.ui.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.ui.scroll_offset = 0;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), KeybindingConfig::default())
    }
}
