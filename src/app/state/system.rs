use crate::config::keybindings::KeybindingConfig;
use crate::config::Settings;

pub struct SystemState {
    pub settings: Settings,
    pub keybindings: KeybindingConfig,
    /// Terminal size
    pub terminal_size: (u16, u16),
    /// Animation frame counter (for spinners)
    pub animation_frame: usize,
    /// Should quit flag
    pub should_quit: bool,
}

impl SystemState {
    pub fn new(settings: Settings, keybindings: KeybindingConfig) -> Self {
        Self {
            settings,
            keybindings,
            terminal_size: (80, 24),
            animation_frame: 0,
            should_quit: false,
        }
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new(Settings::default(), KeybindingConfig::default())
    }
}
