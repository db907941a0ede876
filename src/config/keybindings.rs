use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// Default keybindings embedded at compile time
const DEFAULT_KEYBINDINGS: &str = include_str!("defaults.toml");

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Parse a key string like "Ctrl-c", "Shift-Tab", "Enter", "PageUp"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s == "-" {
            return Some(Self::new(KeyCode::Char('-'), KeyModifiers::NONE));
        }

        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('-').collect();
        let key_str = parts.pop()?;

        for modifier in parts {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "c" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "a" | "opt" | "option" => modifiers |= KeyModifiers::ALT,
                "shift" | "s" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        Some(Self::new(parse_key_code(key_str)?, modifiers))
    }

    /// Display string for the help hint, e.g. "Ctrl-c"
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        parts.push(key_code_display(&self.code));
        parts.join("-")
    }
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    if s.chars().count() == 1 {
        return s.chars().next().map(KeyCode::Char);
    }

    match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "space" => Some(KeyCode::Char(' ')),
        f if f.starts_with('f') => f[1..].parse().ok().map(KeyCode::F),
        _ => None,
    }
}

fn key_code_display(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    }
}

/// Things a bound key can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Submit,
    HistoryPrev,
    HistoryNext,
    ScrollUp,
    ScrollDown,
    ScrollBottom,
    ClearInput,
    Quit,
}

/// Raw TOML structure for keybindings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeybindingsToml {
    #[serde(default)]
    pub keys: HashMap<String, KeyAction>,
}

/// Parsed keybinding configuration with KeyCombo lookups
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, KeyAction>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        parse_keybindings(DEFAULT_KEYBINDINGS).unwrap_or_else(|_| Self {
            bindings: HashMap::new(),
        })
    }
}

impl KeybindingConfig {
    pub fn lookup(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        self.bindings.get(&KeyCombo::new(code, modifiers)).copied()
    }

    /// First key bound to `action`, for display
    pub fn key_for(&self, action: KeyAction) -> Option<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(combo, _)| combo.display())
            .collect();
        keys.sort();
        keys.into_iter().next()
    }
}

/// Parse a keybindings TOML document. Unparseable key strings are skipped.
pub fn parse_keybindings(toml_content: &str) -> Result<KeybindingConfig, toml::de::Error> {
    let raw: KeybindingsToml = toml::from_str(toml_content)?;
    let bindings = raw
        .keys
        .iter()
        .filter_map(|(key, action)| match KeyCombo::parse(key) {
            Some(combo) => Some((combo, *action)),
            None => {
                warn!(key = %key, "ignoring unrecognized key binding");
                None
            }
        })
        .collect();
    Ok(KeybindingConfig { bindings })
}

/// Load keybindings from user config, falling back to defaults
pub fn load_keybindings() -> KeybindingConfig {
    let user_config_path = get_user_config_path();

    let toml_content = if user_config_path.exists() {
        std::fs::read_to_string(&user_config_path).unwrap_or_else(|_| DEFAULT_KEYBINDINGS.to_string())
    } else {
        // Create user config directory and file with defaults
        if let Some(parent) = user_config_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(&user_config_path, DEFAULT_KEYBINDINGS);
        DEFAULT_KEYBINDINGS.to_string()
    };

    match parse_keybindings(&toml_content) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %user_config_path.display(), error = %e, "invalid keybindings, using defaults");
            KeybindingConfig::default()
        }
    }
}

/// Get the path to user's keybindings config file
pub fn get_user_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(super::APP_DIR)
        .join("keybindings.toml")
}
