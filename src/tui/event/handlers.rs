use crate::app::{Action, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::EventHandler;

impl EventHandler {
    pub(super) fn handle_key_event(&self, key: KeyEvent, state: &AppState) -> Action {
        key_to_action(key, state)
    }
}

/// Map a key press to an action: configured bindings first, then typing.
pub(super) fn key_to_action(key: KeyEvent, state: &AppState) -> Action {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Action::Tick;
    }

    if let Some(bound) = state.system.keybindings.lookup(key.code, key.modifiers) {
        return bound.into();
    }

    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Action::InputChar(c)
        }
        KeyCode::Backspace => Action::InputBackspace,
        _ => Action::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_default_bindings() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(press(KeyCode::Enter, KeyModifiers::NONE), &state),
            Action::Submit
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Up, KeyModifiers::NONE), &state),
            Action::HistoryPrev
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Down, KeyModifiers::NONE), &state),
            Action::HistoryNext
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
            Action::Quit
        ));
    }

    #[test]
    fn test_typing() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(press(KeyCode::Char('x'), KeyModifiers::NONE), &state),
            Action::InputChar('x')
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Char('X'), KeyModifiers::SHIFT), &state),
            Action::InputChar('X')
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Backspace, KeyModifiers::NONE), &state),
            Action::InputBackspace
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Char('z'), KeyModifiers::ALT), &state),
            Action::Tick
        ));
    }

    #[test]
    fn test_release_is_ignored() {
        let state = AppState::default();
        let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(key_to_action(key, &state), Action::Tick));
    }
}
