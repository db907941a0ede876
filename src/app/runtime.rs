use crate::app::{Action, AppState};
use crate::config::keybindings::load_keybindings;
use crate::config::Settings;
use crate::tui;
use crate::tui::event::EventHandler;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use super::handler::process_action;

pub async fn run_tui(settings: Settings) -> Result<()> {
    // Initialize terminal
    let mut terminal = tui::init()?;

    let keybindings = load_keybindings();
    let mut state = AppState::new(settings, keybindings);

    // Get terminal size
    let size = terminal.size()?;
    state.system.terminal_size = (size.width, size.height);
    info!(width = size.width, height = size.height, "terminal ready");

    // Create event handler
    let mut events = EventHandler::new();
    let action_tx = events.action_sender();

    // Main loop
    let result = run_main_loop(&mut terminal, &mut state, &mut events, action_tx).await;

    // Restore terminal
    tui::restore()?;

    result
}

async fn run_main_loop(
    terminal: &mut tui::Terminal,
    state: &mut AppState,
    events: &mut EventHandler,
    action_tx: mpsc::UnboundedSender<Action>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| tui::ui::draw(frame, state))?;

        let action = events.next(state).await?;
        process_action(state, action, &action_tx)?;

        if state.system.should_quit {
            info!("quitting");
            break;
        }
    }

    Ok(())
}
