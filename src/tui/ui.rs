use crate::app::AppState;
use crate::tui::components::{header, status_bar, terminal_pane};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Terminal
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], state);
    terminal_pane::render(frame, chunks[1], state);
    status_bar::render(frame, chunks[2], state);
}
