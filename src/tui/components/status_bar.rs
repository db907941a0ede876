use crate::app::{AppState, NoticeLevel};
use crate::session::SessionState;
use crate::tui::utils::ACCENT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn left_spans(state: &AppState) -> Vec<Span<'static>> {
    if let Some(notice) = &state.ui.notice {
        let (badge, bg) = match notice.level {
            NoticeLevel::Info => (" SAVED ", Color::Green),
            NoticeLevel::Error => (" ERROR ", Color::Red),
        };
        return vec![
            Span::styled(
                badge,
                Style::default()
                    .fg(Color::Black)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(notice.text.clone(), Style::default().fg(Color::White)),
        ];
    }

    vec![
        Span::styled("Type ", Style::default().fg(Color::Gray)),
        Span::styled("help", Style::default().fg(ACCENT)),
        Span::styled(" or ", Style::default().fg(Color::Gray)),
        Span::styled("profile", Style::default().fg(ACCENT)),
        Span::styled(" to get started", Style::default().fg(Color::Gray)),
    ]
}

fn right_spans(state: &AppState) -> Vec<Span<'static>> {
    let keys = &state.system.keybindings;
    let mut spans = Vec::new();

    if state.session.state() == SessionState::Executing {
        let frame = SPINNER[state.system.animation_frame % SPINNER.len()];
        spans.push(Span::styled(
            format!("{} converting image ", frame),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(quit) = keys.key_for(crate::config::keybindings::KeyAction::Quit) {
        spans.push(Span::styled(format!("[{}]", quit), Style::default().fg(ACCENT)));
        spans.push(Span::raw(" Quit "));
    }
    spans
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    // Right side takes only what it needs; the hint gets the rest
    let right = Line::from(right_spans(state));
    let right_width = right.width().min(area.width as usize) as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let style = Style::default().bg(Color::Black);
    frame.render_widget(
        Paragraph::new(Line::from(left_spans(state))).style(style),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(right)
            .style(style)
            .alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}
