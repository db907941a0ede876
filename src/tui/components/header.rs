use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const TITLE: &str = "portfolio@cli ~ %";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 {
        return;
    }

    let mut spans = vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(
            TITLE,
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
    ];

    let cwd = format!("  {}", crate::commands::WORKING_DIR);
    if state.system.terminal_size.0 as usize > TITLE.len() + cwd.len() + 12 {
        spans.push(Span::styled(cwd, Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}
