use crate::app::AppState;
use crate::tui::utils::{scrollback_lines, wrap_text, ACCENT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const CURSOR: &str = "▋";

/// Prompt rows for the current input; the cursor sits at the end of the last row.
fn prompt_lines(input: &str, width: usize, cursor_visible: bool) -> Vec<Line<'static>> {
    let text = format!("$ {}", input);
    let rows = wrap_text(&text, width);
    let last = rows.len().saturating_sub(1);
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::styled(row, Style::default().fg(Color::White))];
            if i == last && cursor_visible {
                spans.push(Span::styled(CURSOR, Style::default().fg(ACCENT)));
            }
            Line::from(spans)
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner_area = block.inner(area);
    // Leave a column free for the scrollbar
    let width = inner_area.width.saturating_sub(1) as usize;

    let cursor_visible = (state.system.animation_frame / 5) % 2 == 0;
    let mut lines = scrollback_lines(state.session.scrollback(), width);
    lines.extend(prompt_lines(state.session.input(), width, cursor_visible));

    state.ui.content_length = lines.len();
    state.ui.viewport_height = inner_area.height;

    // Offset counts from the bottom; the content may have shrunk since the last scroll
    let max_scroll = state.ui.max_scroll();
    let scroll_from_bottom = state.ui.scroll_offset.min(max_scroll);
    state.ui.scroll_offset = scroll_from_bottom;
    let top = max_scroll - scroll_from_bottom;

    let paragraph = Paragraph::new(lines).block(block).scroll((top, 0));
    frame.render_widget(paragraph, area);

    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll as usize).position(top as usize);
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}
