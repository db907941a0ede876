use crate::art::AsciiArtGrid;
use crate::session::{LineKind, Renderable, ScrollbackLine};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub const ACCENT: Color = Color::Cyan;

fn kind_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Input => Style::default().fg(ACCENT),
        LineKind::Error => Style::default().fg(Color::LightRed),
        LineKind::Output | LineKind::Image => Style::default().fg(Color::Gray),
    }
}

/// Break `text` into rows of at most `width` characters, keeping blank lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Art rows are never wrapped; anything past the pane edge is cut off.
pub fn art_lines(grid: &AsciiArtGrid) -> Vec<Line<'static>> {
    grid.rows()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| {
                    let color = Color::Rgb(cell.color.r, cell.color.g, cell.color.b);
                    Span::styled(cell.glyph.to_string(), Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Render the scrollback into display lines for a pane `width` columns wide.
pub fn scrollback_lines(scrollback: &[ScrollbackLine], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in scrollback {
        let style = kind_style(entry.kind);
        match &entry.content {
            Renderable::Text(text) if entry.kind == LineKind::Image => {
                lines.push(Line::from(Span::styled(format!("[image: {}]", text), style)));
            }
            Renderable::Text(text) => {
                lines.extend(
                    wrap_text(text, width)
                        .into_iter()
                        .map(|row| Line::from(Span::styled(row, style))),
                );
            }
            Renderable::Art(grid) => lines.extend(art_lines(grid)),
            Renderable::DownloadLink { label, href } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        label.clone(),
                        Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
                    ),
                    Span::styled(format!("  {}", href), Style::default().fg(Color::DarkGray)),
                ]));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art;
    use image::{DynamicImage, RgbImage};

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_multiline_output_becomes_several_lines() {
        let scrollback = vec![
            ScrollbackLine::input("ls"),
            ScrollbackLine::output(crate::commands::LISTING),
        ];
        let lines = scrollback_lines(&scrollback, 80);
        assert_eq!(lines.len(), 1 + 7);
        assert_eq!(lines[0].spans[0].content, "$ ls");
        assert_eq!(lines[0].spans[0].style.fg, Some(ACCENT));
    }

    #[test]
    fn test_art_is_not_wrapped() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 50, image::Rgb([1, 2, 3])));
        let grid = art::render(&img, 80).unwrap();
        let lines = scrollback_lines(&[ScrollbackLine::art(grid)], 10);
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0].spans.len(), 80);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(1, 2, 3)));
    }

    #[test]
    fn test_error_style() {
        let lines = scrollback_lines(&[ScrollbackLine::error("nope")], 80);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::LightRed));
    }
}
