//! Non-interactive mode: run command lines through a session and print the
//! resulting scrollback to stdout.

use crate::art::{AsciiArtGrid, BLANK};
use crate::config::Settings;
use crate::session::{Effect, LineKind, Renderable, ScrollbackLine, Session};
use anyhow::Result;
use crossterm::style::{Color, Stylize};
use std::io::Write;

use super::effects::{render_art, save_download};

pub async fn run_lines(settings: &Settings, lines: &[String]) -> Result<()> {
    let mut session = Session::blank(settings.profile());
    let mut stdout = std::io::stdout().lock();

    for line in lines {
        let before = session.scrollback().len();
        let effects = session.submit_line(line);

        let mut saved = Vec::new();
        for effect in effects {
            match effect {
                Effect::RenderArt { id, source } => {
                    let result = render_art(settings, &source).await;
                    session.complete_art(id, result);
                }
                Effect::Download { resource } => match save_download(settings, &resource).await {
                    Ok(path) => saved.push(format!("Saved {}", path.display())),
                    Err(e) => saved.push(format!("Download failed: {:#}", e)),
                },
            }
        }

        // `clear` shrinks the scrollback; there is nothing new to print then
        let new_lines = session.scrollback().get(before..).unwrap_or_default();
        for entry in new_lines {
            writeln!(stdout, "{}", format_line(entry, color_enabled()))?;
        }
        for message in saved {
            writeln!(stdout, "{}", message)?;
        }
    }

    Ok(())
}

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn format_line(line: &ScrollbackLine, color: bool) -> String {
    match &line.content {
        Renderable::Text(text) => match (line.kind, color) {
            (LineKind::Error, true) => text.as_str().red().to_string(),
            (LineKind::Input, true) => text.as_str().cyan().to_string(),
            _ => text.clone(),
        },
        Renderable::Art(grid) => format_art(grid, color),
        Renderable::DownloadLink { label, href } => format!("{}: {}", label, href),
    }
}

/// Art as text, one line per row, with 24-bit foreground colors when enabled
pub fn format_art(grid: &AsciiArtGrid, color: bool) -> String {
    if !color {
        return grid.to_plain_string().replace(BLANK, " ");
    }
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let glyph = if cell.glyph == BLANK { ' ' } else { cell.glyph };
                    let (r, g, b) = (cell.color.r, cell.color.g, cell.color.b);
                    glyph.with(Color::Rgb { r, g, b }).to_string()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
