use crate::art::AsciiArtGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    Error,
    /// A picture drawn by the view rather than as text
    Image,
}

/// Content of a scrollback line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    Text(String),
    Art(AsciiArtGrid),
    DownloadLink { label: String, href: String },
}

#[cfg(test)]
impl Renderable {
    /// Text content, if this is a plain text line
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Renderable::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackLine {
    pub kind: LineKind,
    pub content: Renderable,
}

impl ScrollbackLine {
    pub fn input(command: &str) -> Self {
        Self {
            kind: LineKind::Input,
            content: Renderable::Text(format!("$ {}", command)),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            content: Renderable::Text(text.into()),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            content: Renderable::Text(text.into()),
        }
    }

    pub fn art(grid: AsciiArtGrid) -> Self {
        Self {
            kind: LineKind::Output,
            content: Renderable::Art(grid),
        }
    }

    pub fn download(href: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            content: Renderable::DownloadLink {
                label: "Download Resume".to_string(),
                href: href.into(),
            },
        }
    }
}
