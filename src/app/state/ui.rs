use std::time::{Duration, Instant};

/// How long a status bar notice stays up
const NOTICE_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub shown_at: Instant,
}

pub struct UIState {
    /// Lines scrolled up from the bottom of the scrollback
    pub scroll_offset: u16,
    /// Rendered line count of the scrollback (set during draw)
    pub content_length: usize,
    /// Inner height of the terminal pane (set during draw)
    pub viewport_height: u16,
    pub notice: Option<Notice>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            content_length: 0,
            viewport_height: 0,
            notice: None,
        }
    }

    pub fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the notice once it has been visible long enough
    pub fn expire_notice(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.shown_at.elapsed() >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_length
            .saturating_sub(self.viewport_height as usize)
            .min(u16::MAX as usize) as u16
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}
