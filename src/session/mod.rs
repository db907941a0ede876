//! The terminal session: scrollback, input line, history and command dispatch.
//!
//! The session never performs I/O itself. Submitting a line that needs the
//! image converter or a download returns an [`Effect`] for the caller to run;
//! conversion results come back through [`Session::complete_art`].

mod history;
mod scrollback;

pub use history::{History, HistoryStep};
pub use scrollback::{LineKind, Renderable, ScrollbackLine};

use crate::art::{ArtError, AsciiArtGrid};
use crate::commands::{CatTarget, Command, CommandError, CommandOutput};
use crate::profile::Profile;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to Portfolio CLI v1.0
Type 'help' to see available commands.";

pub const ART_LOAD_FAILED: &str = "Failed to load profile image for ASCII conversion.";

pub type RequestId = u64;

/// Side effects requested by a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Convert the image at `source` and report back with `id`
    RenderArt { id: RequestId, source: String },
    /// Save the resource at `resource` to the user's downloads
    Download { resource: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// At least one art conversion is in flight
    Executing,
}

/// Edits to the pending input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

/// Keeps art results in the order their commands were submitted.
#[derive(Debug, Default)]
struct ArtQueue {
    next_id: RequestId,
    pending: VecDeque<RequestId>,
    finished: HashMap<RequestId, Result<AsciiArtGrid, ArtError>>,
}

impl ArtQueue {
    fn start(&mut self) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push_back(id);
        id
    }

    /// Record a result and return every result now ready for display.
    fn finish(
        &mut self,
        id: RequestId,
        result: Result<AsciiArtGrid, ArtError>,
    ) -> Vec<Result<AsciiArtGrid, ArtError>> {
        if !self.pending.contains(&id) || self.finished.contains_key(&id) {
            warn!(id, "ignoring result for unknown art request");
            return Vec::new();
        }
        self.finished.insert(id, result);

        let mut ready = Vec::new();
        while let Some(front) = self.pending.front().copied() {
            match self.finished.remove(&front) {
                Some(result) => {
                    self.pending.pop_front();
                    ready.push(result);
                }
                None => break,
            }
        }
        ready
    }

    fn in_flight(&self) -> usize {
        self.pending.len()
    }
}

pub struct Session {
    profile: Profile,
    scrollback: Vec<ScrollbackLine>,
    input: String,
    history: History,
    art: ArtQueue,
}

impl Session {
    /// A session whose scrollback starts with the welcome message.
    pub fn new(profile: Profile) -> Self {
        let mut session = Self::blank(profile);
        session.scrollback.push(ScrollbackLine::output(WELCOME));
        session
    }

    /// A session with empty scrollback.
    pub fn blank(profile: Profile) -> Self {
        Self {
            profile,
            scrollback: Vec::new(),
            input: String::new(),
            history: History::new(),
            art: ArtQueue::default(),
        }
    }

    pub fn scrollback(&self) -> &[ScrollbackLine] {
        &self.scrollback
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    #[cfg(test)]
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        if self.art.in_flight() > 0 {
            SessionState::Executing
        } else {
            SessionState::Idle
        }
    }

    pub fn edit(&mut self, edit: InputEdit) {
        match edit {
            InputEdit::Insert(c) => self.input.push(c),
            InputEdit::Paste(text) => {
                // The input is a single line
                self.input
                    .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
            }
            InputEdit::Backspace => {
                self.input.pop();
            }
            InputEdit::Clear => self.input.clear(),
        }
    }

    /// Submit the current input line.
    pub fn submit(&mut self) -> Vec<Effect> {
        if self.input.trim().is_empty() {
            return Vec::new();
        }
        let line = std::mem::take(&mut self.input);
        self.submit_line(&line)
    }

    /// Run `line` as if it had been typed and submitted.
    ///
    /// Blank lines change nothing.
    pub fn submit_line(&mut self, line: &str) -> Vec<Effect> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        self.scrollback.push(ScrollbackLine::input(trimmed));

        let mut tokens = trimmed.split_whitespace();
        let name = tokens.next().unwrap_or_default().to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();
        debug!(command = %name, ?args, "dispatching");

        let mut effects = Vec::new();
        match self.resolve(&name, &args) {
            Ok(output) => self.apply(output, &mut effects),
            Err(err) => self.scrollback.push(ScrollbackLine::error(err.to_string())),
        }

        self.history.push(trimmed);
        self.input.clear();
        effects
    }

    fn resolve(&self, name: &str, args: &[String]) -> Result<CommandOutput, CommandError> {
        if name == "cat" {
            let target = CatTarget::resolve(args.first().map(String::as_str), &self.profile)?;
            return Ok(target.output(&self.profile));
        }
        let command =
            Command::from_name(name).ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        Ok(command.execute(args, &self.profile))
    }

    fn apply(&mut self, output: CommandOutput, effects: &mut Vec<Effect>) {
        match output {
            CommandOutput::Clear => self.scrollback.clear(),
            CommandOutput::ProfileImage => {
                let id = self.art.start();
                info!(id, source = %self.profile.image_source, "rendering profile art");
                effects.push(Effect::RenderArt {
                    id,
                    source: self.profile.image_source.clone(),
                });
            }
            CommandOutput::Download(resource) => {
                self.scrollback.push(ScrollbackLine::download(resource.clone()));
                effects.push(Effect::Download { resource });
            }
            CommandOutput::Text(text) => {
                // Empty results (e.g. a bare `echo`) leave no line behind
                if !text.is_empty() {
                    self.scrollback.push(ScrollbackLine::output(text));
                }
            }
        }
    }

    /// Deliver the outcome of an [`Effect::RenderArt`].
    pub fn complete_art(&mut self, id: RequestId, result: Result<AsciiArtGrid, ArtError>) {
        for result in self.art.finish(id, result) {
            match result {
                Ok(grid) => self.scrollback.push(ScrollbackLine::art(grid)),
                Err(err) => {
                    warn!(error = %err, "profile art failed");
                    self.scrollback.push(ScrollbackLine::error(ART_LOAD_FAILED));
                }
            }
        }
    }

    pub fn history_up(&mut self) {
        if let HistoryStep::Entry(entry) = self.history.older() {
            self.input = entry.to_string();
        }
    }

    pub fn history_down(&mut self) {
        match self.history.newer() {
            HistoryStep::Entry(entry) => self.input = entry.to_string(),
            HistoryStep::Leave => self.input.clear(),
            HistoryStep::Stay => {}
        }
    }
}
