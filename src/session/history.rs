/// Where a history move leaves the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStep<'a> {
    /// Show this entry
    Entry(&'a str),
    /// Stopped browsing; the input line should be emptied
    Leave,
    /// Nothing to do
    Stay,
}

/// Submitted command lines, oldest first, with a browse cursor.
///
/// The cursor counts back from the most recent entry; `None` means the user
/// is not browsing.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    fn entry_at(&self, distance: usize) -> &str {
        &self.entries[self.entries.len() - 1 - distance]
    }

    /// Move one entry further into the past.
    pub fn older(&mut self) -> HistoryStep<'_> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next < self.entries.len() {
            self.cursor = Some(next);
            HistoryStep::Entry(self.entry_at(next))
        } else {
            HistoryStep::Stay
        }
    }

    /// Move one entry towards the present.
    pub fn newer(&mut self) -> HistoryStep<'_> {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                HistoryStep::Leave
            }
            Some(c) => {
                self.cursor = Some(c - 1);
                HistoryStep::Entry(self.entry_at(c - 1))
            }
            None => HistoryStep::Stay,
        }
    }
}
