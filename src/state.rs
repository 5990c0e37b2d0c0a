//! App state: activity log, input line, command palette.

use crate::palette::PaletteState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Info,
    Dispatched,
    Error,
}

#[derive(Clone, Debug)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub text: String,
}

impl ActivityEntry {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: ActivityKind::Info, text: text.into() }
    }
    pub fn dispatched(text: impl Into<String>) -> Self {
        Self { kind: ActivityKind::Dispatched, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: ActivityKind::Error, text: text.into() }
    }
}

/// What the palette has done so far, newest last.
#[derive(Clone, Debug, Default)]
pub struct ActivityState {
    pub entries: Vec<ActivityEntry>,
    /// Entries scrolled back from the newest; 0 follows the bottom.
    pub scroll: usize,
}

impl ActivityState {
    /// Append and jump back to the newest entry.
    pub fn push(&mut self, entry: ActivityEntry) {
        self.entries.push(entry);
        self.scroll = 0;
    }

    /// Towards older entries, never past the first one.
    pub fn scroll_back(&mut self, lines: usize) {
        let max = self.entries.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    /// Towards the newest entry.
    pub fn scroll_forward(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub activity: ActivityState,
    /// Palette query as typed; `input_cursor` is a byte offset into it.
    pub input_buffer: String,
    pub input_cursor: usize,
    pub palette: PaletteState,
}

impl AppState {
    pub fn input_buffer(&self) -> &str {
        self.input_buffer.as_str()
    }
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let pos = self.input_cursor.min(self.input_buffer.len());
        self.input_buffer.insert(pos, c);
        self.input_cursor = pos + c.len_utf8();
    }

    /// Remove the char before the cursor. Returns false at the start of input.
    pub fn delete_back(&mut self) -> bool {
        let pos = self.input_cursor.min(self.input_buffer.len());
        match self.input_buffer[..pos].chars().next_back() {
            Some(c) => {
                let start = pos - c.len_utf8();
                self.input_buffer.remove(start);
                self.input_cursor = start;
                true
            }
            None => false,
        }
    }
}
