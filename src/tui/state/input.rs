// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Input state for the chat TUI
//!
//! Manages the single-line input buffer, cursor position, and history
//! navigation.

/// Input state for the text input area
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (byte index, kept on char boundaries by the edit ops)
    pub cursor: usize,
    /// History of previous inputs
    pub history: Vec<String>,
    /// Current history index (None = new input, Some(i) = browsing history)
    pub history_index: Option<usize>,
    /// Saved buffer when browsing history
    saved_buffer: Option<String>,
    /// Maximum history entries to keep
    max_history: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create a new input state
    pub fn new() -> Self {
        Self::with_history_limit(100)
    }

    /// Create a new input state with an explicit history cap
    pub fn with_history_limit(max_history: usize) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            saved_buffer: None,
            max_history,
        }
    }

    /// Get the current input text
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor position
    pub fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.buffer[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor -= prev;
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor (delete)
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the word before the cursor
    pub fn delete_word(&mut self) {
        // Skip trailing whitespace
        while self.cursor > 0 && self.buffer[..self.cursor].ends_with(' ') {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
        // Delete until whitespace or start
        while self.cursor > 0 && !self.buffer[..self.cursor].ends_with(' ') {
            self.backspace();
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.buffer[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor -= prev;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            let next = self.buffer[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor += next;
        }
    }

    /// Move cursor to start of input
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end of input
    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Clear the input buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;
    }

    /// Submit the current input and return it
    /// Adds to history if non-empty
    pub fn submit(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;

        // Add to history if non-empty and different from last
        if !text.trim().is_empty() && self.history.last().map(|s| s.as_str()) != Some(&text) {
            self.history.push(text.clone());
            // Trim history if too long
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }

        text
    }

    /// Navigate to previous history entry
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        match self.history_index {
            None => {
                // Save current buffer and go to most recent history
                self.saved_buffer = Some(self.buffer.clone());
                self.history_index = Some(self.history.len() - 1);
                self.buffer = self.history[self.history.len() - 1].clone();
                self.cursor = self.buffer.len();
            }
            Some(0) => {
                // Already at oldest entry, do nothing
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                self.buffer = self.history[i - 1].clone();
                self.cursor = self.buffer.len();
            }
        }
    }

    /// Navigate to next history entry
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {
                // Not in history mode, do nothing
            }
            Some(i) if i >= self.history.len() - 1 => {
                // At most recent entry, restore saved buffer
                self.history_index = None;
                if let Some(saved) = self.saved_buffer.take() {
                    self.buffer = saved;
                    self.cursor = self.buffer.len();
                }
            }
            Some(i) => {
                self.history_index = Some(i + 1);
                self.buffer = self.history[i + 1].clone();
                self.cursor = self.buffer.len();
            }
        }
    }

    /// Set the buffer content directly
    pub fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
        self.history_index = None;
    }
}
