//! Search box editing.
//!
//! The cursor counts characters, not bytes, so multi-byte input edits
//! cleanly. Every edit re-derives the visible events on the next read.

use super::app::{App, Focus};

impl App {
    /// Byte offset of the cursor in `search`.
    fn cursor_byte(&self) -> usize {
        self.search
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.search.len())
    }

    /// Handle character input.
    pub fn enter_char(&mut self, c: char) {
        let at = self.cursor_byte();
        self.search.insert(at, c);
        self.cursor_pos += 1;
        self.clamp_selection();
    }

    /// Delete character before cursor.
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.cursor_byte();
            self.search.remove(at);
            self.clamp_selection();
        }
    }

    /// Move cursor left.
    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.search.chars().count() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to the start of the search text.
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor past the end of the search text.
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.search.chars().count();
    }

    /// Clear the search text.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.cursor_pos = 0;
        self.clamp_selection();
    }

    /// Start typing into the search box.
    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
        self.move_cursor_end();
    }

    /// Return to the card grid.
    pub fn focus_cards(&mut self) {
        self.focus = Focus::Cards;
    }
}
