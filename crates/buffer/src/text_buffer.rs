// Chunk: docs/chunks/text_buffer - Gap-buffer backed document storage

//! TextBuffer is the public editing API over the gap buffer.
//!
//! The cursor is kept as a char offset; [`Position`] is derived on demand.
//! Every mutation that changes content bumps the revision counter, which is
//! how documents learn that an edit actually happened.

use crate::gap_buffer::GapBuffer;
use crate::grapheme::{grapheme_len_at, grapheme_len_before};
use crate::types::Position;

#[derive(Debug, Default)]
pub struct TextBuffer {
    buffer: GapBuffer,
    /// Cursor as a char offset into the content.
    cursor: usize,
    revision: u64,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding `content` with the cursor at the start.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but building a buffer from a string cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        Self {
            buffer: GapBuffer::from_str(content),
            cursor: 0,
            revision: 0,
        }
    }

    // ==================== Accessors ====================

    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Total length in chars.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Counter that advances on every content change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of lines; always at least 1, even for an empty buffer.
    pub fn line_count(&self) -> usize {
        self.buffer.chars().filter(|&ch| ch == '\n').count() + 1
    }

    /// Content of `line` without its trailing newline.
    ///
    /// Out-of-range lines are empty.
    pub fn line_content(&self, line: usize) -> String {
        self.buffer
            .chars()
            .collect::<String>()
            .split('\n')
            .nth(line)
            .unwrap_or_default()
            .to_string()
    }

    pub fn cursor_offset(&self) -> usize {
        self.cursor
    }

    pub fn cursor_position(&self) -> Position {
        self.offset_to_position(self.cursor)
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        let mut pos = Position::default();
        for ch in self.buffer.chars().take(offset) {
            if ch == '\n' {
                pos.line += 1;
                pos.col = 0;
            } else {
                pos.col += 1;
            }
        }
        pos
    }

    /// Char offset of `pos`, clamped to the end of its line and of the buffer.
    fn position_to_offset(&self, pos: Position) -> usize {
        let mut line = 0;
        let mut col = 0;
        for (offset, ch) in self.buffer.chars().enumerate() {
            if line == pos.line && (col == pos.col || ch == '\n') {
                return offset;
            }
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        self.len()
    }

    /// The chars of the cursor's line and the cursor column within it.
    fn cursor_line_chars(&self) -> (Vec<char>, usize) {
        let pos = self.cursor_position();
        (self.line_content(pos.line).chars().collect(), pos.col)
    }

    // ==================== Cursor ====================

    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.position_to_offset(pos);
    }

    pub fn move_to_buffer_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_buffer_end(&mut self) {
        self.cursor = self.len();
    }

    // ==================== Mutations ====================

    fn touch(&mut self) {
        self.revision += 1;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.move_gap_to(self.cursor);
        self.buffer.insert(ch);
        self.cursor += 1;
        self.touch();
    }

    /// Inserts `s` at the cursor and leaves the cursor after it.
    ///
    /// Returns false (and leaves the revision alone) for an empty string.
    pub fn insert_str(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        self.buffer.move_gap_to(self.cursor);
        self.buffer.insert_str(s);
        self.cursor += s.chars().count();
        self.touch();
        true
    }

    /// Backspace: removes the grapheme cluster before the cursor.
    ///
    /// At the start of a line this joins it with the previous one. Returns
    /// false at the start of the buffer.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let (line, col) = self.cursor_line_chars();
        let count = grapheme_len_before(&line, col).max(1);

        self.buffer.move_gap_to(self.cursor);
        for _ in 0..count {
            self.buffer.delete_backward();
        }
        self.cursor -= count;
        self.touch();
        true
    }

    /// Delete key: removes the grapheme cluster after the cursor.
    ///
    /// At the end of a line this joins the next line onto it. Returns false at
    /// the end of the buffer.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let (line, col) = self.cursor_line_chars();
        let count = grapheme_len_at(&line, col).max(1);

        self.buffer.move_gap_to(self.cursor);
        for _ in 0..count {
            self.buffer.delete_forward();
        }
        self.touch();
        true
    }

    /// Replaces the whole content, moving the cursor to the end.
    ///
    /// Returns false when `content` equals the current content.
    pub fn replace_content(&mut self, content: &str) -> bool {
        if self.buffer.chars().eq(content.chars()) {
            return false;
        }
        self.buffer.replace(content);
        self.cursor = self.len();
        self.touch();
        true
    }
}
