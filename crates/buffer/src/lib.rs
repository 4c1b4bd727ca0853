// Chunk: docs/chunks/text_buffer - Gap-buffer backed document storage

//! notepad-buffer: the text storage behind every notepad tab.
//!
//! The main type is [`TextBuffer`], a gap buffer with a cursor. It offers:
//! - Character and string insertion at the cursor
//! - Grapheme-aware backward and forward deletion
//! - Whole-content replacement (used when a document is loaded or rewritten)
//! - Line-based read access for display
//! - A revision counter that advances on every mutation that changes content
//!
//! # Example
//!
//! ```
//! use notepad_buffer::{Position, TextBuffer};
//!
//! let mut buffer = TextBuffer::new();
//! buffer.insert_str("Hello, world!");
//! assert_eq!(buffer.line_count(), 1);
//! assert_eq!(buffer.line_content(0), "Hello, world!");
//!
//! buffer.set_cursor(Position::new(0, 5));
//! buffer.insert_char('\n');
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.line_content(1), ", world!");
//! ```
//!
//! # Revisions
//!
//! Callers that need to know whether an operation changed anything compare
//! [`TextBuffer::revision`] before and after. No-op operations (backspace at
//! the start of the buffer, replacing content with identical text) leave the
//! revision untouched.

mod gap_buffer;
mod grapheme;
mod text_buffer;
mod types;

pub use text_buffer::TextBuffer;
pub use types::Position;
