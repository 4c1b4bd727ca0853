// Chunk: docs/chunks/text_buffer - Gap-buffer backed document storage

/// Position in the buffer as (line, column) where both are 0-indexed.
///
/// Columns count `char`s, not bytes or grapheme clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}
