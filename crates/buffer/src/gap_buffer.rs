// Chunk: docs/chunks/text_buffer - Gap-buffer backed document storage

//! Gap buffer storage for document text.
//!
//! Content lives in a `Vec<char>` split by a movable gap:
//! `[before gap | gap | after gap]`. Edits at the gap are O(1); moving the gap
//! costs the distance moved, which stays small for the typing-at-cursor edits
//! a notepad sees.

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

#[derive(Debug)]
pub struct GapBuffer {
    data: Vec<char>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    pub fn new() -> Self {
        Self::from_str("")
    }

    /// Creates a gap buffer holding `text`, with the gap at the end.
    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        data.resize(len + INITIAL_GAP_SIZE, '\0');
        Self {
            gap_start: len,
            gap_end: data.len(),
            data,
        }
    }

    /// Logical length in chars (the gap is not counted).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Moves the gap to logical offset `pos` (clamped to the length).
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data.copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grows the gap in place to hold at least `min_size` chars.
    ///
    /// The gap start never moves here; `insert` relies on that.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let growth = (min_size - self.gap_len()).max(self.data.len() * GAP_GROWTH_FACTOR);
        let old_len = self.data.len();
        let tail_len = old_len - self.gap_end;

        self.data.resize(old_len + growth, '\0');
        if tail_len > 0 {
            self.data.copy_within(self.gap_end..old_len, old_len + growth - tail_len);
        }
        self.gap_end = self.data.len() - tail_len;
    }

    pub fn insert(&mut self, ch: char) {
        self.ensure_gap(1);
        self.data[self.gap_start] = ch;
        self.gap_start += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        self.ensure_gap(s.chars().count());
        for ch in s.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
    }

    /// Removes the char just before the gap.
    pub fn delete_backward(&mut self) -> Option<char> {
        if self.gap_start == 0 {
            return None;
        }
        self.gap_start -= 1;
        Some(self.data[self.gap_start])
    }

    /// Removes the char just after the gap.
    pub fn delete_forward(&mut self) -> Option<char> {
        if self.gap_end >= self.data.len() {
            return None;
        }
        let ch = self.data[self.gap_end];
        self.gap_end += 1;
        Some(ch)
    }

    /// Discards all content and stores `text`, leaving the gap at the end.
    pub fn replace(&mut self, text: &str) {
        *self = Self::from_str(text);
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
