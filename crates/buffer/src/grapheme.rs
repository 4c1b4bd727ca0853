// Chunk: docs/chunks/grapheme_deletion - Grapheme cluster boundary helpers

//! Grapheme cluster boundaries for deletion.
//!
//! The buffer stores `char`s, but backspace should remove what the user sees
//! as one character: `é` written as `e` + combining acute, a flag made of two
//! regional indicators, a ZWJ emoji family. These helpers answer "how many
//! chars make up the cluster before/after this column" for one line.

use unicode_segmentation::UnicodeSegmentation;

/// Char offsets at which each grapheme cluster of `chars` starts, plus the end.
fn cluster_starts(chars: &[char]) -> Vec<usize> {
    let s: String = chars.iter().collect();
    let mut starts = Vec::new();
    let mut offset = 0;
    for grapheme in s.graphemes(true) {
        starts.push(offset);
        offset += grapheme.chars().count();
    }
    starts.push(offset);
    starts
}

/// Number of chars in the cluster that ends at (or contains) `col`.
///
/// Returns 0 at the start of the line.
pub fn grapheme_len_before(chars: &[char], col: usize) -> usize {
    let col = col.min(chars.len());
    if col == 0 {
        return 0;
    }
    // ASCII never combines with what follows it.
    if chars[col - 1].is_ascii() {
        return 1;
    }
    let start = cluster_starts(chars)
        .into_iter()
        .take_while(|&start| start < col)
        .last()
        .unwrap_or(0);
    col - start
}

/// Number of chars in the cluster that starts at (or contains) `col`.
///
/// Returns 0 at the end of the line.
pub fn grapheme_len_at(chars: &[char], col: usize) -> usize {
    if col >= chars.len() {
        return 0;
    }
    if chars[col].is_ascii() && chars.get(col + 1).map_or(true, |next| next.is_ascii()) {
        return 1;
    }
    let end = cluster_starts(chars)
        .into_iter()
        .find(|&start| start > col)
        .unwrap_or(chars.len());
    end - col
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_ascii_clusters_are_single_chars() {
        let line = chars("abc");
        assert_eq!(grapheme_len_before(&line, 2), 1);
        assert_eq!(grapheme_len_at(&line, 0), 1);
    }

    #[test]
    fn test_line_edges_are_zero() {
        let line = chars("abc");
        assert_eq!(grapheme_len_before(&line, 0), 0);
        assert_eq!(grapheme_len_at(&line, 3), 0);
    }

    #[test]
    fn test_combining_mark_is_one_cluster() {
        // "e" + COMBINING ACUTE ACCENT
        let line = chars("cafe\u{0301}!");
        assert_eq!(grapheme_len_before(&line, 5), 2);
        assert_eq!(grapheme_len_at(&line, 3), 2);
    }

    #[test]
    fn test_regional_indicator_pair() {
        let line = chars("\u{1F1FA}\u{1F1F8}x");
        assert_eq!(grapheme_len_before(&line, 2), 2);
        assert_eq!(grapheme_len_at(&line, 0), 2);
    }
}
