// Chunk: docs/chunks/content_tab_bar - Content tab bar rendering and interaction
// Chunk: docs/chunks/tab_bar_interaction - Label derivation and left-truncation
//!
//! Tab bar model and text rendering.
//!
//! Following the project's Humble View Architecture, the tab bar is derived
//! from the collection as plain [`TabInfo`] values; rendering them is a pure
//! function that can be unit tested without a window.
//!
//! The console draws the strip as one line:
//!
//! ```text
//!  1 notes.txt |>2 Untitled* | 3 todo.txt
//! ```

use crate::collection::DocumentCollection;

/// Labels longer than this are left-truncated in the strip.
pub const TAB_MAX_LABEL_CHARS: usize = 24;

/// Information about a tab for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    /// Display label, equal to the document title
    pub label: String,
    /// Whether this tab is the active tab
    pub is_active: bool,
    /// Whether this tab has unsaved changes
    pub is_dirty: bool,
    /// Tab index in the collection
    pub index: usize,
}

/// Extracts the TabInfo list from a collection.
pub fn tabs_from_collection(collection: &DocumentCollection) -> Vec<TabInfo> {
    collection
        .tabs()
        .iter()
        .enumerate()
        .map(|(index, tab)| TabInfo {
            label: tab.label.clone(),
            is_active: index == collection.active_index(),
            is_dirty: tab.document().is_modified(),
            index,
        })
        .collect()
}

/// Shortens `label` to at most `max_chars` by dropping characters from the
/// front, keeping the end of the file name and its modified marker visible.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    let count = label.chars().count();
    if count <= max_chars || max_chars == 0 {
        return label.to_string();
    }
    let keep = max_chars - 1;
    let tail: String = label.chars().skip(count - keep).collect();
    format!("…{tail}")
}

/// Renders the tab strip. Tabs are numbered from 1 to match the Ctrl+digit
/// shortcuts; the active tab is prefixed with `>`.
pub fn render_tab_strip(tabs: &[TabInfo]) -> String {
    tabs.iter()
        .map(|tab| {
            let marker = if tab.is_active { ">" } else { " " };
            format!("{marker}{} {}", tab.index + 1, truncate_label(&tab.label, TAB_MAX_LABEL_CHARS))
        })
        .collect::<Vec<_>>()
        .join(" |")
}
