// Chunk: docs/chunks/dirty_tab_close_confirm - Save/Discard/Cancel prompt
//!
//! The confirmation prompt shown when closing a document with unsaved changes.
//!
//! [`ConfirmDialog`] is pure interaction state with no platform dependencies.
//! Dialog implementations read the prompt and button labels from it and feed
//! user input back through [`ConfirmDialog::handle_key`]; native dialogs that
//! return a button directly skip the key handling entirely.
//!
//! Keyboard behaviour:
//! - **Tab/Right**: select the next button
//! - **Left**: select the previous button
//! - **Enter**: confirm the selected button
//! - **Escape**: always cancels
//! - **s/y**, **d/n**, **c**: choose Save, Discard, Cancel directly
//!
//! # Example
//!
//! ```
//! use notepad::confirm_dialog::{ConfirmButton, ConfirmDialog, ConfirmOutcome};
//! use notepad_input::{Key, KeyEvent};
//!
//! let mut dialog = ConfirmDialog::unsaved_changes("notes.txt*");
//! assert_eq!(dialog.selected, ConfirmButton::Save);
//!
//! assert_eq!(dialog.handle_key(&KeyEvent::plain(Key::Tab)), ConfirmOutcome::Pending);
//! assert_eq!(dialog.selected, ConfirmButton::Discard);
//!
//! let outcome = dialog.handle_key(&KeyEvent::plain(Key::Return));
//! assert_eq!(outcome, ConfirmOutcome::Chosen(ConfirmButton::Discard));
//! ```

use notepad_input::{Key, KeyEvent};

/// The buttons of the unsaved-changes prompt, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmButton {
    /// Save the document, then close it
    #[default]
    Save,
    /// Close without saving
    Discard,
    /// Keep the document open
    Cancel,
}

impl ConfirmButton {
    pub const ALL: [ConfirmButton; 3] = [ConfirmButton::Save, ConfirmButton::Discard, ConfirmButton::Cancel];

    pub fn label(self) -> &'static str {
        match self {
            ConfirmButton::Save => "Save",
            ConfirmButton::Discard => "Discard",
            ConfirmButton::Cancel => "Cancel",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ConfirmButton::Save => ConfirmButton::Discard,
            ConfirmButton::Discard => ConfirmButton::Cancel,
            ConfirmButton::Cancel => ConfirmButton::Save,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ConfirmButton::Save => ConfirmButton::Cancel,
            ConfirmButton::Discard => ConfirmButton::Save,
            ConfirmButton::Cancel => ConfirmButton::Discard,
        }
    }
}

/// Outcome of handling a key event in the confirm dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The user picked a button
    Chosen(ConfirmButton),
    /// Dialog is still open, waiting for user input
    Pending,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    /// Short heading ("Save changes?")
    pub heading: String,
    /// The question shown to the user
    pub prompt: String,
    /// Currently selected button
    pub selected: ConfirmButton,
}

impl ConfirmDialog {
    pub fn new(heading: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            prompt: prompt.into(),
            selected: ConfirmButton::default(),
        }
    }

    /// The prompt shown before closing the document titled `title`.
    pub fn unsaved_changes(title: &str) -> Self {
        Self::new(
            "Save changes?",
            format!("Document '{title}' has unsaved changes. Save before closing?"),
        )
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> ConfirmOutcome {
        match &event.key {
            Key::Tab | Key::Right => {
                self.selected = self.selected.next();
                ConfirmOutcome::Pending
            }
            Key::Left => {
                self.selected = self.selected.prev();
                ConfirmOutcome::Pending
            }
            Key::Return => ConfirmOutcome::Chosen(self.selected),
            Key::Escape => ConfirmOutcome::Chosen(ConfirmButton::Cancel),
            Key::Char(ch) => match ch.to_ascii_lowercase() {
                's' | 'y' => ConfirmOutcome::Chosen(ConfirmButton::Save),
                'd' | 'n' => ConfirmOutcome::Chosen(ConfirmButton::Discard),
                'c' => ConfirmOutcome::Chosen(ConfirmButton::Cancel),
                _ => ConfirmOutcome::Pending,
            },
            _ => ConfirmOutcome::Pending,
        }
    }

    /// One-line rendering of the buttons with the selection bracketed.
    pub fn button_row(&self) -> String {
        ConfirmButton::ALL
            .iter()
            .map(|&button| {
                if button == self.selected {
                    format!("[{}]", button.label())
                } else {
                    format!(" {} ", button.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
