// Chunk: docs/chunks/file_dialogs - Open/save pickers, close prompt, error messages
//!
//! The external collaborators the editor talks to: file pickers, the
//! unsaved-changes prompt, and error messages.
//!
//! Everything here is a "humble object": implementations only ask the user
//! and report the answer. All decisions about what to do with the answer stay
//! in [`DocumentCollection`](crate::collection::DocumentCollection).

use std::path::PathBuf;

use crate::confirm_dialog::{ConfirmButton, ConfirmDialog};

#[cfg(target_os = "macos")]
mod macos;
mod scripted;
mod terminal;

#[cfg(target_os = "macos")]
pub use macos::NativeDialogs;
pub use scripted::ScriptedDialogs;
pub use terminal::TerminalDialogs;

/// User-facing dialogs.
pub trait Dialogs {
    /// Asks for a file to open. `None` means the user cancelled.
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Asks where to save, pre-filling `suggested_name`. `None` means cancelled.
    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf>;

    /// Shows `dialog` modally and returns the button the user chose.
    fn confirm(&mut self, dialog: ConfirmDialog) -> ConfirmButton;

    /// Shows an error message. Returns once the user has seen it.
    fn show_error(&mut self, title: &str, message: &str);
}
