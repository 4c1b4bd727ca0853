// Chunk: docs/chunks/file_dialogs - Open/save pickers, close prompt, error messages
//! Dialogs that answer from a script instead of asking anyone.
//!
//! Used for headless runs and tests. Answers are consumed in order; once a
//! queue runs dry the dialog behaves as if the user cancelled, so a missing
//! answer can never destroy data.

use std::collections::VecDeque;
use std::path::PathBuf;

use super::Dialogs;
use crate::confirm_dialog::{ConfirmButton, ConfirmDialog};

#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    open_answers: VecDeque<Option<PathBuf>>,
    save_answers: VecDeque<Option<PathBuf>>,
    confirm_answers: VecDeque<ConfirmButton>,
    /// Prompts of every confirm dialog shown, in order
    pub confirmations: Vec<String>,
    /// Suggested names passed to every save picker shown, in order
    pub save_suggestions: Vec<String>,
    /// Every error shown, as (title, message)
    pub errors: Vec<(String, String)>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next open picker.
    pub fn answer_open(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_answers.push_back(Some(path.into()));
        self
    }

    /// Queues the answer for the next save picker.
    pub fn answer_save(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_answers.push_back(Some(path.into()));
        self
    }

    /// Queues a cancelled save picker.
    pub fn cancel_save(mut self) -> Self {
        self.save_answers.push_back(None);
        self
    }

    /// Queues the answer for the next confirm dialog.
    pub fn choose(mut self, button: ConfirmButton) -> Self {
        self.confirm_answers.push_back(button);
        self
    }
}

impl Dialogs for ScriptedDialogs {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.open_answers.pop_front().flatten()
    }

    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        self.save_suggestions.push(suggested_name.to_string());
        self.save_answers.pop_front().flatten()
    }

    fn confirm(&mut self, dialog: ConfirmDialog) -> ConfirmButton {
        self.confirmations.push(dialog.prompt);
        self.confirm_answers.pop_front().unwrap_or(ConfirmButton::Cancel)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}
