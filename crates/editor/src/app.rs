// Chunk: docs/chunks/app_controller - Action dispatch
//!
//! The application controller.
//!
//! [`Notepad`] turns [`Action`]s into collection operations. It is the only
//! place where I/O errors become user-visible: a failed open or save is shown
//! through [`Dialogs::show_error`] and otherwise leaves every document as it
//! was.

use std::path::PathBuf;

use notepad_input::KeyEvent;
use tracing::{debug, warn};

use crate::collection::{CloseOutcome, DocumentCollection};
use crate::config::Config;
use crate::dialogs::Dialogs;
use crate::editor_event::DocumentEvent;
use crate::error::NotepadError;
use crate::shortcuts::{resolve_action, Action};

/// Whether the application keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct Notepad {
    collection: DocumentCollection,
}

impl Notepad {
    pub fn new(config: &Config) -> Self {
        Self {
            collection: DocumentCollection::new(&config.default_extension),
        }
    }

    pub fn collection(&self) -> &DocumentCollection {
        &self.collection
    }

    /// Drains pending title changes; see [`DocumentCollection::take_events`].
    pub fn take_events(&mut self) -> Vec<DocumentEvent> {
        self.collection.take_events()
    }

    /// Opens each of `paths` in its own tab, reporting failures.
    ///
    /// When at least one file opens, the initial empty tab is dropped so the
    /// window shows only the requested files. Returns the number opened.
    pub fn open_files(&mut self, paths: &[PathBuf], dialogs: &mut dyn Dialogs) -> usize {
        let placeholder = self
            .collection
            .active_document()
            .filter(|doc| self.collection.len() == 1 && doc.path().is_none() && !doc.is_modified())
            .map(|doc| doc.id());

        let mut opened = 0;
        for path in paths {
            if self.open(Some(path.clone()), dialogs) {
                opened += 1;
            }
        }

        if let Some(index) = placeholder.filter(|_| opened > 0).and_then(|id| self.collection.index_of(id)) {
            self.collection.close_document(index, dialogs);
        }
        opened
    }

    fn open(&mut self, path: Option<PathBuf>, dialogs: &mut dyn Dialogs) -> bool {
        let Some(path) = path.or_else(|| dialogs.pick_open_path()) else {
            return false;
        };
        match self.collection.open_document(&path) {
            Ok(_) => true,
            Err(e) => {
                report(&e, dialogs);
                false
            }
        }
    }

    /// Resolves a shortcut and dispatches it. `None` if the key is not bound.
    pub fn handle_key(&mut self, event: &KeyEvent, dialogs: &mut dyn Dialogs) -> Option<Flow> {
        resolve_action(event).map(|action| self.dispatch(action, dialogs))
    }

    pub fn dispatch(&mut self, action: Action, dialogs: &mut dyn Dialogs) -> Flow {
        debug!(?action, "dispatch");
        let active = self.collection.active_index();

        match action {
            Action::NewTab => {
                self.collection.new_document();
            }
            Action::Open(path) => {
                self.open(path, dialogs);
            }
            Action::Save => {
                self.collection.save_document(active, dialogs);
            }
            Action::SaveAs(None) => {
                self.collection.save_document_as(active, dialogs);
            }
            Action::SaveAs(Some(path)) => {
                self.collection.save_document_to(active, &path, dialogs);
            }
            Action::CloseActiveTab => {
                self.collection.close_active_document(dialogs);
            }
            Action::CloseTab(index) => {
                if self.collection.close_document(index, dialogs) == CloseOutcome::NoSuchTab {
                    debug!(index, "no tab to close");
                }
            }
            Action::SwitchTab(index) => {
                if !self.collection.switch_tab(index) {
                    debug!(index, "no tab to switch to");
                }
            }
            Action::NextTab => self.collection.next_tab(),
            Action::PrevTab => self.collection.prev_tab(),
            Action::ReplaceText(text) => {
                self.collection.edit_active(|doc| doc.edit(&text));
            }
            Action::AppendLine(line) => {
                self.collection.edit_active(|doc| doc.append_line(&line));
            }
            Action::DeleteBackward => {
                self.collection.edit_active(|doc| doc.delete_backward());
            }
            Action::Quit => {
                if self.collection.prepare_quit(dialogs) {
                    return Flow::Quit;
                }
                debug!("quit cancelled");
            }
        }
        Flow::Continue
    }
}

fn report(error: &NotepadError, dialogs: &mut dyn Dialogs) {
    warn!("{error}");
    dialogs.show_error(error.dialog_title(), &error.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm_dialog::ConfirmButton;
    use crate::dialogs::ScriptedDialogs;
    use notepad_input::{Key, Modifiers};
    use tempfile::TempDir;

    fn labels(notepad: &Notepad) -> Vec<String> {
        notepad.collection().tabs().iter().map(|tab| tab.label.clone()).collect()
    }

    #[test]
    fn test_open_files_replaces_placeholder() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, "A").unwrap();
        std::fs::write(&b, "B").unwrap();
        let mut notepad = Notepad::default();
        let mut dialogs = ScriptedDialogs::new();

        assert_eq!(notepad.open_files(&[a, b], &mut dialogs), 2);
        assert_eq!(labels(&notepad), vec!["a.txt", "b.txt"]);
        assert_eq!(notepad.collection().active_index(), 1);
    }

    #[test]
    fn test_open_files_all_failing_keeps_empty_tab() {
        let dir = TempDir::new().unwrap();
        let mut notepad = Notepad::default();
        let mut dialogs = ScriptedDialogs::new();

        assert_eq!(notepad.open_files(&[dir.path().join("nope.txt")], &mut dialogs), 0);
        assert_eq!(labels(&notepad), vec!["Untitled"]);
        assert_eq!(dialogs.errors.len(), 1);
        assert_eq!(dialogs.errors[0].0, "Could not open file");
    }

    #[test]
    fn test_open_without_path_asks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("picked.txt");
        std::fs::write(&path, "picked").unwrap();
        let mut notepad = Notepad::default();
        let mut dialogs = ScriptedDialogs::new().answer_open(&path);

        notepad.dispatch(Action::Open(None), &mut dialogs);
        assert_eq!(labels(&notepad), vec!["Untitled", "picked.txt"]);

        // Cancelled picker does nothing.
        notepad.dispatch(Action::Open(None), &mut dialogs);
        assert_eq!(notepad.collection().len(), 2);
        assert!(dialogs.errors.is_empty());
    }

    #[test]
    fn test_edit_actions() {
        let mut notepad = Notepad::default();
        let mut dialogs = ScriptedDialogs::new();
        notepad.dispatch(Action::AppendLine("one".into()), &mut dialogs);
        notepad.dispatch(Action::AppendLine("two".into()), &mut dialogs);
        notepad.dispatch(Action::DeleteBackward, &mut dialogs);
        assert_eq!(notepad.collection().active_document().unwrap().content(), "one\ntw");
        notepad.dispatch(Action::ReplaceText("fresh".into()), &mut dialogs);
        assert_eq!(notepad.collection().active_document().unwrap().content(), "fresh");
        assert_eq!(labels(&notepad), vec!["Untitled*"]);
    }

    #[test]
    fn test_quit_with_unsaved_changes_can_be_cancelled() {
        let mut notepad = Notepad::default();
        let mut dialogs = ScriptedDialogs::new().choose(ConfirmButton::Cancel).choose(ConfirmButton::Discard);
        notepad.dispatch(Action::ReplaceText("draft".into()), &mut dialogs);

        assert_eq!(notepad.dispatch(Action::Quit, &mut dialogs), Flow::Continue);
        assert_eq!(notepad.dispatch(Action::Quit, &mut dialogs), Flow::Quit);
    }

    #[test]
    fn test_handle_key_dispatches_shortcut() {
        let mut notepad = Notepad::default();
        let mut dialogs = ScriptedDialogs::new();
        let ctrl_n = KeyEvent::new(Key::Char('n'), Modifiers { control: true, ..Default::default() });

        assert_eq!(notepad.handle_key(&ctrl_n, &mut dialogs), Some(Flow::Continue));
        assert_eq!(notepad.collection().len(), 2);
        assert_eq!(notepad.handle_key(&KeyEvent::char('n'), &mut dialogs), None);
    }

    #[test]
    fn test_save_as_with_path_appends_extension() {
        let dir = TempDir::new().unwrap();
        let mut notepad = Notepad::default();
        let mut dialogs = ScriptedDialogs::new();
        notepad.dispatch(Action::ReplaceText("body".into()), &mut dialogs);
        notepad.dispatch(Action::SaveAs(Some(dir.path().join("memo"))), &mut dialogs);

        assert_eq!(std::fs::read_to_string(dir.path().join("memo.txt")).unwrap(), "body");
        assert_eq!(labels(&notepad), vec!["memo.txt"]);
        assert!(dialogs.save_suggestions.is_empty());
    }

    #[test]
    fn test_switch_out_of_range_is_ignored() {
        let mut notepad = Notepad::default();
        let mut dialogs = ScriptedDialogs::new();
        notepad.dispatch(Action::SwitchTab(4), &mut dialogs);
        notepad.dispatch(Action::CloseTab(4), &mut dialogs);
        assert_eq!(notepad.collection().active_index(), 0);
        assert_eq!(notepad.collection().len(), 1);
    }
}
