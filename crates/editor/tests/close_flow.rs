// Chunk: docs/chunks/dirty_tab_close_confirm - Integration test for the close flow
//!
//! Integration tests for closing tabs and quitting with unsaved changes,
//! driven through the application controller.

use std::fs;
use tempfile::TempDir;

use notepad::confirm_dialog::ConfirmButton;
use notepad::dialogs::ScriptedDialogs;
use notepad::shortcuts::Action;
use notepad::{Flow, Notepad};

fn labels(notepad: &Notepad) -> Vec<String> {
    notepad.collection().tabs().iter().map(|tab| tab.label.clone()).collect()
}

fn three_tabs(dialogs: &mut ScriptedDialogs) -> Notepad {
    let mut notepad = Notepad::default();
    notepad.dispatch(Action::NewTab, dialogs);
    notepad.dispatch(Action::NewTab, dialogs);
    notepad.dispatch(Action::SwitchTab(1), dialogs);
    notepad.dispatch(Action::ReplaceText("middle".into()), dialogs);
    notepad
}

#[test]
fn test_cancel_then_discard() {
    let mut dialogs = ScriptedDialogs::new()
        .choose(ConfirmButton::Cancel)
        .choose(ConfirmButton::Discard);
    let mut notepad = three_tabs(&mut dialogs);
    assert_eq!(labels(&notepad), vec!["Untitled", "Untitled*", "Untitled"]);

    notepad.dispatch(Action::CloseActiveTab, &mut dialogs);
    assert_eq!(notepad.collection().len(), 3);
    assert_eq!(notepad.collection().active_index(), 1);

    notepad.dispatch(Action::CloseActiveTab, &mut dialogs);
    assert_eq!(labels(&notepad), vec!["Untitled", "Untitled"]);
    // The tab to the right moves into the closed slot.
    assert_eq!(notepad.collection().active_index(), 1);
    assert_eq!(dialogs.confirmations.len(), 2);
}

#[test]
fn test_save_choice_writes_then_closes() {
    let dir = TempDir::new().unwrap();
    let mut dialogs = ScriptedDialogs::new()
        .choose(ConfirmButton::Save)
        .answer_save(dir.path().join("middle"));
    let mut notepad = three_tabs(&mut dialogs);

    notepad.dispatch(Action::CloseTab(1), &mut dialogs);
    assert_eq!(notepad.collection().len(), 2);
    assert_eq!(fs::read_to_string(dir.path().join("middle.txt")).unwrap(), "middle");
}

#[test]
fn test_unsaved_changes_survive_failed_save() {
    let dir = TempDir::new().unwrap();
    let blocked = dir.path().join("missing_dir").join("out.txt");
    let mut dialogs = ScriptedDialogs::new()
        .choose(ConfirmButton::Save)
        .answer_save(&blocked);
    let mut notepad = three_tabs(&mut dialogs);

    notepad.dispatch(Action::CloseTab(1), &mut dialogs);
    assert_eq!(notepad.collection().len(), 3);
    let document = notepad.collection().document(1).unwrap();
    assert!(document.is_modified());
    assert_eq!(document.path(), None);
    assert_eq!(document.content(), "middle");
    assert_eq!(dialogs.errors.len(), 1);
    assert!(dialogs.errors[0].1.contains("out.txt"));
}

#[test]
fn test_failed_save_as_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    let original = dir.path().join("original.txt");
    fs::write(&original, "v1").unwrap();
    let mut dialogs = ScriptedDialogs::new().answer_save(dir.path().join("missing_dir").join("copy.txt"));
    let mut notepad = Notepad::default();
    notepad.open_files(&[original.clone()], &mut dialogs);
    notepad.dispatch(Action::ReplaceText("v2".into()), &mut dialogs);

    notepad.dispatch(Action::SaveAs(None), &mut dialogs);
    let document = notepad.collection().active_document().unwrap();
    assert!(document.is_modified());
    assert_eq!(document.path(), Some(original.as_path()));
    assert_eq!(labels(&notepad), vec!["original.txt*"]);
    assert_eq!(dialogs.save_suggestions, vec!["original.txt"]);
    assert_eq!(dialogs.errors.len(), 1);
    assert_eq!(fs::read_to_string(&original).unwrap(), "v1");
}

#[test]
fn test_last_tab_never_closes() {
    let mut dialogs = ScriptedDialogs::new();
    let mut notepad = Notepad::default();
    notepad.dispatch(Action::ReplaceText("only".into()), &mut dialogs);

    notepad.dispatch(Action::CloseActiveTab, &mut dialogs);
    notepad.dispatch(Action::CloseTab(0), &mut dialogs);
    assert_eq!(notepad.collection().len(), 1);
    assert!(dialogs.confirmations.is_empty());
}

#[test]
fn test_quit_saves_each_modified_document() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    fs::write(&first, "").unwrap();

    let mut dialogs = ScriptedDialogs::new()
        .choose(ConfirmButton::Save)
        .choose(ConfirmButton::Save)
        .answer_save(dir.path().join("second.txt"));
    let mut notepad = Notepad::default();
    notepad.open_files(&[first.clone()], &mut dialogs);
    notepad.dispatch(Action::ReplaceText("one".into()), &mut dialogs);
    notepad.dispatch(Action::NewTab, &mut dialogs);
    notepad.dispatch(Action::ReplaceText("two".into()), &mut dialogs);

    assert_eq!(notepad.dispatch(Action::Quit, &mut dialogs), Flow::Quit);
    assert_eq!(fs::read_to_string(&first).unwrap(), "one");
    assert_eq!(fs::read_to_string(dir.path().join("second.txt")).unwrap(), "two");
    assert_eq!(dialogs.save_suggestions, vec!["Untitled.txt"]);
}
