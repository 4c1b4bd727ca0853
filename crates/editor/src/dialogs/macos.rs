// Chunk: docs/chunks/native_dialogs - NSOpenPanel / NSSavePanel / NSAlert
//! Native macOS dialogs.
//!
//! Thin wrappers around NSOpenPanel, NSSavePanel and NSAlert run as app-modal
//! panels. They must be created and run on the main thread; [`NativeDialogs::new`]
//! returns `None` anywhere else.

use std::path::PathBuf;

use objc2::rc::Retained;
use objc2_app_kit::{
    NSAlert, NSAlertFirstButtonReturn, NSAlertSecondButtonReturn, NSAlertStyle, NSApplication,
    NSModalResponseOK, NSOpenPanel, NSSavePanel,
};
use objc2_foundation::{MainThreadMarker, NSString, NSURL};

use super::Dialogs;
use crate::confirm_dialog::{ConfirmButton, ConfirmDialog};

pub struct NativeDialogs {
    mtm: MainThreadMarker,
}

impl NativeDialogs {
    /// Returns `None` when not called from the main thread.
    pub fn new() -> Option<Self> {
        let mtm = MainThreadMarker::new()?;
        // Panels need a shared application instance to run modally.
        let _ = NSApplication::sharedApplication(mtm);
        Some(Self { mtm })
    }

    fn url_to_path(url: Option<Retained<NSURL>>) -> Option<PathBuf> {
        url.and_then(|url| url.path()).map(|path| PathBuf::from(path.to_string()))
    }

    fn alert(&self, heading: &str, message: &str) -> Retained<NSAlert> {
        let alert = NSAlert::new(self.mtm);
        alert.setMessageText(&NSString::from_str(heading));
        alert.setInformativeText(&NSString::from_str(message));
        alert
    }
}

impl Dialogs for NativeDialogs {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        let panel = NSOpenPanel::openPanel(self.mtm);
        panel.setCanChooseFiles(true);
        panel.setCanChooseDirectories(false);
        panel.setAllowsMultipleSelection(false);

        if panel.runModal() == NSModalResponseOK {
            Self::url_to_path(panel.URL())
        } else {
            None
        }
    }

    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        let panel = NSSavePanel::savePanel(self.mtm);
        panel.setNameFieldStringValue(&NSString::from_str(suggested_name));
        panel.setCanCreateDirectories(true);

        if panel.runModal() == NSModalResponseOK {
            Self::url_to_path(panel.URL())
        } else {
            None
        }
    }

    fn confirm(&mut self, dialog: ConfirmDialog) -> ConfirmButton {
        let alert = self.alert(&dialog.heading, &dialog.prompt);
        for button in ConfirmButton::ALL {
            alert.addButtonWithTitle(&NSString::from_str(button.label()));
        }

        let response = alert.runModal();
        if response == NSAlertFirstButtonReturn {
            ConfirmButton::Save
        } else if response == NSAlertSecondButtonReturn {
            ConfirmButton::Discard
        } else {
            ConfirmButton::Cancel
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        let alert = self.alert(title, message);
        alert.setAlertStyle(NSAlertStyle::Critical);
        alert.runModal();
    }
}
